use anyhow::Context as _;
use anyhow::Result;
use rangesum::RunInfo;
use rangesum::SumMethod;
use std::io;
use std::num::NonZeroUsize;

/// Total used when `--total` is not given.
pub const DEFAULT_TOTAL: i64 = 100_000_000;

/// Settings of a `range-sum` run, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub total: i64,
    /// `None` and zero mean one worker per logical CPU.
    pub workers: Option<i64>,
    pub method: SumMethod,
    pub verbose: bool,
    pub trace: Option<String>,
}

impl Config {
    /// Worker count to run with.  No value or zero means `cores`, and a
    /// negative count means one worker.
    pub fn resolve_workers(&self, cores: NonZeroUsize) -> NonZeroUsize {
        match self.workers {
            None | Some(0) => cores,
            Some(workers) => rangesum::clamp_workers(workers),
        }
    }
}

pub fn options() -> getopts::Options {
    let mut options = getopts::Options::new();
    options.optflag("h", "help", "print this help menu");
    options.optopt(
        "n",
        "total",
        "sum the integers in [0, N) (default: 100000000)",
        "N",
    );
    options.optopt(
        "j",
        "workers",
        "number of worker threads, 0 for one per CPU (default: 0)",
        "N",
    );
    options.optopt(
        "m",
        "method",
        "how workers sum their range, \"iter\" or \"closed\" (default: closed)",
        "METHOD",
    );
    options.optopt("t", "trace", "emit a chrome trace", "FILE");
    options.optflag("v", "verbose", "print every partial sum");
    options
}

pub fn parse_config(matches: &getopts::Matches) -> Result<Config> {
    let total = matches
        .opt_get_default("n", DEFAULT_TOTAL)
        .context("invalid value for option 'total'")?;
    let workers = matches
        .opt_get("j")
        .context("invalid value for option 'workers'")?;
    let method = match matches.opt_str("m") {
        Some(method) => method.parse().map_err(anyhow::Error::msg)?,
        None => SumMethod::default(),
    };
    Ok(Config {
        total,
        workers,
        method,
        verbose: matches.opt_present("v"),
        trace: matches.opt_str("t"),
    })
}

/// Print the outcome of a run to `w`.
pub fn report(mut w: impl io::Write, total: i64, info: &RunInfo, cores: usize) -> io::Result<()> {
    writeln!(w, "Summed numbers 0..{}", total.saturating_sub(1))?;
    writeln!(w, "Workers used: {} (detected cores: {cores})", info.partitions)?;
    writeln!(w, "Result: {}", info.result)?;
    Ok(())
}
