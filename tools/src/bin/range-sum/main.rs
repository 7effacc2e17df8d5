use anyhow::Context as _;
use anyhow::Result;
use rangesum::Executor;
use rangesum::TraceObserver;
use std::env;
use std::io;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

fn main() -> Result<()> {
    let options = rangesum_tools::options();
    let matches = options.parse(env::args().skip(1))?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage("Usage: range-sum [options]"));
        eprint!(include_str!("help_after.txt"));
        return Ok(());
    }

    let config = rangesum_tools::parse_config(&matches)?;

    let mut filter = EnvFilter::from_env("LOG");
    if config.verbose {
        filter = filter.add_directive("rangesum=info".parse()?);
    }
    let registry = Registry::default().with(filter).with(
        HierarchicalLayer::new(4)
            .with_thread_ids(true)
            .with_targets(true)
            .with_bracketed_fields(true),
    );
    let _chrome_trace_guard = match &config.trace {
        Some(filename) => {
            let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(filename)
                .build();
            registry.with(chrome_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    let cores = rangesum::default_workers();
    let workers = config.resolve_workers(cores);

    let mut executor = Executor::new(workers).method(config.method);
    if config.verbose {
        executor = executor.observer(TraceObserver);
    }
    let info = executor
        .run(config.total)
        .with_context(|| format!("failed to sum numbers below {}", config.total))?;
    if config.verbose {
        eprintln!("Requested workers: {}, pool threads: {}", info.workers, info.threads);
    }

    let stdout = io::stdout();
    let stdout = stdout.lock();
    rangesum_tools::report(stdout, config.total, &info, cores.get())
        .context("failed to print result")?;

    Ok(())
}
