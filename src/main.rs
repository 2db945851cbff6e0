use tracing_subscriber::EnvFilter;
use zk::domain::InvocationContext;
use zk::error::ZkError;
use zk::infrastructure::{Container, SystemShell};

fn main() {
    init_logging();

    let result = zk::cli::collect_args(std::env::args_os().skip(1)).and_then(|args| {
        let mut container = Container::new()?;
        let context = InvocationContext::from_env();
        zk::cli::run(&mut container, &context, &args, &SystemShell)
    });

    if let Err(e) = result {
        exit_with(e);
    }
}

fn exit_with(err: ZkError) -> ! {
    match &err {
        ZkError::CommandParse(e) => {
            let _ = e.print();
        }
        _ if err.is_silent() => {}
        _ => eprintln!("zk: error: {}", err),
    }
    std::process::exit(err.exit_code())
}

/// Log to stderr, filtered by `ZK_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("ZK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
