use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt::{writer::MakeWriterExt, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "wp_deploy=debug,info"
    } else {
        "wp_deploy=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

// Errors go to stderr, everything else to stdout.
fn split_writer() -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static {
    std::io::stderr
        .with_max_level(Level::ERROR)
        .or_else(std::io::stdout)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(std::io::stdout().is_terminal())
                .with_writer(split_writer())
                .compact(),
        )
        .init();
}

/// JSON lines for CI systems that collect structured logs.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(split_writer())
                .json(),
        )
        .init();
}
