use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when `RUST_LOG` is unset or invalid. Keeps a normal run silent.
pub const DEFAULT_FILTER: &str = "devvit_ui_example=warn";

pub fn cli_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Diagnostics go to stderr; stdout carries only script output.
pub fn init_cli_logger() {
    tracing_subscriber::registry()
        .with(cli_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
