use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber.
///
/// Verbosity comes from `RUST_LOG` and falls back to `info`. Everything is
/// written to stderr: stdout only carries the output path the CLI reports.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(env_filter.max_level_hint()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Stage timings (span close events) are only worth printing at debug level.
fn span_events(max_level: Option<LevelFilter>) -> FmtSpan {
    match max_level {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}
