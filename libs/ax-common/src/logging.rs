//! Logging setup for axlink tools
//!
//! Console logging goes to stderr so stdout stays reserved for tool output.

use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

use crate::config::LoggingConfig;

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Custom event formatter that outputs: `timestamp [LEVEL] message`
///
/// Example output: `2026-10-16T09:12:44.809123Z [WARN] check sum failed: ...`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

// Filter string the subscriber was installed with
static ACTIVE_FILTER: OnceLock<String> = OnceLock::new();

/// Build the filter: `RUST_LOG` wins over the configured level
fn build_filter(config: &LoggingConfig) -> (EnvFilter, String) {
    match std::env::var("RUST_LOG") {
        Ok(env_str) if !env_str.trim().is_empty() => (EnvFilter::new(&env_str), env_str),
        _ => {
            let filter_str = config.level.clone();
            (EnvFilter::new(&filter_str), filter_str)
        },
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls keep the first subscriber and
/// return `false`.
pub fn init(config: &LoggingConfig) -> bool {
    let (env_filter, filter_str) = build_filter(config);

    let console_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(config.ansi)
            .event_format(BracketedLevelFormat)
            .boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        let _ = ACTIVE_FILTER.set(filter_str);
    }
    installed
}

/// Filter string of the installed subscriber, if any
pub fn active_filter() -> Option<&'static str> {
    ACTIVE_FILTER.get().map(String::as_str)
}
