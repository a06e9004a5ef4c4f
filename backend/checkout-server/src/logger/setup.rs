//! Setup logging subsystem.
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

use super::config;

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Setup logging sub-system specifying the logging configuration, service (binary) name, and a
/// list of crates logged at the configured level. Everything else is logged at `WARN`.
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, TryInitError> {
    let mut guards = Vec::new();

    let console_layer = if config.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter_directive = config
            .console
            .filtering_directive
            .clone()
            .unwrap_or_else(|| {
                get_envfilter_directive(
                    tracing::Level::WARN,
                    config.console.level.into_level(),
                    crates_to_filter.as_ref(),
                )
            });
        let console_filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .parse_lossy(console_filter_directive);

        let layer = match config.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_target(true)
                .with_writer(console_writer)
                .boxed(),
            config::LogFormat::Json => {
                // Disable color or emphasis related ANSI escape codes for JSON formats
                error_stack::Report::set_color_mode(error_stack::fmt::ColorMode::None);

                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(console_writer)
                    .boxed()
            }
        };

        Some(layer.with_filter(console_filter))
    } else {
        None
    };

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::info!(
        service_name,
        build_version = crate::version!(),
        "Logging subsystem initialized"
    );

    // Logs are flushed until the guard is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

fn get_envfilter_directive(
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: &[&'static str],
) -> String {
    crates_to_filter
        .iter()
        .map(|crate_name| crate_name.replace('-', "_"))
        .fold(vec![default_log_level.to_string()], |mut directives, target| {
            directives.push(format!("{target}={filter_log_level}"));
            directives
        })
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_lists_crates_at_filter_level() {
        assert_eq!(
            get_envfilter_directive(
                tracing::Level::WARN,
                tracing::Level::DEBUG,
                &["checkout-server", "tower_http"]
            ),
            "WARN,checkout_server=DEBUG,tower_http=DEBUG"
        );
    }
}
