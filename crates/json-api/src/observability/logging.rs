//! Global `tracing` subscriber.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::ObservabilityError;

/// Dependencies that are chatty at `info` and below.
const QUIET_TARGETS: [&str; 3] = ["hyper=warn", "h2=warn", "sqlx=warn"];

pub(super) fn init_subscriber(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.logging.log_level)));

    match config.logging.log_format {
        LogFormat::Compact => install(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_line_number(true),
        ),
        LogFormat::Json => install(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        ),
    }
}

fn filter_directives(level: &str) -> String {
    std::iter::once(level)
        .chain(QUIET_TARGETS)
        .collect::<Vec<_>>()
        .join(",")
}

fn install<L>(filter: EnvFilter, layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_comes_before_quiet_targets() {
        assert_eq!(
            filter_directives("debug"),
            "debug,hyper=warn,h2=warn,sqlx=warn"
        );
    }

    #[test]
    fn per_target_directives_pass_through() {
        assert!(filter_directives("adisyon_json=trace").starts_with("adisyon_json=trace,"));
    }
}
