//! Reporting Config

use clap::Args;

/// Sales reporting settings.
#[derive(Debug, Args)]
pub struct ReportingConfig {
    /// IANA time zone that decides month and day boundaries on the dashboard
    #[arg(long, env = "REPORTING_TIME_ZONE", default_value = "Europe/Istanbul")]
    pub reporting_time_zone: String,
}
