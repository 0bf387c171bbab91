//! Database Config

use clap::{ArgAction, Args};

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Apply pending schema migrations at start-up
    #[arg(
        long,
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub database_run_migrations: bool,
}
