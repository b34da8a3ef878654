//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// WAVE storefront API server configuration
#[derive(Debug, Parser)]
#[command(name = "wave-json", about = "WAVE storefront JSON API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces and request logging) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// `OpenBao` Transit settings used to verify tokens and passwords.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment and CLI arguments, reading a
    /// `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::observability::LogFormat;

    use super::*;

    const REQUIRED: [&str; 9] = [
        "wave-json",
        "--database-url",
        "postgres://wave@localhost/wave",
        "--openbao-addr",
        "http://localhost:8200",
        "--openbao-token",
        "root",
        "--openbao-transit-key",
        "wave",
    ];

    #[test]
    fn explicit_arguments_fill_every_group() -> TestResult {
        let config = ServerConfig::try_parse_from(
            REQUIRED
                .into_iter()
                .chain(["--host", "127.0.0.1", "--port", "9000", "--log-format", "json"])
                .chain([
                    "--cors-allowed-origins",
                    "https://shop.example.com,http://localhost:3000",
                ]),
        )?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.database.database_url, "postgres://wave@localhost/wave");
        assert_eq!(config.auth.transit_key, "wave");
        assert_eq!(config.server.cors_allowed_origins.len(), 2);
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn pool_settings_never_drop_to_zero() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED.into_iter().chain([
            "--database-max-connections",
            "0",
            "--database-acquire-timeout-seconds",
            "30",
        ]))?;

        let pool = config.database.pool_settings();

        assert_eq!(pool.max_connections, 1);
        assert_eq!(pool.acquire_timeout.as_secs(), 30);

        Ok(())
    }

    #[test]
    fn telemetry_defaults_keep_export_off() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED.into_iter().chain([
            "--otel-parent-propagation-enabled",
            "--otel-trace-sample-ratio",
            "1.5",
        ]))?;

        assert!(!config.observability.otel_enabled, "export should be opt-in");
        assert!(
            !config.observability.parent_propagation(),
            "parents need export enabled"
        );
        assert!((config.observability.sample_ratio() - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.observability.otlp_timeout().as_secs(), 3);
        assert!(!config.logging.log_sql_statements, "sql logging should be opt-in");

        Ok(())
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = ServerConfig::try_parse_from(
            REQUIRED.into_iter().chain(["--log-format", "pretty"]),
        );

        assert!(result.is_err(), "expected a parse error, got {result:?}");
    }
}
