use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    Config, DatabaseSettings, LogFormat, LoggingSettings, PaginationSettings, ServerSettings,
};

/// Prefix of the environment variables that override file settings,
/// e.g. `APP__SERVER__PORT=9000`.
const ENV_PREFIX: &str = "APP";

/// Loads the application configuration.
///
/// With an explicit `path` the file must exist. Without one, `config.toml` in the
/// working directory is used if present. Environment variables prefixed with
/// `APP__` are layered on top in both cases.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

/// Parses a configuration from TOML text, without consulting the environment.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be greater than zero".to_string(),
        ));
    }
    let pagination = &config.pagination;
    if pagination.default_page_size == 0 || pagination.max_page_size == 0 {
        return Err(ConfigError::ValidationError(
            "pagination page sizes must be greater than zero".to_string(),
        ));
    }
    if pagination.default_page_size > pagination.max_page_size {
        return Err(ConfigError::ValidationError(format!(
            "pagination.default_page_size ({}) exceeds pagination.max_page_size ({})",
            pagination.default_page_size, pagination.max_page_size
        )));
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.max_page_size, 100);
        assert_eq!(config.logging.level, "info");
        assert!(config.database.url.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse_config(
            r#"
            [server]
            port = 9000

            [database]
            url = "postgres://localhost/aventure"

            [pagination]
            default_page_size = 5

            [logging]
            format = "compact"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/aventure"));
        assert_eq!(config.pagination.default_page_size, 5);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn default_page_size_above_max_is_rejected() {
        let err = parse_config(
            r#"
            [pagination]
            default_page_size = 50
            max_page_size = 20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_port_is_rejected() {
        let err = parse_config("[server]\nport = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_explicit_file_fails() {
        let err = load_config(Some(Path::new("/nonexistent/spring-aventure.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
