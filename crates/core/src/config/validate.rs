use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog path ends in a file name (ingest derives `.tmp`/`.bak` siblings from it)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog validation
    if config.catalog.path.file_name().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "catalog.path must name a file: {}",
            config.catalog.path.display()
        )));
    }

    Ok(())
}
