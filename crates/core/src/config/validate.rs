use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Uploader command is not empty
/// - Log file names are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.uploader.command.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "uploader.command cannot be empty".to_string(),
        ));
    }

    if config.logs.general.is_empty() || config.logs.success.is_empty()
        || config.logs.failure.is_empty()
    {
        return Err(ConfigError::ValidationError(
            "logs file names cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_command_fails() {
        let mut config = Config::default();
        config.uploader.command = "  ".to_string();
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_log_name_fails() {
        let mut config = Config::default();
        config.logs.failure = String::new();
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
