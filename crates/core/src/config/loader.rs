use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("DEPOSITOR_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_empty_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(
            config.paths.input_file,
            PathBuf::from("dataset_shortnames.txt")
        );
        assert_eq!(config.logs.dir, PathBuf::from("logs"));
        assert!(config.uploader.sandbox);
    }

    #[test]
    fn test_load_config_from_str_overrides() {
        let toml = r#"
[paths]
input_file = "names.txt"

[uploader]
command = "my-uploader"
sandbox = false
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.paths.input_file, PathBuf::from("names.txt"));
        assert_eq!(config.uploader.command, "my-uploader");
        assert!(!config.uploader.sandbox);
        // untouched section keeps its defaults
        assert_eq!(
            config.paths.tracker_file,
            PathBuf::from("datasets_uploaded.txt")
        );
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let result = load_config_from_str("paths = 3");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[logs]
dir = "run-logs"

[uploader]
extra_args = ["--verbose"]
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.logs.dir, PathBuf::from("run-logs"));
        assert_eq!(config.uploader.extra_args, vec!["--verbose".to_string()]);
    }
}
