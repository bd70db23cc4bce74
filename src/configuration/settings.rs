use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

use crate::configuration::constants::report::{DEFAULT_TITLE, ENV_PREFIX};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub title: String,
    /// Pass messages and output through display escaping.
    pub escape_output: bool,
    /// List passed methods next to failed and skipped ones.
    pub show_passed: bool,
    /// Liquid template replacing the built-in one.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Settings {
    /// Defaults, then the optional settings file, then `SALVO_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.set_default("title", DEFAULT_TITLE)?;
        config.set_default("escape_output", true)?;
        config.set_default("show_passed", false)?;
        if let Some(file) = file {
            config.merge(File::from(file.to_path_buf()))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;
        config.try_into()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            escape_output: true,
            show_passed: false,
            template: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_settings_file_overrides_defaults() {
        let path = std::env::temp_dir().join("salvo-settings-test.toml");
        fs::write(&path, "title = \"Nightly\"\nshow_passed = true\n").unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.title, "Nightly");
        assert!(settings.show_passed);
        assert!(settings.escape_output);
        assert_eq!(settings.template, None);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let path = std::env::temp_dir().join("salvo-settings-absent.yaml");

        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
