use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// When to colour console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout supports it.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

/// Presentation settings for a game session.
///
/// The mansion and its scenario are fixed; only how the session looks is
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// When to colour output.
    color: ColorMode,

    /// Whether to list the available paths every time a room is entered.
    pub show_exits: bool,

    /// Width of the separator printed around menu output.
    ///
    /// Narrow terminals shrink it to fit.
    rule_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            show_exits: default_show_exits(),
            rule_width: default_rule_width(),
        }
    }
}

/// Errors raised while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("failed to parse config file {path}")]
    Parse {
        /// The file that failed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    /// The file could not be written.
    #[error("failed to write config file {path}")]
    Write {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// When to colour output.
    #[must_use]
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Overrides when to colour output.
    pub const fn set_color(&mut self, color: ColorMode) {
        self.color = color;
    }

    /// The preferred separator width.
    #[must_use]
    pub const fn rule_width(&self) -> usize {
        self.rule_width
    }

    /// Sets the preferred separator width. Zero disables separators.
    pub const fn set_rule_width(&mut self, width: usize) {
        self.rule_width = width;
    }
}

const fn default_show_exits() -> bool {
    true
}

const fn default_rule_width() -> usize {
    60
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        color: ColorMode,

        #[serde(default = "default_show_exits")]
        show_exits: bool,

        /// Width of the separator printed around menu output.
        #[serde(default = "default_rule_width")]
        rule_width: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                color,
                show_exits,
                rule_width,
            } => Self {
                color,
                show_exits,
                rule_width,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            color: config.color,
            show_exits: config.show_exits,
            rule_width: config.rule_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ncolor = \"never\"\nshow_exits = false\nrule_width = 40\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.color(), ColorMode::Never);
        assert!(!config.show_exits);
        assert_eq!(config.rule_width(), 40);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nrule_width = \"wide\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_colour_is_rejected() {
        let result: Result<Config, _> = toml::from_str("_version = \"1\"\ncolor = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("detective-quest.toml");

        let mut config = Config::default();
        config.set_color(ColorMode::Always);
        config.set_rule_width(20);
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
