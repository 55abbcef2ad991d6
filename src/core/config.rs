//! Configuration module for the `etn` CLI

use crate::core::report::{QuoteFormat, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const HOME_VAR: &str = "$ETN_HOME";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course catalog TOML file; empty selects the built-in catalog
    #[serde(default)]
    pub catalog_file: String,
    /// Directory rendered quotes are written to
    #[serde(default)]
    pub quotes_dir: String,
}

/// Display configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to amounts (e.g. "R")
    #[serde(default)]
    pub currency_symbol: String,
    /// Quote format used when `--format` is omitted
    #[serde(default)]
    pub default_format: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog file
    pub catalog_file: Option<String>,
    /// Override quotes output directory
    pub quotes_dir: Option<String>,
    /// Override currency symbol
    pub currency_symbol: Option<String>,
}

impl Config {
    /// Get the `$ETN_HOME` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/etn`
    /// - macOS: `~/Library/Application Support/etn`
    /// - Windows: `%APPDATA%\etn`
    #[must_use]
    pub fn get_etn_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("etn")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used on load so that newly added settings pick up their defaults while
    /// existing user values are kept. Only empty fields are filled.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // An empty catalog_file is meaningful (built-in catalog), so it is never filled
        if self.paths.quotes_dir.is_empty() && !defaults.paths.quotes_dir.is_empty() {
            self.paths.quotes_dir.clone_from(&defaults.paths.quotes_dir);
            changed = true;
        }

        if self.display.currency_symbol.is_empty() && !defaults.display.currency_symbol.is_empty()
        {
            self.display
                .currency_symbol
                .clone_from(&defaults.display.currency_symbol);
            changed = true;
        }
        if self.display.default_format.is_empty() && !defaults.display.default_format.is_empty() {
            self.display
                .default_format
                .clone_from(&defaults.display.default_format);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched. Only
    /// non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```
    /// use etn_enrollment::config::{Config, ConfigOverrides};
    ///
    /// let mut config = Config::from_defaults();
    /// config.apply_overrides(&ConfigOverrides {
    ///     currency_symbol: Some("ZAR".to_string()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.currency(), "ZAR");
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file.clone_from(catalog_file);
        }
        if let Some(quotes_dir) = &overrides.quotes_dir {
            self.paths.quotes_dir.clone_from(quotes_dir);
        }

        if let Some(symbol) = &overrides.currency_symbol {
            self.display.currency_symbol.clone_from(symbol);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_etn_dir`](Self::get_etn_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_etn_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ETN_HOME` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(HOME_VAR) {
            let etn_dir = Self::get_etn_dir();
            value.replace(HOME_VAR, etn_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. Path values have `$ETN_HOME`
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);
        config.paths.quotes_dir = Self::expand_variables(&config.paths.quotes_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// Falls back to defaults if the file exists but cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults on first run
    ///
    /// Missing fields are merged in from defaults and written back. A file that
    /// cannot be read or parsed is logged and replaced by defaults in memory.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        Self::try_load_from(config_file).unwrap_or_else(|err| {
            tracing::warn!("{err}; using default configuration");
            Self::from_defaults()
        })
    }

    /// Like [`Config::load`], but reports an unusable config file to the caller
    ///
    /// # Errors
    /// Returns a message if the config file exists but cannot be read or parsed
    pub fn try_load() -> Result<Self, String> {
        Self::try_load_from(&Self::get_config_file_path())
    }

    /// Like [`Config::load_from`], but reports an unusable config file to the caller
    ///
    /// # Errors
    /// Returns a message if `config_file` exists but cannot be read or parsed
    pub fn try_load_from(config_file: &Path) -> Result<Self, String> {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save_to(config_file);
            return Ok(defaults);
        }

        let content = fs::read_to_string(config_file).map_err(|e| {
            format!("Failed to read config file {}: {e}", config_file.display())
        })?;
        let mut config = Self::from_toml(&content).map_err(|e| {
            format!("Failed to parse config file {}: {e}", config_file.display())
        })?;
        if config.merge_defaults(&defaults) {
            let _ = config.save_to(config_file);
        }
        Ok(config)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog_file`, `quotes_dir`,
    /// `currency_symbol`, `default_format` (dashes are accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog_file" | "catalog-file" => Some(self.paths.catalog_file.clone()),
            "quotes_dir" | "quotes-dir" => Some(self.paths.quotes_dir.clone()),
            "currency_symbol" | "currency-symbol" => Some(self.display.currency_symbol.clone()),
            "default_format" | "default-format" => Some(self.display.default_format.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog_file" | "catalog-file" => self.paths.catalog_file = value.to_string(),
            "quotes_dir" | "quotes-dir" => self.paths.quotes_dir = value.to_string(),
            "currency_symbol" | "currency-symbol" => {
                self.display.currency_symbol = value.to_string();
            }
            "default_format" | "default-format" => {
                let format: QuoteFormat = value.parse()?;
                self.display.default_format = format.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog_file" | "catalog-file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            "quotes_dir" | "quotes-dir" => self
                .paths
                .quotes_dir
                .clone_from(&defaults.paths.quotes_dir),
            "currency_symbol" | "currency-symbol" => self
                .display
                .currency_symbol
                .clone_from(&defaults.display.currency_symbol),
            "default_format" | "default-format" => self
                .display
                .default_format
                .clone_from(&defaults.display.default_format),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Currency symbol, falling back to `R`
    #[must_use]
    pub fn currency(&self) -> &str {
        if self.display.currency_symbol.is_empty() {
            DEFAULT_CURRENCY
        } else {
            &self.display.currency_symbol
        }
    }

    /// Configured default quote format, falling back to plain text
    #[must_use]
    pub fn quote_format(&self) -> QuoteFormat {
        self.display.default_format.parse().unwrap_or_default()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;
        writeln!(f, "  quotes_dir = \"{}\"", self.paths.quotes_dir)?;

        writeln!(f, "\n[display]")?;
        writeln!(f, "  currency_symbol = \"{}\"", self.display.currency_symbol)?;
        writeln!(f, "  default_format = \"{}\"", self.display.default_format)?;

        Ok(())
    }
}
