//! Configuration module for `MultiMajorAdvisor`

use crate::core::capacity::CapacityModel;
use crate::core::evaluator::AdvisorPolicy;
use crate::core::planner::FillPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path values
const DIR_VARIABLE: &str = "$MM_ADVISOR";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Requirement-table locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the tables
    #[serde(default)]
    pub tables_dir: String,
    /// Primary (home-major) requirement table, relative to `tables_dir`
    #[serde(default)]
    pub primary_table: String,
    /// Multi-major requirement table, relative to `tables_dir`
    #[serde(default)]
    pub multi_table: String,
    /// Major catalog, relative to `tables_dir`
    #[serde(default)]
    pub majors_catalog: String,
}

/// Advising policy knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Per-semester credit cap
    pub max_credits_per_semester: u32,
    /// Cap per semester for each required-course category in plans
    pub required_cap_per_semester: u32,
    /// Slack per remaining semester separating Possible from At-Risk
    pub margin_per_semester: u32,
    /// Double-major graduation-credit ceiling
    pub double_major_cap: u32,
    /// Grades whose semesters fill general education first
    pub general_education_first_grades: Vec<u32>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let policy = AdvisorPolicy::default();
        Self {
            max_credits_per_semester: policy.capacity.max_credits_per_semester,
            required_cap_per_semester: policy.fill_policy.required_cap_per_semester,
            margin_per_semester: policy.capacity.margin_per_semester,
            double_major_cap: policy.double_major_cap,
            general_education_first_grades: policy.fill_policy.general_education_first_grades,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Table locations
    #[serde(default)]
    pub data: DataConfig,
    /// Policy settings
    #[serde(default)]
    pub policy: PolicyConfig,
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
    /// Override the tables directory
    pub tables_dir: Option<String>,
}

/// Parse a grade list such as `1,4` or `[1, 4]`
fn parse_grades(value: &str) -> Result<Vec<u32>, String> {
    value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("Invalid grade '{s}' in '{value}'"))
        })
        .collect()
}

fn parse_credits(key: &str, value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid credit value for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$MM_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/mmadvisor`
    /// - macOS: `~/Library/Application Support/mmadvisor`
    /// - Windows: `%APPDATA%\mmadvisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mmadvisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in the defaults
    /// are filled, so upgrades add new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for (mine, theirs) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.data.tables_dir, &defaults.data.tables_dir),
            (&mut self.data.primary_table, &defaults.data.primary_table),
            (&mut self.data.multi_table, &defaults.data.multi_table),
            (&mut self.data.majors_catalog, &defaults.data.majors_catalog),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for one run only; nothing is written back to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(tables_dir) = &overrides.tables_dir {
            self.data.tables_dir = Self::expand_variables(tables_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, in
    /// the directory returned by [`get_advisor_dir`].
    ///
    /// [`get_advisor_dir`]: Self::get_advisor_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$MM_ADVISOR` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let advisor_dir = Self::get_advisor_dir();
            value.replace(DIR_VARIABLE, advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults; `$MM_ADVISOR` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.data.tables_dir = Self::expand_variables(&config.data.tables_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_default()
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file is merged with any new default fields and saved back;
    /// on first run the defaults are written out. Any read or parse failure
    /// falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Path of one table, joined onto `tables_dir`
    #[must_use]
    pub fn table_path(&self, file: &str) -> PathBuf {
        PathBuf::from(&self.data.tables_dir).join(file)
    }

    /// Primary requirement table path
    #[must_use]
    pub fn primary_table_path(&self) -> PathBuf {
        self.table_path(&self.data.primary_table)
    }

    /// Multi-major requirement table path
    #[must_use]
    pub fn multi_table_path(&self) -> PathBuf {
        self.table_path(&self.data.multi_table)
    }

    /// Major catalog path
    #[must_use]
    pub fn majors_catalog_path(&self) -> PathBuf {
        self.table_path(&self.data.majors_catalog)
    }

    /// The `[policy]` section as an [`AdvisorPolicy`]
    #[must_use]
    pub fn to_policy(&self) -> AdvisorPolicy {
        let p = &self.policy;
        AdvisorPolicy {
            capacity: CapacityModel {
                max_credits_per_semester: p.max_credits_per_semester,
                margin_per_semester: p.margin_per_semester,
            },
            double_major_cap: p.double_major_cap,
            fill_policy: FillPolicy {
                general_education_first_grades: p.general_education_first_grades.clone(),
                required_cap_per_semester: p.required_cap_per_semester,
            },
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `tables_dir`,
    /// `primary_table`, `multi_table`, `majors_catalog`,
    /// `max_credits_per_semester`, `required_cap_per_semester`,
    /// `margin_per_semester`, `double_major_cap`,
    /// `general_education_first_grades`. Dashes work in place of underscores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let p = &self.policy;
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "tables_dir" => Some(self.data.tables_dir.clone()),
            "primary_table" => Some(self.data.primary_table.clone()),
            "multi_table" => Some(self.data.multi_table.clone()),
            "majors_catalog" => Some(self.data.majors_catalog.clone()),
            "max_credits_per_semester" => Some(p.max_credits_per_semester.to_string()),
            "required_cap_per_semester" => Some(p.required_cap_per_semester.to_string()),
            "margin_per_semester" => Some(p.margin_per_semester.to_string()),
            "double_major_cap" => Some(p.double_major_cap.to_string()),
            "general_education_first_grades" => {
                Some(format!("{:?}", p.general_education_first_grades))
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let normalized = key.replace('-', "_");
        match normalized.as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "tables_dir" => self.data.tables_dir = value.to_string(),
            "primary_table" => self.data.primary_table = value.to_string(),
            "multi_table" => self.data.multi_table = value.to_string(),
            "majors_catalog" => self.data.majors_catalog = value.to_string(),
            "max_credits_per_semester" => {
                self.policy.max_credits_per_semester = parse_credits(key, value)?;
            }
            "required_cap_per_semester" => {
                self.policy.required_cap_per_semester = parse_credits(key, value)?;
            }
            "margin_per_semester" => {
                self.policy.margin_per_semester = parse_credits(key, value)?;
            }
            "double_major_cap" => self.policy.double_major_cap = parse_credits(key, value)?,
            "general_education_first_grades" => {
                self.policy.general_education_first_grades = parse_grades(value)?;
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
        let value = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(key, &value)
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when there is
    /// no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[data]")?;
        writeln!(f, "  tables_dir = \"{}\"", self.data.tables_dir)?;
        writeln!(f, "  primary_table = \"{}\"", self.data.primary_table)?;
        writeln!(f, "  multi_table = \"{}\"", self.data.multi_table)?;
        writeln!(f, "  majors_catalog = \"{}\"", self.data.majors_catalog)?;

        writeln!(f, "\n[policy]")?;
        writeln!(
            f,
            "  max_credits_per_semester = {}",
            self.policy.max_credits_per_semester
        )?;
        writeln!(
            f,
            "  required_cap_per_semester = {}",
            self.policy.required_cap_per_semester
        )?;
        writeln!(f, "  margin_per_semester = {}", self.policy.margin_per_semester)?;
        writeln!(f, "  double_major_cap = {}", self.policy.double_major_cap)?;
        writeln!(
            f,
            "  general_education_first_grades = {:?}",
            self.policy.general_education_first_grades
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grades() {
        assert_eq!(parse_grades("[1, 4]").unwrap(), vec![1, 4]);
        assert_eq!(parse_grades("2,3").unwrap(), vec![2, 3]);
        assert_eq!(parse_grades("[]").unwrap(), Vec::<u32>::new());
        assert!(parse_grades("1,x").is_err());
    }

    #[test]
    fn test_defaults_match_policy() {
        let config = Config::from_defaults();
        assert_eq!(config.to_policy(), AdvisorPolicy::default());
        assert!(!config.data.primary_table.is_empty());
    }

    #[test]
    fn test_unset_policy_value() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        config.set("double-major-cap", "140").unwrap();
        assert_eq!(config.to_policy().double_major_cap, 140);
        config.unset("double_major_cap", &defaults).unwrap();
        assert_eq!(config.policy.double_major_cap, 130);

        config.set("general_education_first_grades", "1").unwrap();
        config.unset("general_education_first_grades", &defaults).unwrap();
        assert_eq!(config.policy.general_education_first_grades, vec![1, 4]);
    }
}
