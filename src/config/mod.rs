use crate::core::classifier::ShiftRules;
use crate::core::pipeline::ProcessOptions;
use crate::errors::{AppError, AppResult};
use crate::models::location::LocationConvention;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,
    #[serde(default = "default_entry_code")]
    pub entry_location_code: i64,
    #[serde(default = "default_exit_code")]
    pub exit_location_code: i64,
    #[serde(default = "default_shift_hours")]
    pub shift_hours: i64,
    #[serde(default = "default_tolerance")]
    pub tolerance_minutes: i64,
    #[serde(default = "default_present_marker")]
    pub present_marker: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_csv_delimiter() -> String {
    ";".to_string()
}
fn default_entry_code() -> i64 {
    2
}
fn default_exit_code() -> i64 {
    1
}
fn default_shift_hours() -> i64 {
    8
}
fn default_tolerance() -> i64 {
    60
}
fn default_present_marker() -> String {
    "v".to_string()
}
fn default_company_name() -> String {
    "PT. BUDI INTI PERKASA".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            csv_delimiter: default_csv_delimiter(),
            entry_location_code: default_entry_code(),
            exit_location_code: default_exit_code(),
            shift_hours: default_shift_hours(),
            tolerance_minutes: default_tolerance(),
            present_marker: default_present_marker(),
            company_name: default_company_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Delimiter byte for CSV reading; only single-byte delimiters are valid.
    pub fn delimiter_byte(delimiter: &str) -> AppResult<u8> {
        match delimiter.as_bytes() {
            [b] => Ok(*b),
            _ if delimiter == "\\t" => Ok(b'\t'),
            _ => Err(AppError::Config(format!(
                "CSV delimiter must be a single character, got '{delimiter}'"
            ))),
        }
    }

    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            location: LocationConvention {
                entry_code: self.entry_location_code,
                exit_code: self.exit_location_code,
            },
            rules: ShiftRules {
                shift_hours: self.shift_hours,
                tolerance_minutes: self.tolerance_minutes,
            },
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
