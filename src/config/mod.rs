use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

fn default_page_size_logs() -> usize {
    10
}
fn default_page_size_audit() -> usize {
    20
}
fn default_decimal_places() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_page_size_logs")]
    pub page_size_logs: usize,
    #[serde(default = "default_page_size_audit")]
    pub page_size_audit: usize,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            page_size_logs: default_page_size_logs(),
            page_size_audit: default_page_size_audit(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl Config {
    /// Platform configuration directory: `%APPDATA%\uphtrack` on Windows,
    /// `~/.uphtrack` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("uphtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".uphtrack")
        }
    }

    /// Full path of the YAML configuration file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("uphtrack.conf")
    }

    /// Default location of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("uphtrack.sqlite")
    }

    /// Load the configuration, falling back to defaults when no file exists
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Cannot read configuration file");
            serde_yaml::from_str(&content).expect("❌ Malformed configuration file")
        } else {
            Self::default()
        }
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the resolved database path so callers work on the same file
    /// even in test mode, where no config file is written.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Database path: the name the user gave, or the default location
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        // YAML config, skipped under --test
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Failed to serialize config: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Touch the database file so later opens find it
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
