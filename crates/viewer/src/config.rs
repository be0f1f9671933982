use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory the application log files live in.
    pub log_dir: String,
    /// Filename pattern selecting log files inside `log_dir` (`*` / `?`).
    pub pattern: String,
    /// Files at or above this size are served through the streaming
    /// paginated scanner instead of being read whole.
    pub large_file_threshold_mib: u64,
}

impl ViewerConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("LOGVIEW_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logview/logview.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(dir) = std::env::var("LOGVIEW_LOG_DIR") {
            config.log_dir = dir;
        }
        if let Ok(pattern) = std::env::var("LOGVIEW_PATTERN") {
            config.pattern = pattern;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: ViewerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("LOGVIEW_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            pattern: std::env::var("LOGVIEW_PATTERN").unwrap_or_else(|_| "*.log".to_string()),
            large_file_threshold_mib: std::env::var("LOGVIEW_LARGE_FILE_THRESHOLD_MIB")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Validate that configuration values are sane
    pub fn validate(&self) -> Result<(), String> {
        if self.log_dir.is_empty() {
            return Err("log_dir must not be empty".to_string());
        }
        if self.pattern.is_empty() {
            return Err("pattern must not be empty".to_string());
        }
        if self.large_file_threshold_mib == 0 {
            return Err("large_file_threshold_mib must be > 0".to_string());
        }
        Ok(())
    }

    /// The large-file threshold in bytes.
    pub fn threshold_bytes(&self) -> u64 {
        self.large_file_threshold_mib * 1024 * 1024
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            pattern: "*.log".to_string(),
            large_file_threshold_mib: 5,
        }
    }
}
