use crate::model::PAGE_SIZE;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "routes-tui.log";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// JSON file or CSV directory to load instead of the bundled dataset
    #[serde(default)]
    pub data_path: Option<String>,
    /// Rows per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_per_page() -> usize {
    PAGE_SIZE
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            per_page: default_per_page(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".routes-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, or None if it is missing or unreadable
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    /// Apply command line overrides on top of the file values
    pub fn merge_cli(
        mut self,
        data: Option<String>,
        per_page: Option<usize>,
        log_file: Option<String>,
    ) -> Self {
        if data.is_some() {
            self.data_path = data;
        }
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}
