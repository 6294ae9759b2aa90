use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "GREETER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "greeter.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub greeting: Greeting,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Greeting {
    pub name: String,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Greeting {
            name: "Rahul".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the file named by `GREETER_CONFIG` (or
    /// `greeter.yml`). A missing file yields the defaults.
    pub fn new() -> Result<Config, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }
        Config::from_file(&path)
    }

    pub fn from_file(input_file: &str) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(input_file)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
