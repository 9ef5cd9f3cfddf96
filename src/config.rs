use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ADDR: &str = ":8080";
pub const DEFAULT_DATA_FILE: &str = "data/stars.json";

/// Startup configuration: command-line flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "stars-viewer", version, about = "Browse and search starred repositories")]
pub struct Config {
    /// Listen address; an empty host (":8080") binds every IPv4 interface
    #[arg(long, env = "STARS_VIEWER_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Path to the exported stars JSON file
    #[arg(long = "data", env = "STARS_VIEWER_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Address in a form `TcpListener::bind` accepts.
    pub fn bind_addr(&self) -> String {
        if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        }
    }
}
