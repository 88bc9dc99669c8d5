//! Configuration for the Campus portal

use std::path::PathBuf;

use campus_sdk::ClientConfig;
use clap::Parser;

/// Campus Portal - terminal front end for the Campus LMS API
#[derive(Parser, Debug, Clone)]
#[command(name = "campus-portal")]
#[command(about = "Interactive terminal portal for the Campus LMS", long_about = None)]
pub struct Args {
    /// Base URL of the Campus API gateway
    #[arg(long, env = "CAMPUS_API_URL", default_value = "http://localhost:8000/api")]
    pub api_url: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "CAMPUS_HTTP_TIMEOUT", default_value = "30")]
    pub timeout_secs: u64,

    /// Directory downloaded certificates are written to
    #[arg(long, env = "CAMPUS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CAMPUS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Client configuration derived from the parsed flags
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("API URL cannot be empty".to_string());
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("HTTP timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}
