//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting (default: `false`)
//! - `UPLOAD_DIR` - Where uploads are stored while processed (default: `uploads`)
//! - `OUTPUT_DIR` - Run directories and result archives (default: `outputs`)
//! - `MAX_UPLOAD_BYTES` - Request body limit for uploads (default: 16 MiB)
//! - `EMPTY_ROW_LIMIT` - Consecutive empty campaign rows before a sheet is
//!   considered finished (default: 10)
//! - `INPUT_SHEET` - Sheet holding the TAL rows (default: `Sheet1`)
//! - `RESULT_RETENTION_SECS` - Age after which archives are swept (default: 86400)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::{DEFAULT_INPUT_SHEET, RunOptions};
use crate::domain::index_builder::DEFAULT_EMPTY_ROW_LIMIT;

/// Default request body limit for uploads (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub empty_row_limit: usize,
    pub input_sheet: String,
    /// Archives and abandoned run directories older than this are removed.
    pub result_retention_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("outputs"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            empty_row_limit: DEFAULT_EMPTY_ROW_LIMIT,
            input_sheet: DEFAULT_INPUT_SHEET.to_string(),
            result_retention_secs: 86_400,
        }
    }
}

/// Parses an optional numeric variable, failing loudly on garbage.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);
        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;
        let empty_row_limit = parse_var("EMPTY_ROW_LIMIT", defaults.empty_row_limit)?;
        let input_sheet = env::var("INPUT_SHEET").unwrap_or(defaults.input_sheet);
        let result_retention_secs =
            parse_var("RESULT_RETENTION_SECS", defaults.result_retention_secs)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            upload_dir,
            output_dir,
            max_upload_bytes,
            empty_row_limit,
            input_sheet,
            result_retention_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `max_upload_bytes` is zero or above 1 GiB
    /// - `empty_row_limit` is zero
    /// - `input_sheet` is blank
    /// - `result_retention_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than 0");
        }

        if self.max_upload_bytes > 1024 * 1024 * 1024 {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES is too large (max: 1 GiB), got {}",
                self.max_upload_bytes
            );
        }

        if self.empty_row_limit == 0 {
            anyhow::bail!("EMPTY_ROW_LIMIT must be at least 1");
        }

        if self.input_sheet.trim().is_empty() {
            anyhow::bail!("INPUT_SHEET must not be empty");
        }

        if self.result_retention_secs == 0 {
            anyhow::bail!("RESULT_RETENTION_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Engine options derived from this configuration.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            input_sheet: self.input_sheet.clone(),
            empty_row_limit: self.empty_row_limit,
        }
    }

    pub fn result_retention(&self) -> Duration {
        Duration::from_secs(self.result_retention_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upload dir: {}", self.upload_dir.display());
        tracing::info!("  Output dir: {}", self.output_dir.display());
        tracing::info!("  Max upload: {} bytes", self.max_upload_bytes);
        tracing::info!("  Input sheet: {}", self.input_sheet);
        tracing::info!("  Empty row limit: {}", self.empty_row_limit);
        tracing::info!("  Result retention: {}s", self.result_retention_secs);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
