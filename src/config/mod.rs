//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment label ("development", "production", ...).
    #[serde(default = "default_env")]
    pub env: String,
}

fn default_port() -> u16 {
    8000
}

fn default_env() -> String {
    "development".to_string()
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("OCV_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/one-click-video");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("one-click-video");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/one-click-video");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("one-click-video");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Get data directory (XDG_DATA_HOME or platform default)
///
/// Holds the job store (`jobs.json`).
pub fn get_data_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("OCV_DATA_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/one-click-video");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return std::path::PathBuf::from(xdg).join("one-click-video");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".local/share/one-click-video");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("LOCALAPPDATA") {
            return std::path::PathBuf::from(appdata).join("one-click-video");
        }
    }

    // Fallback to ./data
    std::path::PathBuf::from("./data")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8000)?
        .set_default("env", "development")?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (OCV_PORT, OCV_ENV, etc.)
        .add_source(
            ::config::Environment::with_prefix("OCV")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Support PORT env vars with explicit precedence: OCV_PORT > PORT > config > default
    // Handle manually to ensure consistent behavior across all environments
    if let Ok(port) = std::env::var("OCV_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (Docker, PaaS runners)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_defaults_without_env_or_file() {
        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::remove_var("OCV_ENV");
        env::set_var("OCV_CONFIG_DIR", "/tmp/ocv-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("OCV_CONFIG_DIR");

        assert_eq!(config.port, 8000);
        assert_eq!(config.env, "development");
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::set_var("OCV_CONFIG_DIR", "/tmp/ocv-test-nonexistent");

        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("OCV_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_ocv_port_takes_precedence_over_port() {
        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::set_var("OCV_CONFIG_DIR", "/tmp/ocv-test-nonexistent");

        env::set_var("OCV_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::remove_var("OCV_CONFIG_DIR");

        assert_eq!(config.port, 5000, "OCV_PORT should take precedence over PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::set_var("OCV_CONFIG_DIR", "/tmp/ocv-test-nonexistent");

        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("OCV_CONFIG_DIR");

        assert_eq!(config.port, 8000, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn test_env_label_from_environment() {
        env::remove_var("OCV_PORT");
        env::remove_var("PORT");
        env::set_var("OCV_CONFIG_DIR", "/tmp/ocv-test-nonexistent");

        env::set_var("OCV_ENV", "production");

        let config = load_config().expect("config should load");

        env::remove_var("OCV_ENV");
        env::remove_var("OCV_CONFIG_DIR");

        assert_eq!(config.env, "production");
    }

    #[test]
    #[serial]
    fn test_data_dir_env_override() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("OCV_DATA_DIR", temp_dir.path());

        let dir = get_data_dir();

        env::remove_var("OCV_DATA_DIR");

        assert_eq!(dir, temp_dir.path());
    }
}
