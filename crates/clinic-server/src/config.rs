// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory holding the two store files; created recursively on startup.
    pub data_dir: PathBuf,
    /// Deployment profile that redirects the stores to a per-process
    /// directory under the system temp dir (the serverless profile of the
    /// original deployment).
    pub ephemeral_data: bool,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            data_dir: PathBuf::from("data"),
            ephemeral_data: false,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl ServerConfig {
    /// The directory stores actually live in, after applying the ephemeral
    /// profile.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if self.ephemeral_data {
            std::env::temp_dir().join(format!("clinic-data-{}", std::process::id()))
        } else {
            self.data_dir.clone()
        }
    }
}

pub fn validate_startup_config(config: &ServerConfig) -> Result<(), String> {
    if config.bind_addr.trim().is_empty() {
        return Err("bind address must be non-empty".to_string());
    }
    if config.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if !config.ephemeral_data && config.data_dir.as_os_str().is_empty() {
        return Err("data dir must be non-empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_startup_validation() {
        validate_startup_config(&ServerConfig::default()).expect("default config");
    }

    #[test]
    fn startup_validation_rejects_zero_body_limit() {
        let config = ServerConfig {
            max_body_bytes: 0,
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&config).expect_err("zero body limit");
        assert!(err.contains("body bytes"));
    }

    #[test]
    fn ephemeral_profile_redirects_the_data_dir() {
        let config = ServerConfig {
            ephemeral_data: true,
            ..ServerConfig::default()
        };
        let dir = config.resolved_data_dir();
        assert!(dir.starts_with(std::env::temp_dir()));
        assert_ne!(dir, ServerConfig::default().resolved_data_dir());
    }
}
