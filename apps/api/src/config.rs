use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for PDF uploads.
    pub max_upload_bytes: usize,
    pub enable_entity_tagger: bool,
    /// Optional JSON gazetteer merged over the built-in tagger lexicon.
    pub entity_lexicon_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|| "10485760".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            enable_entity_tagger: parse_flag(
                "ENABLE_ENTITY_TAGGER",
                lookup("ENABLE_ENTITY_TAGGER"),
                true,
            )?,
            entity_lexicon_path: lookup("ENTITY_LEXICON_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("Environment variable '{key}' must be a boolean, got '{v}'"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.enable_entity_tagger);
        assert!(config.entity_lexicon_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("MAX_UPLOAD_BYTES", "2048"),
            ("ENABLE_ENTITY_TAGGER", "off"),
            ("ENTITY_LEXICON_PATH", "/etc/resume-parser/lexicon.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 2048);
        assert!(!config.enable_entity_tagger);
        assert_eq!(
            config.entity_lexicon_path,
            Some(PathBuf::from("/etc/resume-parser/lexicon.json"))
        );
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("MAX_UPLOAD_BYTES", "-1")]).is_err());
        assert!(config_from(&[("ENABLE_ENTITY_TAGGER", "maybe")]).is_err());
    }
}
