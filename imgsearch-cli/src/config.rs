// ABOUTME: Configuration file loading, validation, and hierarchical merging for imgsearch
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result};
use imgsearch_sdk::{SignatureEntry, SignatureTable};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::env_vars;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub upload_url: Option<String>,
    #[serde(default, deserialize_with = "validate_duration")]
    pub timeout: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub open_browser: Option<bool>,
    #[serde(default)]
    pub signatures: Option<Vec<ConfigSignature>>,
}

/// Extra `[[signatures]]` entry appended to the built-in table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigSignature {
    pub extension: String,
    pub pattern: String,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths, later paths overriding earlier ones
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            if !Path::new(path).exists() {
                continue;
            }
            let file_config = Self::load_from_file(path)?;
            config = config.merge(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir
                .join(".config")
                .join("imgsearch")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home)
                .join("imgsearch")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(
                current_dir
                    .join("imgsearch.toml")
                    .to_string_lossy()
                    .to_string(),
            );
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            upload_url: other.upload_url.or(self.upload_url),
            timeout: other.timeout.or(self.timeout),
            user_agent: other.user_agent.or(self.user_agent),
            open_browser: other.open_browser.or(self.open_browser),
            signatures: match (self.signatures, other.signatures) {
                (Some(mut base), Some(other)) => {
                    base.extend(other);
                    Some(base)
                }
                (base, other) => other.or(base),
            },
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.signature_table()
            .context("Invalid signature configuration")?;
        Ok(())
    }

    /// Endpoint from the environment, then config. `None` means the SDK default.
    pub fn resolved_upload_url(&self) -> Option<String> {
        std::env::var(env_vars::UPLOAD_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.upload_url.clone())
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.as_deref().and_then(parse_duration)
    }

    pub fn open_browser(&self) -> bool {
        self.open_browser.unwrap_or(true)
    }

    /// Built-in signatures plus any configured extras
    pub fn signature_table(&self) -> Result<SignatureTable> {
        let mut table = SignatureTable::builtin().clone();

        if let Some(ref signatures) = self.signatures {
            let entries = signatures
                .iter()
                .map(|sig| SignatureEntry::parse(sig.extension.as_str(), &sig.pattern))
                .collect::<imgsearch_sdk::Result<Vec<_>>>()?;
            table.extend(entries)?;
        }

        Ok(table)
    }
}

/// Parse durations like `30s`, `2m`, `1h`
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let unit = value.chars().last()?;
    let amount: u64 = value[..value.len() - unit.len_utf8()].parse().ok()?;

    match unit {
        's' => Some(amount),
        'm' => amount.checked_mul(60),
        'h' => amount.checked_mul(60 * 60),
        _ => None,
    }
    .map(Duration::from_secs)
}

// Custom deserializer for duration validation
fn validate_duration<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value: Option<String> = Option::deserialize(deserializer)?;
    let Some(duration) = value else {
        return Ok(None);
    };

    match parse_duration(&duration) {
        Some(parsed) if !parsed.is_zero() => Ok(Some(duration)),
        Some(_) => Err(D::Error::custom(format!(
            "Invalid timeout '{}'. Must be greater than zero",
            duration
        ))),
        None => Err(D::Error::custom(format!(
            "Invalid timeout format '{}'. Expected format like '30s', '2m', '1h'",
            duration
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.upload_url.is_none());
        assert!(config.signatures.is_none());
        assert!(config.open_browser());
        assert_eq!(config.timeout_duration(), None);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            upload_url: Some("https://base.example/upload".to_string()),
            timeout: Some("10s".to_string()),
            ..Default::default()
        };

        let override_config = Config {
            upload_url: Some("https://override.example/upload".to_string()),
            open_browser: Some(false),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(
            merged.upload_url,
            Some("https://override.example/upload".to_string())
        );
        assert_eq!(merged.timeout, Some("10s".to_string()));
        assert_eq!(merged.open_browser, Some(false));
    }

    #[test]
    fn test_merge_appends_signatures() {
        let sig = |ext: &str, pattern: &str| ConfigSignature {
            extension: ext.to_string(),
            pattern: pattern.to_string(),
        };
        let base = Config {
            signatures: Some(vec![sig("jxl", "FF 0A")]),
            ..Default::default()
        };
        let other = Config {
            signatures: Some(vec![sig("qoi", "71 6F 69 66")]),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.signatures.map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("xs"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert_eq!(parse_duration("18446744073709551615h"), None);
        assert_eq!(parse_duration("18446744073709551615m"), None);
        assert_eq!(
            parse_duration("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );

        let result: Result<Config, _> = toml::from_str(r#"timeout = "18446744073709551615h""#);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("Invalid timeout format"), "{}", error);
    }

    #[test]
    fn test_signature_table_includes_extras() {
        let config = Config {
            signatures: Some(vec![ConfigSignature {
                extension: "qoi".to_string(),
                pattern: "71 6F 69 66".to_string(),
            }]),
            ..Default::default()
        };

        let table = config.signature_table().unwrap();
        assert_eq!(table.classify(b"qoif\x00\x00"), Some("qoi"));
        assert_eq!(table.classify(&[0xFF, 0xD8, 0xFF, 0xDB]), Some("jpg"));
    }

    #[test]
    fn test_invalid_signature_fails_validation() {
        let config = Config {
            signatures: Some(vec![ConfigSignature {
                extension: "bad".to_string(),
                pattern: "ZZ".to_string(),
            }]),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
