//! compression/config.rs
//! Codec tuning: compression threshold and level, from defaults or the environment.
use serde::{Deserialize, Serialize};

use crate::compression::constants::{ENV_COMPRESSION_THRESHOLD, ENV_LEVEL};
use crate::constants::{DEFAULT_COMPRESSION_THRESHOLD, LZ4HC_CLEVEL_DEFAULT};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub compression_threshold: usize,
    pub level: i32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_threshold: DEFAULT_COMPRESSION_THRESHOLD,
            level: LZ4HC_CLEVEL_DEFAULT,
        }
    }
}

impl CodecConfig {
    /// Defaults overridden by `DIRECTLZ4_COMPRESSION_THRESHOLD` and `DIRECTLZ4_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CodecConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_COMPRESSION_THRESHOLD) {
            cfg.compression_threshold = parse(ENV_COMPRESSION_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_LEVEL) {
            cfg.level = parse(ENV_LEVEL, &v)?;
        }
        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let cfg = CodecConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, CodecConfig::default());
        assert_eq!(cfg.compression_threshold, 100);
    }

    #[test]
    fn keys_override_defaults() {
        let cfg = CodecConfig::from_lookup(|k| match k {
            ENV_COMPRESSION_THRESHOLD => Some("256".into()),
            ENV_LEVEL => Some(" 12 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.compression_threshold, 256);
        assert_eq!(cfg.level, 12);
    }

    #[test]
    fn malformed_value_is_reported() {
        let err = CodecConfig::from_lookup(|k| (k == ENV_LEVEL).then(|| "high".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: ENV_LEVEL,
                value: "high".into()
            }
        );
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let res = CodecConfig::from_lookup(|k| (k == ENV_COMPRESSION_THRESHOLD).then(|| "-1".to_string()));
        assert!(res.is_err());
    }
}
