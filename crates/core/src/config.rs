//! Session timing configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default idle lifetime of a session: 30 minutes
pub const DEFAULT_SESSION_LIFETIME_SECS: u64 = 30 * 60;

/// Default warning window before expiry: 5 minutes
pub const DEFAULT_WARNING_THRESHOLD_SECS: u64 = 5 * 60;

/// Default expiry check cadence: 1 second
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 1;

/// Timing knobs for the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle time after which the session is expired
    pub session_lifetime_secs: u64,
    /// How long before expiry the warning prompt appears
    pub warning_threshold_secs: u64,
    /// How often the expiry check runs
    pub check_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_lifetime_secs: DEFAULT_SESSION_LIFETIME_SECS,
            warning_threshold_secs: DEFAULT_WARNING_THRESHOLD_SECS,
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid session configuration: {message}")]
pub struct InvalidConfig {
    pub message: String,
}

impl SessionConfig {
    /// Parse a JSON configuration blob, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, InvalidConfig> {
        let config: Self = serde_json::from_str(json).map_err(|e| InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the timing values are coherent
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.session_lifetime_secs == 0 {
            return Err(InvalidConfig {
                message: "session_lifetime_secs must be greater than zero".into(),
            });
        }
        if self.warning_threshold_secs >= self.session_lifetime_secs {
            return Err(InvalidConfig {
                message: "warning_threshold_secs must be smaller than session_lifetime_secs".into(),
            });
        }
        if self.check_interval_secs == 0 {
            return Err(InvalidConfig {
                message: "check_interval_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn session_lifetime(&self) -> Duration {
        Duration::from_secs(self.session_lifetime_secs)
    }

    #[must_use]
    pub const fn warning_threshold(&self) -> Duration {
        Duration::from_secs(self.warning_threshold_secs)
    }

    #[must_use]
    pub const fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.session_lifetime(), Duration::from_secs(1800));
        assert_eq!(config.warning_threshold(), Duration::from_secs(300));
        assert_eq!(config.check_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SessionConfig::from_json(r#"{"session_lifetime_secs": 600}"#).unwrap();
        assert_eq!(config.session_lifetime_secs, 600);
        assert_eq!(config.warning_threshold_secs, DEFAULT_WARNING_THRESHOLD_SECS);
    }

    #[test]
    fn test_from_json_rejects_malformed_and_incoherent_config() {
        let err = SessionConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid session configuration"));

        let err = SessionConfig::from_json(r#"{"session_lifetime_secs": 120}"#).unwrap_err();
        assert!(err.message.contains("warning_threshold_secs"));
    }

    #[test]
    fn test_validate_rejects_threshold_beyond_lifetime() {
        let config = SessionConfig {
            session_lifetime_secs: 60,
            warning_threshold_secs: 60,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SessionConfig {
            session_lifetime_secs: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
