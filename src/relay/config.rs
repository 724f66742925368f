//! Relay configuration read from the environment
//!
//! Each notification sink is enabled only when every variable it needs is
//! set and non-empty:
//! - `LEAD_WEBHOOK_URL`
//! - `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE_NUMBER`,
//!   `TWILIO_NOTIFICATION_PHONE` (optional `TWILIO_API_BASE`)
//!
//! `RATE_TABLE_PATH` overrides the built-in base rates and
//! `SINK_TIMEOUT_SECS` bounds each outbound call.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::rates::{load_rate_table, RateTable, RateTableError};

pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";
pub const DEFAULT_SINK_TIMEOUT_SECS: u64 = 10;

/// Credentials and numbers for the SMS notification
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: SecretString,
    /// Number messages are sent from
    pub from_number: String,
    /// Number that receives new-lead alerts
    pub notify_number: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub webhook_url: Option<String>,
    pub twilio: Option<TwilioConfig>,
    pub rate_table_path: Option<PathBuf>,
    pub sink_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            twilio: None,
            rate_table_path: None,
            sink_timeout: Duration::from_secs(DEFAULT_SINK_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let twilio = match (
            get("TWILIO_ACCOUNT_SID"),
            get("TWILIO_AUTH_TOKEN"),
            get("TWILIO_PHONE_NUMBER"),
            get("TWILIO_NOTIFICATION_PHONE"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number), Some(notify_number)) => {
                Some(TwilioConfig {
                    account_sid,
                    auth_token: SecretString::new(auth_token),
                    from_number,
                    notify_number,
                    api_base: get("TWILIO_API_BASE")
                        .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
                })
            }
            _ => None,
        };

        let sink_timeout = get("SINK_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_SINK_TIMEOUT_SECS));

        Self {
            webhook_url: get("LEAD_WEBHOOK_URL"),
            twilio,
            rate_table_path: get("RATE_TABLE_PATH").map(PathBuf::from),
            sink_timeout,
        }
    }

    /// Rate table to price with: the CSV override if configured, else the built-in table
    pub fn rate_table(&self) -> Result<RateTable, RateTableError> {
        match &self.rate_table_path {
            Some(path) => load_rate_table(path),
            None => Ok(RateTable::default_pricing()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = RelayConfig::from_lookup(lookup(&[]));
        assert!(config.webhook_url.is_none());
        assert!(config.twilio.is_none());
        assert!(config.rate_table_path.is_none());
        assert_eq!(config.sink_timeout, Duration::from_secs(10));
        assert_eq!(config.rate_table().unwrap(), RateTable::default_pricing());
    }

    #[test]
    fn test_full_environment() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("LEAD_WEBHOOK_URL", "https://script.example.com/exec"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_PHONE_NUMBER", "+15550001111"),
            ("TWILIO_NOTIFICATION_PHONE", "+15552223333"),
            ("SINK_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(config.webhook_url.as_deref(), Some("https://script.example.com/exec"));
        let twilio = config.twilio.unwrap();
        assert_eq!(twilio.account_sid, "AC123");
        assert_eq!(twilio.auth_token.expose_secret(), "secret");
        assert_eq!(twilio.api_base, DEFAULT_TWILIO_API_BASE);
        assert_eq!(config.sink_timeout, Duration::from_secs(3));
        assert!(!format!("{:?}", twilio).contains("secret"));
    }

    #[test]
    fn test_auth_token_redacted_through_relay_config() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "tok-9f8e7d"),
            ("TWILIO_PHONE_NUMBER", "+15550001111"),
            ("TWILIO_NOTIFICATION_PHONE", "+15552223333"),
        ]));

        let copy = config.clone();
        assert!(copy.twilio.is_some());
        assert!(!format!("{:?}", copy).contains("tok-9f8e7d"));
        assert!(format!("{:?}", copy).contains("AC123"));
    }

    #[test]
    fn test_partial_twilio_disables_sms() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_PHONE_NUMBER", "   "),
            ("TWILIO_NOTIFICATION_PHONE", "+15552223333"),
        ]));
        assert!(config.twilio.is_none());
    }

    #[test]
    fn test_missing_rate_table_file_is_an_error() {
        let config = RelayConfig::from_lookup(lookup(&[("RATE_TABLE_PATH", "no/such/rates.csv")]));
        assert!(config.rate_table().is_err());
    }
}
