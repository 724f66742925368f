//! Downstream notification sinks for submitted leads
//!
//! Sinks are best effort: the relay logs their failures and moves on.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use thiserror::Error;

use super::config::TwilioConfig;
use super::lead::LeadRecord;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A destination that receives every accepted lead
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;

    async fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError>;
}

async fn check_status(response: reqwest::Response) -> Result<(), SinkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(SinkError::Rejected {
        status: status.as_u16(),
        body,
    })
}

/// Posts the lead record as JSON to a spreadsheet web app
pub struct SpreadsheetWebhook {
    url: String,
    client: reqwest::Client,
}

impl SpreadsheetWebhook {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl LeadSink for SpreadsheetWebhook {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    async fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError> {
        let response = self.client.post(&self.url).json(lead).send().await?;
        check_status(response).await
    }
}

/// Sends the new-lead alert through the Twilio Messages API
pub struct TwilioSms {
    config: TwilioConfig,
    client: reqwest::Client,
}

impl TwilioSms {
    pub fn new(config: TwilioConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl LeadSink for TwilioSms {
    fn name(&self) -> &str {
        "sms"
    }

    async fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError> {
        let body = lead.sms_body();
        let params = [
            ("To", self.config.notify_number.as_str()),
            ("From", self.config.from_number.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(self.config.auth_token.expose_secret()))
            .form(&params)
            .send()
            .await?;
        check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_messages_url() {
        let sms = TwilioSms::new(
            TwilioConfig {
                account_sid: "AC123".to_string(),
                auth_token: SecretString::new("token".to_string()),
                from_number: "+15550001111".to_string(),
                notify_number: "+15552223333".to_string(),
                api_base: "https://api.twilio.com/".to_string(),
            },
            reqwest::Client::new(),
        );
        assert_eq!(
            sms.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
        assert_eq!(sms.name(), "sms");
    }

    #[test]
    fn test_rejected_error_message() {
        let err = SinkError::Rejected {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "rejected with HTTP 401: unauthorized");
    }
}
