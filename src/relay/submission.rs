//! Submission relay: price the lead, then fan it out to the sinks

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::estimate::EstimationEngine;
use crate::quiz::AnswerSet;
use super::config::RelayConfig;
use super::lead::LeadRecord;
use super::sinks::{LeadSink, SpreadsheetWebhook, TwilioSms};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required fields")]
    MissingContact,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// What the relay reports back for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub recommended_coverage: u64,
    pub best_rate: u32,
    /// Number of sinks that accepted the lead
    pub delivered: usize,
}

/// Accepts quiz submissions and forwards them to every configured sink
pub struct SubmissionRelay {
    engine: Arc<EstimationEngine>,
    sinks: Vec<Box<dyn LeadSink>>,
}

impl SubmissionRelay {
    /// Relay with no sinks
    pub fn new(engine: Arc<EstimationEngine>) -> Self {
        Self {
            engine,
            sinks: Vec::new(),
        }
    }

    /// Add a sink; sinks are notified in the order they were added
    pub fn with_sink(mut self, sink: impl LeadSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build a relay with the sinks enabled in `config`
    pub fn from_config(config: &RelayConfig, engine: Arc<EstimationEngine>) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(config.sink_timeout).build()?;
        let mut relay = Self::new(engine);

        match &config.webhook_url {
            Some(url) => relay = relay.with_sink(SpreadsheetWebhook::new(url.clone(), client.clone())),
            None => log::warn!("LEAD_WEBHOOK_URL not set; spreadsheet forwarding disabled"),
        }
        match &config.twilio {
            Some(twilio) => relay = relay.with_sink(TwilioSms::new(twilio.clone(), client)),
            None => log::warn!("Twilio not configured; SMS alerts disabled"),
        }

        Ok(relay)
    }

    pub fn engine(&self) -> &EstimationEngine {
        &self.engine
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Accept a submission received now
    pub async fn submit(&self, answers: &AnswerSet) -> Result<SubmissionReceipt, RelayError> {
        self.submit_at(answers, Utc::now()).await
    }

    /// Accept a submission with an explicit receive time
    ///
    /// Fails only when name, phone or email is missing. Sink failures are
    /// logged and never change the outcome.
    pub async fn submit_at(
        &self,
        answers: &AnswerSet,
        received_at: DateTime<Utc>,
    ) -> Result<SubmissionReceipt, RelayError> {
        if answers.contact().is_none() {
            return Err(RelayError::MissingContact);
        }

        let estimate = self.engine.estimate(answers);
        let lead = LeadRecord::new(answers, &estimate, received_at);

        let mut delivered = 0;
        for sink in &self.sinks {
            match sink.deliver(&lead).await {
                Ok(()) => {
                    log::debug!("Lead delivered to {}", sink.name());
                    delivered += 1;
                }
                Err(e) => log::error!("Error submitting lead to {}: {}", sink.name(), e),
            }
        }

        log::info!(
            "Accepted lead: coverage={} best_rate={} sinks={}/{}",
            lead.recommended_coverage,
            lead.best_rate,
            delivered,
            self.sinks.len()
        );

        Ok(SubmissionReceipt {
            recommended_coverage: lead.recommended_coverage,
            best_rate: lead.best_rate,
            delivered,
        })
    }
}
