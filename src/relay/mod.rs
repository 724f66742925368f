//! Lead submission relay and its notification sinks

mod config;
mod lead;
mod sinks;
mod submission;

pub use config::{RelayConfig, TwilioConfig, DEFAULT_TWILIO_API_BASE};
pub use lead::LeadRecord;
pub use sinks::{LeadSink, SinkError, SpreadsheetWebhook, TwilioSms};
pub use submission::{RelayError, SubmissionReceipt, SubmissionRelay};
