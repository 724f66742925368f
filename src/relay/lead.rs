//! Lead record forwarded to the spreadsheet and the SMS alert text

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::estimate::Estimate;
use crate::quiz::{AnswerSet, Gender, MaritalStatus, TermLength};

/// One spreadsheet row: the answers plus the estimate headline numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub state: Option<String>,
    /// "Yes" or "No"
    pub smoker: &'static str,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub marital_status: Option<MaritalStatus>,
    pub number_of_kids: Option<u32>,
    pub annual_income: Option<u64>,
    pub major_debts: Option<u64>,
    pub desired_coverage: Option<u64>,
    pub term_length: Option<TermLength>,
    pub recommended_coverage: u64,
    pub best_rate: u32,
}

impl LeadRecord {
    pub fn new(answers: &AnswerSet, estimate: &Estimate, received_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            name: answers.name.clone().unwrap_or_default(),
            phone: answers.phone.clone().unwrap_or_default(),
            email: answers.email.clone().unwrap_or_default(),
            age: answers.age,
            gender: answers.gender,
            state: answers.state.clone(),
            smoker: if answers.is_smoker() { "Yes" } else { "No" },
            height: answers.height,
            weight: answers.weight,
            marital_status: answers.marital_status,
            number_of_kids: answers.number_of_kids,
            annual_income: answers.annual_income,
            major_debts: answers.major_debts,
            desired_coverage: answers.desired_coverage,
            term_length: answers.term_length,
            recommended_coverage: estimate.recommended_coverage,
            best_rate: estimate.best_rate(),
        }
    }

    /// Text of the new-lead SMS alert
    pub fn sms_body(&self) -> String {
        let age = self
            .age
            .filter(|a| *a > 0)
            .map_or_else(|| "N/A".to_string(), |a| a.to_string());
        let state = self
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("N/A");
        let coverage = if self.recommended_coverage > 0 {
            format!("${}M", millions_one_decimal(self.recommended_coverage))
        } else {
            "N/A".to_string()
        };
        let rate = if self.best_rate > 0 {
            format!("${}/mo", self.best_rate)
        } else {
            "N/A".to_string()
        };

        format!(
            "New hot lead: {}, {}, {}, {} need, {} quotes - just booked call",
            self.name, age, state, coverage, rate
        )
    }
}

/// Dollars as millions with one decimal, rounded from the `f64` quotient
///
/// 0.35 is stored just below the half, so 350,000 reads "0.3". Exact
/// halves only occur at odd multiples of 250,000 and round up.
fn millions_one_decimal(amount: u64) -> String {
    if amount % 500_000 == 250_000 {
        let tenths = (amount + 50_000) / 100_000;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", amount as f64 / 1_000_000.0)
}
