//! Questionnaire answer set matching the quiz submission format

use serde::{Deserialize, Serialize};

/// Gender of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Marital status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl std::str::FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            "divorced" => Ok(MaritalStatus::Divorced),
            "widowed" => Ok(MaritalStatus::Widowed),
            other => Err(format!("unknown marital status: {}", other)),
        }
    }
}

/// Requested policy term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermLength {
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "permanent")]
    Permanent,
}

impl std::str::FromStr for TermLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10" => Ok(TermLength::Ten),
            "15" => Ok(TermLength::Fifteen),
            "20" => Ok(TermLength::Twenty),
            "30" => Ok(TermLength::Thirty),
            "permanent" => Ok(TermLength::Permanent),
            other => Err(format!("unknown term length: {}", other)),
        }
    }
}

/// Answers collected across the six quiz steps
///
/// Every field is optional: the quiz fills them in step by step and the
/// estimator treats a missing value as "no adjustment". Numeric drivers
/// equal to zero are read the same as missing (see the accessors below).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    /// Age in years (18-80 once validated)
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    /// Two-letter US state; forwarded with the lead, never priced on
    pub state: Option<String>,

    pub smoker: Option<bool>,
    /// Height in inches
    pub height: Option<u32>,
    /// Weight in pounds
    pub weight: Option<u32>,

    pub marital_status: Option<MaritalStatus>,
    pub number_of_kids: Option<u32>,

    /// Annual income in dollars
    pub annual_income: Option<u64>,
    /// Total outstanding debt in dollars
    pub major_debts: Option<u64>,

    /// Requested face amount in dollars
    pub desired_coverage: Option<u64>,
    pub term_length: Option<TermLength>,

    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

fn non_zero<T: Copy + PartialEq + Default>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AnswerSet {
    /// Age, if answered and non-zero
    pub fn priced_age(&self) -> Option<u8> {
        non_zero(self.age)
    }

    /// Desired coverage, if answered and non-zero
    pub fn priced_coverage(&self) -> Option<u64> {
        non_zero(self.desired_coverage)
    }

    /// Annual income, if answered and non-zero
    pub fn priced_income(&self) -> Option<u64> {
        non_zero(self.annual_income)
    }

    /// Height and weight, only when both are answered and non-zero
    pub fn body_measurements(&self) -> Option<(u32, u32)> {
        match (non_zero(self.height), non_zero(self.weight)) {
            (Some(h), Some(w)) => Some((h, w)),
            _ => None,
        }
    }

    pub fn is_female(&self) -> bool {
        matches!(self.gender, Some(Gender::Female))
    }

    pub fn is_smoker(&self) -> bool {
        self.smoker == Some(true)
    }

    /// Trimmed contact name, phone and email when all three are present
    pub fn contact(&self) -> Option<(&str, &str, &str)> {
        Some((
            non_blank(&self.name)?,
            non_blank(&self.phone)?,
            non_blank(&self.email)?,
        ))
    }
}
