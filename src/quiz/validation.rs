//! Field-level rules enforced by each quiz step
//!
//! The estimator never calls into this module; it exists for the callers
//! that collect answers (CLI, relay front-ends) so that a fully validated
//! answer set reaches the engine.

use serde::Serialize;

use super::data::AnswerSet;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 80;
pub const MIN_HEIGHT_INCHES: u32 = 48;
pub const MAX_HEIGHT_INCHES: u32 = 84;
pub const MIN_WEIGHT_POUNDS: u32 = 80;
pub const MAX_WEIGHT_POUNDS: u32 = 400;
pub const MIN_DESIRED_COVERAGE: u64 = 250_000;
const MIN_PHONE_DIGITS: usize = 10;

/// The six quiz steps, in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Age, gender, state
    Profile,
    /// Smoker, height, weight
    Health,
    /// Marital status, children
    Family,
    /// Income, debts
    Finances,
    /// Coverage amount, term
    Coverage,
    /// Name, phone, email
    Contact,
}

impl QuizStep {
    pub const ALL: [QuizStep; 6] = [
        QuizStep::Profile,
        QuizStep::Health,
        QuizStep::Family,
        QuizStep::Finances,
        QuizStep::Coverage,
        QuizStep::Contact,
    ];

    /// 1-based step number as shown in the progress bar
    pub fn number(&self) -> usize {
        match self {
            QuizStep::Profile => 1,
            QuizStep::Health => 2,
            QuizStep::Family => 3,
            QuizStep::Finances => 4,
            QuizStep::Coverage => 5,
            QuizStep::Contact => 6,
        }
    }
}

/// A single rejected field with the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate the fields belonging to one step. An empty vec means the step passes.
pub fn validate_step(answers: &AnswerSet, step: QuizStep) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match step {
        QuizStep::Profile => {
            if !answers.age.is_some_and(|a| (MIN_AGE..=MAX_AGE).contains(&a)) {
                errors.push(FieldError::new("age", "Please enter a valid age (18-80)"));
            }
            if answers.gender.is_none() {
                errors.push(FieldError::new("gender", "Please select your gender"));
            }
            if is_blank(&answers.state) {
                errors.push(FieldError::new("state", "Please select your state"));
            }
        }
        QuizStep::Health => {
            if answers.smoker.is_none() {
                errors.push(FieldError::new("smoker", "Please answer if you smoke"));
            }
            if !answers
                .height
                .is_some_and(|h| (MIN_HEIGHT_INCHES..=MAX_HEIGHT_INCHES).contains(&h))
            {
                errors.push(FieldError::new("height", "Please enter a valid height (4'0\" - 7'0\")"));
            }
            if !answers
                .weight
                .is_some_and(|w| (MIN_WEIGHT_POUNDS..=MAX_WEIGHT_POUNDS).contains(&w))
            {
                errors.push(FieldError::new("weight", "Please enter a valid weight (80-400 lbs)"));
            }
        }
        QuizStep::Family => {
            if answers.marital_status.is_none() {
                errors.push(FieldError::new("maritalStatus", "Please select your marital status"));
            }
            if answers.number_of_kids.is_none() {
                errors.push(FieldError::new("numberOfKids", "Please enter number of children"));
            }
        }
        QuizStep::Finances => {
            if answers.priced_income().is_none() {
                errors.push(FieldError::new("annualIncome", "Please enter your annual income"));
            }
            if answers.major_debts.is_none() {
                errors.push(FieldError::new("majorDebts", "Please enter your total debts (0 if none)"));
            }
        }
        QuizStep::Coverage => {
            if !answers.desired_coverage.is_some_and(|c| c >= MIN_DESIRED_COVERAGE) {
                errors.push(FieldError::new("desiredCoverage", "Please select a coverage amount"));
            }
            if answers.term_length.is_none() {
                errors.push(FieldError::new("termLength", "Please select a term length"));
            }
        }
        QuizStep::Contact => {
            if !answers.name.as_deref().is_some_and(|n| n.trim().chars().count() >= 2) {
                errors.push(FieldError::new("name", "Please enter your full name"));
            }
            if !answers.phone.as_deref().is_some_and(is_valid_phone) {
                errors.push(FieldError::new("phone", "Please enter a valid phone number"));
            }
            if !answers.email.as_deref().is_some_and(is_valid_email) {
                errors.push(FieldError::new("email", "Please enter a valid email address"));
            }
        }
    }

    errors
}

/// Validate every step, concatenating the errors in step order
pub fn validate_all(answers: &AnswerSet) -> Vec<FieldError> {
    QuizStep::ALL
        .iter()
        .flat_map(|step| validate_step(answers, *step))
        .collect()
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Digits, spaces, dashes and parentheses only, with at least ten digits
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return false;
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && digits >= MIN_PHONE_DIGITS
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
