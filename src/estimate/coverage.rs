//! Recommended face amount using the DIME heuristic
//!
//! Debt + Income replacement + Education. Mortgage is folded into the
//! applicant's reported debts.

use crate::quiz::AnswerSet;

/// Years of income to replace
pub const INCOME_REPLACEMENT_YEARS: u64 = 10;

/// Education fund per child
pub const EDUCATION_PER_CHILD: u64 = 50_000;

/// Recommendation when neither income nor a desired amount is known
pub const DEFAULT_COVERAGE: u64 = 1_000_000;

/// Recommendations are rounded to this increment
pub const COVERAGE_INCREMENT: u64 = 100_000;

/// Round to the nearest increment, halves rounding up
fn round_to_increment(amount: u64) -> u64 {
    amount.saturating_add(COVERAGE_INCREMENT / 2) / COVERAGE_INCREMENT * COVERAGE_INCREMENT
}

/// Recommended coverage for an answer set
///
/// Without an income answer this falls back to the desired coverage, then
/// to [`DEFAULT_COVERAGE`].
pub fn recommended_coverage(answers: &AnswerSet) -> u64 {
    let Some(income) = answers.priced_income() else {
        return answers.priced_coverage().unwrap_or(DEFAULT_COVERAGE);
    };

    let income_replacement = income.saturating_mul(INCOME_REPLACEMENT_YEARS);
    let debts = answers.major_debts.unwrap_or(0);
    let education = u64::from(answers.number_of_kids.unwrap_or(0)).saturating_mul(EDUCATION_PER_CHILD);

    round_to_increment(income_replacement.saturating_add(debts).saturating_add(education))
}
