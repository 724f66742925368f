//! Quote estimation engine
//!
//! Turns an answer set into ranked carrier quotes and a recommended face
//! amount. The engine owns an immutable rate table and never mutates the
//! answers it is given, so a single instance can be shared across threads.

use serde::{Deserialize, Serialize};

use crate::quiz::AnswerSet;
use crate::rates::{risk_multiplier, Carrier, CarrierRates, RateTable};
use super::coverage::recommended_coverage;

/// A single carrier's estimated monthly premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub carrier: Carrier,
    /// Monthly premium in whole dollars
    pub monthly_rate: u32,
}

/// Result of one estimation: recommended coverage and ranked quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub recommended_coverage: u64,
    /// Cheapest first
    pub quotes: Vec<Quote>,
}

impl Estimate {
    /// Lowest monthly rate, or 0 when no quotes could be produced
    pub fn best_rate(&self) -> u32 {
        self.best_quote().map_or(0, |q| q.monthly_rate)
    }

    pub fn best_quote(&self) -> Option<&Quote> {
        self.quotes.first()
    }
}

/// Stateless estimator over a fixed rate table
#[derive(Debug, Clone, Default)]
pub struct EstimationEngine {
    table: RateTable,
}

impl EstimationEngine {
    /// Create an engine over the given rate table
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Base monthly rates for the reference profile at `age`
    pub fn base_rate_for_age(&self, age: u8) -> CarrierRates {
        self.table.base_rate_for_age(age)
    }

    /// Combined risk multiplier for the answers
    pub fn risk_multiplier(&self, answers: &AnswerSet) -> f64 {
        risk_multiplier(answers)
    }

    /// One quote per carrier, cheapest first
    ///
    /// Returns an empty vec when age or desired coverage is missing.
    /// Ties keep canonical carrier order.
    pub fn ranked_quotes(&self, answers: &AnswerSet) -> Vec<Quote> {
        let (Some(age), Some(_)) = (answers.priced_age(), answers.priced_coverage()) else {
            return Vec::new();
        };

        let base = self.base_rate_for_age(age);
        let multiplier = self.risk_multiplier(answers);

        let mut quotes: Vec<Quote> = base
            .iter()
            .map(|(carrier, rate)| Quote {
                carrier,
                monthly_rate: (f64::from(rate) * multiplier).round() as u32,
            })
            .collect();

        // sort_by_key is stable
        quotes.sort_by_key(|q| q.monthly_rate);
        quotes
    }

    /// Recommended face amount (DIME)
    pub fn recommended_coverage(&self, answers: &AnswerSet) -> u64 {
        recommended_coverage(answers)
    }

    /// Quotes and recommended coverage together
    pub fn estimate(&self, answers: &AnswerSet) -> Estimate {
        Estimate {
            recommended_coverage: self.recommended_coverage(answers),
            quotes: self.ranked_quotes(answers),
        }
    }
}
