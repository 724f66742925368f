//! Age-bucketed base rate table
//!
//! Base rates are for the reference profile: male, non-smoker, excellent
//! health, $1M face amount, 20-year term. Ages map up to the nearest
//! bucket at or above them; past the last bucket the top row is
//! extrapolated linearly.

use super::carrier::CarrierRates;
use super::loader::RateTableError;

/// Extra load per year of age beyond the last bucket
pub const AGE_EXTRAPOLATION_STEP: f64 = 0.15;

/// Built-in rate rows as (bucket age, rates)
const DEFAULT_BUCKETS: [(u8, CarrierRates); 5] = [
    (30, CarrierRates::new(36, 38, 39, 41)),
    (35, CarrierRates::new(44, 47, 48, 49)),
    (40, CarrierRates::new(65, 68, 69, 71)),
    (45, CarrierRates::new(99, 105, 107, 109)),
    (50, CarrierRates::new(158, 165, 168, 172)),
];

/// Immutable base rate table, sorted by bucket age
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    buckets: Vec<(u8, CarrierRates)>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::default_pricing()
    }
}

impl RateTable {
    /// Built-in table with buckets at 30, 35, 40, 45 and 50
    pub fn default_pricing() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS.to_vec(),
        }
    }

    /// Build from explicit rows. Rows must be non-empty and strictly increasing by age.
    pub fn from_buckets(buckets: Vec<(u8, CarrierRates)>) -> Result<Self, RateTableError> {
        if buckets.is_empty() {
            return Err(RateTableError::Empty);
        }
        if let Some(pair) = buckets.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err(RateTableError::UnsortedBuckets {
                previous: pair[0].0,
                next: pair[1].0,
            });
        }
        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[(u8, CarrierRates)] {
        &self.buckets
    }

    fn last_bucket(&self) -> (u8, CarrierRates) {
        // from_buckets rejects empty tables
        self.buckets[self.buckets.len() - 1]
    }

    /// Base monthly rates for a given age
    pub fn base_rate_for_age(&self, age: u8) -> CarrierRates {
        if let Some((_, rates)) = self.buckets.iter().find(|(bucket, _)| age <= *bucket) {
            return *rates;
        }

        let (top_age, top_rates) = self.last_bucket();
        let load = 1.0 + f64::from(age - top_age) * AGE_EXTRAPOLATION_STEP;
        top_rates.map(|rate| (f64::from(rate) * load).round() as u32)
    }
}
