//! Risk multiplier applied uniformly to every carrier's base rate
//!
//! The multiplier composes independent factors in a fixed order:
//! - Gender (female discount)
//! - Tobacco use
//! - Face amount relative to the $1M reference
//! - Term length
//! - Body-mass band
//!
//! Nothing is rounded here; quotes round once after applying the product.

use crate::quiz::{AnswerSet, TermLength};

pub const FEMALE_FACTOR: f64 = 0.85;
pub const SMOKER_FACTOR: f64 = 2.5;

/// Face amount the base rates are quoted for
pub const REFERENCE_COVERAGE: f64 = 1_000_000.0;

const METERS_PER_INCH: f64 = 0.0254;
const KG_PER_POUND: f64 = 0.453592;

/// Direction a BMI threshold is compared in
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Above(f64),
    Below(f64),
}

/// BMI bands, first match wins
const BMI_BANDS: [(Bound, f64); 3] = [
    (Bound::Above(35.0), 1.3),  // obese
    (Bound::Above(30.0), 1.15), // overweight
    (Bound::Below(18.5), 1.1),  // underweight
];

impl TermLength {
    /// Rate factor relative to the 20-year reference term
    pub fn rate_factor(&self) -> f64 {
        match self {
            TermLength::Ten => 0.7,
            TermLength::Fifteen => 0.85,
            TermLength::Twenty => 1.0,
            TermLength::Thirty => 1.4,
            TermLength::Permanent => 3.5,
        }
    }
}

/// Body-mass index from height in inches and weight in pounds
pub fn body_mass_index(height_inches: u32, weight_pounds: u32) -> f64 {
    let height_m = f64::from(height_inches) * METERS_PER_INCH;
    let weight_kg = f64::from(weight_pounds) * KG_PER_POUND;
    weight_kg / (height_m * height_m)
}

/// Factor for a given BMI; 1.0 inside the healthy range
pub fn bmi_factor(bmi: f64) -> f64 {
    BMI_BANDS
        .iter()
        .find(|(bound, _)| match bound {
            Bound::Above(limit) => bmi > *limit,
            Bound::Below(limit) => bmi < *limit,
        })
        .map_or(1.0, |(_, factor)| *factor)
}

/// Combined risk multiplier for an answer set. Missing answers are neutral.
pub fn risk_multiplier(answers: &AnswerSet) -> f64 {
    let mut multiplier = 1.0;

    if answers.is_female() {
        multiplier *= FEMALE_FACTOR;
    }

    if answers.is_smoker() {
        multiplier *= SMOKER_FACTOR;
    }

    if let Some(coverage) = answers.priced_coverage() {
        multiplier *= coverage as f64 / REFERENCE_COVERAGE;
    }

    if let Some(term) = answers.term_length {
        multiplier *= term.rate_factor();
    }

    if let Some((height, weight)) = answers.body_measurements() {
        multiplier *= bmi_factor(body_mass_index(height, weight));
    }

    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Gender;
    use approx::assert_relative_eq;

    fn reference_answers() -> AnswerSet {
        AnswerSet {
            age: Some(35),
            gender: Some(Gender::Male),
            smoker: Some(false),
            height: Some(70),
            weight: Some(180),
            desired_coverage: Some(1_000_000),
            term_length: Some(TermLength::Twenty),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_profile_is_neutral() {
        assert_eq!(risk_multiplier(&reference_answers()), 1.0);
        assert_eq!(risk_multiplier(&AnswerSet::default()), 1.0);
    }

    #[test]
    fn test_female_discount() {
        let mut answers = reference_answers();
        answers.gender = Some(Gender::Female);
        assert_relative_eq!(risk_multiplier(&answers), 0.85);
    }

    #[test]
    fn test_smoker_ratio() {
        let mut answers = reference_answers();
        answers.gender = Some(Gender::Female);
        answers.term_length = Some(TermLength::Thirty);
        answers.desired_coverage = Some(750_000);

        let non_smoker = risk_multiplier(&answers);
        answers.smoker = Some(true);
        let smoker = risk_multiplier(&answers);

        assert_relative_eq!(smoker / non_smoker, 2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_coverage_is_proportional() {
        let mut answers = reference_answers();
        answers.gender = Some(Gender::Female);
        answers.term_length = Some(TermLength::Fifteen);

        answers.desired_coverage = Some(1_000_000);
        let one_million = risk_multiplier(&answers);
        answers.desired_coverage = Some(2_000_000);
        let two_million = risk_multiplier(&answers);

        assert_eq!(two_million, 2.0 * one_million);

        let mut previous = 0.0;
        for coverage in (250_000..=5_000_000).step_by(250_000) {
            answers.desired_coverage = Some(coverage);
            let m = risk_multiplier(&answers);
            assert!(m > previous, "not increasing at {}", coverage);
            previous = m;
        }
    }

    #[test]
    fn test_term_factors() {
        let mut answers = reference_answers();
        let expected = [
            (TermLength::Ten, 0.7),
            (TermLength::Fifteen, 0.85),
            (TermLength::Twenty, 1.0),
            (TermLength::Thirty, 1.4),
            (TermLength::Permanent, 3.5),
        ];
        for (term, factor) in expected {
            answers.term_length = Some(term);
            assert_relative_eq!(risk_multiplier(&answers), factor);
        }
    }

    #[test]
    fn test_bmi_calculation() {
        // 70in / 180lb is about 25.8
        assert_relative_eq!(body_mass_index(70, 180), 25.827, epsilon = 1e-3);
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(bmi_factor(35.1), 1.3);
        assert_eq!(bmi_factor(35.0), 1.15);
        assert_eq!(bmi_factor(30.1), 1.15);
        assert_eq!(bmi_factor(30.0), 1.0);
        assert_eq!(bmi_factor(18.5), 1.0);
        assert_eq!(bmi_factor(18.4), 1.1);
        assert_eq!(bmi_factor(24.0), 1.0);
    }

    #[test]
    fn test_bmi_needs_height_and_weight() {
        let mut answers = reference_answers();
        answers.weight = Some(300);
        assert_relative_eq!(risk_multiplier(&answers), 1.3);

        answers.height = None;
        assert_eq!(risk_multiplier(&answers), 1.0);
    }

    #[test]
    fn test_underweight() {
        let mut answers = reference_answers();
        answers.height = Some(72);
        answers.weight = Some(120);
        assert_relative_eq!(risk_multiplier(&answers), 1.1);
    }
}
