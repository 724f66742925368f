//! Plain-text rendering of an estimate for terminals and logs

use std::fmt;

use crate::estimate::Estimate;

/// Quotes shown in the results table
pub const DISPLAYED_QUOTES: usize = 5;

/// Group digits with commas, e.g. 1100000 -> "1,100,000"
pub fn with_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Recommended coverage and the top quotes, cheapest flagged
pub struct Report<'a>(pub &'a Estimate);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = self.0;

        writeln!(
            f,
            "Based on your answers, you need roughly ${} of coverage.",
            with_thousands(estimate.recommended_coverage)
        )?;
        writeln!(f)?;

        if estimate.quotes.is_empty() {
            return writeln!(f, "No quotes available: age and desired coverage are required.");
        }

        writeln!(f, "Top Carrier Rates (Monthly Premium)")?;
        writeln!(f, "{:<24} {:>12}", "Carrier", "Monthly Rate")?;
        writeln!(f, "{}", "-".repeat(37))?;

        for (idx, quote) in estimate.quotes.iter().take(DISPLAYED_QUOTES).enumerate() {
            let carrier = if idx == 0 {
                format!("{} (Best Rate)", quote.carrier)
            } else {
                quote.carrier.to_string()
            };
            let rate = format!("${}/mo", with_thousands(u64::from(quote.monthly_rate)));
            writeln!(f, "{:<24} {:>12}", carrier, rate)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "* Rates are estimates based on your provided information. Final rates may vary based on medical underwriting."
        )
    }
}

/// Render an estimate as the results table text
pub fn render(estimate: &Estimate) -> String {
    Report(estimate).to_string()
}
