//! Rate assumptions: carrier base rates by age and the risk multiplier

mod carrier;
mod table;
mod multiplier;
pub mod loader;

pub use carrier::{Carrier, CarrierRates};
pub use table::{RateTable, AGE_EXTRAPOLATION_STEP};
pub use multiplier::{risk_multiplier, body_mass_index, bmi_factor, REFERENCE_COVERAGE};
pub use loader::{load_rate_table, RateTableError};
