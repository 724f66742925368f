//! Carriers quoted by the funnel and their per-carrier rate rows

use serde::{Deserialize, Serialize};

/// The fixed set of carriers used for quote comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "Banner Life")]
    BannerLife,
    #[serde(rename = "Prudential")]
    Prudential,
    #[serde(rename = "Protective")]
    Protective,
    #[serde(rename = "Pacific Life")]
    PacificLife,
}

impl Carrier {
    /// Canonical order; quotes are generated in this order and ties keep it
    pub const ALL: [Carrier; 4] = [
        Carrier::BannerLife,
        Carrier::Prudential,
        Carrier::Protective,
        Carrier::PacificLife,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Carrier::BannerLife => "Banner Life",
            Carrier::Prudential => "Prudential",
            Carrier::Protective => "Protective",
            Carrier::PacificLife => "Pacific Life",
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Monthly rates for every carrier, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRates {
    pub banner_life: u32,
    pub prudential: u32,
    pub protective: u32,
    pub pacific_life: u32,
}

impl CarrierRates {
    pub const fn new(banner_life: u32, prudential: u32, protective: u32, pacific_life: u32) -> Self {
        Self {
            banner_life,
            prudential,
            protective,
            pacific_life,
        }
    }

    pub fn get(&self, carrier: Carrier) -> u32 {
        match carrier {
            Carrier::BannerLife => self.banner_life,
            Carrier::Prudential => self.prudential,
            Carrier::Protective => self.protective,
            Carrier::PacificLife => self.pacific_life,
        }
    }

    /// Apply `f` to every carrier's rate
    pub fn map(&self, f: impl Fn(u32) -> u32) -> Self {
        Self::new(
            f(self.banner_life),
            f(self.prudential),
            f(self.protective),
            f(self.pacific_life),
        )
    }

    /// Iterate in canonical carrier order
    pub fn iter(&self) -> impl Iterator<Item = (Carrier, u32)> + '_ {
        Carrier::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let rates = CarrierRates::new(1, 2, 3, 4);
        let collected: Vec<_> = rates.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Carrier::BannerLife, 1),
                (Carrier::Prudential, 2),
                (Carrier::Protective, 3),
                (Carrier::PacificLife, 4),
            ]
        );
    }

    #[test]
    fn test_carrier_serializes_as_display_name() {
        let json = serde_json::to_string(&Carrier::PacificLife).unwrap();
        assert_eq!(json, "\"Pacific Life\"");
        assert_eq!(Carrier::BannerLife.to_string(), "Banner Life");
    }
}
