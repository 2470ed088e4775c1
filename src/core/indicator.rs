//! Economic indicators and their fixed weights

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    InterestRate,
    Cpi,
    UnemploymentRate,
    GdpGrowth,
    Ppi,
    ServicesPmi,
    ManufacturingPmi,
}

impl Indicator {
    pub const ALL: [Indicator; 7] = [
        Indicator::InterestRate,
        Indicator::Cpi,
        Indicator::UnemploymentRate,
        Indicator::GdpGrowth,
        Indicator::Ppi,
        Indicator::ServicesPmi,
        Indicator::ManufacturingPmi,
    ];

    /// Weight in percent points. All weights sum to 100.
    pub fn weight(&self) -> u32 {
        match self {
            Indicator::InterestRate => 30,
            Indicator::Cpi => 25,
            Indicator::UnemploymentRate => 15,
            Indicator::GdpGrowth => 10,
            Indicator::Ppi => 7,
            Indicator::ServicesPmi => 7,
            Indicator::ManufacturingPmi => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Indicator::InterestRate => "Interest Rate Decisions",
            Indicator::Cpi => "Consumer Price Index (CPI)",
            Indicator::UnemploymentRate => "Unemployment Rate",
            Indicator::GdpGrowth => "GDP Growth",
            Indicator::Ppi => "Producer Price Index (PPI)",
            Indicator::ServicesPmi => "Services PMI",
            Indicator::ManufacturingPmi => "Manufacturing PMI",
        }
    }
}

impl Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
