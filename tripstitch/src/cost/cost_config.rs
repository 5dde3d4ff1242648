use super::{CostError, RideHailRates};
use crate::model::trip::WalkCarPolicy;
use serde::{Deserialize, Serialize};

/// knobs for pricing and labeling that are run parameters rather than
/// reference tables.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CostConfig {
    pub ride_hail_rates: RideHailRates,
    pub walk_car_policy: WalkCarPolicy,
}

impl TryFrom<&String> for CostConfig {
    type Error = CostError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CostError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| CostError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CostError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| CostError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(CostError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
