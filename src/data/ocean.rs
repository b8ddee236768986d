use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::InputError;

/// Ocean proximity category, spelled exactly as in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OceanProximity {
    #[serde(rename = "<1H OCEAN")]
    LessThanOneHour,
    #[serde(rename = "INLAND")]
    Inland,
    #[serde(rename = "ISLAND")]
    Island,
    #[serde(rename = "NEAR BAY")]
    NearBay,
    #[serde(rename = "NEAR OCEAN")]
    NearOcean,
}

impl OceanProximity {
    pub const ALL: [OceanProximity; 5] = [
        OceanProximity::LessThanOneHour,
        OceanProximity::Inland,
        OceanProximity::Island,
        OceanProximity::NearBay,
        OceanProximity::NearOcean,
    ];

    /// Label used in datasets and model inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            OceanProximity::LessThanOneHour => "<1H OCEAN",
            OceanProximity::Inland => "INLAND",
            OceanProximity::Island => "ISLAND",
            OceanProximity::NearBay => "NEAR BAY",
            OceanProximity::NearOcean => "NEAR OCEAN",
        }
    }
}

impl fmt::Display for OceanProximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OceanProximity {
    type Err = InputError;

    /// Case-insensitive; `_` and `-` are accepted in place of spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['_', '-'], " ");
        OceanProximity::ALL.into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| InputError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_labels() {
        for p in OceanProximity::ALL {
            assert_eq!(p.as_str().parse::<OceanProximity>().unwrap(), p);
        }
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("near_bay".parse::<OceanProximity>().unwrap(), OceanProximity::NearBay);
        assert_eq!(" inland ".parse::<OceanProximity>().unwrap(), OceanProximity::Inland);
        assert_eq!("<1h-ocean".parse::<OceanProximity>().unwrap(), OceanProximity::LessThanOneHour);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            "DESERT".parse::<OceanProximity>(),
            Err(InputError::UnknownCategory("DESERT".into())),
        );
    }

    #[test]
    fn serde_uses_dataset_labels() {
        assert_eq!(serde_json::to_string(&OceanProximity::NearOcean).unwrap(), "\"NEAR OCEAN\"");
    }
}
