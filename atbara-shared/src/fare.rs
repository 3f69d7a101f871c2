use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service tier a train (and its price) belongs to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FareClass {
    #[default]
    Economy,
    Business,
    #[serde(rename = "VIP")]
    Vip,
}

impl FareClass {
    pub const ALL: [FareClass; 3] = [FareClass::Economy, FareClass::Business, FareClass::Vip];

    /// Display label as printed on tickets and train cards
    pub fn label(&self) -> &'static str {
        match self {
            FareClass::Economy => "Economy",
            FareClass::Business => "Business",
            FareClass::Vip => "VIP",
        }
    }

    /// Translation key for the localised label
    pub fn translation_key(&self) -> &'static str {
        match self {
            FareClass::Economy => "economy",
            FareClass::Business => "business",
            FareClass::Vip => "vip",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fare class: {0}")]
pub struct ParseFareClassError(pub String);

impl FromStr for FareClass {
    type Err = ParseFareClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(FareClass::Economy),
            "business" => Ok(FareClass::Business),
            "vip" => Ok(FareClass::Vip),
            other => Err(ParseFareClassError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("economy".parse::<FareClass>().unwrap(), FareClass::Economy);
        assert_eq!("Business".parse::<FareClass>().unwrap(), FareClass::Business);
        assert_eq!("VIP".parse::<FareClass>().unwrap(), FareClass::Vip);
        assert!("first".parse::<FareClass>().is_err());
    }

    #[test]
    fn test_vip_serializes_uppercase() {
        let json = serde_json::to_string(&FareClass::Vip).unwrap();
        assert_eq!(json, "\"VIP\"");
        let back: FareClass = serde_json::from_str("\"Business\"").unwrap();
        assert_eq!(back, FareClass::Business);
    }
}
