//! Animal Type Value Object

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Species accepted by the registry
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalType {
    Cattle,
    Buffalo,
}

impl AnimalType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cattle => "Cattle",
            AnimalType::Buffalo => "Buffalo",
        }
    }
}

impl FromStr for AnimalType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cattle" => Ok(AnimalType::Cattle),
            "Buffalo" => Ok(AnimalType::Buffalo),
            other => Err(RegistryError::Validation(format!(
                "animalType must be Cattle or Buffalo, got '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_roundtrip() {
        assert_eq!("Cattle".parse::<AnimalType>().unwrap(), AnimalType::Cattle);
        assert_eq!(
            "Buffalo".parse::<AnimalType>().unwrap(),
            AnimalType::Buffalo
        );
        assert!("cattle".parse::<AnimalType>().is_err());
        assert!("Goat".parse::<AnimalType>().is_err());

        let json = serde_json::to_string(&AnimalType::Cattle).unwrap();
        assert_eq!(json, "\"Cattle\"");
    }
}
