use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::EngineError;

/// borrower's property-ownership status, as reported by the application form
///
/// each status carries a regulatory financing ceiling; this enum is the
/// single authoritative source of that mapping, so every call site agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyOwnership {
    /// first purchase, no existing property
    NoProperty,
    /// owns an existing property and keeps it
    HasProperty,
    /// owns an existing property and is selling it
    SellingProperty,
}

impl PropertyOwnership {
    /// maximum share of the property value the bank will finance
    pub fn max_ltv(&self) -> Rate {
        match self {
            PropertyOwnership::NoProperty => Rate::from_percentage(75),
            PropertyOwnership::HasProperty => Rate::from_percentage(50),
            PropertyOwnership::SellingProperty => Rate::from_percentage(70),
        }
    }

    /// minimum down-payment share, the complement of the financing ceiling
    pub fn min_down_ratio(&self) -> Rate {
        self.max_ltv().complement()
    }

    /// form-layer wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyOwnership::NoProperty => "no_property",
            PropertyOwnership::HasProperty => "has_property",
            PropertyOwnership::SellingProperty => "selling_property",
        }
    }
}

impl FromStr for PropertyOwnership {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_property" => Ok(PropertyOwnership::NoProperty),
            "has_property" => Ok(PropertyOwnership::HasProperty),
            "selling_property" => Ok(PropertyOwnership::SellingProperty),
            other => Err(EngineError::UnknownOwnership {
                value: other.to_string(),
            }),
        }
    }
}
