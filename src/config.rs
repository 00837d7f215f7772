use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

/// per-product default annual rates, supplied by the hosting application
///
/// the calculators never fall back to a built-in rate: whatever rate the
/// borrower sees must arrive through this configuration or the call itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductRates {
    /// annual mortgage rate offered before the borrower picks one, in percent
    pub mortgage_annual_rate: f64,
    /// annual personal-credit rate offered by default, in percent
    pub credit_annual_rate: f64,
}

impl ProductRates {
    /// create validated configuration
    pub fn new(mortgage_annual_rate: f64, credit_annual_rate: f64) -> Result<Self> {
        let rates = Self {
            mortgage_annual_rate,
            credit_annual_rate,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// the standard product offering: 5.0% mortgage, 8.5% credit
    pub fn standard() -> Self {
        Self {
            mortgage_annual_rate: 5.0,
            credit_annual_rate: 8.5,
        }
    }

    /// reject rates the calculators cannot price
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("mortgage_annual_rate", self.mortgage_annual_rate),
            ("credit_annual_rate", self.credit_annual_rate),
        ];

        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("{name} must be a non-negative finite percentage, got {rate}"),
                });
            }
        }
        Ok(())
    }
}
