use serde::{Deserialize, Serialize};

use crate::payments::mortgage;

/// canonical input bundle for a single mortgage calculation
///
/// amounts mirror the form state: a field is `None` until the borrower
/// fills it in. a well-formed request keeps the down payment strictly
/// below the total; the calculators answer every other shape with their
/// documented sentinels instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub total_amount: Option<f64>,
    pub down_payment: Option<f64>,
    pub term_years: f64,
    pub annual_rate: f64,
}

impl LoanParameters {
    pub fn new(
        total_amount: Option<f64>,
        down_payment: Option<f64>,
        term_years: f64,
        annual_rate: f64,
    ) -> Self {
        Self {
            total_amount,
            down_payment,
            term_years,
            annual_rate,
        }
    }

    /// financed amount, once both sides of the subtraction are known
    pub fn loan_amount(&self) -> Option<f64> {
        match (self.total_amount, self.down_payment) {
            (Some(total), Some(down)) => Some(total - down),
            _ => None,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        matches!(self.loan_amount(), Some(loan) if loan > 0.0)
            && self.term_years > 0.0
            && self.annual_rate > 0.0
    }

    /// monthly payment under the mortgage rounding policy
    pub fn monthly_payment(&self) -> f64 {
        mortgage::monthly_payment(
            self.total_amount,
            self.down_payment,
            self.term_years,
            self.annual_rate,
        )
    }

    /// whole years to pay off the loan at a chosen monthly payment
    pub fn payoff_period(&self, monthly_payment: f64) -> f64 {
        mortgage::payoff_period(
            self.total_amount,
            self.down_payment,
            monthly_payment,
            self.annual_rate,
        )
    }
}
