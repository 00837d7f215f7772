use crate::decimal::Money;

use super::PropertyOwnership;

/// corrects a borrower's down-payment input against the financing policy
///
/// the payment calculators never clamp internally; every correction happens
/// here, before the amounts reach the math, so the formulas stay pure and
/// independently testable.
pub struct DownPaymentValidator;

impl DownPaymentValidator {
    /// largest loan the policy allows against the property
    pub fn max_loan_amount(property_value: Money, status: PropertyOwnership) -> Money {
        Money::from_decimal(property_value.as_decimal() * status.max_ltv().as_decimal())
    }

    /// smallest acceptable down payment for the property
    pub fn min_down_payment(property_value: Money, status: PropertyOwnership) -> Money {
        property_value - Self::max_loan_amount(property_value, status)
    }

    /// clamp an out-of-range input: raised to the policy floor, capped at the
    /// property value (the form slider's upper bound)
    pub fn clamp(property_value: Money, supplied: Money, status: PropertyOwnership) -> Money {
        supplied
            .max(Self::min_down_payment(property_value, status))
            .min(property_value)
    }
}
