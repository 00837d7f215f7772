//! shared amortizing-loan formulas
//!
//! both payment calculators and the period solver price the same annuity;
//! rounding direction and degenerate-input policy stay with the callers.

/// annual percentage rate to monthly fractional rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// fixed monthly payment retiring `principal` over `months` periods
///
/// PMT = P * r(1+r)^n / ((1+r)^n - 1), or P / n for a zero rate.
/// callers guard zero principal and zero term before reaching the formula.
pub fn annuity_payment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / months;
    }
    let growth = (1.0 + monthly_rate).powf(months);
    (principal * monthly_rate * growth) / (growth - 1.0)
}

/// months needed to retire `principal` with a fixed `payment`
///
/// n = ln(PMT / (PMT - P*r)) / ln(1 + r). a payment at or below the pure
/// monthly interest P*r can never amortize; that case returns NaN rather
/// than a misleadingly finite number.
pub fn amortization_months(principal: f64, monthly_rate: f64, payment: f64) -> f64 {
    let interest = principal * monthly_rate;
    if payment <= interest {
        return f64::NAN;
    }
    (payment / (payment - interest)).ln() / (1.0 + monthly_rate).ln()
}
