/// projected total payoff for a remaining mortgage balance
///
/// simple interest, not an amortization schedule: the figure answers "what
/// would i still pay in total", the linear projection used when comparing
/// refinancing offers. a missing balance and any non-positive input clamp
/// to `0.0` (unlike the credit calculator, which passes negative principals
/// through; the two sign policies are specified per product). truncated to
/// whole currency units.
pub fn remaining_total(
    remaining_balance: Option<f64>,
    years_remaining: f64,
    annual_rate_percent: f64,
) -> f64 {
    let Some(balance) = remaining_balance else {
        return 0.0;
    };
    if balance <= 0.0 || years_remaining <= 0.0 || annual_rate_percent <= 0.0 {
        return 0.0;
    }

    (balance * (1.0 + (annual_rate_percent * years_remaining) / 100.0)).trunc()
}
