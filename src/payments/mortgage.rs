use super::annuity;

/// monthly payment for a property purchase loan
///
/// `total_amount` and `down_payment` arrive straight from form state and may
/// be absent; a missing (or NaN) amount returns the sentinel `1.0`, which
/// the form layer reads as "not enough input yet", never as a real payment.
/// degenerate inputs return `0.0`. the exact payment is truncated so the
/// borrower is never charged more than the mathematical amount.
pub fn monthly_payment(
    total_amount: Option<f64>,
    down_payment: Option<f64>,
    term_years: f64,
    annual_rate_percent: f64,
) -> f64 {
    let (Some(total), Some(down)) = (total_amount, down_payment) else {
        return 1.0;
    };
    if total.is_nan() || down.is_nan() {
        return 1.0;
    }
    if total <= 0.0 || term_years == 0.0 || annual_rate_percent == 0.0 || down >= total {
        return 0.0;
    }

    let rate = annuity::monthly_rate(annual_rate_percent);
    annuity::annuity_payment(total - down, rate, term_years * 12.0).trunc()
}

/// years to pay off the loan at a fixed monthly payment, truncated to whole
/// years (a conservative "at most this many" estimate)
///
/// missing amounts return the sentinel `1.0` as in [`monthly_payment`]; a
/// non-positive loan amount, payment, or rate returns `0.0`. a payment at
/// or below the loan's pure monthly interest never amortizes and yields NaN.
pub fn payoff_period(
    total_amount: Option<f64>,
    down_payment: Option<f64>,
    monthly_payment: f64,
    annual_rate_percent: f64,
) -> f64 {
    let (Some(total), Some(down)) = (total_amount, down_payment) else {
        return 1.0;
    };
    if total.is_nan() || down.is_nan() {
        return 1.0;
    }

    let loan_amount = total - down;
    if loan_amount <= 0.0 || monthly_payment <= 0.0 || annual_rate_percent <= 0.0 {
        return 0.0;
    }

    let rate = annuity::monthly_rate(annual_rate_percent);
    (annuity::amortization_months(loan_amount, rate, monthly_payment) / 12.0).trunc()
}
