use super::annuity;

/// monthly annuity payment for an unsecured personal credit
///
/// single-amount loans, no down-payment concept: a zero principal, term, or
/// rate yields `0.0`. the exact payment is rounded up against the borrower,
/// the opposite direction from the mortgage calculator; the pair of rounding
/// policies is a product rule and must never be unified.
pub fn monthly_payment(principal: f64, term_years: f64, annual_rate_percent: f64) -> f64 {
    if principal == 0.0 || term_years == 0.0 || annual_rate_percent == 0.0 {
        return 0.0;
    }

    let rate = annuity::monthly_rate(annual_rate_percent);
    annuity::annuity_payment(principal, rate, term_years * 12.0).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_credit_payment() {
        // 100,000 over 5 years at 8.5%: exact payment is the tabulated
        // 2,051.65, rounded up
        assert_eq!(monthly_payment(100_000.0, 5.0, 8.5), 2052.0);
    }

    #[test]
    fn test_large_credit_payment_range() {
        let payment = monthly_payment(500_000.0, 10.0, 8.5);
        assert!(payment > 6100.0 && payment < 6300.0);
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let low = monthly_payment(200_000.0, 7.0, 5.0);
        let high = monthly_payment(200_000.0, 7.0, 15.0);

        assert!(high > low);
    }

    #[test]
    fn test_fractional_years() {
        // 18-month credit
        let payment = monthly_payment(50_000.0, 1.5, 8.5);
        assert!(payment > 2900.0 && payment < 3100.0);
    }

    #[test]
    fn test_payment_rounds_up_toward_lender() {
        let cases = [
            (75_000.0, 3.0, 7.2),
            (125_000.0, 6.0, 9.8),
            (250_000.0, 8.0, 6.5),
        ];

        for (amount, years, rate) in cases {
            let result = monthly_payment(amount, years, rate);
            let exact =
                annuity::annuity_payment(amount, annuity::monthly_rate(rate), years * 12.0);

            assert_eq!(result, exact.ceil());
            assert!(result >= exact);
        }
    }

    #[test]
    fn test_zero_inputs_return_zero() {
        assert_eq!(monthly_payment(0.0, 5.0, 8.5), 0.0);
        assert_eq!(monthly_payment(100_000.0, 0.0, 8.5), 0.0);
        assert_eq!(monthly_payment(100_000.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_negative_principal_stays_negative() {
        let negative = monthly_payment(-100_000.0, 5.0, 8.5);
        let positive = monthly_payment(100_000.0, 5.0, 8.5);

        assert!(negative < 0.0);
        // ceiling rounds the two magnitudes apart by at most one unit
        assert!((negative + positive).abs() <= 1.0);
    }

    #[test]
    fn test_negative_term_and_rate_stay_finite() {
        assert!(monthly_payment(100_000.0, -5.0, 8.5).is_finite());
        assert!(monthly_payment(100_000.0, 5.0, -8.5).is_finite());
    }

    #[test]
    fn test_tiny_rate_approaches_even_principal_split() {
        let payment = monthly_payment(100_000.0, 5.0, 0.01);
        assert!(payment > 1600.0 && payment < 1700.0);
    }

    #[test]
    fn test_special_float_propagation() {
        assert!(monthly_payment(f64::NAN, 5.0, 8.5).is_nan());
        assert_eq!(monthly_payment(f64::INFINITY, 5.0, 8.5), f64::INFINITY);
    }
}
