//! Behavioural tests for the ton-year accounting engine.
//!
//! These tests run the methods against impulse-response baselines and check:
//! - Input validation and error reporting
//! - Known closed-form benefits
//! - Monotonic behaviour with respect to delay and discounting
//! - Serialization of results

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tonyear_core::utils::integrate::trapezoid;
use tonyear_core::{
    compute, compute_with, discount, generate_irf, AccountingMethod, AccountingParameters,
    AccountingResult, FloatValue, IrfCurve, TonYearError,
};

fn joos_baseline() -> Vec<FloatValue> {
    generate_irf("joos_2013").unwrap().into_trajectory()
}

mod validation {
    use super::*;

    #[test]
    fn test_unknown_method() {
        let err = compute("bogus", &[0.0; 10], 5, 0, 0.0).unwrap_err();
        assert!(matches!(err, TonYearError::InvalidArgument { .. }));
        assert_eq!(err.parameter(), "method");
    }

    #[test]
    fn test_baseline_too_short() {
        let err = compute("mc", &[0.0; 3], 5, 0, 0.0).unwrap_err();
        assert!(matches!(err, TonYearError::InvalidArgument { .. }));
        assert_eq!(err.parameter(), "baseline");
    }

    #[test]
    fn test_negative_delay() {
        let err = compute("mc", &[0.0; 10], 5, -1, 0.0).unwrap_err();
        assert!(matches!(err, TonYearError::InvalidArgument { .. }));
        assert_eq!(err.parameter(), "delay");
    }

    /// The baseline has to include the horizon year itself.
    #[test]
    fn test_baseline_must_include_horizon_year() {
        assert!(compute("lashof", &[1.0; 5], 5, 1, 0.0).is_err());
        assert!(compute("lashof", &[1.0; 6], 5, 1, 0.0).is_ok());
    }
}

mod closed_form {
    use super::*;

    /// Storing one unit for `d` years with no discounting is worth `d` ton-years.
    #[test]
    fn test_mc_undiscounted_benefit_equals_delay() {
        let baseline = joos_baseline();
        for delay in [1, 10, 40, 100] {
            let result = compute("mc", &baseline, 100, delay, 0.0).unwrap();
            assert_abs_diff_eq!(result.benefit, delay as FloatValue, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mc_discounted_benefit() {
        let rate = 0.03;
        let result = compute("mc", &joos_baseline(), 100, 3, rate).unwrap();
        let held: Vec<FloatValue> = (0..4).map(|i| 1.0 / (1.0 + rate).powi(i)).collect();
        assert_relative_eq!(result.benefit, trapezoid(&held), max_relative = 1e-12);
    }

    #[test]
    fn test_ipcc_zero_delay_has_no_benefit() {
        let result = compute("ipcc", &joos_baseline(), 100, 0, 0.0).unwrap();
        assert_eq!(result.scenario, joos_baseline()[..101].to_vec());
        assert_eq!(result.benefit, 0.0);
        assert!(result.num_for_equivalence.is_none());
    }

    /// Integral of a linear baseline over the tail past the horizon.
    #[test]
    fn test_lashof_branches_on_linear_baseline() {
        let baseline: Vec<FloatValue> = (1..=10).map(|t| t as FloatValue).collect();

        // scenario = [0, 0, 0, 1, 2, 3, 4, 5, 6]; integrate [3, 4, 5, 6] from index 5
        let result = compute("lashof", &baseline, 5, 3, 0.0).unwrap();
        assert_abs_diff_eq!(result.benefit, 3.5 + 4.5 + 5.5, epsilon = 1e-12);

        // scenario = [0, 0, 0, 0, 0, 1, 2, 3, 4]; integrate from the delay, index 5
        let result = compute("lashof", &baseline, 3, 5, 0.0).unwrap();
        assert_abs_diff_eq!(result.benefit, 1.5 + 2.5 + 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_equivalence_ratio() {
        let result = compute("lashof", &joos_baseline(), 100, 40, 0.0).unwrap();
        let ratio = result.num_for_equivalence.unwrap();
        assert_relative_eq!(
            ratio,
            result.baseline_atm_impact / result.benefit,
            max_relative = 1e-15
        );
    }
}

mod behaviour {
    use super::*;

    #[test]
    fn test_baseline_impact_matches_discounted_irf() {
        let baseline = joos_baseline();
        for rate in [0.0, 0.01, 0.05] {
            let result = compute("ipcc", &baseline, 100, 20, rate).unwrap();
            let expected = trapezoid(&discount(rate, &baseline[..101]));
            assert_relative_eq!(result.baseline_atm_impact, expected, max_relative = 1e-12);
        }
    }

    /// Longer storage never lowers the benefit.
    #[test]
    fn test_benefit_grows_with_delay() {
        let baseline = joos_baseline();
        for method in AccountingMethod::ALL {
            let mut previous = -1.0;
            for delay in [1, 5, 20, 50, 100] {
                let params = AccountingParameters::new(method, 100, delay, 0.0).unwrap();
                let result = compute_with(&params, &baseline).unwrap();
                assert!(
                    result.benefit >= previous,
                    "{} benefit fell from {} to {} at delay {}",
                    method,
                    previous,
                    result.benefit,
                    delay
                );
                previous = result.benefit;
            }
        }
    }

    /// Discounting shrinks the baseline impact, so fewer stored units are needed.
    #[test]
    fn test_discounting_reduces_baseline_impact() {
        let baseline = joos_baseline();
        let undiscounted = compute("mc", &baseline, 100, 40, 0.0).unwrap();
        let discounted = compute("mc", &baseline, 100, 40, 0.02).unwrap();
        assert!(discounted.baseline_atm_impact < undiscounted.baseline_atm_impact);
        assert!(discounted.benefit < undiscounted.benefit);
    }

    #[test]
    fn test_every_curve_gives_finite_results() {
        for curve in IrfCurve::ALL {
            let baseline = curve.generate().into_trajectory();
            for method in AccountingMethod::ALL {
                let result = compute(method.id(), &baseline, 100, 30, 0.01).unwrap();
                assert!(result.baseline_atm_impact.is_finite());
                assert!(result.benefit.is_finite());
                assert!(result.num_for_equivalence.unwrap().is_finite());
            }
        }
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = compute("lashof", &joos_baseline(), 100, 40, 0.03).unwrap();
        let json = serde_json::to_string(&result).expect("Serialization failed");
        let parsed: AccountingResult = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(parsed.parameters, result.parameters);
        assert_eq!(parsed.baseline.len(), result.baseline.len());
        for (a, b) in parsed.scenario.iter().zip(&result.scenario) {
            assert_relative_eq!(*a, *b, max_relative = 1e-15);
        }
        assert_relative_eq!(parsed.benefit, result.benefit, max_relative = 1e-15);
        assert_relative_eq!(
            parsed.baseline_atm_impact,
            result.baseline_atm_impact,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_undefined_ratio_serializes_as_null() {
        let result = compute("mc", &[1.0; 10], 5, 0, 0.0).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["num_for_equivalence"].is_null());
        assert_eq!(value["parameters"]["method"], "mc");
    }
}
