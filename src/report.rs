//! Printed summary of an accounting run.

use std::fmt;
use tonyear_core::AccountingResult;

/// Human readable benefit report.
///
/// ```text
/// Method: Lashof (lashof)
/// Time horizon: 100 year(s)
/// Discount rate: 2.0%
/// Delay: 40 year(s)
/// Baseline atmospheric cost: 45.23 ton-years
/// Benefit from 1tCO2 with delay: 10.11 ton-years
/// Number needed: 4.5
/// ```
pub struct BenefitReport<'a>(pub &'a AccountingResult);

impl fmt::Display for BenefitReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let params = &result.parameters;

        writeln!(f, "Method: {} ({})", params.method().label(), params.method())?;
        writeln!(f, "Time horizon: {} year(s)", params.time_horizon())?;
        writeln!(f, "Discount rate: {:.1}%", params.discount_rate() * 100.0)?;
        writeln!(f, "Delay: {} year(s)", params.delay())?;
        writeln!(
            f,
            "Baseline atmospheric cost: {:.2} ton-years",
            result.baseline_atm_impact
        )?;
        writeln!(
            f,
            "Benefit from 1tCO2 with delay: {:.2} ton-years",
            result.benefit
        )?;
        match result.num_for_equivalence {
            Some(n) => writeln!(f, "Number needed: {:.1}", n),
            None => writeln!(f, "Number needed: undefined (zero benefit)"),
        }
    }
}
