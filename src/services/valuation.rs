// src/services/valuation.rs
use log::warn;

use crate::models::{ModelInputs, Valuation};

fn inflation_penalty(inflation_yoy: f64) -> f64 {
    if inflation_yoy > 2.0 {
        -1.5 * (inflation_yoy - 2.0)
    } else {
        0.0
    }
}

fn pmi_penalty(pmi: f64) -> f64 {
    if pmi < 50.0 {
        -0.5 * (50.0 - pmi)
    } else {
        0.0
    }
}

fn vix_adjustment(vix: f64) -> f64 {
    if vix > 20.0 {
        -5.0
    } else if vix < 15.0 {
        2.0
    } else {
        0.0
    }
}

fn credit_spread_adjustment(spread: f64) -> f64 {
    let extra = spread - 0.01;
    if extra > 0.0 {
        -(extra / 0.005) * 2.0
    } else {
        0.0
    }
}

fn sentiment_adjustment(score: f64) -> f64 {
    // Strictly greater than 0.5; the boundary itself counts as bearish.
    if score > 0.5 {
        2.0
    } else {
        -2.0
    }
}

/// Discounted-earnings fair value with five macro adjustments applied.
///
/// Deterministic and side-effect free apart from logging. The denominator
/// `real_yield + equity_risk_premium` is not guarded: a value at or below
/// zero produces a negative or unbounded fair P/E and is passed through,
/// with a warning.
pub fn calculate_fair_value(inputs: &ModelInputs) -> Valuation {
    let real_yield = inputs.risk_free_yield - inputs.inflation_yoy / 100.0;
    let denominator = real_yield + inputs.equity_risk_premium;
    if denominator <= 0.0 {
        warn!(
            "Degenerate fair P/E denominator: real yield {:.4} + risk premium {:.4} <= 0",
            real_yield, inputs.equity_risk_premium
        );
    }
    let fair_pe = 1.0 / denominator;
    let base_fair_value = inputs.forward_eps * fair_pe;

    let total_adjustment_pct = inflation_penalty(inputs.inflation_yoy)
        + pmi_penalty(inputs.pmi)
        + vix_adjustment(inputs.volatility_index)
        + credit_spread_adjustment(inputs.credit_spread_proxy)
        + sentiment_adjustment(inputs.sentiment_score);

    let adjusted_fair_value = base_fair_value * (1.0 + total_adjustment_pct / 100.0);

    Valuation {
        base_fair_value,
        total_adjustment_pct,
        adjusted_fair_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelInputs;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn scenario_inputs() -> ModelInputs {
        ModelInputs {
            current_price: 5000.0,
            forward_eps: 270.0,
            equity_risk_premium: 0.045,
            risk_free_yield: 0.04,
            inflation_yoy: 3.0,
            pmi: 49.0,
            volatility_index: 18.0,
            credit_spread_proxy: 0.015,
            sentiment_score: 0.6,
        }
    }

    #[test]
    fn inflation_penalty_is_zero_at_or_below_target() {
        assert_eq!(inflation_penalty(2.0), 0.0);
        assert_eq!(inflation_penalty(1.5), 0.0);
        assert_eq!(inflation_penalty(-1.0), 0.0);
    }

    #[test]
    fn inflation_penalty_scales_above_target() {
        assert!(approx(inflation_penalty(4.0), -3.0, 1e-12));
        assert!(approx(inflation_penalty(3.0), -1.5, 1e-12));
    }

    #[test]
    fn pmi_penalty_is_zero_at_or_above_fifty() {
        assert_eq!(pmi_penalty(50.0), 0.0);
        assert_eq!(pmi_penalty(55.0), 0.0);
    }

    #[test]
    fn pmi_penalty_scales_below_fifty() {
        assert!(approx(pmi_penalty(48.0), -1.0, 1e-12));
        assert!(approx(pmi_penalty(49.8), -0.1, 1e-9));
    }

    #[test]
    fn vix_adjustment_bands() {
        assert_eq!(vix_adjustment(21.0), -5.0);
        assert_eq!(vix_adjustment(14.0), 2.0);
        assert_eq!(vix_adjustment(17.0), 0.0);
    }

    #[test]
    fn vix_adjustment_boundaries_are_inclusive_of_the_neutral_band() {
        assert_eq!(vix_adjustment(15.0), 0.0);
        assert_eq!(vix_adjustment(20.0), 0.0);
    }

    #[test]
    fn credit_spread_adjustment_threshold() {
        assert_eq!(credit_spread_adjustment(0.01), 0.0);
        assert_eq!(credit_spread_adjustment(0.005), 0.0);
        assert!(approx(credit_spread_adjustment(0.02), -4.0, 1e-9));
    }

    #[test]
    fn sentiment_boundary_is_exclusive() {
        assert_eq!(sentiment_adjustment(0.5), -2.0);
        assert_eq!(sentiment_adjustment(0.51), 2.0);
        assert_eq!(sentiment_adjustment(0.6), 2.0);
    }

    #[test]
    fn end_to_end_scenario() {
        let valuation = calculate_fair_value(&scenario_inputs());
        // real_yield = 0.01, fair P/E = 1/0.055 ~ 18.18, base ~ 4909.09
        assert!(approx(valuation.base_fair_value, 4909.0909, 1e-2));
        // -1.5 (inflation) - 0.5 (PMI) + 0 (VIX) - 2.0 (spread) + 2 (sentiment)
        assert!(approx(valuation.total_adjustment_pct, -2.0, 1e-9));
        assert!(approx(valuation.adjusted_fair_value, 4810.909, 1e-2));
    }

    #[test]
    fn calculator_is_idempotent() {
        let inputs = scenario_inputs();
        let first = calculate_fair_value(&inputs);
        let second = calculate_fair_value(&inputs);
        assert_eq!(first.base_fair_value.to_bits(), second.base_fair_value.to_bits());
        assert_eq!(
            first.total_adjustment_pct.to_bits(),
            second.total_adjustment_pct.to_bits()
        );
        assert_eq!(
            first.adjusted_fair_value.to_bits(),
            second.adjusted_fair_value.to_bits()
        );
    }

    #[test]
    fn degenerate_denominator_passes_through() {
        let mut inputs = scenario_inputs();
        // real yield -0.06 + premium 0.045 < 0: negative fair P/E, not rejected
        inputs.risk_free_yield = 0.02;
        inputs.inflation_yoy = 8.0;
        let valuation = calculate_fair_value(&inputs);
        assert!(valuation.base_fair_value < 0.0);
        assert!(valuation.base_fair_value.is_finite());
    }
}
