// src/report.rs
use chrono::NaiveDate;
use std::fmt;

use crate::models::{ModelInputs, Valuation};

const CHART_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Overvalued,
    Undervalued,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Overvalued => write!(f, "overvalued"),
            Verdict::Undervalued => write!(f, "undervalued"),
        }
    }
}

/// Verdict plus the absolute gap as a percentage of the current price.
/// A tie reports undervalued with a zero gap.
pub fn classify(current_price: f64, adjusted_fair_value: f64) -> (Verdict, f64) {
    let verdict = if current_price > adjusted_fair_value {
        Verdict::Overvalued
    } else {
        Verdict::Undervalued
    };
    let gap_pct = (current_price - adjusted_fair_value).abs() / current_price * 100.0;
    (verdict, gap_pct)
}

/// The multi-line text report printed after a run.
pub fn render_report(as_of: NaiveDate, inputs: &ModelInputs, valuation: &Valuation) -> String {
    let (verdict, gap_pct) = classify(inputs.current_price, valuation.adjusted_fair_value);

    let mut out = String::new();
    out.push_str(&format!(
        "--- Fair Value Model Results as of {} ---\n",
        as_of.format("%Y-%m-%d")
    ));
    out.push_str(&format!("Current S&P 500: {:.2}\n", inputs.current_price));
    out.push_str(&format!(
        "Base Model Fair Value: {:.2}\n",
        valuation.base_fair_value
    ));
    out.push_str(&format!(
        "Adjusted Fair Value: {:.2}\n",
        valuation.adjusted_fair_value
    ));
    out.push_str(&format!(
        "Total Adjustment Applied: {:.2}%\n",
        valuation.total_adjustment_pct
    ));
    out.push_str(&format!("Market is {} by {:.2}%\n", verdict, gap_pct));
    out
}

/// Two-bar terminal chart comparing the actual index level to the model's
/// adjusted fair value. Bars scale to the larger of the two values.
pub fn render_chart(current_price: f64, adjusted_fair_value: f64) -> String {
    let bars = [
        ("Current S&P 500", current_price),
        ("Adjusted Fair Value", adjusted_fair_value),
    ];
    let max = bars.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);

    let mut out = String::from("\nS&P 500 Actual vs Model Fair Value\n");
    for (label, value) in bars {
        let width = if max > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round().max(0.0) as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<19} | {} {:.2}\n",
            label,
            "\u{2588}".repeat(width),
            value
        ));
    }
    out
}
