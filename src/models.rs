// src/models.rs
use serde::Serialize;

/// Every input the valuation formula consumes, captured once per run.
///
/// The calculator takes this record as-is and never knows whether a field
/// was fetched from a provider or is a manual constant.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInputs {
    /// Latest S&P 500 index level.
    pub current_price: f64,
    /// Analyst forward earnings-per-share estimate (manual constant).
    pub forward_eps: f64,
    /// Assumed equity risk premium, as a fraction (manual constant).
    pub equity_risk_premium: f64,
    /// Latest 10-year treasury yield, as a fraction.
    pub risk_free_yield: f64,
    /// Trailing year-over-year CPI inflation, in percentage points.
    pub inflation_yoy: f64,
    /// Manufacturing PMI reading (manual constant).
    pub pmi: f64,
    /// Latest VIX close.
    pub volatility_index: f64,
    /// 10-year minus 13-week treasury yield, as a fraction.
    pub credit_spread_proxy: f64,
    /// Composite sentiment score (manual constant).
    pub sentiment_score: f64,
}

/// Output of the valuation calculator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Valuation {
    pub base_fair_value: f64,
    pub total_adjustment_pct: f64,
    pub adjusted_fair_value: f64,
}
