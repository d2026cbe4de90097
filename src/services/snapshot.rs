// src/services/snapshot.rs
use anyhow::Result;
use chrono::{Duration, Utc};
use log::info;

use crate::models::ModelInputs;

use super::fred::FredClient;
use super::quotes::QuoteClient;

pub const SP500_SYMBOL: &str = "^GSPC";
pub const TEN_YEAR_YIELD_SYMBOL: &str = "^TNX";
pub const THIRTEEN_WEEK_YIELD_SYMBOL: &str = "^IRX";
pub const VIX_SYMBOL: &str = "^VIX";
pub const CPI_SERIES: &str = "CPIAUCSL";

// Inputs not yet wired to a live source.
const FORWARD_EPS: f64 = 270.0;
const EQUITY_RISK_PREMIUM: f64 = 0.045;
const PMI: f64 = 49.8;
const SENTIMENT_SCORE: f64 = 0.6;

/// Pull the full set of model inputs for the current moment.
///
/// Calls run strictly in sequence; the first failure aborts the run with
/// no fallback to cached or default values.
pub async fn capture(fred_api_key: &str) -> Result<ModelInputs> {
    let quotes = QuoteClient::new()?;
    let fred = FredClient::new(fred_api_key);

    let current_price = quotes.latest_close(SP500_SYMBOL).await?;
    let ten_year_level = quotes.latest_close(TEN_YEAR_YIELD_SYMBOL).await?;
    let thirteen_week_level = quotes.latest_close(THIRTEEN_WEEK_YIELD_SYMBOL).await?;
    let volatility_index = quotes.latest_close(VIX_SYMBOL).await?;

    let one_year_ago = (Utc::now() - Duration::days(365)).date_naive();
    let inflation_yoy = fred.year_over_year_pct(CPI_SERIES, one_year_ago).await?;

    // The yield symbols quote in percentage points; the model wants fractions.
    let risk_free_yield = ten_year_level / 100.0;
    let credit_spread_proxy = (ten_year_level - thirteen_week_level) / 100.0;

    let inputs = ModelInputs {
        current_price,
        forward_eps: FORWARD_EPS,
        equity_risk_premium: EQUITY_RISK_PREMIUM,
        risk_free_yield,
        inflation_yoy,
        pmi: PMI,
        volatility_index,
        credit_spread_proxy,
        sentiment_score: SENTIMENT_SCORE,
    };
    info!("Captured model inputs: {}", serde_json::to_string(&inputs)?);
    Ok(inputs)
}
