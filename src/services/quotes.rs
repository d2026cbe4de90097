// src/services/quotes.rs
use anyhow::{anyhow, Result};
use log::info;
use reqwest::Client;
use serde::Deserialize;

const YAHOO_CHART_BASE: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    symbol: String,
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

/// Client for the Yahoo Finance chart endpoint. One call per quantity,
/// no caching, no retry.
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(YAHOO_CHART_BASE)
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(QuoteClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Most recent daily close for `symbol`, falling back to the meta
    /// regular-market price when the close series has no usable entry.
    pub async fn latest_close(&self, symbol: &str) -> Result<f64> {
        let url = format!(
            "{}/v8/finance/chart/{}?range=1d&interval=1d",
            self.base_url, symbol
        );
        info!("Fetching latest quote for {}", symbol);

        let resp: ChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let result = resp
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| anyhow!("Empty chart result for {}", symbol))?;

        let close = result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.as_ref())
            .and_then(|closes| closes.iter().rev().find_map(|c| *c))
            .or(result.meta.regular_market_price)
            .ok_or_else(|| anyhow!("No close price for {}", symbol))?;

        info!("Latest close for {}: {}", result.meta.symbol, close);
        Ok(close)
    }
}
