// src/services/fred.rs
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::info;
use reqwest::Client;
use serde::Deserialize;

const FRED_API_BASE: &str = "https://api.stlouisfed.org";

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

// FRED returns values as strings, with "." marking a missing observation.
#[derive(Debug, Deserialize)]
struct RawObservation {
    date: NaiveDate,
    value: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Client for the FRED series-observations endpoint.
pub struct FredClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, FRED_API_BASE)
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        FredClient {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Observations for `series_id` from `start` through today, oldest
    /// first. Missing-value placeholders are dropped; an empty series is
    /// an error.
    pub async fn observations(&self, series_id: &str, start: NaiveDate) -> Result<Vec<Observation>> {
        let url = format!(
            "{}/fred/series/observations?series_id={}&api_key={}&file_type=json&observation_start={}",
            self.base_url, series_id, self.api_key, start
        );
        info!("Fetching FRED series {} from {}", series_id, start);

        let resp: ObservationsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut observations = Vec::with_capacity(resp.observations.len());
        for raw in resp.observations {
            if raw.value == "." {
                continue;
            }
            let value = raw.value.parse::<f64>().map_err(|e| {
                anyhow!(
                    "Bad value '{}' for {} on {}: {}",
                    raw.value,
                    series_id,
                    raw.date,
                    e
                )
            })?;
            observations.push(Observation {
                date: raw.date,
                value,
            });
        }

        if observations.is_empty() {
            return Err(anyhow!("No observations returned for {}", series_id));
        }
        Ok(observations)
    }

    /// Year-over-year percentage change: latest observation against the
    /// first one in the window.
    pub async fn year_over_year_pct(&self, series_id: &str, start: NaiveDate) -> Result<f64> {
        let observations = self.observations(series_id, start).await?;
        let (first, last) = match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(anyhow!("No observations returned for {}", series_id)),
        };
        if first.value == 0.0 {
            return Err(anyhow!(
                "Zero base value for {} on {}",
                series_id,
                first.date
            ));
        }

        let pct = ((last.value - first.value) / first.value) * 100.0;
        info!(
            "{} year-over-year change: {:.2}% ({} on {} -> {} on {})",
            series_id, pct, first.value, first.date, last.value, last.date
        );
        Ok(pct)
    }
}
