// src/bin/test_fred.rs
use chrono::{Duration, Utc};
use fair_value_model::config;
use fair_value_model::services::fred::FredClient;
use fair_value_model::services::snapshot::CPI_SERIES;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let api_key = config::load_fred_api_key(config::DEFAULT_CONFIG_PATH)?;
    let fred = FredClient::new(api_key);

    let start = (Utc::now() - Duration::days(365)).date_naive();
    let observations = fred.observations(CPI_SERIES, start).await?;
    println!("{} observations: {}", CPI_SERIES, observations.len());
    println!(
        "Year-over-year: {:.2}%",
        fred.year_over_year_pct(CPI_SERIES, start).await?
    );
    Ok(())
}
