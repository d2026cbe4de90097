// src/bin/test_quotes.rs
use fair_value_model::services::quotes::QuoteClient;
use fair_value_model::services::snapshot::{
    SP500_SYMBOL, TEN_YEAR_YIELD_SYMBOL, THIRTEEN_WEEK_YIELD_SYMBOL, VIX_SYMBOL,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let quotes = QuoteClient::new()?;
    println!("S&P 500:      {:?}", quotes.latest_close(SP500_SYMBOL).await?);
    println!("10y yield:    {:?}", quotes.latest_close(TEN_YEAR_YIELD_SYMBOL).await?);
    println!("13w yield:    {:?}", quotes.latest_close(THIRTEEN_WEEK_YIELD_SYMBOL).await?);
    println!("VIX:          {:?}", quotes.latest_close(VIX_SYMBOL).await?);
    Ok(())
}
