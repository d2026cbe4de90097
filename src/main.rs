use anyhow::Result;
use chrono::Utc;
use log::info;

use fair_value_model::{config, report, services};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting fair value run...");

    let api_key = config::load_fred_api_key(config::DEFAULT_CONFIG_PATH)?;

    let inputs = services::snapshot::capture(&api_key).await?;
    let valuation = services::valuation::calculate_fair_value(&inputs);
    info!("Valuation: {}", serde_json::to_string(&valuation)?);

    let as_of = Utc::now().date_naive();
    print!("{}", report::render_report(as_of, &inputs, &valuation));
    print!(
        "{}",
        report::render_chart(inputs.current_price, valuation.adjusted_fair_value)
    );

    Ok(())
}
