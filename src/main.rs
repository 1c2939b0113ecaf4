use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use openslot_api::{ApiState, config::ApiConfig};
use openslot_core::calendar::FixedDailyBlock;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // The busy calendar is a fixed lunch block until a real provider exists
    let state = Arc::new(ApiState::new(Arc::new(FixedDailyBlock::default())));

    // Start API server
    openslot_api::start_server(config, state).await?;

    Ok(())
}
