use anyhow::Result;
use tracing::info;

use relief_console::{config, logging, report, session};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting Relief Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let state = session::build_state(&config)?;
    let dashboard = report::build_report(&state);

    if config.json_output() {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", report::render_text(&dashboard));
    }

    Ok(())
}
