//! Drinkdex
//!
//! An MCP server for drink recipe ingredient normalization.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use drinkdex::build_info;
use drinkdex::config::Config;
use drinkdex::mcp::DrinkdexService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so MCP stdio stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("drinkdex=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!(
        "Serving bounds {}-{}, default preset '{}'",
        config.serving_bounds.min(),
        config.serving_bounds.max(),
        config.default_preset
    );

    eprintln!("Starting MCP server on stdio...");
    let service = DrinkdexService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
