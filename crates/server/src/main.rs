//! String Analyzer Server binary
//!
//! Reads `PORT` (default 3000) and the `STRINGS__*` settings, loads the
//! collection from the JSON document and serves the `/strings` API.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
