//! Lens MCP Server
//!
//! Lets AI coding assistants discover facts about the project they are working in.
//!
//! ## Tools
//!
//! - `get_package_rules` - Usage-rules documents shipped by dependencies
//! - `list_ash_resources` - Domain resources of the application and their domains
//! - `list_generators` - Available code-generation commands and their docs
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "lens": {
//!       "command": "lens-mcp",
//!       "env": { "LENS_ROOT": "/path/to/project" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod config;
mod tools;

use config::ServerConfig;
use tools::LensService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if std::env::args().skip(1).any(|arg| arg == "--print-tools") {
        let inventory = tools::catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    let config = ServerConfig::from_env()?;
    log::info!(
        "Starting Lens MCP server for {}",
        config.layout.root().display()
    );

    let service = LensService::new(&config);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Lens MCP server stopped");
    Ok(())
}
