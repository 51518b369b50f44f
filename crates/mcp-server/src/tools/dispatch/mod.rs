//! MCP tool dispatch for Lens
//!
//! Bridges rmcp tool calls onto the discovery [`Dispatcher`].

use lens_discovery::Dispatcher;
use rmcp::handler::server::tool::ToolRouter;

mod router;
mod service;

/// Lens MCP Service
#[derive(Clone)]
pub struct LensService {
    /// Discovery dispatcher (stateless, shared by every call)
    dispatcher: Dispatcher,
    /// Tool router
    tool_router: ToolRouter<Self>,
}
