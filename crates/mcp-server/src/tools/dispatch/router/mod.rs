// Per-tool dispatch used by the MCP tool router.

pub(super) mod action;
pub(super) mod error;
mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::LensService> {
    tool_router::build_tool_router()
}
