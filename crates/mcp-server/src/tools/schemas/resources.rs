use rmcp::schemars;
use serde::Deserialize;

/// `list_ash_resources` takes no arguments; the scope comes from server configuration.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListAshResourcesRequest {}
