use rmcp::schemars;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPackageRulesRequest {
    /// Package names to look up (required; may be empty).
    #[schemars(
        description = "Names of the project's dependencies to fetch usage rules for. Required; pass [] for none."
    )]
    pub packages: Option<Vec<String>>,
}

impl GetPackageRulesRequest {
    /// Arguments in the shape the dispatcher validates. An absent `packages` stays absent.
    pub fn into_arguments(self) -> Map<String, Value> {
        let mut arguments = Map::new();
        if let Some(packages) = self.packages {
            arguments.insert(
                "packages".to_string(),
                Value::Array(packages.into_iter().map(Value::String).collect()),
            );
        }
        arguments
    }
}
