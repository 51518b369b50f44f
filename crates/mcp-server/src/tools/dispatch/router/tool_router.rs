use super::super::LensService;
use crate::tools::schemas::generators::ListGeneratorsRequest;
use crate::tools::schemas::package_rules::GetPackageRulesRequest;
use crate::tools::schemas::resources::ListAshResourcesRequest;
use lens_discovery::Action;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};

pub(super) fn build_tool_router() -> ToolRouter<LensService> {
    LensService::tool_router()
}

// Tool descriptions must stay identical to `Action::description`.
#[tool_router]
impl LensService {
    /// Usage rules shipped by the listed packages.
    #[tool(
        description = "Return the usage-rules.md document of each listed package that ships one. Packages without a rules file are omitted."
    )]
    pub async fn get_package_rules(
        &self,
        Parameters(request): Parameters<GetPackageRulesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::action::run_action(self, Action::GetPackageRules, request.into_arguments()).await
    }

    /// Domain resources of the application.
    #[tool(
        description = "List every domain-modeled resource in the current application together with the domain that owns it."
    )]
    pub async fn list_ash_resources(
        &self,
        Parameters(_request): Parameters<ListAshResourcesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::action::run_action(self, Action::ListAshResources, Default::default()).await
    }

    /// Code-generation commands and their docs.
    #[tool(
        description = "List the available code-generation commands (project and dependencies) with their documentation: a string, null when undocumented, or false when documented as empty."
    )]
    pub async fn list_generators(
        &self,
        Parameters(_request): Parameters<ListGeneratorsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::action::run_action(self, Action::ListGenerators, Default::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn router_exposes_every_action_with_its_description() {
        let router = build_tool_router();
        let mut tools: Vec<(String, String)> = router
            .list_all()
            .into_iter()
            .map(|tool| {
                (
                    tool.name.to_string(),
                    tool.description.map(|d| d.to_string()).unwrap_or_default(),
                )
            })
            .collect();
        tools.sort();

        let mut expected: Vec<(String, String)> = Action::ALL
            .iter()
            .map(|action| (action.name().to_string(), action.description().to_string()))
            .collect();
        expected.sort();

        assert_eq!(tools, expected);
    }
}
