use super::{router, LensService};
use crate::config::ServerConfig;
use crate::tools::catalog;
use lens_discovery::{Collaborators, Dispatcher};
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};

impl LensService {
    pub fn new(config: &ServerConfig) -> Self {
        let collaborators = Collaborators::for_project(&config.layout);
        let dispatcher = Dispatcher::new(collaborators, config.scope.clone());
        match dispatcher.scope() {
            Some(scope) => log::info!("Resource scope pinned to '{scope}'"),
            None => log::info!(
                "Resource scope follows {}",
                config.layout.manifest_path().display()
            ),
        }
        Self::with_dispatcher(dispatcher)
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            tool_router: router::build_tool_router(),
        }
    }

    pub(super) fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[tool_handler]
impl ServerHandler for LensService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
