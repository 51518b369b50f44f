use crate::action::{Action, ActionError, ActionRequest};
use crate::error::DiscoveryError;
use crate::generators::list_generators;
use crate::project::{DepsDirPaths, ManifestGenerators, ManifestResources, ProjectLayout};
use crate::providers::{
    DependencyPathProvider, DocumentReader, FsDocumentReader, GeneratorRegistry, ResourceRegistry,
};
use crate::resources::list_resources;
use crate::rules::resolve_rules;
use lens_protocol::Record;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Everything the resolvers need from the outside world.
#[derive(Clone)]
pub struct Collaborators {
    pub paths: Arc<dyn DependencyPathProvider>,
    pub reader: Arc<dyn DocumentReader>,
    pub resources: Arc<dyn ResourceRegistry>,
    pub generators: Arc<dyn GeneratorRegistry>,
}

impl Collaborators {
    /// Filesystem-backed collaborators for a project checkout.
    pub fn for_project(layout: &ProjectLayout) -> Self {
        Self {
            paths: Arc::new(DepsDirPaths::new(layout.clone())),
            reader: Arc::new(FsDocumentReader),
            resources: Arc::new(ManifestResources::new(layout.clone())),
            generators: Arc::new(ManifestGenerators::new(layout.clone())),
        }
    }
}

/// Validates named calls and routes them to the matching resolver.
///
/// Stateless apart from its collaborators and an optional pinned application scope,
/// so clones can serve concurrent callers. Without a pinned scope each resource query
/// asks the registry for its current default.
#[derive(Clone)]
pub struct Dispatcher {
    collaborators: Collaborators,
    scope: Option<String>,
}

impl Dispatcher {
    pub fn new(collaborators: Collaborators, scope: Option<String>) -> Self {
        Self {
            collaborators,
            scope,
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn dispatch(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<Vec<Record>, ActionError> {
        let action = Action::from_name(name)
            .ok_or_else(|| ActionError::Validation(format!("unknown action `{name}`")))?;
        self.dispatch_action(action, arguments)
    }

    pub fn dispatch_action(
        &self,
        action: Action,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<Vec<Record>, ActionError> {
        let request = action.validate(arguments)?;
        self.execute(request)
    }

    pub fn execute(&self, request: ActionRequest) -> Result<Vec<Record>, ActionError> {
        let action = request.action();
        let outcome = match request {
            ActionRequest::GetPackageRules { packages } => resolve_rules(
                self.collaborators.paths.as_ref(),
                self.collaborators.reader.as_ref(),
                &packages,
            )
            .map(into_records),
            ActionRequest::ListAshResources => {
                list_resources(self.collaborators.resources.as_ref(), self.scope())
                    .map(into_records)
            }
            ActionRequest::ListGenerators => {
                list_generators(self.collaborators.generators.as_ref()).map(into_records)
            }
        };

        outcome.map_err(|err| execution_error(action, &err))
    }
}

fn into_records<T: Into<Record>>(items: Vec<T>) -> Vec<Record> {
    items.into_iter().map(Into::into).collect()
}

fn execution_error(action: Action, err: &DiscoveryError) -> ActionError {
    let message = err.chain_message();
    log::warn!("{} failed: {message}", action.name());
    ActionError::Execution(message)
}
