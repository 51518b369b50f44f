//! Discovery core for lens.
//!
//! Three resolvers answer questions about a running project (which packages ship
//! usage rules, which domain resources exist, which generator commands are
//! available) and a [`Dispatcher`] exposes them as named, schema-checked actions.
//! Every resolver talks to the outside world only through the provider traits in
//! [`providers`], so the core can be driven by fakes in tests.

pub mod action;
pub mod dispatcher;
pub mod error;
pub mod generators;
pub mod manifest;
pub mod project;
pub mod providers;
pub mod resources;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::{Action, ActionError, ActionErrorKind, ActionRequest, ArgKind, ArgSpec};
pub use dispatcher::{Collaborators, Dispatcher};
pub use error::{DiscoveryError, Result};
pub use generators::list_generators;
pub use manifest::{ManifestError, ProjectManifest, MANIFEST_FILENAME};
pub use project::{DepsDirPaths, ManifestGenerators, ManifestResources, ProjectLayout};
pub use providers::{
    DependencyPathProvider, DocumentReader, FsDocumentReader, GeneratorRegistry,
    RegisteredGenerator, RegisteredResource, ResourceRegistry,
};
pub use resources::list_resources;
pub use rules::resolve_rules;

pub use lens_protocol::{
    GeneratorDescriptor, GeneratorDocs, PackageRuleEntry, Record, ResourceDescriptor,
    USAGE_RULES_FILENAME,
};
