use crate::error::{DiscoveryError, Result};
use crate::providers::GeneratorRegistry;
use lens_protocol::GeneratorDescriptor;

/// List every generator command the registry reports, docs carried verbatim.
pub fn list_generators(registry: &dyn GeneratorRegistry) -> Result<Vec<GeneratorDescriptor>> {
    registry
        .generators()?
        .into_iter()
        .map(|generator| {
            GeneratorDescriptor::new(generator.command, generator.docs).map_err(|source| {
                DiscoveryError::InvalidEntry {
                    registry: "generator",
                    source,
                }
            })
        })
        .collect()
}
