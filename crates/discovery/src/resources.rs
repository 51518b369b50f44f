use crate::error::{DiscoveryError, Result};
use crate::providers::ResourceRegistry;
use lens_protocol::ResourceDescriptor;

/// List every resource the registry knows under `scope`, in registry order.
///
/// Without an explicit scope the registry's current default is used, resolved on
/// every call.
pub fn list_resources(
    registry: &dyn ResourceRegistry,
    scope: Option<&str>,
) -> Result<Vec<ResourceDescriptor>> {
    let scope = match scope {
        Some(scope) => scope.to_string(),
        None => registry.default_scope()?,
    };
    registry
        .resources(&scope)?
        .into_iter()
        .map(|resource| {
            ResourceDescriptor::new(resource.name, resource.domain).map_err(|source| {
                DiscoveryError::InvalidEntry {
                    registry: "resource",
                    source,
                }
            })
        })
        .collect()
}
