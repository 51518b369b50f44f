use crate::error::{DiscoveryError, Result};
use crate::providers::{DependencyPathProvider, DocumentReader};
use lens_protocol::{PackageRuleEntry, USAGE_RULES_FILENAME};

/// Collect the usage-rules document of every package that ships one.
///
/// Packages that are unknown, have no `usage-rules.md`, or ship an empty one are
/// left out. A rules file that exists but cannot be read fails the whole call.
/// Output follows input order; duplicates are kept.
pub fn resolve_rules(
    paths: &dyn DependencyPathProvider,
    reader: &dyn DocumentReader,
    packages: &[String],
) -> Result<Vec<PackageRuleEntry>> {
    let mut entries = Vec::with_capacity(packages.len());
    for package in packages {
        if let Some(entry) = resolve_one(paths, reader, package)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

fn resolve_one(
    paths: &dyn DependencyPathProvider,
    reader: &dyn DocumentReader,
    package: &str,
) -> Result<Option<PackageRuleEntry>> {
    let Some(root) = paths.dependency_root(package)? else {
        log::debug!("No dependency root for '{package}'");
        return Ok(None);
    };

    let path = root.join(USAGE_RULES_FILENAME);
    let rules = match reader.read_document(&path) {
        Ok(Some(rules)) => rules,
        Ok(None) => {
            log::debug!("'{package}' ships no {USAGE_RULES_FILENAME}");
            return Ok(None);
        }
        Err(source) => {
            log::warn!("Failed to read {}: {source}", path.display());
            return Err(DiscoveryError::RulesUnreadable {
                package: package.to_string(),
                path,
                source,
            });
        }
    };

    if rules.trim().is_empty() {
        log::debug!("'{package}' ships an empty {USAGE_RULES_FILENAME}");
        return Ok(None);
    }

    match PackageRuleEntry::new(package, rules) {
        Ok(entry) => Ok(Some(entry)),
        Err(source) => Err(DiscoveryError::InvalidEntry {
            registry: "dependency",
            source,
        }),
    }
}
