//! `lens.toml` project manifest.
//!
//! The manifest is the project-side registry: it names the application scope, pins
//! explicit dependency roots, and declares domains with their resources plus the
//! project's generator commands. Dependencies may ship their own manifest to
//! contribute generators.

use lens_protocol::GeneratorDocs;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILENAME: &str = "lens.toml";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest {}: resource '{resource}' is declared twice in domain '{domain}'", path.display())]
    DuplicateResource {
        path: PathBuf,
        domain: String,
        resource: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    /// Application scope the project's domains belong to.
    pub app: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencySpec>,
    #[serde(default)]
    pub domains: Vec<DomainSpec>,
    #[serde(default)]
    pub generators: Vec<GeneratorSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencySpec {
    /// Relative paths are resolved against the project root.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainSpec {
    pub name: String,
    /// Defaults to the manifest's top-level `app`.
    pub app: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSpec {
    pub command: String,
    #[serde(default = "undocumented")]
    pub docs: GeneratorDocs,
}

fn undocumented() -> GeneratorDocs {
    GeneratorDocs::Undocumented
}

impl ProjectManifest {
    /// Load and validate a manifest. A missing file yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ManifestError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ManifestError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let manifest = Self::parse(&raw, path)?;
        Ok(Some(manifest))
    }

    pub fn parse(raw: &str, path: &Path) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.validate(path)?;
        Ok(manifest)
    }

    /// A `(domain, resource)` pair may be declared once across all domain tables.
    fn validate(&self, path: &Path) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for domain in &self.domains {
            for resource in &domain.resources {
                if !seen.insert((domain.name.as_str(), resource.as_str())) {
                    return Err(ManifestError::DuplicateResource {
                        path: path.to_path_buf(),
                        domain: domain.name.clone(),
                        resource: resource.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
