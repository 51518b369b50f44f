//! Filesystem-backed providers for a project checkout.
//!
//! Layout conventions:
//! - `<root>/lens.toml` is the project manifest,
//! - `<root>/deps/<name>` holds installed dependencies,
//! - `<root>/deps/<name>/lens.toml` lets a dependency contribute generators.
//!
//! Nothing here caches: every registry query re-reads the manifests so answers
//! track the live project state.

use crate::error::{DiscoveryError, Result};
use crate::manifest::{ProjectManifest, MANIFEST_FILENAME};
use crate::providers::{
    DependencyPathProvider, GeneratorRegistry, RegisteredGenerator, RegisteredResource,
    ResourceRegistry,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_DEPS_DIR: &str = "deps";

#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    manifest_path: PathBuf,
    deps_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest_path: root.join(MANIFEST_FILENAME),
            deps_dir: root.join(DEFAULT_DEPS_DIR),
            root,
        }
    }

    /// Relative paths are resolved against the project root.
    pub fn with_manifest_path(mut self, path: impl AsRef<Path>) -> Self {
        self.manifest_path = self.root.join(path);
        self
    }

    /// Relative paths are resolved against the project root.
    pub fn with_deps_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.deps_dir = self.root.join(dir);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn deps_dir(&self) -> &Path {
        &self.deps_dir
    }

    pub fn load_manifest(&self) -> Result<Option<ProjectManifest>> {
        Ok(ProjectManifest::load(&self.manifest_path)?)
    }

    /// Application scope used when neither the caller nor a domain names one:
    /// the manifest's `app`, else the project directory name.
    pub fn default_scope(&self) -> Result<String> {
        let manifest_app = self.load_manifest()?.and_then(|manifest| manifest.app);
        Ok(manifest_app.unwrap_or_else(|| self.directory_scope()))
    }

    fn directory_scope(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Package names are single path components made of `[A-Za-z0-9_.-]`.
fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Resolves dependency roots from manifest overrides, then the deps directory.
#[derive(Debug, Clone)]
pub struct DepsDirPaths {
    layout: ProjectLayout,
}

impl DepsDirPaths {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl DependencyPathProvider for DepsDirPaths {
    fn dependency_root(&self, package: &str) -> Result<Option<PathBuf>> {
        if !is_valid_package_name(package) {
            log::debug!("Ignoring invalid package name {package:?}");
            return Ok(None);
        }

        if let Some(manifest) = self.layout.load_manifest()? {
            if let Some(spec) = manifest.dependencies.get(package) {
                let path = self.layout.root.join(&spec.path);
                if path.is_dir() {
                    return Ok(Some(path));
                }
                log::warn!(
                    "Dependency '{package}' points at {} which is not a directory",
                    path.display()
                );
                return Ok(None);
            }
        }

        let candidate = self.layout.deps_dir.join(package);
        Ok(candidate.is_dir().then_some(candidate))
    }
}

/// Resource registry backed by the project manifest's `[[domains]]`.
#[derive(Debug, Clone)]
pub struct ManifestResources {
    layout: ProjectLayout,
}

impl ManifestResources {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl ResourceRegistry for ManifestResources {
    fn resources(&self, scope: &str) -> Result<Vec<RegisteredResource>> {
        let Some(manifest) = self.layout.load_manifest()? else {
            return Ok(Vec::new());
        };
        let default_app = manifest
            .app
            .clone()
            .unwrap_or_else(|| self.layout.directory_scope());

        let mut out = Vec::new();
        for domain in &manifest.domains {
            let app = domain.app.as_deref().unwrap_or(&default_app);
            if app != scope {
                continue;
            }
            out.extend(domain.resources.iter().map(|name| RegisteredResource {
                name: name.clone(),
                domain: domain.name.clone(),
            }));
        }
        Ok(out)
    }

    fn default_scope(&self) -> Result<String> {
        self.layout.default_scope()
    }
}

/// Generator registry: project-declared commands first, then commands declared by
/// dependency manifests in dependency directory order.
#[derive(Debug, Clone)]
pub struct ManifestGenerators {
    layout: ProjectLayout,
}

impl ManifestGenerators {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    fn dependency_manifests(&self) -> Result<Vec<PathBuf>> {
        let deps_dir = &self.layout.deps_dir;
        if !deps_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for entry in WalkDir::new(deps_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| DiscoveryError::Registry {
                registry: "generator",
                message: format!("failed to scan {}: {err}", deps_dir.display()),
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let manifest = entry.path().join(MANIFEST_FILENAME);
            if manifest.is_file() {
                out.push(manifest);
            }
        }
        Ok(out)
    }
}

impl GeneratorRegistry for ManifestGenerators {
    fn generators(&self) -> Result<Vec<RegisteredGenerator>> {
        let mut manifests = Vec::new();
        if let Some(project) = self.layout.load_manifest()? {
            manifests.push(project);
        }
        for path in self.dependency_manifests()? {
            if let Some(manifest) = ProjectManifest::load(&path)? {
                manifests.push(manifest);
            }
        }

        Ok(manifests
            .into_iter()
            .flat_map(|manifest| manifest.generators)
            .map(|spec| RegisteredGenerator {
                command: spec.command,
                docs: spec.docs,
            })
            .collect())
    }
}
