//! In-memory providers for resolver and dispatcher tests.

use crate::error::{DiscoveryError, Result};
use crate::providers::{
    DependencyPathProvider, DocumentReader, GeneratorRegistry, RegisteredGenerator,
    RegisteredResource, ResourceRegistry,
};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub(crate) struct FakePaths {
    roots: HashMap<String, PathBuf>,
    calls: AtomicUsize,
}

impl FakePaths {
    pub(crate) fn with(mut self, package: &str, root: &str) -> Self {
        self.roots.insert(package.to_string(), PathBuf::from(root));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DependencyPathProvider for FakePaths {
    fn dependency_root(&self, package: &str) -> Result<Option<PathBuf>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.roots.get(package).cloned())
    }
}

#[derive(Default)]
pub(crate) struct FakeReader {
    files: HashMap<PathBuf, std::result::Result<String, io::ErrorKind>>,
    calls: AtomicUsize,
}

impl FakeReader {
    pub(crate) fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), Ok(contents.to_string()));
        self
    }

    pub(crate) fn with_error(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.files.insert(PathBuf::from(path), Err(kind));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentReader for FakeReader {
    fn read_document(&self, path: &Path) -> io::Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.files.get(path) {
            None => Ok(None),
            Some(Ok(text)) => Ok(Some(text.clone())),
            Some(Err(kind)) => Err(io::Error::new(*kind, "simulated read failure")),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeResources {
    by_scope: HashMap<String, Vec<RegisteredResource>>,
    default_scope: String,
    fail: bool,
}

impl FakeResources {
    pub(crate) fn with(mut self, scope: &str, name: &str, domain: &str) -> Self {
        self.by_scope
            .entry(scope.to_string())
            .or_default()
            .push(RegisteredResource {
                name: name.to_string(),
                domain: domain.to_string(),
            });
        self
    }

    pub(crate) fn with_default_scope(mut self, scope: &str) -> Self {
        self.default_scope = scope.to_string();
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check_online(&self) -> Result<()> {
        if self.fail {
            return Err(DiscoveryError::Registry {
                registry: "resource",
                message: "registry offline".to_string(),
            });
        }
        Ok(())
    }
}

impl ResourceRegistry for FakeResources {
    fn resources(&self, scope: &str) -> Result<Vec<RegisteredResource>> {
        self.check_online()?;
        Ok(self.by_scope.get(scope).cloned().unwrap_or_default())
    }

    fn default_scope(&self) -> Result<String> {
        self.check_online()?;
        Ok(self.default_scope.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeGenerators {
    commands: Vec<RegisteredGenerator>,
    fail: bool,
}

impl FakeGenerators {
    pub(crate) fn with(mut self, command: &str, docs: lens_protocol::GeneratorDocs) -> Self {
        self.commands.push(RegisteredGenerator {
            command: command.to_string(),
            docs,
        });
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl GeneratorRegistry for FakeGenerators {
    fn generators(&self) -> Result<Vec<RegisteredGenerator>> {
        if self.fail {
            return Err(DiscoveryError::Registry {
                registry: "generator",
                message: "registry offline".to_string(),
            });
        }
        Ok(self.commands.clone())
    }
}
