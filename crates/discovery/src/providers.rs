//! Collaborator seams consumed by the resolvers.
//!
//! The discovery core never touches ambient configuration: every lookup goes through
//! one of these traits, handed to the resolver by its caller.

use crate::error::Result;
use lens_protocol::GeneratorDocs;
use std::io;
use std::path::{Path, PathBuf};

/// Maps a package name to the directory it is installed in.
pub trait DependencyPathProvider: Send + Sync {
    /// `Ok(None)` means the package is unknown to the host, which is not an error.
    fn dependency_root(&self, package: &str) -> Result<Option<PathBuf>>;
}

/// Reads a text document from disk.
pub trait DocumentReader: Send + Sync {
    /// `Ok(None)` when the document does not exist; any other failure is an error.
    fn read_document(&self, path: &Path) -> io::Result<Option<String>>;
}

/// A resource as reported by the resource registry, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredResource {
    pub name: String,
    pub domain: String,
}

/// Source of truth for domain-modeled resources.
pub trait ResourceRegistry: Send + Sync {
    fn resources(&self, scope: &str) -> Result<Vec<RegisteredResource>>;

    /// The application scope the registry currently considers its own.
    fn default_scope(&self) -> Result<String>;
}

/// A generator command as reported by the generator registry, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredGenerator {
    pub command: String,
    pub docs: GeneratorDocs,
}

/// Source of truth for code-generation commands.
pub trait GeneratorRegistry: Send + Sync {
    fn generators(&self) -> Result<Vec<RegisteredGenerator>>;
}

/// [`DocumentReader`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentReader;

impl DocumentReader for FsDocumentReader {
    fn read_document(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
