use crate::manifest::ManifestError;
use lens_protocol::RecordError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("usage rules for '{package}' exist at {} but could not be read", path.display())]
    RulesUnreadable {
        package: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("{registry} registry returned an invalid entry")]
    InvalidEntry {
        registry: &'static str,
        #[source]
        source: RecordError,
    },

    #[error("{registry} registry failed: {message}")]
    Registry {
        registry: &'static str,
        message: String,
    },
}

impl DiscoveryError {
    /// Render the error together with every underlying cause, outermost first.
    pub fn chain_message(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}
