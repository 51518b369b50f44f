//! Wire records shared by the discovery core and the MCP server.
//!
//! Every record is validated when it is constructed, so a value that exists is
//! well-formed. Deserialization goes through the same constructors.

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filename every package uses for its usage-guidance document.
pub const USAGE_RULES_FILENAME: &str = "usage-rules.md";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{record}.{field} must not be empty")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
}

fn require_non_empty(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::EmptyField { record, field });
    }
    Ok(())
}

/// Full text of one package's usage-rules document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPackageRuleEntry")]
pub struct PackageRuleEntry {
    package: String,
    rules: String,
}

#[derive(Deserialize)]
struct RawPackageRuleEntry {
    package: String,
    rules: String,
}

impl TryFrom<RawPackageRuleEntry> for PackageRuleEntry {
    type Error = RecordError;

    fn try_from(raw: RawPackageRuleEntry) -> Result<Self, Self::Error> {
        Self::new(raw.package, raw.rules)
    }
}

impl PackageRuleEntry {
    pub fn new(package: impl Into<String>, rules: impl Into<String>) -> Result<Self, RecordError> {
        let package = package.into();
        let rules = rules.into();
        require_non_empty("PackageRuleEntry", "package", &package)?;
        require_non_empty("PackageRuleEntry", "rules", &rules)?;
        Ok(Self { package, rules })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn rules(&self) -> &str {
        &self.rules
    }
}

/// One domain-modeled resource and the domain that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResourceDescriptor")]
pub struct ResourceDescriptor {
    name: String,
    domain: String,
}

#[derive(Deserialize)]
struct RawResourceDescriptor {
    name: String,
    domain: String,
}

impl TryFrom<RawResourceDescriptor> for ResourceDescriptor {
    type Error = RecordError;

    fn try_from(raw: RawResourceDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.domain)
    }
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Result<Self, RecordError> {
        let name = name.into();
        let domain = domain.into();
        require_non_empty("ResourceDescriptor", "name", &name)?;
        require_non_empty("ResourceDescriptor", "domain", &domain)?;
        Ok(Self { name, domain })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

/// Documentation attached to a generator command.
///
/// On the wire: `Documented` is a JSON string, `Undocumented` is `null` and
/// `ExplicitlyEmpty` is `false`. Values are carried verbatim; an empty
/// `Documented` string is still `Documented`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorDocs {
    Documented(String),
    Undocumented,
    ExplicitlyEmpty,
}

impl Serialize for GeneratorDocs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Documented(text) => serializer.serialize_str(text),
            Self::Undocumented => serializer.serialize_none(),
            Self::ExplicitlyEmpty => serializer.serialize_bool(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocs {
    Text(String),
    Flag(bool),
}

impl<'de> Deserialize<'de> for GeneratorDocs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawDocs>::deserialize(deserializer)? {
            None => Ok(Self::Undocumented),
            Some(RawDocs::Text(text)) => Ok(Self::Documented(text)),
            Some(RawDocs::Flag(false)) => Ok(Self::ExplicitlyEmpty),
            Some(RawDocs::Flag(true)) => Err(de::Error::custom(
                "docs must be a string, false, or absent (got true)",
            )),
        }
    }
}

/// One invocable code-generation command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneratorDescriptor")]
pub struct GeneratorDescriptor {
    command: String,
    docs: GeneratorDocs,
}

#[derive(Deserialize)]
struct RawGeneratorDescriptor {
    command: String,
    #[serde(default = "undocumented")]
    docs: GeneratorDocs,
}

fn undocumented() -> GeneratorDocs {
    GeneratorDocs::Undocumented
}

impl TryFrom<RawGeneratorDescriptor> for GeneratorDescriptor {
    type Error = RecordError;

    fn try_from(raw: RawGeneratorDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.command, raw.docs)
    }
}

impl GeneratorDescriptor {
    pub fn new(command: impl Into<String>, docs: GeneratorDocs) -> Result<Self, RecordError> {
        let command = command.into();
        require_non_empty("GeneratorDescriptor", "command", &command)?;
        Ok(Self { command, docs })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn docs(&self) -> &GeneratorDocs {
        &self.docs
    }
}

/// A single element of an action result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    PackageRules(PackageRuleEntry),
    Resource(ResourceDescriptor),
    Generator(GeneratorDescriptor),
}

impl From<PackageRuleEntry> for Record {
    fn from(entry: PackageRuleEntry) -> Self {
        Self::PackageRules(entry)
    }
}

impl From<ResourceDescriptor> for Record {
    fn from(descriptor: ResourceDescriptor) -> Self {
        Self::Resource(descriptor)
    }
}

impl From<GeneratorDescriptor> for Record {
    fn from(descriptor: GeneratorDescriptor) -> Self {
        Self::Generator(descriptor)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
}
