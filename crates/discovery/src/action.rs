//! The closed set of actions a caller may invoke, with their argument schemas.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetPackageRules,
    ListAshResources,
    ListGenerators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    StringList,
}

impl ArgKind {
    fn describe(self) -> &'static str {
        match self {
            Self::StringList => "a list of strings",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
}

const PACKAGE_RULES_ARGS: &[ArgSpec] = &[ArgSpec {
    name: "packages",
    kind: ArgKind::StringList,
    required: true,
}];

/// A call whose arguments have passed schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    GetPackageRules { packages: Vec<String> },
    ListAshResources,
    ListGenerators,
}

impl ActionRequest {
    pub fn action(&self) -> Action {
        match self {
            Self::GetPackageRules { .. } => Action::GetPackageRules,
            Self::ListAshResources => Action::ListAshResources,
            Self::ListGenerators => Action::ListGenerators,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorKind {
    Validation,
    Execution,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("execution error: {0}")]
    Execution(String),
}

impl ActionError {
    pub fn kind(&self) -> ActionErrorKind {
        match self {
            Self::Validation(_) => ActionErrorKind::Validation,
            Self::Execution(_) => ActionErrorKind::Execution,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(detail) | Self::Execution(detail) => detail,
        }
    }
}

impl Action {
    pub const ALL: [Action; 3] = [
        Action::GetPackageRules,
        Action::ListAshResources,
        Action::ListGenerators,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetPackageRules => "get_package_rules",
            Self::ListAshResources => "list_ash_resources",
            Self::ListGenerators => "list_generators",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GetPackageRules => {
                "Return the usage-rules.md document of each listed package that ships one. Packages without a rules file are omitted."
            }
            Self::ListAshResources => {
                "List every domain-modeled resource in the current application together with the domain that owns it."
            }
            Self::ListGenerators => {
                "List the available code-generation commands (project and dependencies) with their documentation: a string, null when undocumented, or false when documented as empty."
            }
        }
    }

    pub fn args(self) -> &'static [ArgSpec] {
        match self {
            Self::GetPackageRules => PACKAGE_RULES_ARGS,
            Self::ListAshResources | Self::ListGenerators => &[],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// Check `arguments` against this action's schema and build a typed request.
    ///
    /// Keys not named by the schema are ignored.
    pub fn validate(
        self,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<ActionRequest, ActionError> {
        for spec in self.args() {
            match arguments.and_then(|args| args.get(spec.name)) {
                None if spec.required => {
                    return Err(ActionError::Validation(format!(
                        "{}: missing required argument `{}`",
                        self.name(),
                        spec.name
                    )));
                }
                None => {}
                Some(value) if !spec.kind.matches(value) => {
                    return Err(ActionError::Validation(format!(
                        "{}: argument `{}` must be {}",
                        self.name(),
                        spec.name,
                        spec.kind.describe()
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(match self {
            Self::GetPackageRules => ActionRequest::GetPackageRules {
                packages: string_list(arguments, "packages"),
            },
            Self::ListAshResources => ActionRequest::ListAshResources,
            Self::ListGenerators => ActionRequest::ListGenerators,
        })
    }
}

fn string_list(arguments: Option<&Map<String, Value>>, key: &str) -> Vec<String> {
    arguments
        .and_then(|args| args.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
