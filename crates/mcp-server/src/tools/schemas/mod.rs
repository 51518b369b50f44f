pub(crate) mod generators;
pub(crate) mod package_rules;
pub(crate) mod resources;
