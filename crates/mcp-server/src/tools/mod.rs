//! Lens MCP tool surface.
//!
//! Schemas, dispatch and the tool catalog live in separate submodules; the actual
//! discovery logic is in `lens-discovery`.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::LensService;
