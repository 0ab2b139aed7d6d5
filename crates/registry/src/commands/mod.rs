//! Oracle command definitions.

mod def;
mod kind;
mod macros;
pub mod builtins;

pub use builtins::BUILTINS;
pub use def::{CommandDef, CommandProperties, DescriptorBuilder};
pub use kind::QueryKind;

/// Path prefix under which the oracle server serves its query pages.
pub const ORACLE_ENDPOINT_ROOT: &str = "/godev-oracle";

/// Content type of Go source documents.
pub const GO_CONTENT_TYPE: &str = "text/x-go";
