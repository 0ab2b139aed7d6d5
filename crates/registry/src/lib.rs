//! Oracle query commands for the editor command palette.
//!
//! Each command maps the current selection to a [`QueryDescriptor`] naming an
//! oracle server endpoint. The host editor renders the descriptor; nothing in
//! this crate performs I/O.
//!
//! # Modules
//!
//! - [`commands`] - Command definitions, query kinds, and the builtin table
//! - [`registry`] - Id-unique command table with content-type filtering
//! - [`host`] - Boundary trait implemented by the host editor
//! - [`bundle`] - Startup wiring: registers the builtins with a host

pub mod bundle;
pub mod commands;
pub mod error;
pub mod host;
pub mod registry;

pub use bundle::{BundleHeaders, install, install_with};
pub use commands::{
	BUILTINS, CommandDef, CommandProperties, DescriptorBuilder, GO_CONTENT_TYPE,
	ORACLE_ENDPOINT_ROOT, QueryKind,
};
pub use error::DuplicateCommandError;
pub use host::Host;
pub use oracle_primitives::{
	DisplaySize, HostSelection, InvalidSelectionError, KeyBinding, QueryDescriptor, RenderSpec,
	SelectionContext,
};
pub use registry::CommandRegistry;
