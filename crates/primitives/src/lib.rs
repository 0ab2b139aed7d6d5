//! Core types for oracle queries: trigger keys, selections, and query descriptors.

/// Query descriptors and the host render shape.
pub mod descriptor;
/// Trigger key bindings.
pub mod key;
/// Per-invocation selection context.
pub mod selection;

pub use descriptor::{
	DisplaySize, POS_PARAM, QueryDescriptor, RESOURCE_PARAM, RenderSpec, encode_resource,
};
pub use key::KeyBinding;
pub use selection::{HostSelection, InvalidSelectionError, SelectionContext};
