//! Boundary to the host editor's plugin runtime.

use crate::{BundleHeaders, CommandDef};

/// The host editor side of command registration.
///
/// The host later invokes [`CommandDef::run`] for the command the user picked,
/// and only offers a command for documents whose content type it
/// [applies to](CommandDef::applies_to).
pub trait Host {
	/// Accepts one command for the palette. Serialize
	/// [`CommandDef::properties`] if the host takes JSON.
	fn register_command(&mut self, def: &CommandDef);

	/// Called once all commands are registered.
	fn connect(&mut self, headers: &BundleHeaders) {
		let _ = headers;
	}
}
