//! Startup wiring: announce the oracle commands to a host.

use serde::Serialize;

use crate::host::Host;
use crate::{BUILTINS, CommandDef, CommandRegistry, DuplicateCommandError};

/// Plugin headers shown by the host's plugin manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BundleHeaders {
	pub name: &'static str,
	pub version: &'static str,
	pub description: &'static str,
}

impl BundleHeaders {
	pub const ORACLE: Self = Self {
		name: "GoDev Oracle IDE Bundle",
		version: "1.0",
		description: "GoDev Oracle Integration (references, implements, callers, peers)",
	};
}

/// Registers the builtin commands with `host` and connects.
pub fn install<H: Host + ?Sized>(host: &mut H) -> Result<CommandRegistry, DuplicateCommandError> {
	install_with(host, BundleHeaders::ORACLE, BUILTINS)
}

/// Registers `defs` in order, notifying `host` for each, then connects with
/// `headers`.
///
/// A duplicate id aborts startup before the host is connected.
pub fn install_with<H: Host + ?Sized>(
	host: &mut H,
	headers: BundleHeaders,
	defs: &[&CommandDef],
) -> Result<CommandRegistry, DuplicateCommandError> {
	let mut registry = CommandRegistry::new();
	for def in defs {
		registry.register_with_host(**def, host)?;
	}
	host.connect(&headers);
	tracing::info!(bundle = headers.name, commands = registry.len(), "oracle bundle installed");
	Ok(registry)
}
