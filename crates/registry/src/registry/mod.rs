//! Id-unique table of oracle commands.

use rustc_hash::FxHashMap;

use crate::host::Host;
use crate::{BUILTINS, CommandDef, DuplicateCommandError};

/// Commands in registration order, indexed by id.
///
/// Filled once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
	commands: Vec<CommandDef>,
	by_id: FxHashMap<&'static str, usize>,
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding the builtin oracle commands.
	pub fn builtin() -> Result<Self, DuplicateCommandError> {
		Self::from_defs(BUILTINS.iter().copied().copied())
	}

	/// Registers every definition in order, failing on the first duplicate id.
	pub fn from_defs(defs: impl IntoIterator<Item = CommandDef>) -> Result<Self, DuplicateCommandError> {
		let mut registry = Self::new();
		for def in defs {
			registry.register(def)?;
		}
		Ok(registry)
	}

	/// Adds one command. An existing command with the same id is kept and the
	/// new one rejected.
	pub fn register(&mut self, def: CommandDef) -> Result<(), DuplicateCommandError> {
		if self.by_id.contains_key(def.id) {
			tracing::warn!(id = def.id, "rejecting duplicate command registration");
			return Err(DuplicateCommandError { id: def.id });
		}
		self.by_id.insert(def.id, self.commands.len());
		self.commands.push(def);
		tracing::debug!(id = def.id, key = ?def.key, "registered command");
		Ok(())
	}

	/// Registers `def` and notifies `host` right away. The host is not told
	/// about rejected duplicates.
	pub fn register_with_host<H: Host + ?Sized>(
		&mut self,
		def: CommandDef,
		host: &mut H,
	) -> Result<(), DuplicateCommandError> {
		self.register(def)?;
		host.register_command(&def);
		Ok(())
	}

	/// Commands offered for documents of `content_type`, in registration order.
	///
	/// The iterator is lazy and can be cloned to restart it.
	pub fn list_applicable<'a>(
		&'a self,
		content_type: &'a str,
	) -> impl Iterator<Item = &'a CommandDef> + Clone + 'a {
		self.commands.iter().filter(move |def| def.applies_to(content_type))
	}

	pub fn get(&self, id: &str) -> Option<&CommandDef> {
		self.by_id.get(id).and_then(|&idx| self.commands.get(idx))
	}

	/// All commands in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &CommandDef> + Clone + '_ {
		self.commands.iter()
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}
