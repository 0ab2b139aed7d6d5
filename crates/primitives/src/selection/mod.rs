//! Selection state handed over by the host for a single command invocation.

/// The host's selection object. `start` doubles as the cursor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostSelection {
	/// Start offset (cursor position), in characters.
	pub start: i64,
	/// End offset, in characters.
	pub end: i64,
}

impl HostSelection {
	/// A collapsed selection at `offset`.
	pub const fn point(offset: i64) -> Self {
		Self {
			start: offset,
			end: offset,
		}
	}
}

/// Snapshot of the open document and cursor at invocation time.
///
/// Never stored past the call that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionContext {
	/// Identifier of the open document, typically a URL.
	pub resource_id: String,
	/// 0-based character offset of the cursor.
	pub cursor_offset: i64,
	/// Currently selected text.
	pub selected_text: String,
	/// Full document text.
	pub full_text: String,
}

/// A command was invoked without a usable document position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectionError {
	#[error("no resource is open")]
	EmptyResource,
	#[error("cursor offset {0} is negative")]
	NegativeOffset(i64),
}

impl SelectionContext {
	/// Context for `resource_id` with the cursor at `cursor_offset` and no text.
	pub fn new(resource_id: impl Into<String>, cursor_offset: i64) -> Self {
		Self {
			resource_id: resource_id.into(),
			cursor_offset,
			..Self::default()
		}
	}

	/// Attaches the selected and full document text.
	pub fn with_text(mut self, selected_text: impl Into<String>, full_text: impl Into<String>) -> Self {
		self.selected_text = selected_text.into();
		self.full_text = full_text.into();
		self
	}

	/// Builds a context from the arguments of a host `run` callback.
	pub fn from_host(
		selected_text: &str,
		full_text: &str,
		selection: HostSelection,
		resource: &str,
	) -> Self {
		Self::new(resource, selection.start).with_text(selected_text, full_text)
	}

	/// Checks the invocation preconditions and returns the cursor offset.
	pub fn validate(&self) -> Result<u64, InvalidSelectionError> {
		if self.resource_id.is_empty() {
			return Err(InvalidSelectionError::EmptyResource);
		}
		u64::try_from(self.cursor_offset)
			.map_err(|_| InvalidSelectionError::NegativeOffset(self.cursor_offset))
	}
}
