use oracle_primitives::{
	HostSelection, InvalidSelectionError, KeyBinding, QueryDescriptor, RenderSpec,
	SelectionContext,
};
use serde::Serialize;

/// Function that turns a selection into a query descriptor.
pub type DescriptorBuilder = fn(&SelectionContext) -> Result<QueryDescriptor, InvalidSelectionError>;

/// A palette command paired with its descriptor builder.
///
/// Definitions are `'static` and immutable; see [`crate::command!`].
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
	/// Globally unique id, e.g. `go.referrers`.
	pub id: &'static str,
	/// Menu label.
	pub label: &'static str,
	/// Tooltip shown on hover.
	pub tooltip: &'static str,
	/// Direct trigger key. `None` leaves the command menu-only.
	pub key: Option<KeyBinding>,
	/// Content types of documents the command is offered for.
	pub content_types: &'static [&'static str],
	/// Builds the query for an invocation.
	pub builder: DescriptorBuilder,
}

impl CommandDef {
	/// Whether the command is offered for documents of `content_type`.
	pub fn applies_to(&self, content_type: &str) -> bool {
		self.content_types.contains(&content_type)
	}

	/// Builds the query descriptor for `ctx`.
	pub fn build(&self, ctx: &SelectionContext) -> Result<QueryDescriptor, InvalidSelectionError> {
		(self.builder)(ctx)
	}

	/// Host callback: builds the descriptor and converts it into a [`RenderSpec`].
	pub fn run(
		&self,
		selected_text: &str,
		full_text: &str,
		selection: HostSelection,
		resource: &str,
	) -> Result<RenderSpec, InvalidSelectionError> {
		let ctx = SelectionContext::from_host(selected_text, full_text, selection, resource);
		self.build(&ctx).map(|desc| desc.to_render_spec())
	}

	/// Registration properties in the host's shape.
	pub fn properties(&self) -> CommandProperties<'_> {
		CommandProperties {
			name: self.label,
			id: self.id,
			tooltip: self.tooltip,
			key: self.key,
			content_type: self.content_types,
		}
	}
}

/// Serializable registration properties for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandProperties<'a> {
	pub name: &'a str,
	pub id: &'a str,
	pub tooltip: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub key: Option<KeyBinding>,
	pub content_type: &'a [&'a str],
}
