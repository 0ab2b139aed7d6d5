/// Two commands were registered under the same id.
///
/// Raised at startup; the first registration is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate command id: {id}")]
pub struct DuplicateCommandError {
	pub id: &'static str,
}
