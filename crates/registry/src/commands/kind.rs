use oracle_primitives::{DisplaySize, InvalidSelectionError, QueryDescriptor, SelectionContext};

/// The structural queries the oracle server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKind {
	/// Code that refers to the identifier under the cursor.
	Referrers,
	/// Types implementing, or implemented by, the type under the cursor.
	Implements,
	/// Call sites of the function under the cursor.
	Callers,
	/// Allocations, sends and receives on the channel under the cursor.
	Peers,
}

impl QueryKind {
	pub const ALL: [Self; 4] = [Self::Referrers, Self::Implements, Self::Callers, Self::Peers];

	/// Short name, matching the oracle server's query mode.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Referrers => "referrers",
			Self::Implements => "implements",
			Self::Callers => "callers",
			Self::Peers => "peers",
		}
	}

	/// Fixed endpoint path for this query.
	pub const fn endpoint_path(self) -> &'static str {
		match self {
			Self::Referrers => "/godev-oracle/referrers.html",
			Self::Implements => "/godev-oracle/implements.html",
			Self::Callers => "/godev-oracle/callers.html",
			Self::Peers => "/godev-oracle/peers.html",
		}
	}

	/// Builds the descriptor for this query at the context's cursor.
	///
	/// Only the resource and cursor offset are used; the server re-parses the
	/// source at that position.
	pub fn describe(
		self,
		ctx: &SelectionContext,
		display: DisplaySize,
	) -> Result<QueryDescriptor, InvalidSelectionError> {
		let offset = ctx.validate()?;
		Ok(QueryDescriptor::for_position(
			self.endpoint_path(),
			&ctx.resource_id,
			offset,
			display,
		))
	}
}
