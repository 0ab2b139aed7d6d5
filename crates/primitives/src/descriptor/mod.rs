//! Query descriptors: which oracle endpoint to open, and how big a panel to
//! open it in.

use indexmap::IndexMap;
use serde::Serialize;

/// Parameter carrying the encoded resource identifier.
pub const RESOURCE_PARAM: &str = "resource";
/// Parameter carrying the cursor offset.
pub const POS_PARAM: &str = "pos";

/// Suggested size of the panel that renders a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySize {
	/// CSS width, e.g. `400px`.
	pub width: &'static str,
	/// CSS height, e.g. `400px`.
	pub height: &'static str,
}

impl DisplaySize {
	/// Size used by all builtin oracle commands.
	pub const DEFAULT: Self = Self::new("400px", "400px");

	pub const fn new(width: &'static str, height: &'static str) -> Self {
		Self { width, height }
	}
}

impl Default for DisplaySize {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// A parameterized oracle query, ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
	/// Endpoint path on the oracle server.
	pub endpoint_path: String,
	/// Query parameters in URI order. Always contains `resource` then `pos`.
	pub parameters: IndexMap<String, String>,
	/// Suggested panel size.
	pub display: DisplaySize,
}

impl QueryDescriptor {
	/// Descriptor for a positional query at `offset` in `resource_id`.
	pub fn for_position(
		endpoint_path: impl Into<String>,
		resource_id: &str,
		offset: u64,
		display: DisplaySize,
	) -> Self {
		let mut parameters = IndexMap::with_capacity(2);
		parameters.insert(RESOURCE_PARAM.to_string(), encode_resource(resource_id));
		parameters.insert(POS_PARAM.to_string(), offset.to_string());
		Self {
			endpoint_path: endpoint_path.into(),
			parameters,
			display,
		}
	}

	/// The encoded `resource` parameter.
	pub fn resource(&self) -> Option<&str> {
		self.parameters.get(RESOURCE_PARAM).map(String::as_str)
	}

	/// The `pos` parameter.
	pub fn pos(&self) -> Option<&str> {
		self.parameters.get(POS_PARAM).map(String::as_str)
	}

	/// Relative URL: the endpoint path, `?`, then `key=value` pairs joined by `&`.
	///
	/// Values are stored encoded and are emitted as-is.
	pub fn uri_template(&self) -> String {
		let mut uri = self.endpoint_path.clone();
		for (i, (key, value)) in self.parameters.iter().enumerate() {
			uri.push(if i == 0 { '?' } else { '&' });
			uri.push_str(key);
			uri.push('=');
			uri.push_str(value);
		}
		uri
	}

	/// Converts into the shape the host renders.
	pub fn to_render_spec(&self) -> RenderSpec {
		RenderSpec {
			uri_template: self.uri_template(),
			width: self.display.width.to_string(),
			height: self.display.height.to_string(),
		}
	}
}

/// What the host expects back from a command callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSpec {
	pub uri_template: String,
	pub width: String,
	pub height: String,
}

/// Percent-encodes a resource identifier for use as a query value.
///
/// Only RFC 3986 unreserved characters pass through unchanged.
pub fn encode_resource(resource_id: &str) -> String {
	urlencoding::encode(resource_id).into_owned()
}
