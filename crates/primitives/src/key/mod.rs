//! Trigger keys for palette commands.
//!
//! Codes are browser key codes: letters use their uppercase ASCII value and
//! function keys start at 112 (F1).

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Key code of F1. F1..F12 occupy a contiguous range.
const F1: u32 = 112;
const F12: u32 = F1 + 11;

/// A key that triggers a command directly, without going through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
	/// Browser key code.
	pub code: u32,
	/// Whether Ctrl (Cmd on macOS) must be held.
	pub ctrl_or_cmd: bool,
	/// Whether Shift must be held.
	pub shift: bool,
}

impl KeyBinding {
	/// A bare key with no modifiers.
	pub const fn key(code: u32) -> Self {
		Self {
			code,
			ctrl_or_cmd: false,
			shift: false,
		}
	}

	/// Binding for a letter or digit, e.g. `KeyBinding::char('M')`.
	pub const fn char(c: char) -> Self {
		Self::key(c.to_ascii_uppercase() as u32)
	}

	/// Returns a copy that also requires Ctrl/Cmd.
	pub const fn ctrl(self) -> Self {
		Self {
			ctrl_or_cmd: true,
			..self
		}
	}

	/// Returns a copy that also requires Shift.
	pub const fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Human-readable label, e.g. `F4` or `Ctrl-Shift-H`.
	pub fn label(&self) -> String {
		let mut parts = Vec::with_capacity(3);
		if self.ctrl_or_cmd {
			parts.push("Ctrl".to_string());
		}
		if self.shift {
			parts.push("Shift".to_string());
		}
		parts.push(key_name(self.code));
		parts.join("-")
	}
}

fn key_name(code: u32) -> String {
	match code {
		F1..=F12 => format!("F{}", code - F1 + 1),
		8 => "Backspace".into(),
		9 => "Tab".into(),
		13 => "Enter".into(),
		27 => "Escape".into(),
		32 => "Space".into(),
		48..=57 | 65..=90 => char::from_u32(code).map_or_else(|| format!("Key{code}"), String::from),
		_ => format!("Key{code}"),
	}
}

/// Serializes to the host's positional form: `[code]`, `[code, ctrl]` or
/// `[code, ctrl, shift]`. Trailing `false` flags are omitted.
impl Serialize for KeyBinding {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let len = if self.shift {
			3
		} else if self.ctrl_or_cmd {
			2
		} else {
			1
		};
		let mut seq = serializer.serialize_seq(Some(len))?;
		seq.serialize_element(&self.code)?;
		if len > 1 {
			seq.serialize_element(&self.ctrl_or_cmd)?;
		}
		if len > 2 {
			seq.serialize_element(&self.shift)?;
		}
		seq.end()
	}
}

#[cfg(test)]
mod tests;
