//! The four oracle queries offered for Go sources.
//!
//! Peers has no trigger key.

use crate::command;
use crate::{CommandDef, KeyBinding, QueryKind};

command!(referrers, {
	id: "go.referrers",
	label: "References",
	tooltip: "Find code that references this item (F4)",
	key: KeyBinding::key(115),
}, query: QueryKind::Referrers);

command!(implements, {
	id: "go.implements",
	label: "Implements",
	tooltip: "Find types that implement an interface (Ctrl-M)",
	key: KeyBinding::char('M').ctrl(),
}, query: QueryKind::Implements);

command!(callers, {
	id: "go.callers",
	label: "Callers",
	tooltip: "Find callers of this function (Ctrl-Shift-H)",
	key: KeyBinding::char('H').ctrl().shift(),
}, query: QueryKind::Callers);

command!(peers, {
	id: "go.peers",
	label: "Peers",
	tooltip: "Find other locations that allocate/send/receive on the channel",
}, query: QueryKind::Peers);

/// Builtin commands in registration order.
pub static BUILTINS: &[&CommandDef] = &[&CMD_referrers, &CMD_implements, &CMD_callers, &CMD_peers];
