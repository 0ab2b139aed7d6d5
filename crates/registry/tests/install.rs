use oracle_registry::{
	BUILTINS, BundleHeaders, CommandDef, DuplicateCommandError, GO_CONTENT_TYPE, Host,
	HostSelection, install, install_with,
};
use pretty_assertions::assert_eq;

/// Host that records registrations as the JSON it would receive.
#[derive(Default)]
struct JsonHost {
	commands: Vec<serde_json::Value>,
	connected: Vec<BundleHeaders>,
}

impl Host for JsonHost {
	fn register_command(&mut self, def: &CommandDef) {
		let props = serde_json::to_value(def.properties()).expect("properties serialize");
		self.commands.push(props);
	}

	fn connect(&mut self, headers: &BundleHeaders) {
		self.connected.push(*headers);
	}
}

#[test]
fn install_registers_builtins_then_connects() {
	let mut host = JsonHost::default();
	let registry = install(&mut host).unwrap();

	assert_eq!(registry.len(), 4);
	assert_eq!(host.connected, [BundleHeaders::ORACLE]);

	let ids: Vec<&str> = host.commands.iter().map(|c| c["id"].as_str().unwrap()).collect();
	assert_eq!(ids, ["go.referrers", "go.implements", "go.callers", "go.peers"]);
	for cmd in &host.commands {
		assert_eq!(cmd["contentType"], serde_json::json!([GO_CONTENT_TYPE]));
	}
	assert_eq!(host.commands[0]["key"], serde_json::json!([115]));
	assert_eq!(host.commands[2]["key"], serde_json::json!([72, true, true]));
	assert!(host.commands[3].get("key").is_none());
}

#[test]
fn headers_serialize_for_plugin_manager() {
	let json = serde_json::to_value(BundleHeaders::ORACLE).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"name": "GoDev Oracle IDE Bundle",
			"version": "1.0",
			"description": "GoDev Oracle Integration (references, implements, callers, peers)",
		})
	);
}

#[test]
fn duplicate_aborts_before_connect() {
	let mut host = JsonHost::default();
	let defs: Vec<&CommandDef> = BUILTINS.iter().copied().chain([BUILTINS[1]]).collect();
	let err = install_with(&mut host, BundleHeaders::ORACLE, &defs).unwrap_err();

	assert_eq!(err, DuplicateCommandError { id: "go.implements" });
	assert_eq!(host.commands.len(), 4);
	assert!(host.connected.is_empty());
}

#[test]
fn dispatch_through_installed_registry() {
	let mut host = JsonHost::default();
	let registry = install(&mut host).unwrap();

	let offered: Vec<&CommandDef> = registry.list_applicable("text/x-go").collect();
	let spec = offered
		.iter()
		.find(|d| d.id == "go.referrers")
		.unwrap()
		.run("", "package main", HostSelection::point(42), "file:///main.go")
		.unwrap();
	assert_eq!(spec.uri_template, "/godev-oracle/referrers.html?resource=file%3A%2F%2F%2Fmain.go&pos=42");

	let json = serde_json::to_value(&spec).unwrap();
	assert_eq!(json["width"], "400px");
	assert_eq!(json["height"], "400px");
}

#[test]
fn nothing_offered_for_other_documents() {
	let registry = install(&mut JsonHost::default()).unwrap();
	assert_eq!(registry.list_applicable("text/javascript").count(), 0);
}
