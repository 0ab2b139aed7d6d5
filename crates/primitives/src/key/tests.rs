use super::*;

#[test]
fn bare_function_key() {
	let key = KeyBinding::key(115);
	assert!(!key.ctrl_or_cmd);
	assert!(!key.shift);
	assert_eq!(key.label(), "F4");
}

#[test]
fn char_binding_uses_uppercase_code() {
	assert_eq!(KeyBinding::char('m'), KeyBinding::key(77));
	assert_eq!(KeyBinding::char('H').code, 72);
}

#[test]
fn modifier_labels() {
	assert_eq!(KeyBinding::char('M').ctrl().label(), "Ctrl-M");
	assert_eq!(KeyBinding::char('H').ctrl().shift().label(), "Ctrl-Shift-H");
	assert_eq!(KeyBinding::char('7').shift().label(), "Shift-7");
}

#[test]
fn unnamed_code_falls_back() {
	assert_eq!(KeyBinding::key(186).label(), "Key186");
	assert_eq!(KeyBinding::key(13).label(), "Enter");
}

#[test]
fn serializes_positionally() {
	let json = |k: KeyBinding| serde_json::to_string(&k).unwrap();
	assert_eq!(json(KeyBinding::key(115)), "[115]");
	assert_eq!(json(KeyBinding::char('M').ctrl()), "[77,true]");
	assert_eq!(json(KeyBinding::char('H').ctrl().shift()), "[72,true,true]");
	assert_eq!(json(KeyBinding::char('H').shift()), "[72,false,true]");
}
