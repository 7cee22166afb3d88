use wasm_bindgen::JsValue;
use web_sys::js_sys::{global, Reflect};

pub(crate) fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    if target.is_undefined() || target.is_null() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Checks for `versions.node` on a `process` object.
fn is_node_process(process: &JsValue) -> bool {
    get(process, "versions")
        .and_then(|versions| get(&versions, "node"))
        .is_some()
}

/// Finds Node's `process` object under `scope`.
///
/// Electron and similar wrappers hang `process` off the window instead of the global scope, so both
/// are checked.
pub(crate) fn node_process(scope: &JsValue) -> Option<JsValue> {
    get(scope, "process")
        .filter(is_node_process)
        .or_else(|| {
            get(scope, "window")
                .and_then(|window| get(&window, "process"))
                .filter(is_node_process)
        })
}

fn probe_scope(scope: &JsValue) -> bool {
    node_process(scope).is_some()
}

pub(super) fn probe() -> bool {
    probe_scope(&JsValue::from(global()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::JSON;

    fn scope(json: &str) -> JsValue {
        JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn direct_process() {
        assert!(probe_scope(&scope(r#"{"process":{"versions":{"node":"20.0.0"}}}"#)));
    }

    #[wasm_bindgen_test]
    fn window_process() {
        assert!(probe_scope(&scope(
            r#"{"window":{"process":{"versions":{"node":"x"}}}}"#
        )));
    }

    #[wasm_bindgen_test]
    fn browser_scopes() {
        assert!(!probe_scope(&scope("{}")));
        assert!(!probe_scope(&scope(r#"{"process":{}}"#)));
        assert!(!probe_scope(&scope(r#"{"process":{"versions":{"node":null}}}"#)));
        assert!(!probe_scope(&scope(r#"{"window":{"process":{"versions":{}}}}"#)));
        assert!(!probe_scope(&JsValue::UNDEFINED));
    }

    #[wasm_bindgen_test]
    fn window_process_is_found() {
        let process = node_process(&scope(
            r#"{"window":{"process":{"versions":{"node":"x"},"tag":1}}}"#,
        ))
        .unwrap();
        assert!(get(&process, "tag").is_some());
    }
}
