use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{global, Function, Uint8Array};

use crate::environment::web::{get, node_process};
use crate::error::WasmError;
use crate::FileReadError;

// `Function` bodies run in global scope, where CommonJS `require` is not defined. Newer Nodes have
// `process.getBuiltinModule`; older CommonJS hosts still reach `require` through the main module,
// and Electron exposes it globally.
const LOAD_FS: &str = "\
    if (typeof process.getBuiltinModule === 'function') return process.getBuiltinModule('fs');\n\
    if (typeof scope.require === 'function') return scope.require('fs');\n\
    if (process.mainModule && typeof process.mainModule.require === 'function') \
        return process.mainModule.require('fs');\n\
    throw new Error('cannot load the fs module');";

/// Node's `fs` module.
struct NodeFs(JsValue);

impl NodeFs {
    fn load() -> Result<Self, JsValue> {
        let scope = JsValue::from(global());
        let process = node_process(&scope)
            .ok_or_else(|| JsValue::from_str("not running under Node"))?;
        Self::load_from(&scope, &process)
    }

    fn load_from(scope: &JsValue, process: &JsValue) -> Result<Self, JsValue> {
        Function::new_with_args("scope, process", LOAD_FS)
            .call2(&JsValue::UNDEFINED, scope, process)
            .map(Self)
    }

    fn method(&self, name: &str) -> Result<Function, JsValue> {
        get(&self.0, name)
            .ok_or_else(|| JsValue::from_str(&format!("fs.{} is missing", name)))?
            .dyn_into::<Function>()
    }

    fn exists(&self, path: &str) -> Result<bool, JsValue> {
        let v = self.method("existsSync")?.call1(&self.0, &JsValue::from_str(path))?;
        Ok(v.as_bool().unwrap_or(false))
    }

    fn read_text(&self, path: &str) -> Result<String, JsValue> {
        self.method("readFileSync")?
            .call2(&self.0, &JsValue::from_str(path), &JsValue::from_str("utf8"))?
            .as_string()
            .ok_or_else(|| JsValue::from_str("readFileSync did not return a string"))
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, JsValue> {
        let buf = self
            .method("readFileSync")?
            .call1(&self.0, &JsValue::from_str(path))?
            .dyn_into::<Uint8Array>()?;
        Ok(buf.to_vec())
    }
}

fn convert_error(path: &str, e: JsValue) -> FileReadError {
    FileReadError::new(path, WasmError::from(e))
}

pub(super) fn exists(path: &str) -> bool {
    match NodeFs::load().and_then(|fs| fs.exists(path)) {
        Ok(exists) => exists,
        Err(e) => {
            log::warn!("{}: existence check failed: {}", path, WasmError::from(e));
            false
        }
    }
}

pub(super) fn read_text(path: &str) -> Result<String, FileReadError> {
    NodeFs::load()
        .and_then(|fs| fs.read_text(path))
        .map_err(|e| convert_error(path, e))
}

pub(super) fn read_bytes(path: &str) -> Result<Vec<u8>, FileReadError> {
    NodeFs::load()
        .and_then(|fs| fs.read_bytes(path))
        .map_err(|e| convert_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::{Object, JSON};

    /// Writes a file through the real `fs` module and returns its path.
    fn write_temp(fs: &NodeFs, name: &str, data: &[u8]) -> String {
        let dir = Function::new_no_args("return process.env.TMPDIR || process.env.TEMP || '/tmp';")
            .call0(&JsValue::UNDEFINED)
            .unwrap()
            .as_string()
            .unwrap();
        let path = format!("{}/{}", dir, name);
        fs.method("writeFileSync")
            .unwrap()
            .call2(&fs.0, &JsValue::from_str(&path), &Uint8Array::from(data).into())
            .unwrap();
        path
    }

    /// A `process` without `getBuiltinModule` whose main module can `require` the given module.
    fn legacy_process(fs: &JsValue) -> JsValue {
        Function::new_with_args(
            "fs",
            "return { versions: { node: '18.0.0' }, \
             mainModule: { require: (name) => name === 'fs' ? fs : undefined } };",
        )
        .call1(&JsValue::UNDEFINED, fs)
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn loads_from_host() {
        assert!(NodeFs::load().is_ok());
    }

    #[wasm_bindgen_test]
    fn falls_back_to_main_module_require() {
        let real = NodeFs::load().unwrap();
        let path = write_temp(&real, "resources-legacy.bin", &[0x00, 0x7F, 0x80, 0xFF]);

        let fs = NodeFs::load_from(&Object::new().into(), &legacy_process(&real.0)).unwrap();
        assert!(Object::is(&fs.0, &real.0));
        assert!(fs.exists(&path).unwrap());
        assert_eq!(fs.read_bytes(&path).unwrap(), vec![0x00, 0x7F, 0x80, 0xFF]);
    }

    #[wasm_bindgen_test]
    fn falls_back_to_global_require() {
        let real = NodeFs::load().unwrap();
        let scope = Function::new_with_args(
            "fs",
            "return { require: (name) => name === 'fs' ? fs : undefined };",
        )
        .call1(&JsValue::UNDEFINED, &real.0)
        .unwrap();
        let process = JSON::parse(r#"{"versions":{"node":"16.0.0"}}"#).unwrap();

        let fs = NodeFs::load_from(&scope, &process).unwrap();
        assert!(Object::is(&fs.0, &real.0));
    }

    #[wasm_bindgen_test]
    fn no_loader_is_an_error() {
        let process = JSON::parse(r#"{"versions":{"node":"16.0.0"}}"#).unwrap();
        assert!(NodeFs::load_from(&Object::new().into(), &process).is_err());
    }
}
