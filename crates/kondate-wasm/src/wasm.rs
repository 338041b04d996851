//! WASM bindings for JavaScript interop

use crate::history::BrowserHistory;
use crate::router::{AppRouter, Config, HistoryMode, Navigator, Preset, Resolution};
use wasm_bindgen::prelude::*;

// ============================================================================
// Router
// ============================================================================

/// WASM-exposed Router
#[wasm_bindgen]
pub struct WasmRouter {
    inner: AppRouter,
}

#[wasm_bindgen]
impl WasmRouter {
    /// Router over a built-in table ("planner" or "input") in "web" or "hash" mode
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str, history: &str) -> Result<WasmRouter, JsError> {
        let preset: Preset = preset.parse()?;
        let mode: HistoryMode = history.parse()?;
        Ok(Self::from_config(&Config::preset(preset, mode))?)
    }

    /// Router from kondate.toml content
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(source: &str) -> Result<WasmRouter, JsError> {
        let config = Config::from_toml_str(source)?;
        Ok(Self::from_config(&config)?)
    }

    /// Navigate by path or full location
    pub fn resolve(&self, location: &str) -> WasmRouteMatch {
        self.inner.resolve(location).into()
    }

    /// Navigate by route name
    #[wasm_bindgen(js_name = resolveName)]
    pub fn resolve_name(&self, name: &str, params: Vec<String>) -> Result<WasmRouteMatch, JsError> {
        let pairs = pairs(&params).ok_or_else(odd_params)?;
        let m = self.inner.resolve_name(name, &pairs)?;
        Ok(Resolution::Matched(m).into())
    }

    /// Browser URL for a named route
    pub fn href(&self, name: &str, params: Vec<String>) -> Result<String, JsError> {
        let pairs = pairs(&params).ok_or_else(odd_params)?;
        Ok(self.inner.href(name, &pairs)?)
    }

    /// Route names in declaration order
    pub fn routes(&self) -> Vec<String> {
        self.inner.routes().iter().map(|r| r.name.clone()).collect()
    }

    /// History mode: "web" or "hash"
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().as_str().to_string()
    }

    /// Push a named route onto the browser history
    pub fn navigate(&self, name: &str, params: Vec<String>) -> Result<WasmRouteMatch, JsError> {
        let pairs = pairs(&params).ok_or_else(odd_params)?;
        let history = BrowserHistory::new().ok_or_else(|| JsError::new("no window"))?;
        let mut nav = Navigator::new(&self.inner, history);
        Ok(nav.push_named(name, &pairs)?.into())
    }

    /// Route for the browser's current location
    #[wasm_bindgen(js_name = currentRoute)]
    pub fn current_route(&self) -> Result<WasmRouteMatch, JsError> {
        let history = BrowserHistory::new().ok_or_else(|| JsError::new("no window"))?;
        Ok(Navigator::new(&self.inner, history).current().into())
    }
}

impl WasmRouter {
    fn from_config(config: &Config) -> kondate_core::Result<Self> {
        Ok(Self {
            inner: kondate_core::init(config)?,
        })
    }
}

/// Flat `[k1, v1, k2, v2, ...]` list into pairs; `None` if a key has no value
fn pairs(flat: &[String]) -> Option<Vec<(&str, &str)>> {
    if flat.len() % 2 != 0 {
        return None;
    }
    Some(
        flat.chunks_exact(2)
            .map(|kv| (kv[0].as_str(), kv[1].as_str()))
            .collect(),
    )
}

fn odd_params() -> JsError {
    JsError::new("params must be [key, value, ...] pairs")
}

/// Route match result for WASM
#[wasm_bindgen]
pub struct WasmRouteMatch {
    pub found: bool,
    name: String,
    path: String,
    view: String,
    params: Vec<String>,
}

#[wasm_bindgen]
impl WasmRouteMatch {
    /// Route name; empty when not found
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Concrete path that was resolved
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.path.clone()
    }

    /// View identifier ("TodaysMenu"); empty when not found
    #[wasm_bindgen(getter)]
    pub fn view(&self) -> String {
        self.view.clone()
    }

    /// Captured params as `[k1, v1, k2, v2, ...]`
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.params.clone()
    }

    /// Captured params as a JS `Map`
    #[wasm_bindgen(js_name = paramsMap)]
    pub fn params_map(&self) -> js_sys::Map {
        let map = js_sys::Map::new();
        for kv in self.params.chunks_exact(2) {
            map.set(&JsValue::from_str(&kv[0]), &JsValue::from_str(&kv[1]));
        }
        map
    }
}

impl From<Resolution<kondate_core::View>> for WasmRouteMatch {
    fn from(res: Resolution<kondate_core::View>) -> Self {
        match res {
            Resolution::Matched(m) => WasmRouteMatch {
                found: true,
                name: m.name,
                path: m.path,
                view: m.component.as_str().to_string(),
                params: m.params.into_iter().flat_map(|(k, v)| [k, v]).collect(),
            },
            Resolution::NotFound { path } => WasmRouteMatch {
                found: false,
                name: String::new(),
                path,
                view: String::new(),
                params: Vec::new(),
            },
        }
    }
}
