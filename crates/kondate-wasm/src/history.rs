//! Browser session history via the History API

use kondate_core::History;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// [`History`] backed by `window.history` and `window.location`
///
/// `back` and `forward` only queue the traversal; the browser updates the
/// location asynchronously and fires `popstate` once it has.
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    /// History of the current window, if running in a browser
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn report(op: &str, result: Result<(), JsValue>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(op, error = ?err, "history call failed");
                false
            }
        }
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{}{}{}", path, search, hash)
    }

    fn push(&mut self, url: &str) {
        let result = self
            .window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url)));
        Self::report("pushState", result);
    }

    fn replace(&mut self, url: &str) {
        let result = self
            .window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(url)));
        Self::report("replaceState", result);
    }

    fn back(&mut self) -> bool {
        let result = self.window.history().and_then(|h| h.back());
        Self::report("back", result)
    }

    fn forward(&mut self) -> bool {
        let result = self.window.history().and_then(|h| h.forward());
        Self::report("forward", result)
    }
}
