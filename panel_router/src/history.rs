//! History backends the router reads the current location from and writes
//! transitions to.

use crate::HistoryError;

/// Push-state style history.
pub trait History {
    /// Current path including query string and fragment, if any.
    fn current_path(&self) -> Result<String, HistoryError>;

    /// Add a new entry and make it current.
    fn push(&mut self, path: &str) -> Result<(), HistoryError>;

    /// Overwrite the current entry.
    fn replace(&mut self, path: &str) -> Result<(), HistoryError>;
}

/// In-memory history with back/forward support.
///
/// Used for server-side rendering of a single request path and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// History with a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Step back one entry. Returns `false` at the start of the history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }

        self.index += 1;
        true
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> Result<String, HistoryError> {
        Ok(self.entries[self.index].clone())
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        // a push after going back drops the forward entries, like the browser
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_owned());
        self.index += 1;

        Ok(())
    }

    fn replace(&mut self, path: &str) -> Result<(), HistoryError> {
        self.entries[self.index] = path.to_owned();

        Ok(())
    }
}

/// The browser's `window.history` and `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
    /// Bind to the global window.
    pub fn new() -> Result<Self, HistoryError> {
        let window = web_sys::window().ok_or_else(|| HistoryError::new("no global window"))?;

        Ok(Self { window })
    }

    fn history(&self) -> Result<web_sys::History, HistoryError> {
        self.window.history().map_err(js_error)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> HistoryError {
    HistoryError::new(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
    fn current_path(&self) -> Result<String, HistoryError> {
        let location = self.window.location();
        let pathname = location.pathname().map_err(js_error)?;
        let search = location.search().map_err(js_error)?;

        Ok(format!("{pathname}{search}"))
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        self.history()?
            .push_state_with_url(&js_sys::Object::new(), "", Some(path))
            .map_err(js_error)
    }

    fn replace(&mut self, path: &str) -> Result<(), HistoryError> {
        self.history()?
            .replace_state_with_url(&js_sys::Object::new(), "", Some(path))
            .map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_history_push_back_forward() {
        let mut history = MemoryHistory::new("/admin/dashboard");
        history.push("/admin/users").unwrap();
        history.push("/admin/settings").unwrap();

        assert_eq!(history.current_path().unwrap(), "/admin/settings");
        assert!(history.back());
        assert_eq!(history.current_path().unwrap(), "/admin/users");
        assert!(history.forward());
        assert_eq!(history.current_path().unwrap(), "/admin/settings");
        assert!(!history.forward());
    }

    #[test]
    fn test_memory_history_push_drops_forward_entries() {
        let mut history = MemoryHistory::new("/a");
        history.push("/b").unwrap();
        history.push("/c").unwrap();
        history.back();
        history.back();
        history.push("/d").unwrap();

        assert_eq!(history.entries(), ["/a", "/d"]);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_memory_history_replace() {
        let mut history = MemoryHistory::default();
        history.replace("/admin/profile").unwrap();

        assert_eq!(history.entries(), ["/admin/profile"]);
        assert!(!history.back());
    }
}
