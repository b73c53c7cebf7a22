//! Component framework core for panel applications.
//!
//! Components implement [`View`] and render to [`Html`] markup. An [`App`]
//! is the composition root: it owns exactly one [`Router`] and is mounted
//! onto exactly one anchor element of a [`Document`]. The router swaps the
//! component rendered into the layout's outlet on every navigation.

use std::fmt;

mod app;
mod dom;
mod outlet;
/// Common imports for panel applications.
pub mod prelude;
mod routes;
mod shell;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

pub use panel_macro::Routes;
pub use panel_router::{
    History, HistoryError, LINK_ATTRIBUTE, Location, MatchedRoute, MemoryHistory, NAVIGATE_EVENT,
    NavigationError, Params, Route, RouteState, RouteTable, RouteTableError, Router,
};
#[cfg(target_arch = "wasm32")]
pub use panel_router::{BrowserHistory, ClientRouter, dispatch_navigate};

pub use app::{App, MountError, MountedApp, ROOT_ATTRIBUTE};
#[cfg(target_arch = "wasm32")]
pub use dom::BrowserDocument;
pub use dom::{Anchor, Document, MemoryDocument, MemoryElement};
pub use outlet::{Layout, RouteContext, RouterView, fill_outlet, outlet};
pub use routes::Routes;
pub use shell::ShellDocument;

/// Trait that defines the view layer for components
///
/// Components must implement this trait to provide their HTML rendering logic
pub trait View {
    /// Render the component to Html
    fn render(&self) -> Html;
}

/// Rendered markup.
///
/// Markup built with [`Html::new`] is trusted as-is; use [`Html::text`] for
/// anything that comes from data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html {
    markup: String,
}

impl Html {
    /// Wrap trusted markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Html {
            markup: markup.into(),
        }
    }

    /// Escape `text` so it renders literally.
    pub fn text(text: &str) -> Self {
        Html {
            markup: escape(text),
        }
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// Consume into the markup string.
    pub fn into_string(self) -> String {
        self.markup
    }

    /// Whether there is no markup at all.
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    /// Replace the content of `target` with this markup.
    pub fn mount<A: Anchor + ?Sized>(&self, target: &A) {
        target.set_inner_html(&self.markup);
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Html::new(content)
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Html::new(content)
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl View for Html {
    fn render(&self) -> Html {
        self.clone()
    }
}

/// Escape the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// A component definition a route points at.
///
/// Definitions are plain function pointers, so a route table holding them is
/// built eagerly, is `Send + Sync`, and instantiates the component afresh on
/// every render.
#[derive(Clone, Copy)]
pub struct Component {
    name: &'static str,
    render: fn() -> Html,
}

impl Component {
    /// Definition for a component constructed with `Default`.
    pub fn of<V: View + Default>() -> Self {
        let full = std::any::type_name::<V>();

        Component {
            name: full.rsplit("::").next().unwrap_or(full),
            render: render_default::<V>,
        }
    }

    /// Definition from an explicit render function.
    pub const fn new(name: &'static str, render: fn() -> Html) -> Self {
        Component { name, render }
    }

    /// Short type name of the component, e.g. `ListUsers`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn render_default<V: View + Default>() -> Html {
    V::default().render()
}

impl View for Component {
    fn render(&self) -> Html {
        (self.render)()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}
