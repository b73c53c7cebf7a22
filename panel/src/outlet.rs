//! Layouts and the outlet the router renders the current page into.
//!
//! Outlets are delimited by HTML comments:
//!
//! ```html
//! <!-- @outlet-begin -->
//! <!-- @outlet-end -->
//! ```
//!
//! When filled, the markers are tagged with the current path:
//!
//! ```html
//! <!-- @outlet-begin:/admin/users -->
//! page markup
//! <!-- @outlet-end:/admin/users -->
//! ```

use crate::{Component, Html, Params, RouteState, RouteTable};

const OUTLET_BEGIN: &str = "<!-- @outlet-begin -->";
const OUTLET_END: &str = "<!-- @outlet-end -->";

/// Empty outlet for a layout to place where the current page goes.
pub fn outlet() -> Html {
    Html::new(format!("{OUTLET_BEGIN}{OUTLET_END}"))
}

/// Replace the content of the first outlet in `layout` with `view`.
///
/// A layout without an outlet is returned unchanged; the page is not shown.
pub fn fill_outlet(layout: Html, path: &str, view: &Html) -> Html {
    let mut content = layout.into_string();

    let Some(begin) = content.find(OUTLET_BEGIN) else {
        tracing::warn!(path, "layout has no outlet, page not rendered");
        return Html::new(content);
    };

    let Some(end) = content[begin..].find(OUTLET_END).map(|offset| begin + offset) else {
        tracing::warn!(path, "layout outlet is not closed, page not rendered");
        return Html::new(content);
    };

    let filled = format!(
        "<!-- @outlet-begin:{path} -->{}<!-- @outlet-end:{path} -->",
        view.as_str()
    );
    content.replace_range(begin..end + OUTLET_END.len(), &filled);

    Html::new(content)
}

/// What a layout can see of the router while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    table: &'a RouteTable<Component>,
    state: &'a RouteState,
}

impl<'a> RouteContext<'a> {
    /// Context over a table and its current state.
    pub fn new(table: &'a RouteTable<Component>, state: &'a RouteState) -> Self {
        Self { table, state }
    }

    /// The current route state.
    pub fn current(&self) -> &'a RouteState {
        self.state
    }

    /// The route table.
    pub fn table(&self) -> &'a RouteTable<Component> {
        self.table
    }

    /// Path of a named route without parameters, `None` for unknown names.
    pub fn href(&self, name: &str) -> Option<String> {
        self.table.href(name, &Params::new()).ok()
    }

    /// Whether the named route is current.
    pub fn is_active(&self, name: &str) -> bool {
        self.state.is_active(self.table, name)
    }

    /// Render the current route's component; empty when nothing matches.
    pub fn render_view(&self) -> Html {
        self.state
            .matched()
            .and_then(|matched| self.table.component(matched))
            .map(|component| crate::View::render(component))
            .unwrap_or_default()
    }
}

/// Root component of an application: chrome around an [`outlet`].
pub trait Layout {
    /// Render the layout. The markup should contain one [`outlet`].
    fn render(&self, context: &RouteContext<'_>) -> Html;
}

/// Layout made of the outlet alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterView;

impl Layout for RouterView {
    fn render(&self, _context: &RouteContext<'_>) -> Html {
        outlet()
    }
}

/// Render `layout` with the current page placed into its outlet.
pub(crate) fn render_page(layout: &dyn Layout, context: &RouteContext<'_>) -> Html {
    let view = context.render_view();
    fill_outlet(layout.render(context), context.current().path(), &view)
}
