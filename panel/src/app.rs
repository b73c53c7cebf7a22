//! The composition root: one application, one router, one anchor.

use std::fmt;
use thiserror::Error;

use crate::{
    Anchor, Component, Document, History, Html, Layout, Location, MatchedRoute, NavigationError,
    RouteContext, RouteState, Router, RouterView, outlet::render_page,
};

/// Attribute set on the single root element rendered into the anchor.
pub const ROOT_ATTRIBUTE: &str = "data-panel-root";

/// Errors raised while mounting an application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No element matches the mount selector.
    #[error("mount anchor `{selector}` not found in document")]
    AnchorNotFound {
        /// The selector that matched nothing.
        selector: String,
    },

    /// There is no document to mount into.
    #[error("no document available to mount into")]
    NoDocument,
}

/// An application before it is mounted.
///
/// `App::new()` starts without a router; [`App::router`] attaches the one
/// router the application will ever have, and only then can it be mounted.
///
/// ```rust,ignore
/// let app = App::new().layout(AdminLayout).router(router);
/// let mounted = app.mount(&document, "#app")?;
/// ```
pub struct App<R = ()> {
    router: R,
    layout: Box<dyn Layout>,
}

impl App<()> {
    /// A new application rendering the bare router view.
    pub fn new() -> Self {
        Self {
            router: (),
            layout: Box::new(RouterView),
        }
    }

    /// Attach the application's router.
    pub fn router<H: History>(self, router: Router<Component, H>) -> App<Router<Component, H>> {
        App {
            router,
            layout: self.layout,
        }
    }
}

impl Default for App<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> App<R> {
    /// Use `layout` as the root component around the router's outlet.
    pub fn layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }
}

impl<H: History> App<Router<Component, H>> {
    /// Render into the element matching `selector` and take ownership of it.
    pub fn mount<D: Document>(
        self,
        document: &D,
        selector: &str,
    ) -> Result<MountedApp<H, D::Anchor>, MountError> {
        let Some(anchor) = document.query_selector(selector) else {
            tracing::error!(selector, "mount anchor not found");
            return Err(MountError::AnchorNotFound {
                selector: selector.to_owned(),
            });
        };

        let mounted = MountedApp {
            router: self.router,
            layout: self.layout,
            anchor,
        };

        mounted.render();
        tracing::info!(selector, path = mounted.router.current().path(), "application mounted");

        Ok(mounted)
    }
}

impl<R: fmt::Debug> fmt::Debug for App<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("router", &self.router)
            .field("layout", &"<dyn Layout>")
            .finish()
    }
}

/// A mounted application: owns its router and anchor for the rest of its life.
pub struct MountedApp<H, A> {
    router: Router<Component, H>,
    layout: Box<dyn Layout>,
    anchor: A,
}

impl<H: History, A: Anchor> MountedApp<H, A> {
    /// Navigate and re-render. Failed navigations still re-render, so an
    /// unknown path leaves the view region empty.
    pub fn navigate(&mut self, target: impl Into<Location>) -> Result<MatchedRoute, NavigationError> {
        let result = self.router.navigate(target);
        self.render();
        result
    }

    /// Like [`MountedApp::navigate`], replacing the current history entry.
    pub fn replace(&mut self, target: impl Into<Location>) -> Result<MatchedRoute, NavigationError> {
        let result = self.router.replace(target);
        self.render();
        result
    }

    /// Follow the history's location (back/forward) and re-render.
    pub fn sync(&mut self) -> &RouteState {
        self.router.sync();
        self.render();
        self.router.current()
    }

    /// Markup of the whole application for the current route.
    pub fn html(&self) -> Html {
        let context = RouteContext::new(self.router.table(), self.router.current());
        let page = render_page(self.layout.as_ref(), &context);

        Html::new(format!(r#"<div {ROOT_ATTRIBUTE}="">{page}</div>"#))
    }

    /// Write the current markup into the anchor.
    pub fn render(&self) {
        self.html().mount(&self.anchor);
    }

    /// The application's router.
    pub fn router(&self) -> &Router<Component, H> {
        &self.router
    }

    /// Mutable access to the router; call [`MountedApp::render`] after changing it.
    pub fn router_mut(&mut self) -> &mut Router<Component, H> {
        &mut self.router
    }

    /// The element the application is mounted onto.
    pub fn anchor(&self) -> &A {
        &self.anchor
    }
}

impl<H: fmt::Debug, A: fmt::Debug> fmt::Debug for MountedApp<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedApp")
            .field("router", &self.router)
            .field("layout", &"<dyn Layout>")
            .field("anchor", &self.anchor)
            .finish()
    }
}
