use std::sync::Arc;
use thiserror::Error;

use panel::{
    App, Component, Document, History, HistoryError, MountError, MountedApp, RouteTable,
    RouteTableError, Router, Routes,
};

use crate::{AdminLayout, AdminRoute, AppConfig};

/// Errors that stop the application from starting.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The route table is invalid.
    #[error(transparent)]
    Routes(#[from] RouteTableError),

    /// The browser history is unavailable.
    #[error(transparent)]
    History(#[from] HistoryError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] crate::ConfigError),

    /// The application could not be mounted.
    #[error(transparent)]
    Mount(#[from] MountError),
}

/// The admin route table.
pub fn route_table() -> Result<Arc<RouteTable<Component>>, RouteTableError> {
    AdminRoute::table().map(Arc::new)
}

/// The unmounted application: admin layout plus one router over `table`.
pub fn create_app<H: History>(
    table: Arc<RouteTable<Component>>,
    history: H,
    config: &AppConfig,
) -> App<Router<Component, H>> {
    App::new()
        .layout(AdminLayout::new(config.title.as_str()))
        .router(Router::new(table, history))
}

/// Create the application, attach its router and mount it onto the
/// configured anchor of `document`.
pub fn bootstrap<D: Document, H: History>(
    document: &D,
    history: H,
    config: &AppConfig,
) -> Result<MountedApp<H, D::Anchor>, AdminError> {
    let table = route_table()?;
    let app = create_app(table, history, config);

    Ok(app.mount(document, &config.anchor)?)
}
