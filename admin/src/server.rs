//! Request handling for the development server.
//!
//! `/static/*` is served from the configured directory. Every other path
//! gets the host page with the application mounted in memory at that path,
//! so the page arrives pre-rendered and the client takes over from there.

use bytes::Bytes;
use http::{
    HeaderValue, Method, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderName},
};
use http_body_util::{BodyExt, Full};
use std::{
    path::{Component as PathComponent, Path},
    sync::Arc,
};

use panel::{Anchor, Component, MemoryDocument, MemoryHistory, RouteTable, ShellDocument};

use crate::{AdminConfig, AdminError, create_app, route_table};

/// Response body used by the server.
pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Stylesheet linked from every page.
pub const STYLESHEET: &str = "/static/styles.css";

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

fn build_response(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<BoxBody> {
    let mut response = Response::new(full(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Shared, read-only state of the server.
#[derive(Debug)]
pub struct ServerState {
    table: Arc<RouteTable<Component>>,
    config: AdminConfig,
    shell: ShellDocument,
}

impl ServerState {
    /// Build the route table once and prepare the host page.
    pub fn new(config: AdminConfig) -> Result<Self, AdminError> {
        config.validate()?;
        let table = route_table()?;
        let shell = ShellDocument {
            title: config.app.title.clone(),
            anchor_id: config.app.anchor_id().unwrap_or_default().to_owned(),
            stylesheets: vec![String::from(STYLESHEET)],
            module: Some(config.server.wasm_module.clone()),
            body_class: String::from("hold-transition sidebar-mini layout-fixed"),
        };

        Ok(Self {
            table,
            config,
            shell,
        })
    }

    /// The configuration the server runs with.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Render the host page for `path`. `NOT_FOUND` when no route matches.
    pub fn render_page(&self, path: &str) -> Result<(StatusCode, String), AdminError> {
        let document = MemoryDocument::new().with_element(self.shell.anchor_id.as_str());
        let app = create_app(
            Arc::clone(&self.table),
            MemoryHistory::new(path),
            &self.config.app,
        );
        let mounted = app.mount(&document, &self.config.app.anchor)?;

        let status = match mounted.router().current().matched() {
            Some(_) => StatusCode::OK,
            None => StatusCode::NOT_FOUND,
        };

        Ok((status, self.shell.render(&mounted.anchor().inner_html())))
    }
}

/// Answer one request.
pub async fn respond(method: &Method, path: &str, state: &ServerState) -> Response<BoxBody> {
    let response = if method != Method::GET && method != Method::HEAD {
        build_response(StatusCode::METHOD_NOT_ALLOWED, "text/plain", "Method Not Allowed")
    } else if let Some(file) = path.strip_prefix("/static/") {
        serve_static(&state.config.server.static_dir, file).await
    } else {
        match state.render_page(path) {
            Ok((status, page)) => build_response(status, "text/html; charset=utf-8", page),
            Err(error) => {
                tracing::error!(%error, path, "failed to render page");
                build_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    "Internal Server Error",
                )
            }
        }
    };

    tracing::info!(%method, path, status = response.status().as_u16(), "request");

    response
}

async fn serve_static(dir: &Path, file: &str) -> Response<BoxBody> {
    let relative = Path::new(file);

    if !relative
        .components()
        .all(|component| matches!(component, PathComponent::Normal(_)))
    {
        return build_response(StatusCode::NOT_FOUND, "text/plain", "File not found");
    }

    let file_path = dir.join(relative);

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mut ok = build_response(StatusCode::OK, content_type(&file_path), content);
            ok.headers_mut().insert(
                HeaderName::from_static("cache-control"),
                HeaderValue::from_static("no-cache"),
            );
            ok
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            build_response(StatusCode::NOT_FOUND, "text/plain", "File not found")
        }
        Err(error) => {
            tracing::error!(%error, path = %file_path.display(), "failed to read static file");
            build_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain",
                "Error reading file",
            )
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type(Path::new("admin_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("admin.js")), "application/javascript");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
