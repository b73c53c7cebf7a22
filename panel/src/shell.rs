use crate::escape;

/// The host HTML page an application is mounted into.
///
/// Rendered by the server for every application path; the client module
/// then mounts onto the anchor element and takes over navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellDocument {
    /// Document title.
    pub title: String,
    /// Id of the anchor element, without the leading `#`.
    pub anchor_id: String,
    /// Stylesheet URLs, in order.
    pub stylesheets: Vec<String>,
    /// URL of the client module; `None` renders a static page.
    pub module: Option<String>,
    /// Classes on `<body>`.
    pub body_class: String,
}

impl Default for ShellDocument {
    fn default() -> Self {
        Self {
            title: String::from("Panel"),
            anchor_id: String::from("app"),
            stylesheets: Vec::new(),
            module: None,
            body_class: String::new(),
        }
    }
}

impl ShellDocument {
    /// Render the page with `app_markup` pre-rendered inside the anchor.
    pub fn render(&self, app_markup: &str) -> String {
        let stylesheets: String = self
            .stylesheets
            .iter()
            .map(|href| format!(r#"<link rel="stylesheet" href="{}" />"#, escape(href)))
            .collect();

        let script = self
            .module
            .as_ref()
            .map(|src| {
                format!(
                    r#"<script type="module">import init from '{}'; init().catch((error) => console.error('Failed to load WASM:', error));</script>"#,
                    escape(src)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{title}</title>
{stylesheets}
</head>
<body class="{body_class}">
<div id="{anchor_id}">{app_markup}</div>
{script}
</body>
</html>
"#,
            title = escape(&self.title),
            body_class = escape(&self.body_class),
            anchor_id = escape(&self.anchor_id),
        )
    }
}
