//! The admin shell: top bar, sidebar navigation and the content area the
//! router fills.

use panel::{Html, Layout, RouteContext, Routes, escape, outlet};
use panel_components::RouterLink;

use crate::routes::AdminRoute;

/// AdminLTE page chrome around the router outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLayout {
    title: String,
}

impl AdminLayout {
    /// Layout showing `title` as the brand.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn sidebar(&self, context: &RouteContext<'_>) -> String {
        AdminRoute::ALL
            .iter()
            .map(|route| {
                let content = Html::new(format!(
                    r#"<i class="nav-icon {}"></i><p>{}</p>"#,
                    route.icon(),
                    escape(route.title())
                ));
                let link = RouterLink::with_content(route.location(), content).class("nav-link");

                format!(r#"<li class="nav-item">{}</li>"#, link.render(context))
            })
            .collect()
    }
}

impl Default for AdminLayout {
    fn default() -> Self {
        Self::new("Admin")
    }
}

impl Layout for AdminLayout {
    fn render(&self, context: &RouteContext<'_>) -> Html {
        let title = escape(&self.title);
        let sidebar = self.sidebar(context);
        let content = outlet();

        Html::new(format!(
            r##"<div class="wrapper"><nav class="main-header navbar navbar-expand navbar-white navbar-light"><ul class="navbar-nav"><li class="nav-item"><a class="nav-link" data-widget="pushmenu" href="#" role="button"><i class="fas fa-bars"></i></a></li></ul></nav><aside class="main-sidebar sidebar-dark-primary elevation-4"><a href="/admin/dashboard" class="brand-link" data-panel-link=""><span class="brand-text font-weight-light">{title}</span></a><div class="sidebar"><nav class="mt-2"><ul class="nav nav-pills nav-sidebar flex-column" role="menu">{sidebar}</ul></nav></div></aside><div class="content-wrapper">{content}</div><footer class="main-footer"><strong>{title}</strong></footer></div>"##
        ))
    }
}
