use panel::{Html, View};

use super::page;

/// Landing page of the admin area.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dashboard;

impl View for Dashboard {
    fn render(&self) -> Html {
        let cards: String = [
            ("bg-info", "Appointments", "fas fa-calendar-alt"),
            ("bg-success", "Users", "fas fa-users"),
        ]
        .iter()
        .map(|(color, label, icon)| {
            format!(
                r#"<div class="col-lg-6"><div class="small-box {color}"><div class="inner"><h3>0</h3><p>{label}</p></div><div class="icon"><i class="{icon}"></i></div></div></div>"#
            )
        })
        .collect();

        page("Dashboard", &format!(r#"<div class="row">{cards}</div>"#))
    }
}
