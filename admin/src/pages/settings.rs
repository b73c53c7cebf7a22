use panel::{Html, View};

use super::page;

/// Application settings form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSetting;

impl View for UpdateSetting {
    fn render(&self) -> Html {
        let fields: String = [
            ("appName", "App Name", "text"),
            ("dateFormat", "Date Format", "text"),
            ("paginationLimit", "Pagination Limit", "number"),
        ]
        .iter()
        .map(|(id, label, kind)| {
            format!(
                r#"<div class="form-group"><label for="{id}">{label}</label><input type="{kind}" class="form-control" id="{id}" placeholder="Enter {label}" /></div>"#
            )
        })
        .collect();

        page(
            "Settings",
            &format!(
                r#"<div class="card card-primary"><div class="card-header"><h3 class="card-title">General Setting</h3></div><form><div class="card-body">{fields}</div><div class="card-footer"><button type="submit" class="btn btn-primary"><i class="fa fa-save mr-1"></i>Save Changes</button></div></form></div>"#
            ),
        )
    }
}
