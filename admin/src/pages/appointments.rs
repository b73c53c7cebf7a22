use panel::{Html, View};

use super::page;

/// Table of appointments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAppointments;

impl View for ListAppointments {
    fn render(&self) -> Html {
        page(
            "Appointments",
            r#"<div class="card"><div class="card-body"><table class="table table-bordered"><thead><tr><th>#</th><th>Client Name</th><th>Date</th><th>Time</th><th>Status</th><th>Options</th></tr></thead><tbody><tr><td colspan="6" class="text-center">No appointments found.</td></tr></tbody></table></div></div>"#,
        )
    }
}
