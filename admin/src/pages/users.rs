use panel::{Html, View};

use super::page;

/// Table of users.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsers;

impl View for ListUsers {
    fn render(&self) -> Html {
        page(
            "Users",
            r#"<div class="d-flex justify-content-end mb-2"><button type="button" class="btn btn-primary"><i class="fa fa-plus-circle mr-1"></i> Add New User</button></div><div class="card"><div class="card-body"><table class="table table-bordered"><thead><tr><th>#</th><th>Name</th><th>Email</th><th>Registered Date</th><th>Role</th><th>Options</th></tr></thead><tbody><tr><td colspan="6" class="text-center">No users found.</td></tr></tbody></table></div></div>"#,
        )
    }
}
