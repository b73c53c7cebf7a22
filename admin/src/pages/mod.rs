//! One component per admin route.

mod appointments;
mod dashboard;
mod profile;
mod settings;
mod users;

pub use appointments::ListAppointments;
pub use dashboard::Dashboard;
pub use profile::UpdateProfile;
pub use settings::UpdateSetting;
pub use users::ListUsers;

use panel::{Html, escape};

/// Content header with the page title and breadcrumb, followed by `body`.
pub(crate) fn page(title: &str, body: &str) -> Html {
    let title = escape(title);

    Html::new(format!(
        r#"<div class="content-header"><div class="container-fluid"><div class="row mb-2"><div class="col-sm-6"><h1 class="m-0">{title}</h1></div><div class="col-sm-6"><ol class="breadcrumb float-sm-right"><li class="breadcrumb-item"><a href="/admin/dashboard" data-panel-link="">Home</a></li><li class="breadcrumb-item active">{title}</li></ol></div></div></div></div><div class="content"><div class="container-fluid">{body}</div></div>"#
    ))
}
