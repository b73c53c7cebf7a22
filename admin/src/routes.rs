//! The admin route table.

use panel::Routes;

use crate::pages::{Dashboard, ListAppointments, ListUsers, UpdateProfile, UpdateSetting};

/// Every page of the admin area, in table order.
#[derive(Routes, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminRoute {
    /// Landing page.
    #[route(path = "/admin/dashboard", name = "admin.dashboard", component = Dashboard)]
    Dashboard,
    /// Appointment list.
    #[route(
        path = "/admin/appointments",
        name = "admin.appointments",
        component = ListAppointments
    )]
    Appointments,
    /// User list.
    #[route(path = "/admin/users", name = "admin.users", component = ListUsers)]
    Users,
    /// Application settings form.
    #[route(path = "/admin/settings", name = "admin.settings", component = UpdateSetting)]
    Settings,
    /// Profile form of the signed-in user.
    #[route(path = "/admin/profile", name = "admin.profile", component = UpdateProfile)]
    Profile,
}

impl AdminRoute {
    /// Sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            AdminRoute::Dashboard => "Dashboard",
            AdminRoute::Appointments => "Appointments",
            AdminRoute::Users => "Users",
            AdminRoute::Settings => "Settings",
            AdminRoute::Profile => "Profile",
        }
    }

    /// Font Awesome icon class for the sidebar entry.
    pub fn icon(self) -> &'static str {
        match self {
            AdminRoute::Dashboard => "fas fa-tachometer-alt",
            AdminRoute::Appointments => "fas fa-calendar-alt",
            AdminRoute::Users => "fas fa-users",
            AdminRoute::Settings => "fas fa-cog",
            AdminRoute::Profile => "fas fa-user",
        }
    }
}
