//! Reusable components for panel applications.

mod router_link;

pub use router_link::{ACTIVE_CLASS, RouterLink};
