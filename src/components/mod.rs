//! Page-level components for Rendezvous.

mod availability_panel;
mod invite_drawer;
mod nav_header;

pub use availability_panel::AvailabilityPanel;
pub use invite_drawer::InviteDrawer;
pub use nav_header::{NavHeader, NavLocation};
