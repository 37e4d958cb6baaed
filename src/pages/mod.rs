//! Page components for Rendezvous.

mod dashboard;
mod event_page;

pub use dashboard::Dashboard;
pub use event_page::EventPage;
