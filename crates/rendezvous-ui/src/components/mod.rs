//! Participants list components
//!
//! Chips, the delete confirmation modal and the buttons they use.

mod button;
mod delete_guest_modal;
mod participant_chip;
mod participants_list;

pub use button::*;
pub use delete_guest_modal::*;
pub use participant_chip::*;
pub use participants_list::*;
