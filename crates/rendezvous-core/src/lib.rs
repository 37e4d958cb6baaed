//! Rendezvous Core Library
//!
//! Framework-free logic behind the participants list of a Rendezvous event:
//! who is invited, what each chip shows, and the two-step flow an event
//! owner goes through to remove a guest.
//!
//! ## Overview
//!
//! The list is view glue. Persistence belongs to the parent application,
//! which passes in an [`Event`] snapshot, the current [`User`] and a
//! [`DeleteGuest`] operation. This crate keeps the transient state around
//! those inputs in a [`ParticipantsState`] and derives the rendered chips
//! from it with [`chip_views`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use rendezvous_core::{DeleteGuest, Event, ParticipantsState, User, ViewContext};
//!
//! let event = Event::from_json(&body)?;
//! let me = User::from_json(&me_json)?;
//! let mut state = ParticipantsState::new(event, me);
//!
//! for chip in state.chips(ViewContext::EventDetail) {
//!     println!("{} {} {}", chip.initials, chip.badge.label, chip.deletable);
//! }
//!
//! state.request_delete("p2".into())?;
//! let outcome = state.confirm_delete(&delete_op, config.delete_timeout).await?;
//! ```

pub mod chip;
pub mod config;
pub mod delete;
pub mod error;
pub mod flow;
pub mod holder;
pub mod initials;
pub mod types;
pub mod wire;

// Re-exports
pub use chip::{can_delete, chip_views, status_badge, Border, ChipVariant, ChipView, StatusBadge, ViewContext};
pub use config::{ParticipantsConfig, DEFAULT_DELETE_TIMEOUT};
pub use delete::{DeleteFuture, DeleteGuest};
pub use error::{ParticipantsError, ParticipantsResult};
pub use flow::DeleteFlow;
pub use holder::{DeleteOutcome, ParticipantsState};
pub use initials::name_initials;
pub use types::*;
pub use wire::{WireDateRange, WireEvent, WireParticipant, WireUser};
