//! Rendezvous UI Components
//!
//! Dioxus components for showing who takes part in an event.
//!
//! ## Contents
//!
//! - [`ParticipantsList`]: the list itself, owning its transient state
//! - [`ParticipantChip`] and [`Avatar`]: one participant
//! - [`DeleteGuestModal`]: confirmation before removing a guest
//! - [`Button`], [`IconButton`], [`AddGuestButton`]
//!
//! State, validation and chip derivation live in `rendezvous-core`; these
//! components only render it and forward user input.

pub mod components;

pub use components::*;
