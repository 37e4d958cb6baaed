//! Session context for Rendezvous.
//!
//! Provides the event store, the signed-in user and the list settings to all
//! components via use_context, along with the latest event snapshot.
//!
//! ## Usage
//!
//! ```ignore
//! let app = use_app();
//! let event = use_event();
//!
//! rsx! { "{event.read().name}" }
//! ```

use dioxus::prelude::*;
use rendezvous_core::{Event, ParticipantsConfig, User};

use crate::store::SharedStore;

/// What the app was launched with
#[derive(Clone)]
pub struct AppContext {
    pub store: SharedStore,
    pub cur_user: User,
    pub config: ParticipantsConfig,
}

/// Hook to access the session from context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the latest event snapshot published by the store.
///
/// Updated by the root component whenever the store changes, so every page
/// passes the same snapshot down as props.
pub fn use_event() -> Signal<Event> {
    use_context::<Signal<Event>>()
}
