use dioxus::prelude::*;

use crate::pages::{Dashboard, EventPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard overview with the participants at a glance
/// - `/event` - The event page, where hovering a participant shows their availability
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/event")]
    EventPage {},
}

/// Root application component.
///
/// Provides global styles, session context, the live event snapshot and routing.
#[component]
pub fn App() -> Element {
    let Some(session) = crate::session() else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            p { class: "fatal", "Rendezvous was started without a session" }
        };
    };

    let store = session.store.clone();
    let mut event = use_signal(|| store.current());

    use_context_provider(|| session.clone());
    use_context_provider(|| event);

    // Follow every snapshot the store publishes
    use_effect(move || {
        let mut updates = store.subscribe();
        spawn(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                tracing::debug!(participants = next.participants.len(), "Event snapshot updated");
                event.set(next);
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
