//! Availability Panel Component
//!
//! Shows the slots submitted by whichever participant the pointer is over.

use dioxus::prelude::*;
use rendezvous_core::{Event, UserId};

/// Slot lines for `user_id`, one per submitted range
pub fn availability_lines(event: &Event, user_id: &UserId) -> Vec<String> {
    event
        .participants
        .iter()
        .find(|p| &p.user.id == user_id)
        .map(|p| {
            p.availability
                .iter()
                .filter(|slot| !slot.is_empty())
                .map(|slot| slot.join(" \u{2192} "))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn AvailabilityPanel(event: Event, hovered: Option<UserId>) -> Element {
    let Some(user_id) = hovered else {
        return rsx! {
            div { class: "availability-panel muted", "Hover a participant to see their availability" }
        };
    };

    let name = event
        .participants
        .iter()
        .find(|p| p.user.id == user_id)
        .map(|p| p.user.name.clone())
        .unwrap_or_default();
    let lines = availability_lines(&event, &user_id);

    rsx! {
        div { class: "availability-panel",
            h3 { class: "panel-title", "{name}" }
            if lines.is_empty() {
                p { class: "muted", "No availability submitted yet" }
            } else {
                ul {
                    for line in lines {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}
