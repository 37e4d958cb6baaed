//! Participant Chip Component
//!
//! One participant: avatar with a status-colored border, name, status label
//! and, for the event owner, a remove control.

use dioxus::prelude::*;
use rendezvous_core::{ChipView, ParticipantId, UserId};

/// Avatar image, falling back to initials when there is no URL
#[component]
pub fn Avatar(
    url: String,
    initials: String,
    /// Inline style, used for the status border
    #[props(default)]
    style: String,
) -> Element {
    if url.is_empty() {
        return rsx! {
            div { class: "avatar avatar-placeholder", style: "{style}", "{initials}" }
        };
    }

    rsx! {
        img { class: "avatar", src: "{url}", alt: "{initials}", style: "{style}" }
    }
}

/// Properties for the ParticipantChip component
#[derive(Clone, PartialEq, Props)]
pub struct ParticipantChipProps {
    pub chip: ChipView,
    /// Called with the participant id when the remove control is clicked
    pub on_delete: EventHandler<ParticipantId>,
    /// Called with the user id when the pointer enters the chip
    pub on_hover: EventHandler<UserId>,
    pub on_leave: EventHandler<()>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for chip in state.read().chips(ViewContext::EventDetail) {
///         ParticipantChip {
///             chip,
///             on_delete: move |id| state.write().request_delete(id),
///             on_hover: move |uid| tracing::debug!("hover {uid}"),
///             on_leave: move |_| {},
///         }
///     }
/// }
/// ```
#[component]
pub fn ParticipantChip(props: ParticipantChipProps) -> Element {
    let chip = props.chip.clone();
    let user_id = chip.user_id.clone();
    let participant_id = chip.participant_id.clone();
    let on_delete = props.on_delete;
    let on_hover = props.on_hover;
    let on_leave = props.on_leave;

    rsx! {
        div {
            class: "{chip.variant.class()}",
            onmouseenter: move |_| on_hover.call(user_id.clone()),
            onmouseleave: move |_| on_leave.call(()),

            Avatar {
                url: chip.avatar_url.clone(),
                initials: chip.initials.clone(),
                style: chip.badge.avatar_style(),
            }
            div { class: "chip-text",
                span { class: "chip-name", "{chip.name}" }
                span { class: "chip-status", "{chip.badge.label}" }
            }
            if chip.deletable {
                button {
                    class: "chip-delete",
                    r#type: "button",
                    "aria-label": "Remove {chip.name}",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_delete.call(participant_id.clone());
                    },
                    "\u{00D7}"
                }
            }
        }
    }
}
