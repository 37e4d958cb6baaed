//! Participants List Component
//!
//! Header with an add-participant button, one chip per participant, and the
//! delete confirmation modal. Persistence stays with the parent: removal goes
//! through `on_delete_guest`, inviting through `on_invite_guests`.

use dioxus::prelude::*;
use rendezvous_core::{
    DeleteGuest, Event, ParticipantId, ParticipantsConfig, ParticipantsState, User, UserId,
    ViewContext,
};

use crate::components::{AddGuestButton, DeleteGuestModal, ParticipantChip};

/// Properties for the ParticipantsList component
#[derive(Clone, PartialEq, Props)]
pub struct ParticipantsListProps {
    /// The signed-in user
    pub cur_user: User,
    /// Event whose participants are listed
    pub event: Event,
    /// Where the list is shown; picks the chip style
    #[props(default)]
    pub view_context: ViewContext,
    /// Called when the add-participant button is clicked
    pub on_invite_guests: EventHandler<()>,
    /// Removes a participant and resolves to the updated event
    pub on_delete_guest: DeleteGuest,
    #[props(default)]
    pub on_chip_hover: Option<EventHandler<UserId>>,
    #[props(default)]
    pub on_chip_leave: Option<EventHandler<()>>,
    #[props(default)]
    pub config: ParticipantsConfig,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParticipantsList {
///         cur_user: me(),
///         event: event(),
///         view_context: ViewContext::EventDetail,
///         on_invite_guests: move |_| show_invite.set(true),
///         on_delete_guest: DeleteGuest::new(move |id| store.delete_participant(id)),
///     }
/// }
/// ```
#[component]
pub fn ParticipantsList(props: ParticipantsListProps) -> Element {
    let mut state =
        use_signal(|| ParticipantsState::new(props.event.clone(), props.cur_user.clone()));

    // Mirror every new event/user the parent passes down
    let event = props.event.clone();
    let cur_user = props.cur_user.clone();
    use_effect(use_reactive!(|(event, cur_user)| {
        if let Some(stale) = state.write().sync_props(event, cur_user) {
            tracing::debug!("Resync dropped pending delete: {}", stale);
        }
    }));

    let on_chip_hover = props.on_chip_hover;
    let on_chip_leave = props.on_chip_leave;
    let on_invite_guests = props.on_invite_guests;
    let on_delete_guest = props.on_delete_guest.clone();
    let delete_timeout = props.config.delete_timeout;

    // Props that the effect above has not committed yet still render now
    let (chips, modal_open, busy, pending_name, error) = {
        let s = state.read();
        let (shown, _) = s.render_snapshots(&props.event, &props.cur_user);
        let pending_name = s
            .pending_delete_guest_id()
            .and_then(|id| shown.participant(id))
            .map(|p| p.user.name.clone());
        (
            s.chips_for(&props.event, &props.cur_user, props.view_context),
            s.delete_modal_open(),
            s.flow().is_deleting(),
            pending_name,
            s.last_error().map(|e| e.to_string()),
        )
    };

    let confirm_delete = move |_| {
        let guest_id = match state.write().begin_confirm() {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("Ignoring confirm: {}", e);
                return;
            }
        };
        let op = on_delete_guest.clone();
        spawn(async move {
            let result = op.run(guest_id.clone(), delete_timeout).await;
            state.write().complete_delete(guest_id, result);
        });
    };

    rsx! {
        div { class: "participants-list",
            div { class: "participants-header",
                p { class: "participants-title", "Participants" }
                AddGuestButton { onclick: move |_| on_invite_guests.call(()) }
            }

            if let Some(message) = error {
                div { class: "participants-error", role: "alert",
                    span { "{message}" }
                    button {
                        class: "error-dismiss",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| state.write().clear_error(),
                        "\u{00D7}"
                    }
                }
            }

            div { class: "guests-container",
                for chip in chips {
                    div { key: "{chip.participant_id}",
                        ParticipantChip {
                            chip: chip.clone(),
                            on_delete: move |guest_id: ParticipantId| {
                                if let Err(e) = state.write().request_delete(guest_id) {
                                    tracing::warn!("Cannot stage delete: {}", e);
                                }
                            },
                            on_hover: move |user_id: UserId| {
                                state.write().set_hover(Some(user_id.clone()));
                                if let Some(handler) = &on_chip_hover {
                                    handler.call(user_id);
                                }
                            },
                            on_leave: move |_| {
                                state.write().set_hover(None);
                                if let Some(handler) = &on_chip_leave {
                                    handler.call(());
                                }
                            },
                        }
                    }
                }
            }

            DeleteGuestModal {
                open: modal_open,
                guest_name: pending_name,
                busy: busy,
                on_cancel: move |_| {
                    if let Err(e) = state.write().cancel() {
                        tracing::debug!("Ignoring cancel: {}", e);
                    }
                },
                on_confirm: confirm_delete,
            }
        }
    }
}
