//! Delete Guest Modal Component
//!
//! Asks the event owner to confirm removing a guest.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Confirmation prompt, naming the guest when known
pub fn confirm_message(guest_name: Option<&str>) -> String {
    match guest_name {
        Some(name) if !name.trim().is_empty() => {
            format!("Are you sure you want to delete {} from this event?", name.trim())
        }
        _ => "Are you sure you want to delete this guest?".to_string(),
    }
}

/// Modal confirming a guest removal.
///
/// Only Cancel or Yes close it; clicks on the backdrop are ignored. While
/// `busy` the delete is in flight and both actions are disabled.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DeleteGuestModal {
///         open: state.read().delete_modal_open(),
///         guest_name: Some("John Roe".to_string()),
///         on_cancel: move |_| cancel_delete(),
///         on_confirm: move |_| confirm_delete(),
///     }
/// }
/// ```
#[component]
pub fn DeleteGuestModal(
    open: bool,
    /// Display name of the guest pending deletion
    #[props(default = None)]
    guest_name: Option<String>,
    /// Delete operation outstanding
    #[props(default = false)]
    busy: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let message = confirm_message(guest_name.as_deref());

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "delete-guest-modal",
                role: "alertdialog",
                "aria-modal": "true",

                h2 { class: "modal-title danger", "Delete Guest" }
                p { class: "modal-body", "{message}" }

                if busy {
                    p { class: "modal-busy", "Removing guest\u{2026}" }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                }
            }
        }
    }
}
