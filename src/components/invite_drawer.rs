//! Invite Drawer Component
//!
//! Side panel opened by the participants list's add button. Invites a guest
//! by name into the in-memory store.

use dioxus::prelude::*;

/// Trimmed guest name, or None when there is nothing to invite
pub fn normalize_guest_name(raw: &str) -> Option<String> {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!name.is_empty()).then_some(name)
}

#[component]
pub fn InviteDrawer(
    open: bool,
    on_close: EventHandler<()>,
    /// Called with the guest's display name
    on_invite: EventHandler<String>,
) -> Element {
    let mut name = use_signal(String::new);

    if !open {
        return rsx! {};
    }

    let mut submit = move || {
        let normalized = normalize_guest_name(&name.read());
        if let Some(guest) = normalized {
            on_invite.call(guest);
            name.set(String::new());
        }
    };

    rsx! {
        aside { class: "invite-drawer",
            div { class: "drawer-header",
                h2 { class: "drawer-title", "Invite guests" }
                button {
                    class: "icon-btn",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
            input {
                class: "drawer-input",
                r#type: "text",
                placeholder: "Guest name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                class: "btn-primary",
                r#type: "button",
                disabled: normalize_guest_name(&name.read()).is_none(),
                onclick: move |_| submit(),
                "Invite"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_names_are_normalized() {
        assert_eq!(normalize_guest_name("  Noor   Haddad "), Some("Noor Haddad".to_string()));
        assert_eq!(normalize_guest_name("   "), None);
        assert_eq!(normalize_guest_name(""), None);
    }
}
