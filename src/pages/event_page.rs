//! Event page - participants with hover feedback and their availability.

use dioxus::prelude::*;
use rendezvous_core::UserId;
use rendezvous_ui::ParticipantsList;

use crate::components::{AvailabilityPanel, InviteDrawer, NavHeader, NavLocation};
use crate::context::{use_app, use_event};

#[component]
pub fn EventPage() -> Element {
    let app = use_app();
    let event = use_event();
    let mut show_invite = use_signal(|| false);
    let mut hovered: Signal<Option<UserId>> = use_signal(|| None);
    let mut fail_deletes = use_signal(|| app.store.behavior().fail_deletes);

    let location = NavLocation::Event;
    let snapshot = event();
    let delete_op = use_hook(|| app.store.delete_op());
    let invite_store = app.store.clone();
    let toggle_store = app.store.clone();

    rsx! {
        NavHeader { current: location, event_name: snapshot.name.clone() }
        main { class: "page event-page",
            div { class: "event-columns",
                ParticipantsList {
                    cur_user: app.cur_user.clone(),
                    event: snapshot.clone(),
                    view_context: location.view_context(),
                    on_invite_guests: move |_| show_invite.toggle(),
                    on_delete_guest: delete_op,
                    on_chip_hover: move |user_id: UserId| hovered.set(Some(user_id)),
                    on_chip_leave: move |_| hovered.set(None),
                    config: app.config,
                }
                AvailabilityPanel { event: snapshot.clone(), hovered: hovered() }
            }
            label { class: "debug-toggle",
                input {
                    r#type: "checkbox",
                    checked: fail_deletes(),
                    onchange: move |e| {
                        let fail = e.checked();
                        toggle_store.set_fail_deletes(fail);
                        fail_deletes.set(fail);
                        tracing::info!(fail, "Simulated delete failures toggled");
                    },
                }
                "Simulate failed deletes"
            }
            InviteDrawer {
                open: show_invite(),
                on_close: move |_| show_invite.set(false),
                on_invite: move |name: String| {
                    invite_store.invite(&name);
                },
            }
        }
    }
}
