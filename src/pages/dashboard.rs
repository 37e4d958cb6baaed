//! Dashboard - the event at a glance.
//!
//! Chips are rendered plain here; hover feedback belongs to the event page.

use dioxus::prelude::*;
use rendezvous_ui::ParticipantsList;

use crate::components::{InviteDrawer, NavHeader, NavLocation};
use crate::context::{use_app, use_event};

/// Human-readable span of the event's candidate dates
fn date_summary(event: &rendezvous_core::Event) -> String {
    let from = event.dates.iter().map(|d| d.from_date).min();
    let to = event.dates.iter().map(|d| d.to_date).max();
    match (from, to) {
        (Some(from), Some(to)) => format!("{} \u{2013} {}", from.format("%b %e"), to.format("%b %e, %Y")),
        _ => "No dates proposed".to_string(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let app = use_app();
    let event = use_event();
    let mut show_invite = use_signal(|| false);

    let location = NavLocation::Dashboard;
    let snapshot = event();
    let dates = date_summary(&snapshot);
    let delete_op = use_hook(|| app.store.delete_op());
    let store = app.store.clone();

    rsx! {
        NavHeader { current: location, event_name: snapshot.name.clone() }
        main { class: "page dashboard",
            section { class: "event-summary",
                h1 { class: "page-title", "{snapshot.name}" }
                p { class: "event-dates", "{dates}" }
                p { class: "event-count", "{snapshot.participants.len()} participants" }
            }
            ParticipantsList {
                cur_user: app.cur_user.clone(),
                event: snapshot.clone(),
                view_context: location.view_context(),
                on_invite_guests: move |_| show_invite.toggle(),
                on_delete_guest: delete_op,
                config: app.config,
            }
            InviteDrawer {
                open: show_invite(),
                on_close: move |_| show_invite.set(false),
                on_invite: move |name: String| {
                    store.invite(&name);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rendezvous_core::{DateRange, Event};

    #[test]
    fn summary_spans_all_dates() {
        let mut event = Event::new("e1", "Offsite", "u1");
        assert_eq!(date_summary(&event), "No dates proposed");

        event.dates.push(DateRange {
            id: None,
            from_date: Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
            to_date: Utc.with_ymd_and_hms(2026, 3, 11, 17, 0, 0).unwrap(),
        });
        event.dates.push(DateRange {
            id: None,
            from_date: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            to_date: Utc.with_ymd_and_hms(2026, 3, 3, 17, 0, 0).unwrap(),
        });
        assert_eq!(date_summary(&event), "Mar  2 \u{2013} Mar 11, 2026");
    }
}
