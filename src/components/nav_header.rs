//! Navigation Header Component
//!
//! App title, links to the dashboard and the event page.

use dioxus::prelude::*;
use rendezvous_core::ViewContext;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Dashboard,
    Event,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Dashboard",
            NavLocation::Event => "Event",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Event => Route::EventPage {},
        }
    }

    /// How lists rendered at this location style their chips
    pub fn view_context(&self) -> ViewContext {
        match self {
            NavLocation::Dashboard => ViewContext::Dashboard,
            NavLocation::Event => ViewContext::EventDetail,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
    /// Event name shown next to the title
    pub event_name: String,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [NavLocation::Dashboard, NavLocation::Event];

    rsx! {
        header { class: "nav-header",
            div { class: "nav-title",
                span { class: "app-name", "Rendezvous" }
                span { class: "event-name", "{props.event_name}" }
            }
            nav { class: "nav-links",
                for location in locations {
                    Link {
                        to: location.route(),
                        class: if location == props.current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }
        }
    }
}
