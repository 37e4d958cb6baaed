//! What each participant chip shows, derived from props alone.
//!
//! Nothing here reads ambient state: the caller supplies the event, the
//! current user and the [`ViewContext`] the list is rendered in.

use serde::{Deserialize, Serialize};

use crate::initials::name_initials;
use crate::types::{Event, Participant, ParticipantId, ParticipantStatus, User, UserId};

/// Avatar border drawn around a participant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Border {
    /// Thick red: invitation not yet answered
    ThickRed,
    /// Thick blue: joined the event
    ThickBlue,
    /// Thin grey: availability submitted
    ThinGrey,
}

impl Border {
    /// CSS `border` shorthand
    pub fn css(&self) -> &'static str {
        match self {
            Border::ThickRed => "3px solid #ff8080",
            Border::ThickBlue => "3px solid #A0C2FF",
            Border::ThinGrey => "0.5px solid #E0E0E0",
        }
    }
}

/// Border and label for one status
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusBadge {
    pub border: Option<Border>,
    pub label: &'static str,
}

impl StatusBadge {
    /// Inline style for the avatar, empty when there is no border
    pub fn avatar_style(&self) -> String {
        self.border
            .map(|b| format!("border: {};", b.css()))
            .unwrap_or_default()
    }
}

pub fn status_badge(status: ParticipantStatus) -> StatusBadge {
    match status {
        ParticipantStatus::Invited => StatusBadge {
            border: Some(Border::ThickRed),
            label: "Invited",
        },
        ParticipantStatus::Joined => StatusBadge {
            border: Some(Border::ThickBlue),
            label: "Joined",
        },
        ParticipantStatus::AvailabilitySubmitted => StatusBadge {
            border: Some(Border::ThinGrey),
            label: "Availability Submitted",
        },
        ParticipantStatus::Unknown => StatusBadge {
            border: None,
            label: "",
        },
    }
}

/// Where the list is being shown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ViewContext {
    /// Dashboard overview of all events
    Dashboard,
    /// A single event's page
    #[default]
    EventDetail,
}

/// Visual chip style
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChipVariant {
    Plain,
    HoverReactive,
}

impl ChipVariant {
    pub fn for_context(context: ViewContext) -> Self {
        match context {
            ViewContext::Dashboard => ChipVariant::Plain,
            ViewContext::EventDetail => ChipVariant::HoverReactive,
        }
    }

    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ChipVariant::Plain => "chip",
            ChipVariant::HoverReactive => "chip chip-hover",
        }
    }
}

/// Whether `cur_user` may remove `participant` from `event`.
///
/// Only the owner can remove guests, and nobody can remove themselves.
pub fn can_delete(event: &Event, cur_user: &User, participant: &Participant) -> bool {
    event.is_owned_by(&cur_user.id) && cur_user.id != participant.user.id
}

/// Everything a chip needs to render one participant
#[derive(Clone, PartialEq, Debug)]
pub struct ChipView {
    pub participant_id: ParticipantId,
    pub user_id: UserId,
    pub name: String,
    pub avatar_url: String,
    /// Alt text and placeholder for the avatar
    pub initials: String,
    pub badge: StatusBadge,
    pub deletable: bool,
    pub variant: ChipVariant,
}

impl ChipView {
    pub fn new(event: &Event, cur_user: &User, participant: &Participant, context: ViewContext) -> Self {
        Self {
            participant_id: participant.id.clone(),
            user_id: participant.user.id.clone(),
            name: participant.user.name.clone(),
            avatar_url: participant.user.avatar_url.clone(),
            initials: name_initials(&participant.user.name),
            badge: status_badge(participant.status),
            deletable: can_delete(event, cur_user, participant),
            variant: ChipVariant::for_context(context),
        }
    }
}

/// One chip per participant, in the event's order.
pub fn chip_views(event: &Event, cur_user: &User, context: ViewContext) -> Vec<ChipView> {
    event
        .participants
        .iter()
        .map(|p| ChipView::new(event, cur_user, p, context))
        .collect()
}
