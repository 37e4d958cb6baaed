//! Core types for Rendezvous events and their participants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a user
    UserId
);

string_id!(
    /// Unique identifier for a participant record (a user's membership in one event)
    ParticipantId
);

string_id!(
    /// Unique identifier for an event
    EventId
);

/// A user as seen by the participants list
///
/// Owned by the parent application; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name
    pub name: String,
    /// URL of the avatar image (may be empty)
    pub avatar_url: String,
    #[serde(default)]
    pub emails: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: String::new(),
            emails: Vec::new(),
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }
}

/// Where a participant stands in answering an invitation
///
/// Incoming data carries this as an integer code. Codes outside 0..=3 are
/// folded into [`ParticipantStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum ParticipantStatus {
    #[default]
    Unknown = 0,
    Invited = 1,
    Joined = 2,
    AvailabilitySubmitted = 3,
}

impl ParticipantStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<i64> for ParticipantStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => ParticipantStatus::Unknown,
            1 => ParticipantStatus::Invited,
            2 => ParticipantStatus::Joined,
            3 => ParticipantStatus::AvailabilitySubmitted,
            other => {
                tracing::warn!(code = other, "Unrecognised participant status, treating as unknown");
                ParticipantStatus::Unknown
            }
        }
    }
}

impl From<ParticipantStatus> for u8 {
    fn from(status: ParticipantStatus) -> Self {
        status.code()
    }
}

/// A user's association with one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub user: User,
    pub status: ParticipantStatus,
    /// Whether the participant asked to be emailed about updates
    #[serde(default)]
    pub email_update_requested: bool,
    /// Whether the event owner has been told about this participant's answer
    #[serde(default)]
    pub owner_notified: bool,
    /// Submitted availability slots, one list of timestamps per range
    #[serde(default)]
    pub availability: Vec<Vec<String>>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, user: User, status: ParticipantStatus) -> Self {
        Self {
            id: id.into(),
            user,
            status,
            email_update_requested: false,
            owner_notified: false,
            availability: Vec::new(),
        }
    }
}

/// A span of time offered for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Ranges coming from the data layer carry an id; locally built ones may not
    #[serde(default)]
    pub id: Option<String>,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

/// Immutable snapshot of an event and its participants
///
/// The participants list never patches an event; any change arrives as a
/// whole replacement snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub selected_time_range: Vec<DateRange>,
    #[serde(default)]
    pub dates: Vec<DateRange>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    pub fn new(id: impl Into<EventId>, name: impl Into<String>, owner_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner_id: owner_id.into(),
            active: true,
            selected_time_range: Vec::new(),
            dates: Vec::new(),
            participants: Vec::new(),
        }
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn contains_participant(&self, id: &ParticipantId) -> bool {
        self.participant(id).is_some()
    }
}
