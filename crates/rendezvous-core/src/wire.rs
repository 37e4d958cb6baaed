//! Incoming event and user data in the shape the data layer sends it.
//!
//! Every field is optional here so that a missing required value can be
//! reported by name instead of surfacing as a generic deserialization error.
//! Conversion into the typed model happens once, at this boundary:
//!
//! ```ignore
//! let event = Event::from_json(&body)?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ParticipantsError, ParticipantsResult};
use crate::types::{DateRange, Event, Participant, ParticipantStatus, User};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Older payloads carry the id as `id`, sometimes next to `_id`
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub emails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParticipant {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<WireUser>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub email_update: Option<bool>,
    #[serde(default)]
    pub owner_notified: Option<bool>,
    #[serde(default)]
    pub availability: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDateRange {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEvent {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub selected_time_range: Option<Vec<WireDateRange>>,
    #[serde(default)]
    pub dates: Option<Vec<WireDateRange>>,
    #[serde(default)]
    pub participants: Option<Vec<WireParticipant>>,
}

fn require<T>(value: Option<T>, field: impl FnOnce() -> String) -> ParticipantsResult<T> {
    value.ok_or_else(|| ParticipantsError::missing(field()))
}

impl WireUser {
    fn validate(self, path: &str) -> ParticipantsResult<User> {
        Ok(User {
            id: require(self.id.or(self.legacy_id), || format!("{path}._id"))?.into(),
            name: require(self.name, || format!("{path}.name"))?,
            avatar_url: self.avatar.unwrap_or_default(),
            emails: self.emails.unwrap_or_default(),
        })
    }
}

impl WireParticipant {
    fn validate(self, path: &str) -> ParticipantsResult<Participant> {
        let user = require(self.user_id, || format!("{path}.userId"))?
            .validate(&format!("{path}.userId"))?;
        Ok(Participant {
            id: require(self.id, || format!("{path}._id"))?.into(),
            user,
            status: self
                .status
                .map(ParticipantStatus::from)
                .unwrap_or_default(),
            email_update_requested: self.email_update.unwrap_or(false),
            owner_notified: self.owner_notified.unwrap_or(false),
            availability: self.availability.unwrap_or_default(),
        })
    }
}

impl WireDateRange {
    fn validate(self, path: &str) -> ParticipantsResult<DateRange> {
        Ok(DateRange {
            id: self.id,
            from_date: require(self.from_date, || format!("{path}.fromDate"))?,
            to_date: require(self.to_date, || format!("{path}.toDate"))?,
        })
    }
}

fn validate_ranges(
    ranges: Option<Vec<WireDateRange>>,
    path: &str,
) -> ParticipantsResult<Vec<DateRange>> {
    ranges
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, range)| range.validate(&format!("{path}[{i}]")))
        .collect()
}

impl TryFrom<WireUser> for User {
    type Error = ParticipantsError;

    fn try_from(wire: WireUser) -> ParticipantsResult<Self> {
        wire.validate("curUser")
    }
}

impl TryFrom<WireEvent> for Event {
    type Error = ParticipantsError;

    fn try_from(wire: WireEvent) -> ParticipantsResult<Self> {
        let participants = require(wire.participants, || "event.participants".to_string())?
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.validate(&format!("event.participants[{i}]")))
            .collect::<ParticipantsResult<Vec<_>>>()?;

        Ok(Event {
            id: require(wire.id, || "event._id".to_string())?.into(),
            name: require(wire.name, || "event.name".to_string())?,
            owner_id: require(wire.owner, || "event.owner".to_string())?.into(),
            active: wire.active.unwrap_or(false),
            selected_time_range: validate_ranges(
                wire.selected_time_range,
                "event.selectedTimeRange",
            )?,
            dates: validate_ranges(wire.dates, "event.dates")?,
            participants,
        })
    }
}

impl Event {
    /// Parse an event from the data layer's JSON and validate it
    pub fn from_json(json: &str) -> ParticipantsResult<Self> {
        let wire: WireEvent = serde_json::from_str(json)?;
        wire.try_into()
    }
}

impl User {
    /// Parse a user from the data layer's JSON and validate it
    pub fn from_json(json: &str) -> ParticipantsResult<Self> {
        let wire: WireUser = serde_json::from_str(json)?;
        wire.try_into()
    }
}
