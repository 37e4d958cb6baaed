//! In-memory event store standing in for the application's data layer.
//!
//! Holds one event, publishes every new snapshot on a watch channel, and
//! serves the delete callback handed to the participants list.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use parking_lot::RwLock;
use rendezvous_core::{
    DateRange, DeleteGuest, Event, Participant, ParticipantId, ParticipantStatus,
    ParticipantsResult, User,
};
use tokio::sync::watch;
use ulid::Ulid;

/// Knobs for exercising the delete path by hand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreBehavior {
    /// Resolve deletes with no event, as a failed backend call would
    pub fail_deletes: bool,
    /// Artificial round-trip time for deletes
    pub delete_latency: Duration,
}

pub struct EventStore {
    snapshot: watch::Sender<Event>,
    behavior: RwLock<StoreBehavior>,
}

pub type SharedStore = Arc<EventStore>;

impl EventStore {
    pub fn new(event: Event, behavior: StoreBehavior) -> Self {
        let (snapshot, _) = watch::channel(event);
        Self {
            snapshot,
            behavior: RwLock::new(behavior),
        }
    }

    pub fn current(&self) -> Event {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Event> {
        self.snapshot.subscribe()
    }

    pub fn behavior(&self) -> StoreBehavior {
        *self.behavior.read()
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.behavior.write().fail_deletes = fail;
    }

    /// Invite a new guest by name and publish the updated event
    pub fn invite(&self, name: &str) -> ParticipantId {
        let user = User::new(Ulid::new().to_string(), name.trim());
        let participant = Participant::new(Ulid::new().to_string(), user, ParticipantStatus::Invited);
        let id = participant.id.clone();
        self.snapshot
            .send_modify(|event| event.participants.push(participant));
        tracing::info!(%id, "Guest invited");
        id
    }

    /// Remove a participant, returning the new snapshot.
    ///
    /// `Ok(None)` when the participant is unknown or deletes are set to fail;
    /// the stored event is untouched in that case.
    pub async fn delete_participant(&self, id: ParticipantId) -> ParticipantsResult<Option<Event>> {
        let behavior = self.behavior();
        if !behavior.delete_latency.is_zero() {
            tokio::time::sleep(behavior.delete_latency).await;
        }
        if behavior.fail_deletes {
            tracing::warn!(%id, "Simulated delete failure");
            return Ok(None);
        }

        let mut removed = false;
        self.snapshot.send_if_modified(|event| {
            let before = event.participants.len();
            event.participants.retain(|p| p.id != id);
            removed = event.participants.len() != before;
            removed
        });

        if !removed {
            tracing::warn!(%id, "Delete of unknown participant");
            return Ok(None);
        }
        Ok(Some(self.current()))
    }

    /// Delete callback for the participants list
    pub fn delete_op(self: &Arc<Self>) -> DeleteGuest {
        let store = Arc::clone(self);
        DeleteGuest::new(move |id| {
            let store = Arc::clone(&store);
            async move { store.delete_participant(id).await }
        })
    }
}

/// Sample event owned by its first participant
pub fn seed_event() -> Event {
    let people = [
        ("Jane Doe", ParticipantStatus::Joined),
        ("John Roe", ParticipantStatus::Invited),
        ("Ada Lane", ParticipantStatus::AvailabilitySubmitted),
        ("Cher", ParticipantStatus::Joined),
        ("Mika Sato", ParticipantStatus::Unknown),
    ];

    let users: Vec<User> = people
        .iter()
        .map(|(name, _)| User::new(Ulid::new().to_string(), *name))
        .collect();

    let start = Utc::now() + ChronoDuration::days(7);
    let mut event = Event::new(Ulid::new().to_string(), "Quarterly planning", users[0].id.clone());
    event.dates.push(DateRange {
        id: Some(Ulid::new().to_string()),
        from_date: start,
        to_date: start + ChronoDuration::days(3),
    });

    for (user, (_, status)) in users.into_iter().zip(people) {
        event = event.with_participant(Participant::new(Ulid::new().to_string(), user, status));
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendezvous_core::ParticipantsError;

    fn store(behavior: StoreBehavior) -> SharedStore {
        Arc::new(EventStore::new(seed_event(), behavior))
    }

    #[test]
    fn seed_is_owned_by_first_participant() {
        let event = seed_event();
        assert_eq!(event.participants.len(), 5);
        assert_eq!(event.owner_id, event.participants[0].user.id);
        assert_eq!(event.dates.len(), 1);
    }

    #[tokio::test]
    async fn delete_publishes_new_snapshot() {
        let store = store(StoreBehavior::default());
        let mut rx = store.subscribe();
        let victim = store.current().participants[1].id.clone();

        let event = store.delete_participant(victim.clone()).await.unwrap().unwrap();
        assert!(!event.contains_participant(&victim));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), event);
    }

    #[tokio::test]
    async fn failing_store_keeps_event() {
        let store = store(StoreBehavior {
            fail_deletes: true,
            ..Default::default()
        });
        let before = store.current();
        let victim = before.participants[1].id.clone();

        assert!(store.delete_participant(victim).await.unwrap().is_none());
        assert_eq!(store.current(), before);
    }

    #[tokio::test]
    async fn unknown_participant_is_not_deleted() {
        let store = store(StoreBehavior::default());
        let result = store
            .delete_participant(ParticipantId::from("missing"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn delete_op_respects_timeout() {
        let store = store(StoreBehavior {
            delete_latency: Duration::from_secs(30),
            ..Default::default()
        });
        let victim = store.current().participants[1].id.clone();
        let err = store
            .delete_op()
            .run(victim, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ParticipantsError::DeleteTimedOut { .. }));
    }

    #[test]
    fn invite_appends_invited_guest() {
        let store = store(StoreBehavior::default());
        let id = store.invite("  Noor Haddad ");
        let event = store.current();
        let guest = event.participant(&id).unwrap();
        assert_eq!(guest.user.name, "Noor Haddad");
        assert_eq!(guest.status, ParticipantStatus::Invited);
        assert_eq!(event.participants.last().map(|p| &p.id), Some(&id));
    }
}
