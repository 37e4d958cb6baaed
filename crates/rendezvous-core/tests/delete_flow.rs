//! Delete confirmation flow driven end to end through ParticipantsState.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rendezvous_core::{
    DeleteGuest, DeleteOutcome, Event, Participant, ParticipantId, ParticipantStatus,
    ParticipantsError, ParticipantsState, User,
};

const TIMEOUT: Duration = Duration::from_secs(5);

fn owner() -> User {
    User::new("u1", "Jane Doe")
}

fn event() -> Event {
    Event::new("e1", "Offsite", "u1")
        .with_participant(Participant::new("p1", owner(), ParticipantStatus::Joined))
        .with_participant(Participant::new(
            "p2",
            User::new("u2", "John Roe"),
            ParticipantStatus::Invited,
        ))
        .with_participant(Participant::new(
            "p3",
            User::new("u3", "Ada Lane"),
            ParticipantStatus::AvailabilitySubmitted,
        ))
}

fn without(event: &Event, id: &ParticipantId) -> Event {
    let mut next = event.clone();
    next.participants.retain(|p| &p.id != id);
    next
}

/// Delete op backed by a fixed event that counts its calls
fn removing_op(calls: Arc<AtomicUsize>) -> DeleteGuest {
    DeleteGuest::new(move |id: ParticipantId| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(without(&event(), &id)))
        }
    })
}

#[tokio::test]
async fn test_request_then_cancel_leaves_event_unchanged() {
    let mut state = ParticipantsState::new(event(), owner());
    state.request_delete(ParticipantId::from("p2")).unwrap();
    assert!(state.delete_modal_open());

    state.cancel().unwrap();
    assert!(state.flow().is_idle());
    assert_eq!(state.event(), &event());
    assert_eq!(state.pending_delete_guest_id(), None);
}

#[tokio::test]
async fn test_confirm_success_replaces_event() {
    let calls = Arc::new(AtomicUsize::new(0));
    let op = removing_op(calls.clone());
    let mut state = ParticipantsState::new(event(), owner());

    state.request_delete(ParticipantId::from("p2")).unwrap();
    let outcome = state.confirm_delete(&op, TIMEOUT).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(state.event(), &without(&event(), &ParticipantId::from("p2")));
    assert!(state.flow().is_idle());
    assert!(state.last_error().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_confirm_empty_result_keeps_event() {
    let op = DeleteGuest::new(|_id| async { Ok(None) });
    let mut state = ParticipantsState::new(event(), owner());

    state.request_delete(ParticipantId::from("p3")).unwrap();
    let outcome = state.confirm_delete(&op, TIMEOUT).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(state.event(), &event());
    assert!(state.flow().is_idle());
    match state.last_error() {
        Some(ParticipantsError::DeleteFailed { guest_id }) => assert_eq!(guest_id.as_str(), "p3"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_confirm_backend_error_keeps_event() {
    let op = DeleteGuest::new(|_id| async { Err(ParticipantsError::Backend("503".into())) });
    let mut state = ParticipantsState::new(event(), owner());

    state.request_delete(ParticipantId::from("p2")).unwrap();
    let outcome = state.confirm_delete(&op, TIMEOUT).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(state.event(), &event());
    assert!(matches!(state.last_error(), Some(ParticipantsError::Backend(_))));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_timeout_closes_modal() {
    let op = DeleteGuest::new(|_id| async {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Some(Event::new("never", "never", "u1")))
    });
    let mut state = ParticipantsState::new(event(), owner());

    state.request_delete(ParticipantId::from("p2")).unwrap();
    let outcome = state
        .confirm_delete(&op, Duration::from_millis(250))
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert!(!state.delete_modal_open());
    assert_eq!(state.event(), &event());
    assert!(matches!(
        state.last_error(),
        Some(ParticipantsError::DeleteTimedOut { timeout_ms: 250, .. })
    ));
}

#[tokio::test]
async fn test_confirm_without_request_does_not_call_op() {
    let calls = Arc::new(AtomicUsize::new(0));
    let op = removing_op(calls.clone());
    let mut state = ParticipantsState::new(event(), owner());

    let err = state.confirm_delete(&op, TIMEOUT).await.unwrap_err();
    assert!(matches!(err, ParticipantsError::NoPendingDelete));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_second_confirm_while_in_flight_is_rejected() {
    let mut state = ParticipantsState::new(event(), owner());
    state.request_delete(ParticipantId::from("p2")).unwrap();

    let guest_id = state.begin_confirm().unwrap();
    assert!(matches!(
        state.begin_confirm(),
        Err(ParticipantsError::DeleteInFlight)
    ));
    assert!(state.delete_modal_open());

    let outcome = state.complete_delete(guest_id.clone(), Ok(Some(without(&event(), &guest_id))));
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(!state.delete_modal_open());
}

#[tokio::test]
async fn test_successful_delete_clears_previous_error() {
    let mut state = ParticipantsState::new(event(), owner());

    state.request_delete(ParticipantId::from("p2")).unwrap();
    let id = state.begin_confirm().unwrap();
    state.complete_delete(id, Ok(None));
    assert!(state.last_error().is_some());

    let op = removing_op(Arc::new(AtomicUsize::new(0)));
    state.request_delete(ParticipantId::from("p2")).unwrap();
    state.confirm_delete(&op, TIMEOUT).await.unwrap();
    assert!(state.last_error().is_none());
}
