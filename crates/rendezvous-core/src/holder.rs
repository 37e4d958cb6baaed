//! UI-local state of a participants list.
//!
//! Holds the latest event and user snapshots as pushed by the parent, the
//! delete confirmation flow, the hovered chip and the last delete error.
//! Snapshots are always overwritten wholesale; the only local edit to the
//! event is replacing it with the snapshot a successful delete returns.

use std::time::Duration;

use crate::chip::{chip_views, ChipView, ViewContext};
use crate::delete::DeleteGuest;
use crate::error::{ParticipantsError, ParticipantsResult};
use crate::flow::DeleteFlow;
use crate::types::{Event, ParticipantId, User, UserId};

/// How a confirmed delete ended
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeleteOutcome {
    /// The event was replaced by the snapshot the delete returned
    Deleted,
    /// The event was left as it was; see [`ParticipantsState::last_error`]
    Failed,
}

#[derive(Debug)]
pub struct ParticipantsState {
    event: Event,
    cur_user: User,
    /// Props as of the last sync, to tell a new parent push from a local edit
    synced_event: Event,
    synced_user: User,
    flow: DeleteFlow,
    hover_active: Option<UserId>,
    last_error: Option<ParticipantsError>,
}

impl ParticipantsState {
    pub fn new(event: Event, cur_user: User) -> Self {
        Self {
            synced_event: event.clone(),
            synced_user: cur_user.clone(),
            event,
            cur_user,
            flow: DeleteFlow::Idle,
            hover_active: None,
            last_error: None,
        }
    }

    /// Replace both snapshots with the ones the parent just passed.
    ///
    /// If a guest is awaiting confirmation and the new event no longer
    /// contains it, the confirmation is dropped and a
    /// [`ParticipantsError::StaleSnapshot`] is returned.
    pub fn sync_props(&mut self, event: Event, cur_user: User) -> Option<ParticipantsError> {
        self.synced_event = event.clone();
        self.synced_user = cur_user.clone();
        self.event = event;
        self.cur_user = cur_user;

        let DeleteFlow::PendingConfirm { guest_id } = &self.flow else {
            return None;
        };
        if self.event.contains_participant(guest_id) {
            return None;
        }

        let guest_id = guest_id.clone();
        tracing::warn!(%guest_id, event = %self.event.id, "Pending delete target vanished, cancelling");
        self.flow = DeleteFlow::Idle;
        Some(ParticipantsError::StaleSnapshot { guest_id })
    }

    /// Whether `event`/`cur_user` differ from the props last passed to
    /// [`Self::sync_props`]
    pub fn needs_sync(&self, event: &Event, cur_user: &User) -> bool {
        &self.synced_event != event || &self.synced_user != cur_user
    }

    /// Snapshots to render for the props just received.
    ///
    /// Props the state has not been synced with yet win; otherwise the held
    /// snapshots, which may carry the event a successful delete returned.
    pub fn render_snapshots<'a>(
        &'a self,
        event: &'a Event,
        cur_user: &'a User,
    ) -> (&'a Event, &'a User) {
        if self.needs_sync(event, cur_user) {
            (event, cur_user)
        } else {
            (&self.event, &self.cur_user)
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn cur_user(&self) -> &User {
        &self.cur_user
    }

    pub fn flow(&self) -> &DeleteFlow {
        &self.flow
    }

    pub fn delete_modal_open(&self) -> bool {
        self.flow.modal_open()
    }

    pub fn pending_delete_guest_id(&self) -> Option<&ParticipantId> {
        self.flow.pending_guest()
    }

    pub fn hover_active(&self) -> Option<&UserId> {
        self.hover_active.as_ref()
    }

    pub fn set_hover(&mut self, user_id: Option<UserId>) {
        self.hover_active = user_id;
    }

    pub fn last_error(&self) -> Option<&ParticipantsError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Chips for the current snapshots
    pub fn chips(&self, context: ViewContext) -> Vec<ChipView> {
        chip_views(&self.event, &self.cur_user, context)
    }

    /// Chips for a render that received `event`/`cur_user` as props
    pub fn chips_for(&self, event: &Event, cur_user: &User, context: ViewContext) -> Vec<ChipView> {
        let (event, cur_user) = self.render_snapshots(event, cur_user);
        chip_views(event, cur_user, context)
    }

    /// Open the confirmation modal for `guest_id`.
    pub fn request_delete(&mut self, guest_id: ParticipantId) -> ParticipantsResult<()> {
        if !self.event.contains_participant(&guest_id) {
            return Err(ParticipantsError::StaleSnapshot { guest_id });
        }
        self.flow.request_delete(guest_id)
    }

    pub fn cancel(&mut self) -> ParticipantsResult<()> {
        self.flow.cancel()
    }

    /// Mark the pending guest as being deleted and return its id.
    pub fn begin_confirm(&mut self) -> ParticipantsResult<ParticipantId> {
        self.flow.begin_confirm()
    }

    /// Apply the result of the delete operation for `guest_id` and close the
    /// modal.
    pub fn complete_delete(
        &mut self,
        guest_id: ParticipantId,
        result: ParticipantsResult<Option<Event>>,
    ) -> DeleteOutcome {
        self.flow.finish();

        let err = match result {
            Ok(Some(event)) => {
                tracing::info!(%guest_id, event = %event.id, "Guest deleted");
                self.event = event;
                self.last_error = None;
                return DeleteOutcome::Deleted;
            }
            Ok(None) => ParticipantsError::DeleteFailed { guest_id },
            Err(e) => e,
        };

        tracing::warn!("Delete failed: {}", err);
        self.last_error = Some(err);
        DeleteOutcome::Failed
    }

    /// Confirm the pending delete and wait for it to settle.
    ///
    /// Errors only when there is nothing to confirm or a delete is already in
    /// flight; delete failures are reported through [`DeleteOutcome::Failed`].
    pub async fn confirm_delete(
        &mut self,
        op: &DeleteGuest,
        timeout: Duration,
    ) -> ParticipantsResult<DeleteOutcome> {
        let guest_id = self.begin_confirm()?;
        let result = op.run(guest_id.clone(), timeout).await;
        Ok(self.complete_delete(guest_id, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Participant, ParticipantStatus};

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
    }

    #[test]
    fn sync_props_overwrites_snapshots() {
        let mut state = ParticipantsState::new(event(), owner());
        let next = Event::new("e2", "Retro", "u9");
        let user = User::new("u9", "Sam Poe");
        assert!(state.sync_props(next.clone(), user.clone()).is_none());
        assert_eq!(state.event(), &next);
        assert_eq!(state.cur_user(), &user);
    }

    #[test]
    fn sync_props_cancels_stale_pending_delete() {
        let mut state = ParticipantsState::new(event(), owner());
        state.request_delete(ParticipantId::from("p2")).unwrap();

        let mut next = event();
        next.participants.retain(|p| p.id.as_str() != "p2");
        let err = state.sync_props(next, owner());

        assert!(matches!(err, Some(ParticipantsError::StaleSnapshot { .. })));
        assert!(!state.delete_modal_open());
        assert_eq!(state.pending_delete_guest_id(), None);
    }

    #[test]
    fn sync_props_keeps_valid_pending_delete() {
        let mut state = ParticipantsState::new(event(), owner());
        state.request_delete(ParticipantId::from("p2")).unwrap();
        assert!(state.sync_props(event(), owner()).is_none());
        assert_eq!(state.pending_delete_guest_id(), Some(&ParticipantId::from("p2")));
    }

    #[test]
    fn sync_props_while_deleting_lets_result_decide() {
        let mut state = ParticipantsState::new(event(), owner());
        state.request_delete(ParticipantId::from("p2")).unwrap();
        let id = state.begin_confirm().unwrap();

        let mut next = event();
        next.participants.retain(|p| p.id.as_str() != "p2");
        assert!(state.sync_props(next.clone(), owner()).is_none());
        assert!(state.flow().is_deleting());
        assert_eq!(state.pending_delete_guest_id(), Some(&id));

        let outcome = state.complete_delete(id, Ok(Some(next.clone())));
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(state.flow().is_idle());
        assert_eq!(state.event(), &next);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn unsynced_props_are_rendered_first() {
        let mut state = ParticipantsState::new(event(), owner());
        let mut next = event();
        next.participants.retain(|p| p.id.as_str() != "p2");

        assert!(state.needs_sync(&next, &owner()));
        let user = owner();
        let (shown, _) = state.render_snapshots(&next, &user);
        assert_eq!(shown, &next);
        assert_eq!(state.chips_for(&next, &user, ViewContext::EventDetail).len(), 1);
        assert_eq!(state.chips(ViewContext::EventDetail).len(), 2);

        state.sync_props(next.clone(), owner());
        assert!(!state.needs_sync(&next, &owner()));
        assert_eq!(state.chips(ViewContext::EventDetail).len(), 1);
    }

    #[test]
    fn local_delete_result_survives_unchanged_props() {
        let props = event();
        let mut state = ParticipantsState::new(props.clone(), owner());
        state.request_delete(ParticipantId::from("p2")).unwrap();
        let id = state.begin_confirm().unwrap();

        let mut after = event();
        after.participants.retain(|p| p.id.as_str() != "p2");
        state.complete_delete(id, Ok(Some(after.clone())));

        let user = owner();
        let (shown, _) = state.render_snapshots(&props, &user);
        assert_eq!(shown, &after);
    }

    #[test]
    fn request_unknown_guest_is_rejected() {
        let mut state = ParticipantsState::new(event(), owner());
        assert!(matches!(
            state.request_delete(ParticipantId::from("nope")),
            Err(ParticipantsError::StaleSnapshot { .. })
        ));
        assert!(!state.delete_modal_open());
    }

    #[test]
    fn hover_is_tracked() {
        let mut state = ParticipantsState::new(event(), owner());
        state.set_hover(Some(UserId::from("u2")));
        assert_eq!(state.hover_active(), Some(&UserId::from("u2")));
        state.set_hover(None);
        assert_eq!(state.hover_active(), None);
    }

    #[test]
    fn failed_delete_records_error_until_cleared() {
        let mut state = ParticipantsState::new(event(), owner());
        state.request_delete(ParticipantId::from("p2")).unwrap();
        let id = state.begin_confirm().unwrap();

        let outcome = state.complete_delete(id, Ok(None));
        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(state.event(), &event());
        assert!(matches!(
            state.last_error(),
            Some(ParticipantsError::DeleteFailed { .. })
        ));

        state.clear_error();
        assert!(state.last_error().is_none());
    }
}
