//! Two-step guest removal: request, then confirm or cancel.
//!
//! ```text
//!            request_delete            begin_confirm
//!   Idle ─────────────────▶ Pending ──────────────▶ Deleting
//!    ▲                        │  ▲                     │
//!    └──────── cancel ────────┘  └─ request_delete     │
//!    ▲                              (retarget)         │
//!    └──────────────────────── finish ─────────────────┘
//! ```
//!
//! `Deleting` covers the time the parent's delete operation is outstanding.
//! The modal stays open during it and a second confirmation is rejected, so
//! at most one delete is in flight per list.

use crate::error::{ParticipantsError, ParticipantsResult};
use crate::types::ParticipantId;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// Waiting for the owner to confirm or cancel
    PendingConfirm { guest_id: ParticipantId },
    /// Delete operation outstanding
    Deleting { guest_id: ParticipantId },
}

impl DeleteFlow {
    /// Stage `guest_id` for deletion. Retargets if already pending.
    pub fn request_delete(&mut self, guest_id: ParticipantId) -> ParticipantsResult<()> {
        if self.is_deleting() {
            return Err(ParticipantsError::DeleteInFlight);
        }
        tracing::debug!(%guest_id, "Delete requested");
        *self = DeleteFlow::PendingConfirm { guest_id };
        Ok(())
    }

    /// Drop the staged guest and close the modal.
    pub fn cancel(&mut self) -> ParticipantsResult<()> {
        match self {
            DeleteFlow::Deleting { .. } => Err(ParticipantsError::DeleteInFlight),
            DeleteFlow::PendingConfirm { guest_id } => {
                tracing::debug!(%guest_id, "Delete cancelled");
                *self = DeleteFlow::Idle;
                Ok(())
            }
            DeleteFlow::Idle => Ok(()),
        }
    }

    /// Move the staged guest into the in-flight state and hand back its id.
    pub fn begin_confirm(&mut self) -> ParticipantsResult<ParticipantId> {
        match self {
            DeleteFlow::Idle => Err(ParticipantsError::NoPendingDelete),
            DeleteFlow::Deleting { .. } => Err(ParticipantsError::DeleteInFlight),
            DeleteFlow::PendingConfirm { guest_id } => {
                let guest_id = guest_id.clone();
                *self = DeleteFlow::Deleting {
                    guest_id: guest_id.clone(),
                };
                Ok(guest_id)
            }
        }
    }

    /// Back to idle after the delete operation settled, whatever its result.
    pub fn finish(&mut self) {
        *self = DeleteFlow::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DeleteFlow::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteFlow::Deleting { .. })
    }

    /// The modal is visible while a guest is pending or being deleted
    pub fn modal_open(&self) -> bool {
        !self.is_idle()
    }

    pub fn pending_guest(&self) -> Option<&ParticipantId> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::PendingConfirm { guest_id } | DeleteFlow::Deleting { guest_id } => {
                Some(guest_id)
            }
        }
    }
}
