//! The parent's delete operation, as handed to the participants list.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::error::{ParticipantsError, ParticipantsResult};
use crate::types::{Event, ParticipantId};

/// Future returned by a delete operation.
///
/// Resolves to the replacement event on success, `None` when the data layer
/// reports that nothing was deleted.
pub type DeleteFuture = BoxFuture<'static, ParticipantsResult<Option<Event>>>;

/// Shared handle to the async delete callback.
///
/// Two handles compare equal only when they point at the same closure, which
/// keeps component props comparable without re-rendering on every parent
/// render that passes the same handle.
#[derive(Clone)]
pub struct DeleteGuest(Arc<dyn Fn(ParticipantId) -> DeleteFuture + Send + Sync>);

impl DeleteGuest {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(ParticipantId) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ParticipantsResult<Option<Event>>> + Send + 'static,
    {
        Self(Arc::new(move |id| f(id).boxed()))
    }

    pub fn call(&self, guest_id: ParticipantId) -> DeleteFuture {
        (self.0)(guest_id)
    }

    /// Run the delete for `guest_id`, giving up after `timeout`.
    pub async fn run(
        &self,
        guest_id: ParticipantId,
        timeout: Duration,
    ) -> ParticipantsResult<Option<Event>> {
        match tokio::time::timeout(timeout, self.call(guest_id.clone())).await {
            Ok(result) => result,
            Err(_) => Err(ParticipantsError::DeleteTimedOut {
                guest_id,
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }
}

impl PartialEq for DeleteGuest {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DeleteGuest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeleteGuest").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_guest_id_through() {
        let op = DeleteGuest::new(|id: ParticipantId| async move {
            Ok(Some(Event::new("e1", id.to_string(), "u1")))
        });
        let event = op
            .run(ParticipantId::from("p7"), Duration::from_secs(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.name, "p7");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_delete_times_out() {
        let op = DeleteGuest::new(|_id| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        });
        let err = op
            .run(ParticipantId::from("p1"), Duration::from_millis(500))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ParticipantsError::DeleteTimedOut { timeout_ms: 500, .. }
        ));
    }

    #[test]
    fn equality_is_by_identity() {
        let a = DeleteGuest::new(|_id| async { Ok(None) });
        let b = a.clone();
        let c = DeleteGuest::new(|_id| async { Ok(None) });
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
