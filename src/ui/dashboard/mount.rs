//! Background tasks started when a dashboard mounts
//!
//! Every task is bound to the view's cancellation token and reports through
//! the view's update channel; a task whose view is gone exits without effect.

use super::state::{Collaborators, ViewUpdate};
use crate::error_handler::ErrorHandler;
use crate::events::{Event, EventType};
use crate::profile::{ProfileError, fetch_profile};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// One-shot timer that ends the loading phase.
pub(super) fn spawn_loading_timer(
    duration: Duration,
    sender: mpsc::Sender<ViewUpdate>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(duration) => {
                let event = Event::timer(format!("Loading finished after {}ms", duration.as_millis()));
                event.emit();
                let _ = sender.send(ViewUpdate::LoadingElapsed(event)).await;
            }
        }
    })
}

/// Identity lookup followed by the agent row query.
pub(super) fn spawn_profile_fetch(
    collaborators: Collaborators,
    sender: mpsc::Sender<ViewUpdate>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = tokio::select! {
            _ = cancel.cancelled() => return,
            result = fetch_profile(collaborators.auth.as_ref(), collaborators.store.as_ref()) => result,
        };

        let update = match result {
            Ok(profile) => ViewUpdate::ProfileLoaded(profile),
            Err(e) => {
                let event = failure_event(&e);
                event.emit();
                ViewUpdate::ProfileFailed(event)
            }
        };

        // The view may have unmounted during the lookup.
        if cancel.is_cancelled() {
            return;
        }
        let _ = sender.send(update).await;
    })
}

fn failure_event(error: &ProfileError) -> Event {
    let log_level = ErrorHandler::new().classify_profile_error(error);
    match error {
        ProfileError::IdentityUnavailable(_) => {
            Event::identity_with_level(error.to_string(), EventType::Error, log_level)
        }
        ProfileError::ProfileUnavailable(_) => {
            Event::data_store_with_level(error.to_string(), EventType::Error, log_level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::BackendError;
    use crate::events::Source;
    use crate::logging::LogLevel;

    #[test]
    fn test_failure_event_names_the_failing_collaborator() {
        let identity = failure_event(&ProfileError::IdentityUnavailable(BackendError::NoSession));
        assert_eq!(identity.source, Source::Identity);
        assert_eq!(identity.log_level, LogLevel::Error);
        assert_eq!(identity.msg, "Error getting user: no authenticated user");

        let rows = failure_event(&ProfileError::ProfileUnavailable(BackendError::NoRows));
        assert_eq!(rows.source, Source::DataStore);
        assert_eq!(rows.log_level, LogLevel::Warn);
        assert_eq!(rows.event_type, EventType::Error);
    }
}
