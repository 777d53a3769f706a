//! Dashboard state update logic
//!
//! Applies the updates delivered by a mount's background tasks

use super::state::{DashboardView, LoadingPhase, ViewUpdate};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;

impl DashboardView {
    /// Advance the frame and apply every pending update.
    ///
    /// Does nothing once the view is unmounted.
    pub fn update(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.tick += 1;

        while let Ok(update) = self.update_receiver_mut().try_recv() {
            self.apply_update(update);
        }
    }

    /// Wait for the next update and apply it. Returns `false` once the view
    /// is unmounted.
    pub async fn next_update(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let update = self.update_receiver_mut().recv().await;
        match update {
            Some(update) => {
                self.apply_update(update);
                true
            }
            None => false,
        }
    }

    fn apply_update(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::LoadingElapsed(event) => {
                // One-way: Loading -> Ready.
                if self.is_loading() {
                    self.set_phase(LoadingPhase::Ready);
                    self.add_diagnostic(event);
                }
            }
            ViewUpdate::ProfileLoaded(profile) => {
                self.add_diagnostic(Event::data_store_with_level(
                    format!("Fetched agent {} ({})", profile.name, profile.card),
                    EventType::Success,
                    LogLevel::Info,
                ));
                self.set_profile(profile);
                self.set_last_failure(None);
                self.set_fetch_in_flight(false);
            }
            ViewUpdate::ProfileFailed(event) => {
                self.set_last_failure(Some(event.msg.clone()));
                self.add_diagnostic(event);
                self.set_fetch_in_flight(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::error::BackendError;
    use crate::backend::{Identity, MockAuthProvider, MockDataStore};
    use crate::events::Source;
    use crate::profile::Profile;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::{Collaborators, DashboardView, ErrorPolicy, LoadingPhase};
    use std::sync::Arc;
    use std::time::Duration;

    fn scout() -> Profile {
        Profile {
            card: "fox01".to_string(),
            name: "Scout".to_string(),
        }
    }

    fn signed_in() -> MockAuthProvider {
        let mut auth = MockAuthProvider::new();
        auth.expect_current_user().returning(|| {
            Ok(Some(Identity {
                id: "user-1".to_string(),
                email: None,
            }))
        });
        auth
    }

    fn signed_out() -> MockAuthProvider {
        let mut auth = MockAuthProvider::new();
        auth.expect_current_user().returning(|| Ok(None));
        auth
    }

    fn store_returning(result: fn() -> Result<Profile, BackendError>) -> MockDataStore {
        let mut store = MockDataStore::new();
        store.expect_single_agent().returning(move |_| result());
        store
    }

    fn collaborators(auth: MockAuthProvider, store: MockDataStore) -> Collaborators {
        Collaborators {
            auth: Arc::new(auth),
            store: Arc::new(store),
        }
    }

    fn config(error_policy: ErrorPolicy) -> UIConfig {
        UIConfig::new(false, error_policy)
    }

    /// Let the clock run past `ms` and apply whatever arrived.
    async fn advance(view: &mut DashboardView, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
        view.update();
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_becomes_ready_after_loading_duration() {
        let mut view = DashboardView::mount(
            collaborators(signed_in(), store_returning(|| Ok(scout()))),
            &config(ErrorPolicy::Suppress),
        );
        assert_eq!(view.phase(), LoadingPhase::Loading);
        assert_eq!(view.stars.len(), 100);

        advance(&mut view, 900).await;
        assert_eq!(view.phase(), LoadingPhase::Loading);

        advance(&mut view, 200).await;
        assert_eq!(view.phase(), LoadingPhase::Ready);

        // Never reverts.
        advance(&mut view, 5_000).await;
        assert_eq!(view.phase(), LoadingPhase::Ready);
        let timer_events = view
            .diagnostics
            .iter()
            .filter(|event| event.source == Source::Timer)
            .count();
        assert_eq!(timer_events, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_may_land_before_ready() {
        let mut view = DashboardView::mount(
            collaborators(signed_in(), store_returning(|| Ok(scout()))),
            &config(ErrorPolicy::Suppress),
        );

        advance(&mut view, 10).await;
        assert_eq!(view.profile(), Some(&scout()));
        assert!(view.is_loading());
        assert!(!view.is_settled());

        advance(&mut view, 1_000).await;
        assert!(view.is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_before_timer_prevents_later_updates() {
        let mut view = DashboardView::mount(
            collaborators(signed_in(), store_returning(|| Ok(scout()))),
            &config(ErrorPolicy::Suppress),
        );
        view.unmount();
        assert!(!view.is_mounted());

        advance(&mut view, 2_000).await;
        assert_eq!(view.phase(), LoadingPhase::Loading);
        assert_eq!(view.profile(), None);
        assert_eq!(view.tick, 0);
        assert!(!view.next_update().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identity_failure_leaves_profile_unset_without_row_query() {
        let mut store = MockDataStore::new();
        store.expect_single_agent().times(0);
        let mut view = DashboardView::mount(
            collaborators(signed_out(), store),
            &config(ErrorPolicy::Suppress),
        );

        advance(&mut view, 1_100).await;
        assert!(view.is_settled());
        assert_eq!(view.profile(), None);
        // Logged, not shown.
        let sources: Vec<Source> = view.diagnostics.iter().map(|event| event.source).collect();
        assert_eq!(sources, vec![Source::Identity, Source::Timer]);
        assert_eq!(view.visible_failure(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_row_failures_leave_profile_unset() {
        for result in [
            (|| Err(BackendError::NoRows)) as fn() -> Result<Profile, BackendError>,
            || Err(BackendError::MultipleRows(2)),
            || {
                Err(BackendError::Http {
                    status: 500,
                    message: "boom".to_string(),
                })
            },
        ] {
            let mut view = DashboardView::mount(
                collaborators(signed_in(), store_returning(result)),
                &config(ErrorPolicy::Suppress),
            );
            advance(&mut view, 1_100).await;
            assert!(view.is_settled());
            assert_eq!(view.profile(), None);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_suppressed_failures_cannot_be_retried() {
        let mut view = DashboardView::mount(
            collaborators(signed_in(), store_returning(|| Err(BackendError::NoRows))),
            &config(ErrorPolicy::Suppress),
        );
        advance(&mut view, 1_100).await;
        assert!(!view.retry_profile());
    }

    #[tokio::test(start_paused = true)]
    async fn test_surfaced_failure_can_be_retried() {
        let mut store = MockDataStore::new();
        let mut seq = mockall::Sequence::new();
        store
            .expect_single_agent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(BackendError::NoRows));
        store
            .expect_single_agent()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(scout()));

        let mut view = DashboardView::mount(
            collaborators(signed_in(), store),
            &config(ErrorPolicy::Surface),
        );
        advance(&mut view, 1_100).await;
        assert_eq!(
            view.visible_failure(),
            Some("Error fetching agent: no agent row found")
        );

        assert!(view.retry_profile());
        // Only one lookup at a time.
        assert!(!view.retry_profile());
        assert_eq!(view.visible_failure(), None);

        advance(&mut view, 10).await;
        assert_eq!(view.profile(), Some(&scout()));
        assert!(!view.retry_profile());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_mount_draws_fresh_stars() {
        let first = DashboardView::mount(
            collaborators(signed_out(), MockDataStore::new()),
            &config(ErrorPolicy::Suppress),
        );
        let second = DashboardView::mount(
            collaborators(signed_out(), MockDataStore::new()),
            &config(ErrorPolicy::Suppress),
        );
        assert_ne!(first.stars, second.stars);
    }
}
