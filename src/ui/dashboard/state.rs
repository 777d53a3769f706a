//! Dashboard state management
//!
//! Contains the dashboard view state, its lifetime (mount/unmount) and the
//! updates its background tasks deliver.

use super::mount::{spawn_loading_timer, spawn_profile_fetch};
use crate::backend::{AuthProvider, DataStore};
use crate::consts::dashboard::{
    MAX_DIAGNOSTIC_LOGS, STAR_COUNT, VIEW_UPDATE_QUEUE_SIZE, loading_duration,
};
use crate::events::Event;
use crate::profile::Profile;
use crate::stars::{self, StarPosition};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Which of the two mutually exclusive render branches is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Ready,
}

/// What the view does with a failed profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the failure and leave the profile block absent.
    #[default]
    Suppress,
    /// Log the failure and also show it, with a retry affordance.
    Surface,
}

/// External services a view reads from.
#[derive(Clone)]
pub struct Collaborators {
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn DataStore>,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Messages from a mount's background tasks to its view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// The loading timer fired.
    LoadingElapsed(Event),
    /// The profile lookup found exactly one agent.
    ProfileLoaded(Profile),
    /// The profile lookup failed; the event describes why.
    ProfileFailed(Event),
}

/// State of one mounted dashboard.
#[derive(Debug)]
pub struct DashboardView {
    /// Background star positions, drawn once at mount.
    pub stars: Vec<StarPosition>,
    /// When the view was mounted; drives every animation.
    pub mounted_at: Instant,
    /// Frame counter.
    pub tick: usize,
    /// Whether to paint the dark page background.
    pub with_background_color: bool,
    /// Visibility of lookup failures.
    pub error_policy: ErrorPolicy,
    /// Recent diagnostic events (bounded)
    pub diagnostics: VecDeque<Event>,

    phase: LoadingPhase,
    profile: Option<Profile>,
    /// Message of the most recent lookup failure, cleared by a retry
    last_failure: Option<String>,
    fetch_in_flight: bool,
    mounted: bool,

    collaborators: Collaborators,
    update_sender: mpsc::Sender<ViewUpdate>,
    update_receiver: mpsc::Receiver<ViewUpdate>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl DashboardView {
    /// Mounts a new dashboard: draws the star field, starts the loading timer
    /// and starts the profile lookup.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(collaborators: Collaborators, ui_config: &UIConfig) -> Self {
        let (update_sender, update_receiver) = mpsc::channel(VIEW_UPDATE_QUEUE_SIZE);
        let cancel = CancellationToken::new();

        let timer = spawn_loading_timer(loading_duration(), update_sender.clone(), cancel.clone());
        let fetch = spawn_profile_fetch(
            collaborators.clone(),
            update_sender.clone(),
            cancel.clone(),
        );

        Self {
            stars: stars::generate_random(STAR_COUNT),
            mounted_at: Instant::now(),
            tick: 0,
            with_background_color: ui_config.with_background_color,
            error_policy: ui_config.error_policy,
            diagnostics: VecDeque::new(),
            phase: LoadingPhase::Loading,
            profile: None,
            last_failure: None,
            fetch_in_flight: true,
            mounted: true,
            collaborators,
            update_sender,
            update_receiver,
            cancel,
            tasks: vec![timer, fetch],
        }
    }

    /// Tears the view down. Pending and in-flight updates are discarded.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.cancel.cancel();
        self.update_receiver.close();
        while self.update_receiver.try_recv().is_ok() {}
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    /// Starts another profile lookup after a failure.
    ///
    /// Only available when failures are surfaced, no profile is held and no
    /// lookup is running. Returns whether a lookup was started.
    pub fn retry_profile(&mut self) -> bool {
        if !self.mounted
            || self.error_policy != ErrorPolicy::Surface
            || self.profile.is_some()
            || self.fetch_in_flight
        {
            return false;
        }
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(spawn_profile_fetch(
            self.collaborators.clone(),
            self.update_sender.clone(),
            self.cancel.clone(),
        ));
        self.fetch_in_flight = true;
        self.last_failure = None;
        true
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadingPhase::Loading
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// The failure to show, if failures are surfaced and one is pending.
    pub fn visible_failure(&self) -> Option<&str> {
        match self.error_policy {
            ErrorPolicy::Surface => self.last_failure.as_deref(),
            ErrorPolicy::Suppress => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether both the loading gate and the profile lookup have completed.
    pub fn is_settled(&self) -> bool {
        self.phase == LoadingPhase::Ready && !self.fetch_in_flight
    }

    // Setters for updaters

    pub(super) fn set_phase(&mut self, phase: LoadingPhase) {
        self.phase = phase;
    }

    pub(super) fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub(super) fn set_last_failure(&mut self, message: Option<String>) {
        self.last_failure = message;
    }

    pub(super) fn set_fetch_in_flight(&mut self, in_flight: bool) {
        self.fetch_in_flight = in_flight;
    }

    pub(super) fn update_receiver_mut(&mut self) -> &mut mpsc::Receiver<ViewUpdate> {
        &mut self.update_receiver
    }

    /// Add an event to the diagnostics with size limit
    pub fn add_diagnostic(&mut self, event: Event) {
        if self.diagnostics.len() >= MAX_DIAGNOSTIC_LOGS {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(event);
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.unmount();
    }
}
