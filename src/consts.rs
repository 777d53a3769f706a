pub mod dashboard {
    //! Dashboard Configuration Constants
    //!
    //! Timing, sizing and routing constants for the agent dashboard,
    //! organized by functional area.

    use std::time::Duration;

    // =============================================================================
    // LOADING GATE
    // =============================================================================

    /// How long the loading indicator is shown after mount (milliseconds)
    pub const LOADING_DURATION_MS: u64 = 1000;

    /// Period of one sweep of the indeterminate loading bar (milliseconds)
    pub const LOADING_SWEEP_MS: u64 = 1000;

    /// Width of the loading track as a percentage of the content area
    pub const LOADING_TRACK_PERCENT: u16 = 80;

    /// Width of the moving highlight as a percentage of the track
    pub const LOADING_HIGHLIGHT_PERCENT: u16 = 30;

    pub const fn loading_duration() -> Duration {
        Duration::from_millis(LOADING_DURATION_MS)
    }

    // =============================================================================
    // STAR FIELD
    // =============================================================================

    /// Number of decorative stars generated per mount
    pub const STAR_COUNT: usize = 100;

    /// Upper bound (exclusive) of a star's twinkle delay (seconds)
    pub const MAX_TWINKLE_DELAY_SECS: f64 = 3.0;

    /// Upper bound (exclusive) of a star's drift delay (seconds)
    pub const MAX_DRIFT_DELAY_SECS: f64 = 5.0;

    /// Twinkle cycle: opacity 0.3 -> 1.0 -> 0.3 (seconds)
    pub const TWINKLE_PERIOD_SECS: f64 = 3.0;

    /// Drift cycle: down to the amplitude and back (seconds)
    pub const DRIFT_PERIOD_SECS: f64 = 15.0;

    /// Maximum drift offset in terminal rows
    pub const DRIFT_AMPLITUDE_ROWS: f64 = 3.0;

    /// Opacity floor of a twinkling star
    pub const TWINKLE_MIN_OPACITY: f64 = 0.3;

    // =============================================================================
    // QUEUES
    // =============================================================================

    /// Capacity of the channel carrying updates from mount tasks to the view
    pub const VIEW_UPDATE_QUEUE_SIZE: usize = 16;

    /// The maximum number of diagnostic events kept by a view
    pub const MAX_DIAGNOSTIC_LOGS: usize = 50;

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// Input poll interval; also the animation frame interval (milliseconds)
    pub const FRAME_INTERVAL_MS: u64 = 50;

    pub const fn frame_interval() -> Duration {
        Duration::from_millis(FRAME_INTERVAL_MS)
    }

    // =============================================================================
    // ROUTES
    // =============================================================================

    pub const LEADERBOARD_ROUTE: &str = "/leaderboard";
    pub const AGENT_SETTINGS_ROUTE: &str = "/agent-settings";
}

pub mod backend {
    //! Backend client constants

    use std::time::Duration;

    /// Connect and request timeout for backend calls (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Table holding one agent row per user
    pub const AGENTS_TABLE: &str = "agents";

    /// Columns selected from the agents table
    pub const AGENT_COLUMNS: &str = "card,name";

    pub const fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
