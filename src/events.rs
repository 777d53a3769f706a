//! Event System
//!
//! Diagnostic events raised by the dashboard's background tasks

use crate::logging::{LogLevel, is_displayed_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The one-shot loading timer.
    Timer,
    /// The auth collaborator (current user lookup).
    Identity,
    /// The data-store collaborator (agent row query).
    DataStore,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn identity_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Identity, msg, event_type, log_level)
    }

    pub fn data_store_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::DataStore, msg, event_type, log_level)
    }

    pub fn timer(msg: String) -> Self {
        Self::new(Source::Timer, msg, EventType::Refresh, LogLevel::Debug)
    }

    /// Forward the event to the `log` facade at its own level.
    pub fn emit(&self) {
        log::log!(
            log::Level::from(self.log_level),
            "[{}] {}: {}",
            self.source,
            self.event_type,
            self.msg
        );
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Error {
            return true;
        }
        is_displayed_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
