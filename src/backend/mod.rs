use crate::backend::error::BackendError;
use crate::profile::Profile;
use serde::Deserialize;

pub(crate) mod client;
pub use client::{BackendClient, Credentials};
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The authenticated user record returned by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Get the currently authenticated user, if there is one.
    async fn current_user(&self) -> Result<Option<Identity>, BackendError>;
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataStore: Send + Sync {
    /// Select `card` and `name` from the agents table for the given owner,
    /// expecting exactly one row.
    async fn single_agent(&self, user_id: &str) -> Result<Profile, BackendError>;
}
