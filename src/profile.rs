//! Agent profile lookup
//!
//! Resolves the signed-in user's agent in two sequential round trips: the
//! identity first, then the single row owned by that identity.

use crate::backend::error::BackendError;
use crate::backend::{AuthProvider, DataStore, Identity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The agent row associated with an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub card: String,
    pub name: String,
}

impl Profile {
    /// The looping clip shown next to the agent's name.
    pub fn video_source(&self) -> VideoSource {
        VideoSource {
            src: format!("/{}.mp4", self.card),
            autoplay: true,
            looped: true,
            muted: true,
            plays_inline: true,
        }
    }
}

/// A video resource resolved by convention from the agent's card.
/// The resource is not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub src: String,
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
    pub plays_inline: bool,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Error getting user: {0}")]
    IdentityUnavailable(BackendError),

    #[error("Error fetching agent: {0}")]
    ProfileUnavailable(BackendError),
}

impl ProfileError {
    pub fn backend_error(&self) -> &BackendError {
        match self {
            ProfileError::IdentityUnavailable(e) | ProfileError::ProfileUnavailable(e) => e,
        }
    }
}

/// Look up the current identity, then its agent row.
///
/// The row query is only issued once an identity is known.
pub async fn fetch_profile(
    auth: &dyn AuthProvider,
    store: &dyn DataStore,
) -> Result<Profile, ProfileError> {
    let identity: Identity = auth
        .current_user()
        .await
        .map_err(ProfileError::IdentityUnavailable)?
        .ok_or(ProfileError::IdentityUnavailable(BackendError::NoSession))?;
    log::debug!(
        "Resolved identity {} ({})",
        identity.id,
        identity.email.as_deref().unwrap_or("no email")
    );

    store
        .single_agent(&identity.id)
        .await
        .map_err(ProfileError::ProfileUnavailable)
}
