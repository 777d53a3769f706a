//! Backend Client
//!
//! A client for the hosted backend: the auth endpoint answers "who is the
//! current user", the REST endpoint answers row queries against the agents
//! table.

use crate::backend::error::BackendError;
use crate::backend::{AuthProvider, DataStore, Identity};
use crate::consts::backend::{AGENT_COLUMNS, AGENTS_TABLE, request_timeout};
use crate::environment::Environment;
use crate::profile::Profile;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("agent-dashboard/", env!("CARGO_PKG_VERSION"));

/// Credentials attached to every backend request.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Public project key sent as the `apikey` header.
    pub api_key: String,
    /// Session token of the signed-in user, if any.
    pub access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
    credentials: Credentials,
}

impl BackendClient {
    pub fn new(environment: Environment, credentials: Credentials) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(request_timeout())
            .timeout(request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
            credentials,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.backend_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Path and query selecting the agent row owned by `user_id`.
    fn agent_query(user_id: &str) -> String {
        format!(
            "rest/v1/{}?select={}&user_id=eq.{}",
            AGENTS_TABLE,
            AGENT_COLUMNS,
            urlencoding::encode(user_id)
        )
    }

    fn authorize(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request
            .header("apikey", &self.credentials.api_key)
            .bearer_auth(access_token)
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        access_token: &str,
    ) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        let request = self.authorize(self.client.get(&url), access_token);
        let response = request.header("Accept", "application/json").send().await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Reduce a row set to the single row the caller expects.
pub(crate) fn expect_single(mut rows: Vec<Profile>) -> Result<Profile, BackendError> {
    match rows.len() {
        0 => Err(BackendError::NoRows),
        1 => Ok(rows.remove(0)),
        n => Err(BackendError::MultipleRows(n)),
    }
}

#[async_trait::async_trait]
impl AuthProvider for BackendClient {
    async fn current_user(&self) -> Result<Option<Identity>, BackendError> {
        let Some(token) = self.credentials.access_token.as_deref() else {
            return Ok(None);
        };
        let identity: Identity = self.get_json("auth/v1/user", token).await?;
        Ok(Some(identity))
    }
}

#[async_trait::async_trait]
impl DataStore for BackendClient {
    async fn single_agent(&self, user_id: &str) -> Result<Profile, BackendError> {
        let token = self
            .credentials
            .access_token
            .as_deref()
            .ok_or(BackendError::NoSession)?;
        let rows: Vec<Profile> = self.get_json(&Self::agent_query(user_id), token).await?;
        expect_single(rows)
    }
}
