//! Session setup and initialization

use crate::backend::{BackendClient, Credentials};
use crate::config::Config;
use crate::environment::Environment;
use crate::ui::UIConfig;
use crate::ui::dashboard::{Collaborators, ErrorPolicy};
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Services the dashboard reads from
    pub collaborators: Collaborators,
    /// Backend deployment in use
    pub environment: Environment,
    /// Rendering options for every dashboard mount
    pub ui_config: UIConfig,
}

/// Options from the command line that override the stored configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub surface_errors: bool,
    pub with_background: bool,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Builds the backend client from the stored credentials
/// 2. Injects it as both the auth and the data-store collaborator
/// 3. Resolves the error policy
///
/// A missing session token is not an error: the dashboard renders without an
/// agent and the failed identity lookup is logged.
pub fn setup_session(
    config: &Config,
    environment: Environment,
    options: SessionOptions,
) -> Result<SessionData, Box<dyn Error>> {
    let credentials = Credentials {
        api_key: config.api_key.clone(),
        access_token: config.session_token().map(str::to_string),
    };
    let client = Arc::new(BackendClient::new(environment.clone(), credentials)?);

    let error_policy = if options.surface_errors || config.surface_errors {
        ErrorPolicy::Surface
    } else {
        ErrorPolicy::Suppress
    };

    Ok(SessionData {
        collaborators: Collaborators {
            auth: client.clone(),
            store: client,
        },
        environment,
        ui_config: UIConfig::new(options.with_background, error_policy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_config_or_flag() {
        let mut config = Config::default();
        let session =
            setup_session(&config, Environment::Local, SessionOptions::default()).unwrap();
        assert_eq!(session.ui_config.error_policy, ErrorPolicy::Suppress);

        let options = SessionOptions {
            surface_errors: true,
            with_background: true,
        };
        let session = setup_session(&config, Environment::Local, options).unwrap();
        assert_eq!(session.ui_config.error_policy, ErrorPolicy::Surface);
        assert!(session.ui_config.with_background_color);

        config.surface_errors = true;
        let session =
            setup_session(&config, Environment::Local, SessionOptions::default()).unwrap();
        assert_eq!(session.ui_config.error_policy, ErrorPolicy::Surface);
    }
}
