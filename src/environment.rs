use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different backend deployments the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development stack.
    Local,
    /// Staging backend for pre-production testing.
    Staging,
    /// Production backend.
    #[default]
    Production,
    /// Any other deployment, addressed by its base URL.
    Custom { backend_url: String },
}

impl Environment {
    /// Returns the backend base URL associated with the environment.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:54321".to_string(),
            Environment::Staging => "https://staging.api.agentdash.xyz".to_string(),
            Environment::Production => "https://api.agentdash.xyz".to_string(),
            Environment::Custom { backend_url } => backend_url.clone(),
        }
    }

    /// Resolves the environment from `AGENT_DASHBOARD_ENV`, with
    /// `AGENT_DASHBOARD_URL` taking precedence when set.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("AGENT_DASHBOARD_URL") {
            if !url.trim().is_empty() {
                return Environment::Custom {
                    backend_url: url.trim().to_string(),
                };
            }
        }
        std::env::var("AGENT_DASHBOARD_ENV")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_environments() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert!("mars".parse::<Environment>().is_err());
    }

    #[test]
    fn test_custom_environment_uses_given_url() {
        let env = Environment::Custom {
            backend_url: "http://127.0.0.1:9999".to_string(),
        };
        assert_eq!(env.backend_url(), "http://127.0.0.1:9999");
        assert_eq!(env.to_string(), "Custom");
    }
}
