//! In-app navigation targets reachable from the dashboard.

use crate::consts::dashboard::{AGENT_SETTINGS_ROUTE, LEADERBOARD_ROUTE};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Leaderboard,
    AgentSettings,
}

/// The dashboard's action buttons, in display order.
pub const NAV_ACTIONS: [NavTarget; 2] = [NavTarget::Leaderboard, NavTarget::AgentSettings];

impl NavTarget {
    pub fn route(&self) -> &'static str {
        match self {
            NavTarget::Leaderboard => LEADERBOARD_ROUTE,
            NavTarget::AgentSettings => AGENT_SETTINGS_ROUTE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Leaderboard => "Leaderboard",
            NavTarget::AgentSettings => "Preferences",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            NavTarget::Leaderboard => "Check Rankings",
            NavTarget::AgentSettings => "Edit Behaviors",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            NavTarget::Leaderboard => 'l',
            NavTarget::AgentSettings => 'p',
        }
    }

    /// The target bound to a key press, if any. Case-insensitive.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let KeyCode::Char(c) = code else {
            return None;
        };
        NAV_ACTIONS
            .into_iter()
            .find(|target| target.hotkey() == c.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(NavTarget::Leaderboard.route(), "/leaderboard");
        assert_eq!(NavTarget::AgentSettings.route(), "/agent-settings");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            NavTarget::from_key(KeyCode::Char('L')),
            Some(NavTarget::Leaderboard)
        );
        assert_eq!(
            NavTarget::from_key(KeyCode::Char('p')),
            Some(NavTarget::AgentSettings)
        );
        assert_eq!(NavTarget::from_key(KeyCode::Char('x')), None);
        assert_eq!(NavTarget::from_key(KeyCode::Enter), None);
    }
}
