//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard::frame_interval;
use crate::ui::dashboard::{Collaborators, DashboardView, ErrorPolicy, render_dashboard};
use crate::ui::navigation::NavTarget;
use crate::ui::route::render_route;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub error_policy: ErrorPolicy,
}

impl UIConfig {
    pub fn new(with_background_color: bool, error_policy: ErrorPolicy) -> Self {
        Self {
            with_background_color,
            error_policy,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// The agent dashboard. Owns the mounted view.
    Dashboard(Box<DashboardView>),
    /// A route reached from one of the dashboard's actions.
    Route(NavTarget),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Services every dashboard mount reads from.
    collaborators: Collaborators,

    /// Rendering options passed to every mount.
    ui_config: UIConfig,
}

impl App {
    /// Creates the application with a freshly mounted dashboard.
    pub fn new(collaborators: Collaborators, ui_config: UIConfig) -> Self {
        let view = DashboardView::mount(collaborators.clone(), &ui_config);
        Self {
            current_screen: Screen::Dashboard(Box::new(view)),
            collaborators,
            ui_config,
        }
    }

    /// Replaces the current screen with a newly mounted dashboard.
    fn show_dashboard(&mut self) {
        let view = DashboardView::mount(self.collaborators.clone(), &self.ui_config);
        self.switch_to(Screen::Dashboard(Box::new(view)));
    }

    /// Swaps screens, unmounting a dashboard being left.
    fn switch_to(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current_screen, screen);
        if let Screen::Dashboard(mut view) = previous {
            view.unmount();
        }
    }

    /// Unmounts whatever is showing.
    pub fn close(&mut self) {
        if let Screen::Dashboard(view) = &mut self.current_screen {
            view.unmount();
        }
    }

    /// Handles a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.close();
            return true;
        }

        let target = match &mut self.current_screen {
            Screen::Dashboard(view) => {
                if view.is_loading() {
                    return false;
                }
                if matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    view.retry_profile();
                    return false;
                }
                NavTarget::from_key(code)
            }
            Screen::Route(_) => {
                if matches!(
                    code,
                    KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Backspace
                ) {
                    self.show_dashboard();
                }
                return false;
            }
        };
        if let Some(target) = target {
            self.switch_to(Screen::Route(target));
        }
        false
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        if let Screen::Dashboard(view) = &mut app.current_screen {
            view.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Poll for key events; the timeout doubles as the frame interval.
        if event::poll(frame_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Dashboard(view) => render_dashboard(f, view),
        Screen::Route(target) => render_route(f, *target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockAuthProvider, MockDataStore};
    use std::sync::Arc;
    use std::time::Duration;

    fn signed_out_app() -> App {
        let mut auth = MockAuthProvider::new();
        auth.expect_current_user().returning(|| Ok(None));
        let collaborators = Collaborators {
            auth: Arc::new(auth),
            store: Arc::new(MockDataStore::new()),
        };
        App::new(collaborators, UIConfig::new(false, ErrorPolicy::Suppress))
    }

    async fn wait_until_ready(app: &mut App) {
        tokio::time::sleep(Duration::from_millis(1_100)).await;
        tokio::task::yield_now().await;
        if let Screen::Dashboard(view) = &mut app.current_screen {
            view.update();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_keys_are_ignored_while_loading() {
        let mut app = signed_out_app();
        assert!(!app.handle_key(KeyCode::Char('l')));
        assert!(matches!(&app.current_screen, Screen::Dashboard(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_opens_route_and_back_remounts() {
        let mut app = signed_out_app();
        wait_until_ready(&mut app).await;

        let first_stars = match &app.current_screen {
            Screen::Dashboard(view) => view.stars.clone(),
            Screen::Route(_) => panic!("expected dashboard"),
        };

        assert!(!app.handle_key(KeyCode::Char('p')));
        assert!(matches!(
            &app.current_screen,
            Screen::Route(NavTarget::AgentSettings)
        ));

        assert!(!app.handle_key(KeyCode::Char('b')));
        match &app.current_screen {
            Screen::Dashboard(view) => {
                assert!(view.is_loading());
                assert_ne!(view.stars, first_stars);
            }
            Screen::Route(_) => panic!("expected dashboard"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_unmounts_dashboard() {
        let mut app = signed_out_app();
        assert!(app.handle_key(KeyCode::Char('q')));
        match &app.current_screen {
            Screen::Dashboard(view) => assert!(!view.is_mounted()),
            Screen::Route(_) => panic!("expected dashboard"),
        }
    }
}
