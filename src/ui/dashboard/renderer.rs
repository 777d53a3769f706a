//! Dashboard main renderer

use super::components::profile_card::{FAILURE_NOTICE_HEIGHT, PROFILE_CARD_HEIGHT};
use super::components::sidebar::{SIDEBAR_MIN_TERMINAL_WIDTH, SIDEBAR_WIDTH};
use super::components::{
    actions, background, diagnostics, footer, loading, profile_card, sidebar, widgets,
};
use super::state::{DashboardView, ErrorPolicy, LoadingPhase};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

const PANEL_HEIGHT: u16 = 3;
const ACTIONS_HEIGHT: u16 = 4;
const STATS_HEIGHT: u16 = 3;

pub fn render_dashboard(f: &mut Frame, view: &DashboardView) {
    background::render_star_field(f, f.area(), view);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(f.area());

    let inset = if main_chunks[0].width >= SIDEBAR_MIN_TERMINAL_WIDTH {
        let [side, inset] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .spacing(2)
            .areas(main_chunks[0]);
        sidebar::render_sidebar(f, side, view);
        inset
    } else {
        main_chunks[0]
    };

    match view.phase() {
        LoadingPhase::Loading => loading::render_loading(f, inset, view),
        LoadingPhase::Ready => {
            render_content(f, inset, view);
            footer::render_footer(f, main_chunks[1], view);
        }
    }
}

/// Two columns: rank, wallet and actions on the left; agent and stats on the right.
fn render_content(f: &mut Frame, area: Rect, view: &DashboardView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(45)])
        .flex(Flex::Center)
        .spacing(4)
        .split(area);

    render_left_column(f, columns[0], view);
    render_right_column(f, columns[1], view);
}

fn render_left_column(f: &mut Frame, area: Rect, view: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(ACTIONS_HEIGHT),
            Constraint::Fill(1),
        ])
        .spacing(1)
        .split(area);

    widgets::render_rank(f, chunks[0], view);
    widgets::render_wallet(f, chunks[1], view);
    actions::render_actions(f, chunks[2], view);
}

fn render_right_column(f: &mut Frame, area: Rect, view: &DashboardView) {
    let mut constraints = Vec::new();
    if view.profile().is_some() {
        constraints.push(Constraint::Length(PROFILE_CARD_HEIGHT));
    } else if view.visible_failure().is_some() {
        constraints.push(Constraint::Length(FAILURE_NOTICE_HEIGHT));
    }
    constraints.push(Constraint::Length(STATS_HEIGHT));
    if view.error_policy == ErrorPolicy::Surface {
        constraints.push(Constraint::Fill(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .spacing(1)
        .split(area);
    let mut slots = chunks.iter().copied();

    if let Some(profile) = view.profile() {
        if let Some(slot) = slots.next() {
            profile_card::render_profile_card(f, slot, view, profile);
        }
    } else if let Some(message) = view.visible_failure() {
        if let Some(slot) = slots.next() {
            profile_card::render_failure_notice(f, slot, view, message);
        }
    }
    if let Some(slot) = slots.next() {
        widgets::render_stats(f, slot, view);
    }
    if view.error_policy == ErrorPolicy::Surface {
        if let Some(slot) = slots.next() {
            diagnostics::render_diagnostics_panel(f, slot, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::BackendError;
    use crate::backend::{Identity, MockAuthProvider, MockDataStore};
    use crate::profile::Profile;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::Collaborators;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::sync::Arc;
    use std::time::Duration;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn collaborators(row: fn() -> Result<Profile, BackendError>) -> Collaborators {
        let mut auth = MockAuthProvider::new();
        auth.expect_current_user().returning(|| {
            Ok(Some(Identity {
                id: "user-1".to_string(),
                email: Some("scout@example.com".to_string()),
            }))
        });
        let mut store = MockDataStore::new();
        store.expect_single_agent().returning(move |_| row());
        Collaborators {
            auth: Arc::new(auth),
            store: Arc::new(store),
        }
    }

    async fn mount_and_settle(
        row: fn() -> Result<Profile, BackendError>,
        error_policy: ErrorPolicy,
    ) -> DashboardView {
        let mut view =
            DashboardView::mount(collaborators(row), &UIConfig::new(true, error_policy));
        tokio::time::sleep(Duration::from_millis(1_100)).await;
        tokio::task::yield_now().await;
        view.update();
        view
    }

    fn draw(view: &DashboardView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn scout() -> Result<Profile, BackendError> {
        Ok(Profile {
            card: "fox01".to_string(),
            name: "Scout".to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_branch_renders_only_the_indicator() {
        let view = DashboardView::mount(
            collaborators(scout),
            &UIConfig::new(true, ErrorPolicy::Suppress),
        );
        let screen = draw(&view);
        assert!(screen.contains('━'));
        assert!(screen.contains("MENU"));
        assert!(!screen.contains("RANK"));
        assert!(!screen.contains("STATS"));
        assert!(!screen.contains("Leaderboard"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_branch_shows_profile_name_and_video() {
        let view = mount_and_settle(scout, ErrorPolicy::Suppress).await;
        let screen = draw(&view);
        assert!(screen.contains("Scout"));
        assert!(screen.contains("/fox01.mp4"));
        assert!(screen.contains("autoplay · loop · muted · inline"));
        assert!(screen.contains("RANK"));
        assert!(screen.contains("WALLET"));
        assert!(screen.contains("STATS"));
        assert!(screen.contains("Leaderboard"));
        assert!(screen.contains("Check Rankings"));
        assert!(screen.contains("Preferences"));
        assert!(screen.contains("Edit Behaviors"));
        assert!(screen.contains("MENU"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_narrow_terminal_drops_sidebar() {
        let view = mount_and_settle(scout, ErrorPolicy::Suppress).await;
        let mut terminal = Terminal::new(TestBackend::new(70, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, &view)).unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(!screen.contains("MENU"));
        assert!(screen.contains("STATS"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_profile_hides_block_but_keeps_stats() {
        for row in [
            (|| Err(BackendError::NoRows)) as fn() -> Result<Profile, BackendError>,
            || Err(BackendError::MultipleRows(3)),
            || {
                Err(BackendError::Http {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            },
        ] {
            let view = mount_and_settle(row, ErrorPolicy::Suppress).await;
            let screen = draw(&view);
            assert!(!screen.contains("AGENT"));
            assert!(!screen.contains(".mp4"));
            assert!(screen.contains("STATS"));
            assert!(!screen.contains("DIAGNOSTICS"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_surfaced_failure_is_rendered_with_retry() {
        let view = mount_and_settle(|| Err(BackendError::NoRows), ErrorPolicy::Surface).await;
        let screen = draw(&view);
        assert!(screen.contains("AGENT UNAVAILABLE"));
        assert!(screen.contains("no agent row found"));
        assert!(screen.contains("[R] Retry"));
        assert!(screen.contains("DIAGNOSTICS"));
        assert!(screen.contains("STATS"));
    }
}
