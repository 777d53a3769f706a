//! Application sidebar
//!
//! Frames the dashboard in both phases. Its entries belong to the wider
//! application; here it only marks the dashboard as the current page.

use super::super::state::DashboardView;
use super::super::utils::panel_block;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

/// Columns the sidebar takes when the terminal is wide enough.
pub const SIDEBAR_WIDTH: u16 = 20;
/// Narrower terminals drop the sidebar.
pub const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 80;

pub fn render_sidebar(f: &mut Frame, area: Rect, view: &DashboardView) {
    let lines = vec![Line::from(vec![
        Span::styled("▸ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let sidebar = Paragraph::new(lines).block(panel_block("MENU", view.with_background_color));
    f.render_widget(Clear, area);
    f.render_widget(sidebar, area);
}
