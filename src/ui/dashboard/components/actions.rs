//! Dashboard navigation buttons

use super::super::state::DashboardView;
use super::super::utils::panel_block;
use crate::ui::navigation::{NAV_ACTIONS, NavTarget};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

/// Render the action buttons side by side, equal width.
pub fn render_actions(f: &mut Frame, area: Rect, view: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .spacing(2)
        .split(area);

    for (target, chunk) in NAV_ACTIONS.iter().zip(chunks.iter()) {
        render_button(f, *chunk, view, *target);
    }
}

fn render_button(f: &mut Frame, area: Rect, view: &DashboardView, target: NavTarget) {
    let lines = vec![
        Line::from(Span::styled(
            target.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            target.caption(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let title = format!("[{}]", target.hotkey().to_ascii_uppercase());
    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel_block(&title, view.with_background_color));
    f.render_widget(Clear, area);
    f.render_widget(button, area);
}
