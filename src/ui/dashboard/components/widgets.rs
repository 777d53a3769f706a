//! Rank, wallet and stats panels
//!
//! These widgets own their own data; the dashboard only places them.

use super::super::state::DashboardView;
use super::super::utils::panel_block;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

pub fn render_rank(f: &mut Frame, area: Rect, view: &DashboardView) {
    render_panel(f, area, view, "RANK", "Standing", "Unranked");
}

pub fn render_wallet(f: &mut Frame, area: Rect, view: &DashboardView) {
    render_panel(f, area, view, "WALLET", "Balance", "--");
}

pub fn render_stats(f: &mut Frame, area: Rect, view: &DashboardView) {
    render_panel(f, area, view, "STATS", "Matches", "--");
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    view: &DashboardView,
    title: &str,
    label: &str,
    value: &str,
) {
    let lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel_block(title, view.with_background_color));
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
