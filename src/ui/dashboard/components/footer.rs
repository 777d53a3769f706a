//! Dashboard footer component
//!
//! Renders the key hints

use super::super::state::DashboardView;
use crate::ui::navigation::NAV_ACTIONS;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with the keys the current state accepts.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: &DashboardView) {
    let mut hints: Vec<String> = NAV_ACTIONS
        .iter()
        .map(|target| format!("[{}] {}", target.hotkey().to_ascii_uppercase(), target.label()))
        .collect();
    if view.visible_failure().is_some() {
        hints.push("[R] Retry".to_string());
    }
    hints.push("[Q] Quit".to_string());

    let footer = Paragraph::new(hints.join(" | "))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
