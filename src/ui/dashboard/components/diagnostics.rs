//! Dashboard diagnostics panel component
//!
//! Renders recent diagnostic events; only shown when failures are surfaced

use super::super::state::DashboardView;
use super::super::utils::{
    clean_http_error_message, format_compact_timestamp, get_source_color, panel_block,
};
use crate::events::EventType;
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

/// Render the newest diagnostics that fit, newest first.
pub fn render_diagnostics_panel(f: &mut Frame, area: ratatui::layout::Rect, view: &DashboardView) {
    // Account for borders and padding
    let max_lines = (area.height.saturating_sub(4)) as usize;
    let line_count = max_lines.max(1);

    let lines: Vec<Line> = view
        .diagnostics
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(line_count)
        .map(|event| {
            let status_icon = match (event.event_type, event.log_level) {
                (EventType::Success, _) => "✓",
                (EventType::Error, LogLevel::Error) => "✗",
                (EventType::Error, _) => "!",
                (EventType::Refresh, _) => "·",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    clean_http_error_message(&event.msg),
                    Style::default().fg(get_source_color(&event.source)),
                ),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(vec![Line::from("No diagnostics yet")])
    } else {
        Paragraph::new(lines)
    };

    let widget = paragraph
        .block(panel_block("DIAGNOSTICS", view.with_background_color))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
