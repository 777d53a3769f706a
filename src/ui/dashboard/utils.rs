//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Translucent panel background over the page.
pub const PANEL_BACKGROUND: Color = Color::Rgb(12, 12, 12);

/// The rounded, titled frame every dashboard panel uses.
pub fn panel_block(title: &str, with_background_color: bool) -> Block<'static> {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    if with_background_color {
        block.style(Style::default().bg(PANEL_BACKGROUND))
    } else {
        block
    }
}

/// Get a ratatui color for a diagnostic source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Timer => Color::DarkGray,
        Source::Identity => Color::Yellow,
        Source::DataStore => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fall back to the raw timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return msg
            .split(": Reqwest error")
            .next()
            .map(|prefix| format!("{}: request timed out", prefix))
            .unwrap_or_else(|| msg.to_string());
    }
    if msg.contains("Reqwest error") {
        return msg
            .split(": Reqwest error")
            .next()
            .map(|prefix| format!("{}: network error", prefix))
            .unwrap_or_else(|| msg.to_string());
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-10-19 14:03:59"), "10-19 14:03");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Error getting user: Reqwest error: error sending request for url (http://x/): operation timed out"
            ),
            "Error getting user: request timed out"
        );
        assert_eq!(
            clean_http_error_message("Error fetching agent: Reqwest error: connection refused"),
            "Error fetching agent: network error"
        );
        assert_eq!(
            clean_http_error_message("Error fetching agent: no agent row found"),
            "Error fetching agent: no agent row found"
        );
    }
}
