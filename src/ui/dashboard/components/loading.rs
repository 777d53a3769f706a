//! Dashboard loading component
//!
//! Indeterminate progress bar shown while the view is loading

use super::super::state::DashboardView;
use crate::consts::dashboard::{LOADING_HIGHLIGHT_PERCENT, LOADING_SWEEP_MS, LOADING_TRACK_PERCENT};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Duration;

const TRACK_COLOR: Color = Color::Rgb(5, 27, 44);

/// Render the loading bar, vertically centered. Nothing else is drawn.
pub fn render_loading(f: &mut Frame, area: Rect, view: &DashboardView) {
    let [row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let [track] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(LOADING_TRACK_PERCENT)])
        .flex(Flex::Center)
        .areas(row);

    let (offset, len) = loading_highlight(track.width, view.mounted_at.elapsed());
    let tail = track.width.saturating_sub(offset + len);
    let bar = Line::from(vec![
        Span::styled("━".repeat(offset as usize), Style::default().fg(TRACK_COLOR)),
        Span::styled("━".repeat(len as usize), Style::default().fg(Color::White)),
        Span::styled("━".repeat(tail as usize), Style::default().fg(TRACK_COLOR)),
    ]);
    f.render_widget(Paragraph::new(bar), track);
}

/// Offset and length of the moving highlight within a track of `track_width`
/// cells, `elapsed` after mount. The highlight sweeps left to right once per
/// period and always lies inside the track.
pub fn loading_highlight(track_width: u16, elapsed: Duration) -> (u16, u16) {
    if track_width == 0 {
        return (0, 0);
    }
    let len = (track_width as u32 * LOADING_HIGHLIGHT_PERCENT as u32 / 100).max(1) as u16;
    let phase = (elapsed.as_millis() % LOADING_SWEEP_MS as u128) as f64 / LOADING_SWEEP_MS as f64;
    let offset = ((track_width - len) as f64 * phase).round() as u16;
    (offset, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_sweeps_across_track() {
        assert_eq!(loading_highlight(100, Duration::ZERO), (0, 30));
        assert_eq!(loading_highlight(100, Duration::from_millis(500)), (35, 30));
        // Wraps back at the end of each period.
        assert_eq!(loading_highlight(100, Duration::from_millis(1000)), (0, 30));
    }

    #[test]
    fn test_highlight_fits_narrow_tracks() {
        assert_eq!(loading_highlight(0, Duration::ZERO), (0, 0));
        let (offset, len) = loading_highlight(2, Duration::from_millis(999));
        assert_eq!(len, 1);
        assert!(offset + len <= 2);
    }
}
