//! Dashboard star field component
//!
//! Draws the decorative background behind both render branches

use super::super::state::DashboardView;
use crate::stars::StarPosition;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use std::time::Duration;

/// Dark page background.
pub const PAGE_BACKGROUND: Color = Color::Rgb(6, 6, 6);

/// Render the page background and every star at its animated position.
pub fn render_star_field(f: &mut Frame, area: Rect, view: &DashboardView) {
    if view.with_background_color {
        f.render_widget(Block::default().style(Style::default().bg(PAGE_BACKGROUND)), area);
    }
    if area.width == 0 || area.height == 0 {
        return;
    }

    let elapsed = view.mounted_at.elapsed();
    let buf = f.buffer_mut();
    for star in &view.stars {
        let (x, y) = star_cell(star, area, elapsed);
        let opacity = star.opacity(elapsed);
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(star_symbol(opacity))
                .set_style(Style::default().fg(star_color(opacity)));
        }
    }
}

/// Cell a star occupies at `elapsed`; drift wraps within the area.
pub fn star_cell(star: &StarPosition, area: Rect, elapsed: Duration) -> (u16, u16) {
    let col = (star.left / 100.0 * area.width as f64) as u16;
    let row = (star.top / 100.0 * area.height as f64 + star.drift_rows(elapsed)) as u16;
    (
        area.x + col.min(area.width - 1),
        area.y + row % area.height,
    )
}

fn star_symbol(opacity: f64) -> &'static str {
    if opacity >= 0.8 {
        "*"
    } else if opacity >= 0.55 {
        "+"
    } else {
        "·"
    }
}

fn star_color(opacity: f64) -> Color {
    let level = (60.0 + 195.0 * opacity).clamp(0.0, 255.0) as u8;
    Color::Rgb(level, level, level)
}
