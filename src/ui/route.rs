//! Route screens reached from the dashboard's action buttons.
//!
//! Their content is served elsewhere; this screen only confirms where the
//! user navigated to and how to get back.

use crate::ui::navigation::NavTarget;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Renders the screen for a navigation target.
pub fn render_route(f: &mut Frame, target: NavTarget) {
    let [area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(f.area());

    let lines = vec![
        Line::from(Span::styled(
            target.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            target.route(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::raw(" ")),
        Line::from(Span::styled(
            "[B] Back to dashboard | [Q] Quit",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .title(target.caption())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
