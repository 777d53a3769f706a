//! Agent profile component
//!
//! Renders the agent's name and its looping clip, or, when failures are
//! surfaced, the reason the agent could not be loaded.

use super::super::state::DashboardView;
use super::super::utils::panel_block;
use crate::profile::{Profile, VideoSource};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

/// Rows taken by the profile card.
pub const PROFILE_CARD_HEIGHT: u16 = 11;

/// Rows taken by the failure notice.
pub const FAILURE_NOTICE_HEIGHT: u16 = 5;

/// Render the name label above the video panel.
pub fn render_profile_card(f: &mut Frame, area: Rect, view: &DashboardView, profile: &Profile) {
    f.render_widget(Clear, area);
    let block = panel_block("AGENT", view.with_background_color);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    let name = Paragraph::new(profile.name.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(name, chunks[0]);

    render_video(f, chunks[1], &profile.video_source());
}

fn render_video(f: &mut Frame, area: Rect, video: &VideoSource) {
    let flags: Vec<&str> = [
        (video.autoplay, "autoplay"),
        (video.looped, "loop"),
        (video.muted, "muted"),
        (video.plays_inline, "inline"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect();

    let lines = vec![
        Line::from(Span::styled("▶", Style::default().fg(Color::LightCyan))),
        Line::from(Span::styled(
            video.src.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            flags.join(" · "),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let video_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(video_block);
    f.render_widget(paragraph, area);
}

/// Render a surfaced lookup failure with its retry hint.
pub fn render_failure_notice(f: &mut Frame, area: Rect, view: &DashboardView, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(Span::styled(
            "[R] Retry",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block("AGENT UNAVAILABLE", view.with_background_color));
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
