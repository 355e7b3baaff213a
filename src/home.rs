//! Landing page: hero copy, live-now and upcoming strips, quick links.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(1),
        ])
        .split(area);

    let hero = Paragraph::new(
        "OptikGoal | AI-powered sports predictions\nExpert analysis, banker tips and live scores, all in one place.",
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(hero, rows[0]);

    render_live_strip(frame, rows[1], state);
    render_upcoming_strip(frame, rows[2]);

    let links = Paragraph::new(
        "Quick links: [2] Predictions  [3] Bulletin  [4] Live Scores  [5] VIP  [6] Community  [7] News",
    )
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(links, rows[3]);
}

fn render_live_strip(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = state
        .live_matches
        .iter()
        .map(|m| {
            format!(
                "{} {}'  {} {} - {} {}  ({})",
                m.status.label(),
                m.minute,
                m.home_team,
                m.home_score,
                m.away_score,
                m.away_team,
                m.league
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let strip = Paragraph::new(lines)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("Live Now").borders(Borders::ALL));
    frame.render_widget(strip, area);
}

fn render_upcoming_strip(frame: &mut Frame, area: Rect) {
    let lines = data::HOME_UPCOMING
        .iter()
        .map(|m| {
            format!(
                "{} {}  {} vs {}  ({})",
                m.date, m.time, m.home_team, m.away_team, m.league
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let strip = Paragraph::new(lines)
        .block(Block::default().title("Upcoming").borders(Borders::ALL));
    frame.render_widget(strip, area);
}
