//! Live score board over the simulated match list owned by `AppState`.
//! Minutes advance only through `Delta::MinuteTick`; everything else is
//! static demo data.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{LiveMatch, MatchStatus, Side};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct LiveScoresState {
    pub cursor: usize,
    /// Match id whose event timeline is expanded.
    pub expanded: Option<u32>,
}

impl LiveScoresState {
    pub fn select_next(&mut self, total: usize) {
        if total > 0 {
            self.cursor = (self.cursor + 1).min(total - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_expanded(&mut self, match_id: u32) {
        self.expanded = if self.expanded == Some(match_id) {
            None
        } else {
            Some(match_id)
        };
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new("Live Scores | auto-refreshing simulated clock")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    let expanded = state
        .live
        .expanded
        .and_then(|id| state.live_matches.iter().find(|m| m.id == id));

    match expanded {
        Some(m) => render_expanded(frame, rows[1], m),
        None => render_board(frame, rows[1], state),
    }
}

fn render_board(frame: &mut Frame, area: Rect, state: &AppState) {
    const ROW_HEIGHT: u16 = 4;
    if area.height < ROW_HEIGHT {
        return;
    }
    let visible = (area.height / ROW_HEIGHT) as usize;
    let matches = &state.live_matches;
    let start = state.live.cursor.saturating_sub(visible.saturating_sub(1));
    let end = (start + visible).min(matches.len());

    for (i, idx) in (start..end).enumerate() {
        let m = &matches[idx];
        let row_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let style = if idx == state.live.cursor {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let status_color = match m.status {
            MatchStatus::Live => Color::Red,
            MatchStatus::HalfTime => Color::Yellow,
        };
        let header = Line::from(vec![
            Span::styled(
                format!("{} {}' ", m.status.label(), m.minute),
                Style::default().fg(status_color),
            ),
            Span::raw(format!(
                "{} {} - {} {}  ({})",
                m.home_team, m.home_score, m.away_score, m.away_team, m.league
            )),
        ]);
        let stats = format!(
            "  Shots {}-{} | On Target {}-{} | Corners {}-{}",
            m.shots_home, m.shots_away, m.on_target_home, m.on_target_away, m.corners_home,
            m.corners_away
        );
        let possession = possession_bar(m, row_area.width);
        let text = Text::from(vec![header, Line::raw(stats), Line::raw(possession)]);
        frame.render_widget(Paragraph::new(text).style(style), row_area);
    }
}

fn possession_bar(m: &LiveMatch, width: u16) -> String {
    let usable = width.saturating_sub(20).max(10) as u32;
    let home_cells = (u32::from(m.possession_home) * usable / 100) as usize;
    let away_cells = usable as usize - home_cells;
    format!(
        "  Poss {:>2}% {}{} {:>2}%",
        m.possession_home,
        "█".repeat(home_cells),
        "░".repeat(away_cells),
        m.possession_away
    )
}

fn render_expanded(frame: &mut Frame, area: Rect, m: &LiveMatch) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);

    let mut lines = vec![
        format!(
            "{} {} - {} {}   {} {}'",
            m.home_team,
            m.home_score,
            m.away_score,
            m.away_team,
            m.status.label(),
            m.minute
        ),
        String::new(),
    ];
    // Newest first.
    for event in m.events.iter().rev() {
        let side = match event.side {
            Side::Home => &m.home_team,
            Side::Away => &m.away_team,
        };
        lines.push(format!(
            "{:>3}' {:<7} {} ({side})",
            event.minute,
            event.kind.label(),
            event.player
        ));
    }
    let tape = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Match Events").borders(Borders::ALL));
    frame.render_widget(tape, cols[0]);

    let stats = [
        ("Ball Possession", m.possession_home, m.possession_away, "%"),
        ("Total Shots", m.shots_home, m.shots_away, ""),
        ("Shots on Target", m.on_target_home, m.on_target_away, ""),
        ("Corner Kicks", m.corners_home, m.corners_away, ""),
    ]
    .iter()
    .map(|(label, home, away, unit)| format!("{label}: {home}{unit} - {away}{unit}"))
    .collect::<Vec<_>>()
    .join("\n");
    let stats = Paragraph::new(stats)
        .block(Block::default().title("Stats").borders(Borders::ALL));
    frame.render_widget(stats, cols[1]);
}
