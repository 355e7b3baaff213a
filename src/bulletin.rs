//! Match bulletin: today's odds board plus a user-assembled coupon.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{self, BulletinMatch, Sport};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct BulletinState {
    /// None = all sports.
    pub sport: Option<Sport>,
    pub selected_ids: Vec<u32>,
    pub cursor: usize,
    pub show_coupon: bool,
    pub scroll: u16,
}

impl BulletinState {
    pub fn filtered(&self) -> Vec<&'static BulletinMatch> {
        data::BULLETIN
            .iter()
            .filter(|m| self.sport.is_none_or(|s| m.sport == s))
            .collect()
    }

    pub fn cycle_sport(&mut self) {
        self.sport = match self.sport {
            None => Some(Sport::Football),
            Some(Sport::Football) => Some(Sport::Basketball),
            Some(Sport::Basketball) => Some(Sport::Tennis),
            Some(Sport::Tennis) => None,
        };
        self.cursor = 0;
    }

    pub fn toggle_selected(&mut self, match_id: u32) {
        if let Some(pos) = self.selected_ids.iter().position(|id| *id == match_id) {
            self.selected_ids.remove(pos);
        } else {
            self.selected_ids.push(match_id);
        }
    }

    pub fn toggle_under_cursor(&mut self) {
        if let Some(m) = self.filtered().get(self.cursor) {
            let id = m.id;
            self.toggle_selected(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected_ids.clear();
    }

    pub fn select_next(&mut self) {
        let total = self.filtered().len();
        if total > 0 {
            self.cursor = (self.cursor + 1).min(total - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Combined coupon odds: the product of each selected match's HOME odds,
    /// two decimals, "0.00" with nothing selected. The home leg is always the
    /// one multiplied in, whatever outcome the user might actually fancy.
    pub fn total_odds(&self) -> String {
        if self.selected_ids.is_empty() {
            return "0.00".to_string();
        }
        let total: f64 = data::BULLETIN
            .iter()
            .filter(|m| self.selected_ids.contains(&m.id))
            .map(|m| m.odds_home.parse::<f64>().unwrap_or(1.0))
            .product();
        format!("{total:.2}")
    }
}

fn sport_label(sport: Option<Sport>) -> &'static str {
    match sport {
        None => "All Sports",
        Some(s) => s.label(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bulletin = &state.bulletin;
    let coupon_height = if bulletin.show_coupon && !bulletin.selected_ids.is_empty() {
        4
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(coupon_height),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "Match Bulletin | Filter: {} | {} selected",
        sport_label(bulletin.sport),
        bulletin.selected_ids.len()
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    render_match_rows(frame, rows[1], bulletin);

    if coupon_height > 0 {
        render_coupon(frame, rows[2], bulletin);
    }
}

fn render_match_rows(frame: &mut Frame, area: Rect, bulletin: &BulletinState) {
    let matches = bulletin.filtered();
    if matches.is_empty() {
        let empty =
            Paragraph::new("No matches for this sport").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const ROW_HEIGHT: u16 = 2;
    if area.height < ROW_HEIGHT {
        return;
    }
    let visible = (area.height / ROW_HEIGHT) as usize;
    let start = bulletin.cursor.saturating_sub(visible.saturating_sub(1));
    let end = (start + visible).min(matches.len());

    for (i, idx) in (start..end).enumerate() {
        let m = matches[idx];
        let selected_for_coupon = bulletin.selected_ids.contains(&m.id);
        let under_cursor = idx == bulletin.cursor;
        let row_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };

        let marker = if selected_for_coupon { "[x]" } else { "[ ]" };
        let line1 = format!(
            "{marker} {} vs {}  ({} | {} {})",
            m.home_team, m.away_team, m.league, m.date, m.time
        );
        let line2 = format!(
            "      1: {}   X: {}   2: {}",
            m.odds_home, m.odds_draw, m.odds_away
        );

        let mut style = Style::default();
        if under_cursor {
            style = style.fg(Color::White).bg(Color::DarkGray);
        } else if selected_for_coupon {
            style = style.fg(Color::Yellow);
        }
        let row = Paragraph::new(format!("{line1}\n{line2}")).style(style);
        frame.render_widget(row, row_area);
    }
}

fn render_coupon(frame: &mut Frame, area: Rect, bulletin: &BulletinState) {
    let n = bulletin.selected_ids.len();
    let noun = if n == 1 { "Selection" } else { "Selections" };
    let text = format!(
        "{n} {noun}   Total Odds: {}   [space] toggle  [c] clear",
        bulletin.total_odds()
    );
    let coupon = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Your Coupon").borders(Borders::ALL));
    frame.render_widget(coupon, area);
}
