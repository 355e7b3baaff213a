//! AI-branded prediction board with a category filter. VIP picks are shown
//! obscured to anonymous visitors; any authenticated user sees them, VIP or
//! not. The teaser is a login hook, not a paywall.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::data::{self, Prediction, PredictionCategory};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct PredictionsState {
    /// None = all categories.
    pub filter: Option<PredictionCategory>,
    pub cursor: usize,
}

impl PredictionsState {
    pub fn filtered(&self) -> Vec<&'static Prediction> {
        data::PREDICTIONS
            .iter()
            .filter(|p| self.filter.is_none_or(|f| p.category == f))
            .collect()
    }

    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(PredictionCategory::Banker),
            Some(PredictionCategory::Banker) => Some(PredictionCategory::Surprise),
            Some(PredictionCategory::Surprise) => Some(PredictionCategory::Coupon),
            Some(PredictionCategory::Coupon) => Some(PredictionCategory::Vip),
            Some(PredictionCategory::Vip) => None,
        };
        self.cursor = 0;
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
}

fn filter_label(filter: Option<PredictionCategory>) -> &'static str {
    match filter {
        None => "All Predictions",
        Some(c) => c.label(),
    }
}

fn category_color(category: PredictionCategory) -> Color {
    match category {
        PredictionCategory::Banker => Color::Green,
        PredictionCategory::Surprise => Color::Magenta,
        PredictionCategory::Coupon => Color::Blue,
        PredictionCategory::Vip => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let preds = &state.predictions;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "AI-Powered Predictions | Filter: {}",
        filter_label(preds.filter)
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    render_rows(frame, rows[1], preds, state.is_authenticated);

    let summary = Paragraph::new(
        "Win Rate 87% | Total Predictions 1,247 | Average Odds 2.14 | ROI +34%",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(summary, rows[2]);
}

fn render_rows(frame: &mut Frame, area: Rect, preds: &PredictionsState, authenticated: bool) {
    let list = preds.filtered();
    if list.is_empty() {
        let empty = Paragraph::new("No predictions in this category")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const ROW_HEIGHT: u16 = 3;
    if area.height < ROW_HEIGHT {
        return;
    }
    let visible = (area.height / ROW_HEIGHT) as usize;
    let start = preds.cursor.saturating_sub(visible.saturating_sub(1));
    let end = (start + visible).min(list.len());

    for (i, idx) in (start..end).enumerate() {
        let p = list[idx];
        let row_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let locked = p.category == PredictionCategory::Vip && !authenticated;
        let under_cursor = idx == preds.cursor;

        let mut style = Style::default().fg(category_color(p.category));
        if under_cursor {
            style = style.bg(Color::DarkGray);
        }

        let text = if locked {
            format!(
                "[{}] {} vs {}  ({})\n      ######  VIP Members Only - login to reveal  ######",
                p.category.label(),
                p.home_team,
                p.away_team,
                p.league
            )
        } else {
            format!(
                "[{}] {} vs {}  ({}, kick-off {})\n      Tip: {}  @ {}  | Confidence {}% | AI {} | Form {} / {} | H2H {}",
                p.category.label(),
                p.home_team,
                p.away_team,
                p.league,
                p.time,
                p.tip,
                p.odds,
                p.confidence,
                p.ai_score,
                p.home_form,
                p.away_form,
                p.h2h
            )
        };
        frame.render_widget(Paragraph::new(text).style(style), row_area);
    }
}
