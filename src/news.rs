//! Sports news list with a category filter and a featured (trending) banner.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::data::{self, NewsArticle, NewsCategory};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct NewsState {
    /// None = all categories.
    pub category: Option<NewsCategory>,
    pub cursor: usize,
}

impl NewsState {
    pub fn filtered(&self) -> Vec<&'static NewsArticle> {
        data::NEWS
            .iter()
            .filter(|a| self.category.is_none_or(|c| a.category == c))
            .collect()
    }

    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(NewsCategory::Football),
            Some(NewsCategory::Football) => Some(NewsCategory::Basketball),
            Some(NewsCategory::Basketball) => Some(NewsCategory::Tennis),
            Some(NewsCategory::Tennis) => Some(NewsCategory::Analysis),
            Some(NewsCategory::Analysis) => None,
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

fn category_label(category: Option<NewsCategory>) -> &'static str {
    match category {
        None => "All",
        Some(c) => c.label(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let news = &state.news;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "Sports News | Category: {}",
        category_label(news.category)
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    // Featured slot: first trending article, independent of the filter.
    if let Some(featured) = data::NEWS.iter().find(|a| a.trending) {
        let banner = Paragraph::new(format!("{}\n{}", featured.title, featured.excerpt))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("TRENDING").borders(Borders::ALL));
        frame.render_widget(banner, rows[1]);
    }

    render_articles(frame, rows[2], news);
}

fn render_articles(frame: &mut Frame, area: Rect, news: &NewsState) {
    let articles = news.filtered();
    if articles.is_empty() {
        let empty = Paragraph::new("No articles in this category")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const ROW_HEIGHT: u16 = 3;
    if area.height < ROW_HEIGHT {
        return;
    }
    let visible = (area.height / ROW_HEIGHT) as usize;
    let start = news.cursor.saturating_sub(visible.saturating_sub(1));
    let end = (start + visible).min(articles.len());

    for (i, idx) in (start..end).enumerate() {
        let a = articles[idx];
        let row_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let mut style = Style::default();
        if idx == news.cursor {
            style = style.bg(Color::DarkGray);
        }
        let trending = if a.trending { " 🔥" } else { "" };
        let text = format!(
            "[{}] {}{trending}  ({})\n  {}",
            a.category.label(),
            a.title,
            a.timestamp,
            a.excerpt
        );
        frame.render_widget(
            Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
            row_area,
        );
    }
}
