//! Advertisement placeholder shown to authenticated regular users only
//! (`AppState::show_ads`). There is no ad network behind it.

use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const BANNER_HEIGHT: u16 = 3;

pub fn render_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new("ADVERTISEMENT | upgrade to VIP to remove ads")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}
