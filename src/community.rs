//! Community board: an append-only comment list with per-viewer like state.
//! New comments are always Pending; nothing ever moderates them because no
//! moderation backend exists.

use std::collections::HashSet;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::data::{self, Comment, CommentStatus};
use crate::state::AppState;

/// Result of a post/like attempt; the root controller maps `NeedsLogin` to
/// the auth modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityOutcome {
    Done,
    NeedsLogin,
    NothingToPost,
}

#[derive(Debug, Clone)]
pub struct CommunityState {
    pub comments: Vec<Comment>,
    pub draft: String,
    pub composing: bool,
    pub cursor: usize,
    liked: HashSet<u32>,
}

impl Default for CommunityState {
    fn default() -> Self {
        Self {
            comments: data::seed_comments(),
            draft: String::new(),
            composing: false,
            cursor: 0,
            liked: HashSet::new(),
        }
    }
}

impl CommunityState {
    /// Appends the draft to the front of the list as a Pending comment by
    /// "You". Unauthenticated viewers get bounced to login instead.
    pub fn post_draft(&mut self, authenticated: bool) -> CommunityOutcome {
        if !authenticated {
            return CommunityOutcome::NeedsLogin;
        }
        let content = self.draft.trim();
        if content.is_empty() {
            return CommunityOutcome::NothingToPost;
        }
        let comment = Comment {
            id: self.comments.len() as u32 + 1,
            author: "You".to_string(),
            content: content.to_string(),
            timestamp: "Just now".to_string(),
            likes: 0,
            status: CommentStatus::Pending,
        };
        self.comments.insert(0, comment);
        self.draft.clear();
        self.composing = false;
        self.cursor = 0;
        CommunityOutcome::Done
    }

    pub fn toggle_like_under_cursor(&mut self, authenticated: bool) -> CommunityOutcome {
        if !authenticated {
            return CommunityOutcome::NeedsLogin;
        }
        let Some(comment) = self.comments.get_mut(self.cursor) else {
            return CommunityOutcome::Done;
        };
        if self.liked.remove(&comment.id) {
            comment.likes = comment.likes.saturating_sub(1);
        } else {
            self.liked.insert(comment.id);
            comment.likes += 1;
        }
        CommunityOutcome::Done
    }

    pub fn has_liked(&self, comment_id: u32) -> bool {
        self.liked.contains(&comment_id)
    }

    pub fn select_next(&mut self) {
        if !self.comments.is_empty() {
            self.cursor = (self.cursor + 1).min(self.comments.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let community = &state.community;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let header = Paragraph::new("Community | join the discussion")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    render_composer(frame, rows[1], state);
    render_comments(frame, rows[2], community);
}

fn render_composer(frame: &mut Frame, area: Rect, state: &AppState) {
    let community = &state.community;
    let (text, style) = if community.composing {
        (
            format!("{}█", community.draft),
            Style::default().fg(Color::White),
        )
    } else if state.is_authenticated {
        (
            "Press [n] to write a comment. It will be reviewed before appearing publicly."
                .to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Please login to post a comment.".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    let composer = Paragraph::new(text).style(style).block(
        Block::default()
            .title("Share Your Thoughts")
            .borders(Borders::ALL),
    );
    frame.render_widget(composer, area);
}

fn render_comments(frame: &mut Frame, area: Rect, community: &CommunityState) {
    const ROW_HEIGHT: u16 = 3;
    if area.height < ROW_HEIGHT {
        return;
    }
    let visible = (area.height / ROW_HEIGHT) as usize;
    let start = community.cursor.saturating_sub(visible.saturating_sub(1));
    let end = (start + visible).min(community.comments.len());

    for (i, idx) in (start..end).enumerate() {
        let c = &community.comments[idx];
        let row_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let mut style = Style::default();
        if idx == community.cursor {
            style = style.bg(Color::DarkGray);
        }
        let pending = if c.status == CommentStatus::Pending {
            "  [Pending Review]"
        } else {
            ""
        };
        let liked = if community.has_liked(c.id) { "♥" } else { "♡" };
        let text = format!(
            "{} · {}{pending}\n{}\n{liked} {}",
            c.author, c.timestamp, c.content, c.likes
        );
        frame.render_widget(
            Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
            row_area,
        );
    }
}
