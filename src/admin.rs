//! Admin shell: a sibling full-screen layout with its own section switch.
//! Every figure shown is static; there is no write path back to anything.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{self, UserStatus};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Users,
    Predictions,
    Comments,
    Payouts,
    Reports,
    Settings,
}

pub const SECTIONS: [AdminSection; 7] = [
    AdminSection::Dashboard,
    AdminSection::Users,
    AdminSection::Predictions,
    AdminSection::Comments,
    AdminSection::Payouts,
    AdminSection::Reports,
    AdminSection::Settings,
];

impl AdminSection {
    pub fn label(self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::Users => "User Management",
            AdminSection::Predictions => "Predictions",
            AdminSection::Comments => "Comments",
            AdminSection::Payouts => "Payouts",
            AdminSection::Reports => "Reports",
            AdminSection::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminState {
    pub section: AdminSection,
    /// None = all statuses (user table filter).
    pub user_filter: Option<UserStatus>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            section: AdminSection::Dashboard,
            user_filter: None,
        }
    }
}

impl AdminState {
    pub fn next_section(&mut self) {
        let idx = SECTIONS.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = SECTIONS[(idx + 1) % SECTIONS.len()];
    }

    pub fn prev_section(&mut self) {
        let idx = SECTIONS.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = SECTIONS[(idx + SECTIONS.len() - 1) % SECTIONS.len()];
    }

    pub fn cycle_user_filter(&mut self) {
        self.user_filter = match self.user_filter {
            None => Some(UserStatus::Vip),
            Some(UserStatus::Vip) => Some(UserStatus::Regular),
            Some(UserStatus::Regular) => Some(UserStatus::Banned),
            Some(UserStatus::Banned) => None,
        };
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(rows[0]);

    render_sidebar(frame, cols[0], state);
    render_section(frame, cols[1], state);

    let footer = Paragraph::new("j/k|↑/↓ Section | f User filter | o Logout | b Back | q Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, rows[1]);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::with_capacity(SECTIONS.len());
    for section in SECTIONS {
        let marker = if section == state.admin.section { "> " } else { "  " };
        lines.push(format!("{marker}{}", section.label()));
    }
    let sidebar = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("OptikGoal Control Center")
            .borders(Borders::ALL),
    );
    frame.render_widget(sidebar, area);
}

fn render_section(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.admin.section {
        AdminSection::Dashboard => render_dashboard(frame, area),
        AdminSection::Users => render_users(frame, area, state),
        section => render_stub(frame, area, section),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let stats = [
        ("Total Users", "12,486", "+12.5%"),
        ("VIP Members", "2,847", "+8.2%"),
        ("Active Predictions", "156", "+23.1%"),
        ("Monthly Revenue", "$48,392", "+15.8%"),
        ("Total Comments", "8,932", "+5.4%"),
        ("Success Rate", "87.4%", "+2.1%"),
    ]
    .iter()
    .map(|(label, value, change)| format!("{label:<20} {value:>8}  {change}"))
    .collect::<Vec<_>>()
    .join("\n");
    let cards = Paragraph::new(stats).block(
        Block::default()
            .title("Dashboard Overview")
            .borders(Borders::ALL),
    );
    frame.render_widget(cards, rows[0]);

    let activity = [
        ("John Doe", "Upgraded to VIP", "2 minutes ago"),
        ("Jane Smith", "Posted a comment", "5 minutes ago"),
        ("Mike Johnson", "New user registered", "12 minutes ago"),
        ("Sarah Wilson", "Made a prediction", "18 minutes ago"),
        ("Tom Brown", "Requested payout", "25 minutes ago"),
    ]
    .iter()
    .map(|(user, action, time)| format!("{user:<14} {action:<22} {time}"))
    .collect::<Vec<_>>()
    .join("\n");
    let feed = Paragraph::new(activity).block(
        Block::default()
            .title("Recent Activity")
            .borders(Borders::ALL),
    );
    frame.render_widget(feed, rows[1]);
}

fn render_users(frame: &mut Frame, area: Rect, state: &AppState) {
    let filter = state.admin.user_filter;
    let filter_label = match filter {
        None => "All Users",
        Some(s) => s.label(),
    };
    let mut lines = vec![
        format!("Filter: {filter_label}"),
        format!("{:<14} {:<22} {:<8} {:<12} Last Active", "Name", "Email", "Status", "Joined"),
    ];
    for user in data::ADMIN_USERS
        .iter()
        .filter(|u| filter.is_none_or(|f| u.status == f))
    {
        lines.push(format!(
            "{:<14} {:<22} {:<8} {:<12} {}",
            user.name,
            user.email,
            user.status.label(),
            user.join_date,
            user.last_active
        ));
    }
    let table = Paragraph::new(lines.join("\n"))
        .style(Style::default())
        .block(
            Block::default()
                .title(Line::styled(
                    "User Management",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

fn render_stub(frame: &mut Frame, area: Rect, section: AdminSection) {
    let blurb = match section {
        AdminSection::Predictions => "Manage AI-powered predictions and categories",
        AdminSection::Comments => "Monitor and moderate user comments",
        AdminSection::Payouts => "Process and track user payouts",
        AdminSection::Reports => "View detailed reports and statistics",
        AdminSection::Settings => "Configure system preferences and options",
        _ => "",
    };
    let pane = Paragraph::new(blurb).style(Style::default().fg(Color::Gray)).block(
        Block::default()
            .title(section.label())
            .borders(Borders::ALL),
    );
    frame.render_widget(pane, area);
}
