//! VIP membership page: plan cards, a static payment-method chooser and a
//! checkout stub. Nothing is ever charged; the confirm action is not wired
//! to any completion logic.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{self, PlanId};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct VipState {
    pub cursor: usize,
    pub selected_plan: Option<PlanId>,
    pub show_payment: bool,
    pub payment_cursor: usize,
}

impl VipState {
    /// Plan selection; the auth gate lives on `AppState::select_vip_plan`.
    pub fn choose_plan_under_cursor(&mut self) {
        if let Some(plan) = data::VIP_PLANS.get(self.cursor) {
            self.selected_plan = Some(plan.id);
            self.show_payment = true;
            self.payment_cursor = 0;
        }
    }

    pub fn select_next(&mut self) {
        if self.show_payment {
            let total = data::PAYMENT_METHODS.len();
            self.payment_cursor = (self.payment_cursor + 1).min(total - 1);
        } else {
            self.cursor = (self.cursor + 1).min(data::VIP_PLANS.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        if self.show_payment {
            self.payment_cursor = self.payment_cursor.saturating_sub(1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn back_to_plans(&mut self) {
        self.show_payment = false;
    }
}

const FEATURES: [&str; 8] = [
    "Exclusive VIP Predictions",
    "Priority Access to Banker Tips",
    "Advanced Analytics & Statistics",
    "Higher Success Rate Predictions",
    "Dedicated VIP Support",
    "Mobile App Access",
    "Early Access to New Features",
    "Personalized Betting Strategies",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let vip = &state.vip;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(1),
        ])
        .split(area);

    let title = if state.is_vip {
        "VIP Membership | you are a VIP member"
    } else {
        "VIP Membership | unlock exclusive predictions"
    };
    let header = Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, rows[0]);

    render_plans(frame, rows[1], vip);

    if vip.show_payment {
        render_payment(frame, rows[2], vip);
    } else {
        render_features(frame, rows[2]);
    }
}

fn render_plans(frame: &mut Frame, area: Rect, vip: &VipState) {
    let plans = &*data::VIP_PLANS;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (idx, plan) in plans.iter().enumerate() {
        let chosen = vip.selected_plan == Some(plan.id);
        let mut style = Style::default();
        if idx == vip.cursor {
            style = style.fg(Color::White).bg(Color::DarkGray);
        } else if chosen {
            style = style.fg(Color::Yellow);
        }
        let mut title = plan.name.clone();
        if plan.popular {
            title.push_str(" ★ Most Popular");
        }
        let savings = plan
            .savings
            .as_deref()
            .map(|s| format!("  Save {s}"))
            .unwrap_or_default();
        let text = format!("${} / {}{savings}", plan.price, plan.period);
        let card = Paragraph::new(text)
            .style(style)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(card, cols[idx]);
    }
}

fn render_features(frame: &mut Frame, area: Rect) {
    let text = FEATURES
        .iter()
        .map(|f| format!("  ✓ {f}"))
        .collect::<Vec<_>>()
        .join("\n");
    let list = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("Member Benefits").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_payment(frame: &mut Frame, area: Rect, vip: &VipState) {
    let mut lines = vec!["Choose a payment method:".to_string(), String::new()];
    for (idx, method) in data::PAYMENT_METHODS.iter().enumerate() {
        let marker = if idx == vip.payment_cursor { ">" } else { " " };
        lines.push(format!("{marker} {}", method.name));
    }
    lines.push(String::new());
    lines.push("[enter] confirm (demo, no payment is taken)  [b] back to plans".to_string());
    let pane = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Checkout").borders(Borders::ALL));
    frame.render_widget(pane, area);
}
