use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use optikgoal_terminal::auth_form::{AuthField, AuthMode, AuthSubmit};
use optikgoal_terminal::i18n::{self, translate};
use optikgoal_terminal::state::{apply_delta, AppState, Page};
use optikgoal_terminal::{admin, ads, bulletin, community, home, live_feed, live_scores, news, predictions, vip};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            self.state.help_overlay = false;
            return;
        }
        if self.state.auth.is_some() {
            self.on_auth_key(key);
            return;
        }
        if self.state.page == Page::Community && self.state.community.composing {
            self.on_compose_key(key);
            return;
        }
        if self.state.visible_page() == Page::Admin {
            self.on_admin_key(key);
            return;
        }
        self.on_global_key(key);
    }

    /// Modal-local keys. Everything typed lands in the focused field; the
    /// modal swallows all input while open.
    fn on_auth_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.auth.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.close_auth_modal(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.toggle_mode();
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if let Some(submit) = form.submit() {
                    match submit {
                        AuthSubmit::Login {
                            identifier,
                            password,
                        } => self.state.login(&identifier, &password),
                        AuthSubmit::Signup {
                            email,
                            password,
                            name,
                        } => self.state.signup(&email, &password, &name),
                    }
                }
            }
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
    }

    fn on_compose_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.community.composing = false;
                self.state.community.draft.clear();
            }
            KeyCode::Enter => self.state.post_comment(),
            KeyCode::Backspace => {
                self.state.community.draft.pop();
            }
            KeyCode::Char(c) => self.state.community.draft.push(c),
            _ => {}
        }
    }

    fn on_admin_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.admin.next_section(),
            KeyCode::Char('k') | KeyCode::Up => self.state.admin.prev_section(),
            KeyCode::Char('f') => self.state.admin.cycle_user_filter(),
            KeyCode::Char('o') => self.state.logout(),
            KeyCode::Char('b') => self.state.change_page(Page::Home),
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }

    fn on_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.change_page(Page::Home),
            KeyCode::Char('2') => self.state.change_page(Page::Predictions),
            KeyCode::Char('3') => self.state.change_page(Page::Bulletin),
            KeyCode::Char('4') => self.state.change_page(Page::Live),
            KeyCode::Char('5') => self.state.change_page(Page::Vip),
            KeyCode::Char('6') => self.state.change_page(Page::Community),
            KeyCode::Char('7') => self.state.change_page(Page::News),
            // Anyone may ask; visible_page falls back to Home for non-admins.
            KeyCode::Char('8') => self.state.change_page(Page::Admin),
            KeyCode::Char('g') => self.state.cycle_language(),
            KeyCode::Char('l') if !self.state.is_authenticated => {
                self.state.open_auth_modal(AuthMode::Login);
            }
            KeyCode::Char('s') if !self.state.is_authenticated => {
                self.state.open_auth_modal(AuthMode::Signup);
            }
            KeyCode::Char('o') if self.state.is_authenticated => self.state.logout(),
            KeyCode::Char('x') => self.state.info_banner = false,
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => self.on_page_key(key),
        }
    }

    fn on_page_key(&mut self, key: KeyEvent) {
        match self.state.visible_page() {
            Page::Predictions => match key.code {
                KeyCode::Char('f') => self.state.predictions.cycle_filter(),
                KeyCode::Char('j') | KeyCode::Down => self.state.predictions.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.predictions.select_prev(),
                _ => {}
            },
            Page::Bulletin => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.state.bulletin.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.bulletin.select_prev(),
                KeyCode::Char(' ') | KeyCode::Enter => self.state.bulletin.toggle_under_cursor(),
                KeyCode::Char('f') => self.state.bulletin.cycle_sport(),
                KeyCode::Char('c') => self.state.bulletin.clear(),
                KeyCode::Char('v') => {
                    self.state.bulletin.show_coupon = !self.state.bulletin.show_coupon;
                }
                _ => {}
            },
            Page::Live => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    let total = self.state.live_matches.len();
                    self.state.live.select_next(total);
                }
                KeyCode::Char('k') | KeyCode::Up => self.state.live.select_prev(),
                KeyCode::Enter => {
                    if let Some(m) = self.state.live_matches.get(self.state.live.cursor) {
                        let id = m.id;
                        self.state.live.toggle_expanded(id);
                    }
                }
                _ => {}
            },
            Page::Community => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.state.community.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.community.select_prev(),
                KeyCode::Char('n') => self.state.community.composing = true,
                KeyCode::Enter => self.state.toggle_comment_like(),
                _ => {}
            },
            Page::News => match key.code {
                KeyCode::Char('f') => self.state.news.cycle_category(),
                KeyCode::Char('j') | KeyCode::Down => self.state.news.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.news.select_prev(),
                _ => {}
            },
            Page::Vip => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.state.vip.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.vip.select_prev(),
                KeyCode::Enter => {
                    if self.state.vip.show_payment {
                        // Checkout stub: nothing is charged, nothing changes.
                        self.state
                            .push_log("[INFO] Demo checkout, no payment is taken");
                    } else {
                        self.state.select_vip_plan();
                    }
                }
                KeyCode::Char('b') => self.state.vip.back_to_plans(),
                _ => {}
            },
            Page::Home | Page::Admin => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    i18n::ensure_catalog()?;

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let mut ticker = live_feed::spawn_live_ticker(tx);

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, rx);

    ticker.stop();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<optikgoal_terminal::state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let state = &app.state;

    if state.visible_page() == Page::Admin {
        admin::render(frame, state);
        if state.help_overlay {
            render_help_overlay(frame, frame.size());
        }
        return;
    }

    let banner_rows = if state.info_banner { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_rows),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if state.info_banner {
        let banner = Paragraph::new(
            "Demo: login with admin/admin123 (control center) or vip@demo.com/vip123 (VIP). x dismiss",
        )
        .style(Style::default().fg(Color::Black).bg(Color::Yellow));
        frame.render_widget(banner, chunks[1]);
    }

    let mut body = chunks[2];
    if state.show_ads() && state.visible_page() != Page::Vip {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(ads::BANNER_HEIGHT), Constraint::Min(1)])
            .split(body);
        ads::render_banner(frame, split[0]);
        body = split[1];
    }

    match state.visible_page() {
        Page::Home => home::render(frame, body, state),
        Page::Predictions => predictions::render(frame, body, state),
        Page::Bulletin => bulletin::render(frame, body, state),
        Page::Live => live_scores::render(frame, body, state),
        Page::Vip => vip::render(frame, body, state),
        Page::Community => community::render(frame, body, state),
        Page::News => news::render(frame, body, state),
        Page::Admin => {}
    }

    let footer = Paragraph::new(footer_text(state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if let Some(form) = &state.auth {
        render_auth_modal(frame, frame.size(), form, state);
    }

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let mut tabs: Vec<String> = Vec::new();
    let pages = [
        (Page::Home, '1'),
        (Page::Predictions, '2'),
        (Page::Bulletin, '3'),
        (Page::Live, '4'),
        (Page::Vip, '5'),
        (Page::Community, '6'),
        (Page::News, '7'),
        (Page::Admin, '8'),
    ];
    for (page, digit) in pages {
        // VIP members do not get the upsell tab; the admin tab is admin-only.
        if page == Page::Vip && state.is_vip {
            continue;
        }
        if page == Page::Admin && !state.is_admin {
            continue;
        }
        let label = translate(page.translation_key(), state.language);
        if state.visible_page() == page {
            tabs.push(format!("[{digit} {label}]"));
        } else {
            tabs.push(format!(" {digit} {label} "));
        }
    }

    let who = if state.is_admin {
        translate("admin", state.language)
    } else if state.is_vip {
        translate("vip_member", state.language)
    } else if state.is_authenticated {
        "Member".to_string()
    } else {
        translate("guest", state.language)
    };
    let clock = Local::now().format("%H:%M").to_string();
    let status = format!(
        "{} | {} | {}",
        who,
        state.language.code().to_uppercase(),
        clock
    );

    let line1 = "  OPTIKGOAL".to_string();
    let line2 = format!("  {}", tabs.join(" "));
    let line3 = format!("  {status}");
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    let page_keys = match state.visible_page() {
        Page::Home => "1-7 Pages",
        Page::Predictions => "f Filter | j/k Move",
        Page::Bulletin => "j/k Move | Space Pick | f Sport | c Clear | v Coupon",
        Page::Live => "j/k Move | Enter Expand",
        Page::Vip => "j/k Move | Enter Select | b Back",
        Page::Community => "j/k Move | n New comment | Enter Like",
        Page::News => "f Filter | j/k Move",
        Page::Admin => "",
    };
    let session_keys = if state.is_authenticated {
        "o Logout"
    } else {
        "l Login | s Signup"
    };
    let line1 = format!("{page_keys} | {session_keys} | g Language | ? Help | q Quit");
    let line2 = state
        .logs
        .back()
        .cloned()
        .unwrap_or_else(|| "Ready".to_string());
    format!("{line1}\n{line2}")
}

fn render_auth_modal(
    frame: &mut Frame,
    area: Rect,
    form: &optikgoal_terminal::auth_form::AuthForm,
    state: &AppState,
) {
    let popup_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);

    let title = match form.mode {
        AuthMode::Login => translate("login", state.language),
        AuthMode::Signup => translate("signup", state.language),
    };

    let mut lines: Vec<String> = Vec::new();
    for &field in form.fields() {
        let slot = form.slot(field);
        let label = match field {
            AuthField::Name => "Name",
            AuthField::Identifier => "Email",
            AuthField::Password => "Password",
        };
        let marker = if form.focus == field { ">" } else { " " };
        let shown: String = match field {
            AuthField::Password => slot.value.chars().map(|_| '*').collect(),
            _ => slot.value.clone(),
        };
        lines.push(format!("{marker} {label}: {shown}"));
        if let Some(err) = &slot.error {
            lines.push(format!("    ! {err}"));
        }
    }
    lines.push(String::new());
    lines.push("Enter Submit | Tab Next field | Ctrl+T Switch mode | Esc Close".to_string());

    let modal = Paragraph::new(lines.join("\n"))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(modal, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "OptikGoal Terminal - Help",
        "",
        "Global:",
        "  1-7          Pages (8 Control center, admins)",
        "  l / s        Login / Signup",
        "  o            Logout",
        "  g            Cycle language (en/tr/ar)",
        "  x            Dismiss info banner",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Lists:",
        "  j/k or ↑/↓   Move",
        "  f            Cycle filter",
        "  Enter/Space  Act on row",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
