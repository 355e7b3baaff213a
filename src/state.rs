//! Root session/navigation state: the single source of truth for what is on
//! screen and who the current viewer is. All transitions are total: there is
//! no failing login in this demo, every credential pair lands on some tier.

use std::collections::VecDeque;

use crate::admin::AdminState;
use crate::auth_form::{AuthForm, AuthMode};
use crate::bulletin::BulletinState;
use crate::community::{CommunityOutcome, CommunityState};
use crate::data::{self, LiveMatch, MatchStatus};
use crate::i18n::Language;
use crate::live_scores::LiveScoresState;
use crate::news::NewsState;
use crate::predictions::PredictionsState;
use crate::vip::VipState;

const ADMIN_IDENTIFIER: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";
const VIP_DEMO_IDENTIFIER: &str = "vip@demo.com";
const VIP_DEMO_PASSWORD: &str = "vip123";

const LOG_CAP: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Predictions,
    Bulletin,
    Live,
    Vip,
    Community,
    News,
    Admin,
}

impl Page {
    pub fn translation_key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Predictions => "predictions",
            Page::Bulletin => "bulletin",
            Page::Live => "live",
            Page::Vip => "vip",
            Page::Community => "community",
            Page::News => "news",
            Page::Admin => "admin",
        }
    }
}

/// Credential classification result. Computed once per submit, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTier {
    Admin,
    VipDemo,
    Regular,
}

pub fn classify_credentials(identifier: &str, password: &str) -> LoginTier {
    if identifier == ADMIN_IDENTIFIER && password == ADMIN_PASSWORD {
        LoginTier::Admin
    } else if identifier == VIP_DEMO_IDENTIFIER && password == VIP_DEMO_PASSWORD {
        LoginTier::VipDemo
    } else {
        LoginTier::Regular
    }
}

/// Updates pushed from the live ticker thread.
#[derive(Debug, Clone)]
pub enum Delta {
    MinuteTick,
    Log(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_vip: bool,
    pub language: Language,
    /// Some = modal open; the form owns all of its validation state.
    pub auth: Option<AuthForm>,
    pub help_overlay: bool,
    pub info_banner: bool,
    pub logs: VecDeque<String>,
    pub live_matches: Vec<LiveMatch>,
    pub predictions: PredictionsState,
    pub bulletin: BulletinState,
    pub live: LiveScoresState,
    pub community: CommunityState,
    pub news: NewsState,
    pub vip: VipState,
    pub admin: AdminState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            is_authenticated: false,
            is_admin: false,
            is_vip: false,
            language: Language::En,
            auth: None,
            help_overlay: false,
            info_banner: true,
            logs: VecDeque::with_capacity(LOG_CAP),
            live_matches: data::seed_live_matches(),
            predictions: PredictionsState::default(),
            bulletin: BulletinState::default(),
            live: LiveScoresState::default(),
            community: CommunityState::default(),
            news: NewsState::default(),
            vip: VipState::default(),
            admin: AdminState::default(),
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        if self.logs.len() >= LOG_CAP {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    /// Navigation plus the scroll-to-top side effect: the target page's
    /// cursor/scroll state is reset so it comes up from the top.
    pub fn change_page(&mut self, page: Page) {
        self.page = page;
        match page {
            Page::Predictions => self.predictions.cursor = 0,
            Page::Bulletin => {
                self.bulletin.cursor = 0;
                self.bulletin.scroll = 0;
            }
            Page::Live => self.live.cursor = 0,
            Page::Community => self.community.cursor = 0,
            Page::News => self.news.cursor = 0,
            Page::Vip => self.vip.cursor = 0,
            Page::Home | Page::Admin => {}
        }
    }

    /// The page actually rendered: asking for Admin without the admin flag
    /// silently falls back to Home, no error, no redirect message.
    pub fn visible_page(&self) -> Page {
        if self.page == Page::Admin && !self.is_admin {
            Page::Home
        } else {
            self.page
        }
    }

    /// Every submission succeeds as some tier, a deliberate property of the
    /// demo backend.
    pub fn login(&mut self, identifier: &str, password: &str) {
        match classify_credentials(identifier, password) {
            LoginTier::Admin => {
                self.is_authenticated = true;
                self.is_admin = true;
                self.is_vip = false;
                self.auth = None;
                self.change_page(Page::Admin);
                self.push_log("[INFO] Admin login");
            }
            LoginTier::VipDemo => {
                self.is_authenticated = true;
                self.is_admin = false;
                self.is_vip = true;
                self.auth = None;
                self.push_log("[INFO] VIP demo login");
            }
            LoginTier::Regular => {
                self.is_authenticated = true;
                self.is_admin = false;
                self.is_vip = false;
                self.auth = None;
                self.push_log(format!("[INFO] Logged in as {identifier}"));
            }
        }
    }

    /// Mock signup: authenticates, leaves role flags at their prior values.
    pub fn signup(&mut self, email: &str, _password: &str, _name: &str) {
        self.is_authenticated = true;
        self.auth = None;
        self.push_log(format!("[INFO] Account created for {email}"));
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.is_admin = false;
        self.is_vip = false;
        self.change_page(Page::Home);
        self.push_log("[INFO] Logged out");
    }

    pub fn open_auth_modal(&mut self, mode: AuthMode) {
        self.auth = Some(AuthForm::new(mode));
    }

    pub fn close_auth_modal(&mut self) {
        self.auth = None;
    }

    /// Ads go to authenticated regular users only.
    pub fn show_ads(&self) -> bool {
        self.is_authenticated && !self.is_vip && !self.is_admin
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        self.push_log(format!("[INFO] Language: {}", self.language.label()));
    }

    /// Comment post with the auth gate: unauthenticated viewers get the
    /// login modal instead of an append.
    pub fn post_comment(&mut self) {
        match self.community.post_draft(self.is_authenticated) {
            CommunityOutcome::NeedsLogin => self.open_auth_modal(AuthMode::Login),
            CommunityOutcome::Done => {
                self.push_log("[INFO] Comment submitted for review");
            }
            CommunityOutcome::NothingToPost => {}
        }
    }

    pub fn toggle_comment_like(&mut self) {
        if self.community.toggle_like_under_cursor(self.is_authenticated)
            == CommunityOutcome::NeedsLogin
        {
            self.open_auth_modal(AuthMode::Login);
        }
    }

    /// Plan selection sends anonymous visitors to signup, mirroring the
    /// site's upsell flow.
    pub fn select_vip_plan(&mut self) {
        if !self.is_authenticated {
            self.open_auth_modal(AuthMode::Signup);
            return;
        }
        self.vip.choose_plan_under_cursor();
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::MinuteTick => {
            for m in &mut state.live_matches {
                if m.status == MatchStatus::Live && m.minute < 90 {
                    m.minute += 1;
                }
            }
        }
        Delta::Log(line) => state.push_log(line),
    }
}
