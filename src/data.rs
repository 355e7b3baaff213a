//! Static demo datasets. Everything here is fixed display data: there is no
//! backend, so these literals are the whole "database". Ids are unique
//! within each array.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sport {
    Football,
    Basketball,
    Tennis,
}

impl Sport {
    pub fn label(self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Tennis => "Tennis",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BulletinMatch {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub sport: Sport,
    pub time: String,
    pub date: String,
    pub odds_home: String,
    pub odds_draw: String,
    pub odds_away: String,
}

fn bulletin_match(
    id: u32,
    home_team: &str,
    away_team: &str,
    league: &str,
    sport: Sport,
    time: &str,
    date: &str,
    odds: [&str; 3],
) -> BulletinMatch {
    BulletinMatch {
        id,
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        league: league.to_string(),
        sport,
        time: time.to_string(),
        date: date.to_string(),
        odds_home: odds[0].to_string(),
        odds_draw: odds[1].to_string(),
        odds_away: odds[2].to_string(),
    }
}

pub static BULLETIN: Lazy<Vec<BulletinMatch>> = Lazy::new(|| {
    vec![
        bulletin_match(1, "Manchester United", "Liverpool", "Premier League", Sport::Football, "15:00", "Today", ["2.50", "3.20", "2.80"]),
        bulletin_match(2, "Real Madrid", "Barcelona", "La Liga", Sport::Football, "20:00", "Today", ["2.10", "3.40", "3.50"]),
        bulletin_match(3, "Bayern Munich", "Dortmund", "Bundesliga", Sport::Football, "17:30", "Today", ["1.75", "3.80", "4.50"]),
        bulletin_match(4, "Chelsea", "Arsenal", "Premier League", Sport::Football, "18:30", "Today", ["2.65", "3.10", "2.90"]),
        bulletin_match(5, "PSG", "Lyon", "Ligue 1", Sport::Football, "21:00", "Today", ["1.60", "4.00", "5.50"]),
        bulletin_match(6, "Lakers", "Warriors", "NBA", Sport::Basketball, "19:00", "Today", ["1.90", "-", "1.95"]),
        bulletin_match(7, "Juventus", "Inter Milan", "Serie A", Sport::Football, "19:45", "Tomorrow", ["2.40", "3.20", "3.00"]),
        bulletin_match(8, "Atletico Madrid", "Sevilla", "La Liga", Sport::Football, "16:15", "Tomorrow", ["1.85", "3.50", "4.20"]),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionCategory {
    Banker,
    Surprise,
    Coupon,
    Vip,
}

impl PredictionCategory {
    pub fn label(self) -> &'static str {
        match self {
            PredictionCategory::Banker => "BANKER",
            PredictionCategory::Surprise => "SURPRISE",
            PredictionCategory::Coupon => "COUPON",
            PredictionCategory::Vip => "VIP",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prediction {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub tip: String,
    pub confidence: u8,
    pub odds: String,
    pub time: String,
    pub category: PredictionCategory,
    pub ai_score: u8,
    pub home_form: String,
    pub away_form: String,
    pub h2h: String,
}

#[allow(clippy::too_many_arguments)]
fn prediction(
    id: u32,
    home_team: &str,
    away_team: &str,
    league: &str,
    tip: &str,
    confidence: u8,
    odds: &str,
    time: &str,
    category: PredictionCategory,
    ai_score: u8,
    forms: [&str; 3],
) -> Prediction {
    Prediction {
        id,
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        league: league.to_string(),
        tip: tip.to_string(),
        confidence,
        odds: odds.to_string(),
        time: time.to_string(),
        category,
        ai_score,
        home_form: forms[0].to_string(),
        away_form: forms[1].to_string(),
        h2h: forms[2].to_string(),
    }
}

pub static PREDICTIONS: Lazy<Vec<Prediction>> = Lazy::new(|| {
    vec![
        prediction(1, "Manchester City", "Chelsea", "Premier League", "Home Win", 92, "1.65", "15:00", PredictionCategory::Banker, 95, ["WWWWW", "WLWDL", "3-1-1"]),
        prediction(2, "Liverpool", "Arsenal", "Premier League", "Both Teams to Score", 88, "1.80", "17:30", PredictionCategory::Banker, 91, ["WWWDW", "WWLWW", "2-2-1"]),
        prediction(3, "Nottingham", "Tottenham", "Premier League", "Away Win", 76, "2.40", "20:00", PredictionCategory::Surprise, 82, ["LDLLW", "WWWWL", "1-3-1"]),
        prediction(4, "Real Madrid", "Atletico", "La Liga", "Over 2.5 Goals", 84, "1.95", "21:00", PredictionCategory::Coupon, 87, ["WWLWW", "WDWLW", "3-1-1"]),
        prediction(5, "Bayern Munich", "PSG", "Champions League", "Home Win & Over 2.5", 95, "2.85", "20:00", PredictionCategory::Vip, 98, ["WWWWW", "WWWLW", "2-1-2"]),
        prediction(6, "Inter Milan", "AC Milan", "Serie A", "Draw", 79, "3.10", "18:00", PredictionCategory::Surprise, 85, ["WDWDW", "DWWDL", "1-3-1"]),
        prediction(7, "Barcelona", "Sevilla", "La Liga", "Home Win", 91, "1.55", "16:30", PredictionCategory::Banker, 93, ["WWWWW", "LLWDL", "4-1-0"]),
        prediction(8, "Juventus", "Roma", "Serie A", "Under 2.5 Goals", 72, "2.10", "19:45", PredictionCategory::Coupon, 78, ["WDWDL", "DWLDW", "2-2-1"]),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Live,
    HalfTime,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::HalfTime => "HT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEventKind {
    Goal,
    Yellow,
    Red,
    Substitution,
}

impl MatchEventKind {
    pub fn label(self) -> &'static str {
        match self {
            MatchEventKind::Goal => "GOAL",
            MatchEventKind::Yellow => "YELLOW",
            MatchEventKind::Red => "RED",
            MatchEventKind::Substitution => "SUB",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchEvent {
    pub minute: u8,
    pub kind: MatchEventKind,
    pub side: Side,
    pub player: String,
}

fn event(minute: u8, kind: MatchEventKind, side: Side, player: &str) -> MatchEvent {
    MatchEvent {
        minute,
        kind,
        side,
        player: player.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LiveMatch {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub league: String,
    pub minute: u8,
    pub status: MatchStatus,
    pub possession_home: u8,
    pub possession_away: u8,
    pub shots_home: u8,
    pub shots_away: u8,
    pub on_target_home: u8,
    pub on_target_away: u8,
    pub corners_home: u8,
    pub corners_away: u8,
    pub events: Vec<MatchEvent>,
}

/// Initial live-score board. The only mutation afterwards is the simulated
/// minute tick (see `live_feed`).
pub fn seed_live_matches() -> Vec<LiveMatch> {
    vec![
        LiveMatch {
            id: 1,
            home_team: "Manchester United".to_string(),
            away_team: "Liverpool".to_string(),
            home_score: 2,
            away_score: 1,
            league: "Premier League".to_string(),
            minute: 67,
            status: MatchStatus::Live,
            possession_home: 58,
            possession_away: 42,
            shots_home: 12,
            shots_away: 8,
            on_target_home: 6,
            on_target_away: 4,
            corners_home: 7,
            corners_away: 3,
            events: vec![
                event(15, MatchEventKind::Goal, Side::Home, "Rashford"),
                event(34, MatchEventKind::Yellow, Side::Away, "Van Dijk"),
                event(45, MatchEventKind::Goal, Side::Away, "Salah"),
                event(63, MatchEventKind::Goal, Side::Home, "Fernandes"),
            ],
        },
        LiveMatch {
            id: 2,
            home_team: "Real Madrid".to_string(),
            away_team: "Barcelona".to_string(),
            home_score: 1,
            away_score: 1,
            league: "La Liga".to_string(),
            minute: 45,
            status: MatchStatus::HalfTime,
            possession_home: 52,
            possession_away: 48,
            shots_home: 8,
            shots_away: 9,
            on_target_home: 3,
            on_target_away: 4,
            corners_home: 4,
            corners_away: 5,
            events: vec![
                event(23, MatchEventKind::Goal, Side::Home, "Vinicius Jr"),
                event(38, MatchEventKind::Goal, Side::Away, "Lewandowski"),
            ],
        },
        LiveMatch {
            id: 3,
            home_team: "Bayern Munich".to_string(),
            away_team: "Dortmund".to_string(),
            home_score: 3,
            away_score: 2,
            league: "Bundesliga".to_string(),
            minute: 78,
            status: MatchStatus::Live,
            possession_home: 65,
            possession_away: 35,
            shots_home: 18,
            shots_away: 11,
            on_target_home: 10,
            on_target_away: 7,
            corners_home: 9,
            corners_away: 4,
            events: vec![
                event(12, MatchEventKind::Goal, Side::Home, "Kane"),
                event(25, MatchEventKind::Goal, Side::Away, "Adeyemi"),
                event(42, MatchEventKind::Goal, Side::Home, "Musiala"),
                event(58, MatchEventKind::Goal, Side::Away, "Fullkrug"),
                event(71, MatchEventKind::Goal, Side::Home, "Kane"),
                event(76, MatchEventKind::Red, Side::Away, "Hummels"),
            ],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub status: CommentStatus,
}

fn comment(id: u32, author: &str, content: &str, timestamp: &str, likes: u32) -> Comment {
    Comment {
        id,
        author: author.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        likes,
        status: CommentStatus::Approved,
    }
}

pub fn seed_comments() -> Vec<Comment> {
    vec![
        comment(1, "John D.", "Great predictions today! Won 3 out of 4 bets.", "2 hours ago", 24),
        comment(2, "Sarah M.", "The banker tips are incredible. Thanks OptikGoal!", "3 hours ago", 18),
        comment(3, "Mike R.", "Just joined VIP and already seeing results. Highly recommend!", "5 hours ago", 31),
        comment(4, "Emma L.", "What do you think about the Liverpool game tonight?", "1 hour ago", 12),
        comment(5, "David K.", "The live scores feature is amazing. Real-time updates are perfect!", "4 hours ago", 22),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Football,
    Basketball,
    Tennis,
    Analysis,
}

impl NewsCategory {
    pub fn label(self) -> &'static str {
        match self {
            NewsCategory::Football => "Football",
            NewsCategory::Basketball => "Basketball",
            NewsCategory::Tennis => "Tennis",
            NewsCategory::Analysis => "Analysis",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: NewsCategory,
    pub timestamp: String,
    pub trending: bool,
}

fn article(
    id: u32,
    title: &str,
    excerpt: &str,
    category: NewsCategory,
    timestamp: &str,
    trending: bool,
) -> NewsArticle {
    NewsArticle {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category,
        timestamp: timestamp.to_string(),
        trending,
    }
}

pub static NEWS: Lazy<Vec<NewsArticle>> = Lazy::new(|| {
    vec![
        article(1, "Manchester United Signs Star Midfielder in Record Deal", "In a groundbreaking transfer, Manchester United has secured the signature of...", NewsCategory::Football, "2 hours ago", true),
        article(2, "Lakers Dominate in Playoff Victory", "The Los Angeles Lakers showcased their championship form with a commanding...", NewsCategory::Basketball, "3 hours ago", true),
        article(3, "Wimbledon Champion Announces Retirement", "Tennis legend and multiple Wimbledon champion has announced their retirement...", NewsCategory::Tennis, "5 hours ago", false),
        article(4, "Premier League Title Race Heats Up", "With only five games remaining, the Premier League title race has never been...", NewsCategory::Football, "6 hours ago", true),
        article(5, "Expert Analysis: Top Betting Strategies for This Weekend", "Our experts break down the best betting strategies and predictions for...", NewsCategory::Analysis, "1 hour ago", false),
        article(6, "NBA All-Star Weekend Highlights", "The annual NBA All-Star weekend brought spectacular performances and...", NewsCategory::Basketball, "8 hours ago", false),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Vip,
    Regular,
    Banned,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Vip => "VIP",
            UserStatus::Regular => "Regular",
            UserStatus::Banned => "Banned",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub join_date: String,
    pub last_active: String,
}

fn admin_user(
    id: u32,
    name: &str,
    email: &str,
    status: UserStatus,
    join_date: &str,
    last_active: &str,
) -> AdminUser {
    AdminUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        status,
        join_date: join_date.to_string(),
        last_active: last_active.to_string(),
    }
}

pub static ADMIN_USERS: Lazy<Vec<AdminUser>> = Lazy::new(|| {
    vec![
        admin_user(1, "John Doe", "john@example.com", UserStatus::Vip, "2024-01-15", "2 hours ago"),
        admin_user(2, "Jane Smith", "jane@example.com", UserStatus::Regular, "2024-02-20", "1 day ago"),
        admin_user(3, "Mike Johnson", "mike@example.com", UserStatus::Vip, "2024-01-08", "30 mins ago"),
        admin_user(4, "Sarah Wilson", "sarah@example.com", UserStatus::Regular, "2024-03-12", "3 hours ago"),
        admin_user(5, "Tom Brown", "tom@example.com", UserStatus::Banned, "2024-02-05", "1 week ago"),
        admin_user(6, "Emma Davis", "emma@example.com", UserStatus::Vip, "2023-12-20", "5 mins ago"),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    Monthly,
    Quarterly,
    Annual,
}

#[derive(Debug, Clone)]
pub struct VipPlan {
    pub id: PlanId,
    pub name: String,
    pub price: String,
    pub period: String,
    pub popular: bool,
    pub savings: Option<String>,
}

pub static VIP_PLANS: Lazy<Vec<VipPlan>> = Lazy::new(|| {
    vec![
        VipPlan {
            id: PlanId::Monthly,
            name: "Monthly".to_string(),
            price: "29.99".to_string(),
            period: "month".to_string(),
            popular: false,
            savings: None,
        },
        VipPlan {
            id: PlanId::Quarterly,
            name: "Quarterly".to_string(),
            price: "74.99".to_string(),
            period: "3 months".to_string(),
            popular: true,
            savings: Some("17%".to_string()),
        },
        VipPlan {
            id: PlanId::Annual,
            name: "Annual".to_string(),
            price: "249.99".to_string(),
            period: "year".to_string(),
            popular: false,
            savings: Some("30%".to_string()),
        },
    ]
});

#[derive(Debug, Clone)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

pub static PAYMENT_METHODS: Lazy<Vec<PaymentMethod>> = Lazy::new(|| {
    [
        ("visa", "Visa"),
        ("mastercard", "Mastercard"),
        ("paypal", "PayPal"),
        ("apple", "Apple Pay"),
        ("google", "Google Pay"),
        ("crypto", "Crypto"),
    ]
    .into_iter()
    .map(|(id, name)| PaymentMethod {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
});

#[derive(Debug, Clone)]
pub struct UpcomingMatch {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub time: String,
    pub date: String,
    pub league: String,
}

pub static HOME_UPCOMING: Lazy<Vec<UpcomingMatch>> = Lazy::new(|| {
    [
        (1, "Chelsea", "Arsenal", "18:30", "Today", "Premier League"),
        (2, "PSG", "Lyon", "20:00", "Today", "Ligue 1"),
        (3, "Juventus", "Inter Milan", "19:45", "Tomorrow", "Serie A"),
    ]
    .into_iter()
    .map(|(id, home, away, time, date, league)| UpcomingMatch {
        id,
        home_team: home.to_string(),
        away_team: away.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        league: league.to_string(),
    })
    .collect()
});
