use optikgoal_terminal::auth_form::AuthMode;
use optikgoal_terminal::community::{CommunityOutcome, CommunityState};
use optikgoal_terminal::data::CommentStatus;
use optikgoal_terminal::state::AppState;

#[test]
fn anonymous_post_is_bounced_to_login() {
    let mut board = CommunityState::default();
    let before = board.comments.len();
    board.draft = "Great tip!".to_string();

    assert_eq!(board.post_draft(false), CommunityOutcome::NeedsLogin);
    assert_eq!(board.comments.len(), before);
    // The draft is kept so it survives the login round-trip.
    assert_eq!(board.draft, "Great tip!");
}

#[test]
fn controller_opens_login_modal_on_anonymous_post() {
    let mut state = AppState::new();
    state.community.draft = "Great tip!".to_string();
    state.post_comment();

    assert!(matches!(
        state.auth.as_ref().map(|f| f.mode),
        Some(AuthMode::Login)
    ));
}

#[test]
fn authenticated_post_prepends_pending_comment() {
    let mut board = CommunityState::default();
    let before = board.comments.len();
    board.draft = "  Great tip!  ".to_string();
    board.composing = true;

    assert_eq!(board.post_draft(true), CommunityOutcome::Done);
    assert_eq!(board.comments.len(), before + 1);

    let posted = &board.comments[0];
    assert_eq!(posted.author, "You");
    assert_eq!(posted.content, "Great tip!");
    assert_eq!(posted.timestamp, "Just now");
    assert_eq!(posted.likes, 0);
    assert_eq!(posted.status, CommentStatus::Pending);
    assert_eq!(posted.id, before as u32 + 1);

    assert!(board.draft.is_empty());
    assert!(!board.composing);
    assert_eq!(board.cursor, 0);
}

#[test]
fn blank_draft_posts_nothing() {
    let mut board = CommunityState::default();
    let before = board.comments.len();
    board.draft = "   ".to_string();

    assert_eq!(board.post_draft(true), CommunityOutcome::NothingToPost);
    assert_eq!(board.comments.len(), before);
}

#[test]
fn like_toggles_up_then_back_down() {
    let mut board = CommunityState::default();
    let id = board.comments[0].id;
    let base = board.comments[0].likes;

    assert_eq!(board.toggle_like_under_cursor(true), CommunityOutcome::Done);
    assert_eq!(board.comments[0].likes, base + 1);
    assert!(board.has_liked(id));

    assert_eq!(board.toggle_like_under_cursor(true), CommunityOutcome::Done);
    assert_eq!(board.comments[0].likes, base);
    assert!(!board.has_liked(id));
}

#[test]
fn anonymous_like_needs_login() {
    let mut board = CommunityState::default();
    let base = board.comments[0].likes;

    assert_eq!(
        board.toggle_like_under_cursor(false),
        CommunityOutcome::NeedsLogin
    );
    assert_eq!(board.comments[0].likes, base);
}

#[test]
fn seed_comments_are_all_approved() {
    let board = CommunityState::default();
    assert!(!board.comments.is_empty());
    assert!(board
        .comments
        .iter()
        .all(|c| c.status == CommentStatus::Approved));
}
