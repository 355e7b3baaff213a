pub mod admin;
pub mod ads;
pub mod auth_form;
pub mod bulletin;
pub mod community;
pub mod data;
pub mod home;
pub mod i18n;
pub mod live_feed;
pub mod live_scores;
pub mod news;
pub mod predictions;
pub mod state;
pub mod vip;
