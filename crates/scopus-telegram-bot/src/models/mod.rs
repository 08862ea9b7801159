//! Data models for the Scopus and Telegram APIs.
//!
//! Scopus models use `#[serde(rename = "...")]` to match the API's
//! prefixed field names (`dc:title`, `prism:doi`, ...) and
//! `#[serde(default)]` for optional fields.

mod article;
mod quota;
mod telegram;

pub use article::{placeholder, strip_tags, Article, Entry, SearchResponse, SearchResults};
pub use quota::{format_reset, QuotaStatus, UNKNOWN};
pub use telegram::{Chat, Message, Update, UpdatesResponse};
