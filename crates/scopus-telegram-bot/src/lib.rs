//! Scopus Telegram Bot
//!
//! A Telegram bot that relays user search queries to the Elsevier Scopus
//! search API and formats the matches back into chat messages.
//!
//! # Features
//!
//! - **`/scopus <query>`**: phrase search over title/abstract/keywords,
//!   top 5 results by relevance
//! - **`/quote`**: API quota report read from rate-limit response headers
//! - **Async-first**: Built on Tokio with reqwest
//! - **Stateless**: one request/response round trip per command, no caching
//!
//! # Example
//!
//! ```no_run
//! use scopus_telegram_bot::{client::ScopusClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ScopusClient::new(&config)?;
//!
//!     let articles = client.search("methane pyrolysis").await?;
//!     println!("{} matches", articles.len());
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;

pub use bot::TelegramBot;
pub use client::ScopusClient;
pub use config::Config;
pub use error::{ClientError, ConfigError};
