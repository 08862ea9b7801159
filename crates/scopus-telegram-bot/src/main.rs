//! Scopus Telegram Bot - Entry Point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scopus_telegram_bot::{bot, Config, ScopusClient, TelegramBot};

#[derive(Parser, Debug)]
#[command(name = "scopus-telegram-bot")]
#[command(about = "Telegram bot for searching articles via the Scopus API")]
#[command(version)]
struct Cli {
    /// Elsevier Scopus API key
    #[arg(long, env = "SCOPUS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed arguments.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::new(cli.api_key, cli.telegram_token)?;
    let scopus = ScopusClient::new(&config)?;
    let telegram = TelegramBot::new(&config)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Scopus Telegram bot");

    bot::poll_loop(&telegram, &scopus).await?;

    Ok(())
}
