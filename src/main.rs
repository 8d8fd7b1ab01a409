use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use teloxide::prelude::*;
use tokio::sync::Mutex;

use spotigram::{
    config,
    demo::DemoCatalog,
    error, info,
    management::{PendingManager, TokenManager},
    server, success, telegram, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Keep updates that queued up while the bot was offline instead of
    /// dropping them at startup
    #[clap(long)]
    keep_pending: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    // teloxide logs through the `log` facade
    pretty_env_logger::init();

    let cli = Cli::parse();

    info!("Starting keep-alive server...");
    tokio::spawn(async {
        server::start_api_server().await;
    });

    let bot = Bot::new(config::telegram_bot_token());

    // a stale webhook blocks long polling; clear it before dispatching
    if !cli.keep_pending {
        match bot.delete_webhook().drop_pending_updates(true).await {
            Ok(_) => success!("Webhook cleared, pending updates dropped."),
            Err(e) => warning!("Could not clear webhook: {}", e),
        }
    }

    let token_mgr = Arc::new(Mutex::new(TokenManager::load_or_default().await));
    let pending = Arc::new(Mutex::new(PendingManager::new()));
    let catalog = Arc::new(DemoCatalog::new());

    info!("Starting bot polling...");
    telegram::dispatch(bot, token_mgr, pending, catalog).await;
}
