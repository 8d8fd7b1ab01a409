use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode},
};
use tokio::sync::Mutex;

use crate::{
    Res,
    demo::DemoCatalog,
    management::{PendingManager, TokenManager},
    spotify,
    telegram::{commands, delivery, keyboards},
    utils::{self, Quality},
    warning,
};

const DEMO_TEXT: &str = "\
🎵 *Demo Songs - Try These Popular Tracks!* 🎵

Select any song below to test the bot:
👇 *Click to download:*";

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    token_mgr: Arc<Mutex<TokenManager>>,
    pending: Arc<Mutex<PendingManager>>,
    catalog: Arc<DemoCatalog>,
) -> Res<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data else {
        return Ok(());
    };
    // inline keyboards always come attached to a message the bot sent
    let Some(message) = q.message else {
        return Ok(());
    };
    let chat_id = message.chat.id;
    let message_id = message.id;

    match data.as_str() {
        "help" => {
            bot.edit_message_text(chat_id, message_id, commands::HELP_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::help_menu())
                .await?;
        }
        "back_start" => {
            bot.edit_message_text(chat_id, message_id, commands::WELCOME_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::start_menu())
                .await?;
        }
        "demo_songs" => {
            let picks = catalog.random_tracks(6);
            bot.edit_message_text(chat_id, message_id, DEMO_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::demo_menu(&picks))
                .await?;
        }
        "cancel" => {
            pending.lock().await.clear(chat_id);
            bot.edit_message_text(chat_id, message_id, "❌ Operation cancelled.")
                .await?;
        }
        other if other.starts_with("demo_") => {
            process_demo_selection(&bot, chat_id, message_id, other, token_mgr, catalog).await?;
        }
        other if other.starts_with("quality_") => {
            process_quality_selection(&bot, chat_id, message_id, other, pending).await?;
        }
        other => {
            warning!("Unknown callback data: {}", other);
        }
    }

    Ok(())
}

/// Resolves a demo pick and delivers it right away at medium quality.
async fn process_demo_selection(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    data: &str,
    token_mgr: Arc<Mutex<TokenManager>>,
    catalog: Arc<DemoCatalog>,
) -> Res<()> {
    let index = data
        .strip_prefix("demo_")
        .and_then(|raw| raw.parse::<usize>().ok());

    let Some(track) = index.and_then(|i| catalog.get(i)) else {
        bot.edit_message_text(chat_id, message_id, "❌ Demo track not found. Try /start again.")
            .await?;
        return Ok(());
    };

    bot.edit_message_text(chat_id, message_id, "🔍 *Processing demo track...*")
        .parse_mode(ParseMode::Markdown)
        .await?;

    let Some(link) = utils::parse_spotify_link(track.spotify_url) else {
        bot.edit_message_text(chat_id, message_id, "❌ Demo track link is broken.")
            .await?;
        return Ok(());
    };

    let token = match token_mgr.lock().await.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Spotify token request failed: {}", e);
            bot.edit_message_text(
                chat_id,
                message_id,
                "❌ Error accessing Spotify API. Please try again later.",
            )
            .await?;
            return Ok(());
        }
    };

    let resource = match spotify::fetch_resource(&link, &token).await {
        Ok(resource) => resource,
        Err(e) => {
            warning!("Demo metadata fetch failed for {}: {}", track.name, e);
            bot.edit_message_text(chat_id, message_id, "❌ Could not fetch metadata for demo track.")
                .await?;
            return Ok(());
        }
    };

    delivery::deliver(bot, chat_id, message_id, resource, Quality::Medium).await
}

async fn process_quality_selection(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    data: &str,
    pending: Arc<Mutex<PendingManager>>,
) -> Res<()> {
    let quality = match data
        .strip_prefix("quality_")
        .ok_or_else(|| "missing prefix".to_string())
        .and_then(utils::parse_quality)
    {
        Ok(quality) => quality,
        Err(e) => {
            warning!("Bad quality callback '{}': {}", data, e);
            bot.edit_message_text(
                chat_id,
                message_id,
                "❌ Invalid quality selection. Please choose from available options.",
            )
            .await?;
            return Ok(());
        }
    };

    let Some(download) = pending.lock().await.take(chat_id) else {
        bot.edit_message_text(chat_id, message_id, "❌ No metadata found. Please try again.")
            .await?;
        return Ok(());
    };

    delivery::deliver(bot, chat_id, message_id, download.resource, quality).await
}
