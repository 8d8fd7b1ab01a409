use std::sync::Arc;

use teloxide::{prelude::*, types::ParseMode};
use tokio::sync::Mutex;

use crate::{
    Res,
    management::{PendingManager, TokenManager},
    spotify,
    telegram::keyboards,
    types::{PendingDownload, Resource},
    utils::{self, SpotifyLink},
    warning,
};

const INVALID_LINK_TEXT: &str = "\
🤔 That doesn't look like a Spotify link!

Please send me a valid Spotify link:
• 🎵 Song: `open.spotify.com/track/...`
• 📀 Album: `open.spotify.com/album/...`
• 📋 Playlist: `open.spotify.com/playlist/...`

Or try our demo songs! 👇";

const MALFORMED_LINK_TEXT: &str = "\
❌ *Invalid Spotify Link*

Please send a valid Spotify link:
• 🎵 Songs: `open.spotify.com/track/...`
• 📀 Albums: `open.spotify.com/album/...`
• 📋 Playlists: `open.spotify.com/playlist/...`";

const METADATA_FAILED_TEXT: &str = "\
❌ *Could not fetch metadata*

This could happen if:
• The track/album/playlist doesn't exist
• The link is from a different region
• Spotify is temporarily unavailable

Please try another link or try again later.";

pub async fn handle_message(
    bot: Bot,
    msg: Message,
    token_mgr: Arc<Mutex<TokenManager>>,
    pending: Arc<Mutex<PendingManager>>,
) -> Res<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();

    // known commands are routed before this handler; ignore the rest
    if text.starts_with('/') {
        return Ok(());
    }

    match utils::parse_spotify_link(text) {
        Some(link) => process_spotify_link(&bot, &msg, link, token_mgr, pending).await,
        None if utils::looks_like_spotify_link(text) => {
            bot.send_message(msg.chat.id, MALFORMED_LINK_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
            Ok(())
        }
        None => {
            bot.send_message(msg.chat.id, INVALID_LINK_TEXT)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::invalid_link_menu())
                .await?;
            Ok(())
        }
    }
}

/// Resolves the link to metadata and offers the quality keyboard. The
/// resolved resource is parked in the pending store until the user picks a
/// tier (or cancels).
async fn process_spotify_link(
    bot: &Bot,
    msg: &Message,
    link: SpotifyLink,
    token_mgr: Arc<Mutex<TokenManager>>,
    pending: Arc<Mutex<PendingManager>>,
) -> Res<()> {
    let probe = bot
        .send_message(msg.chat.id, "🔍 *Analyzing Spotify link...*")
        .parse_mode(ParseMode::Markdown)
        .await?;

    let token = match token_mgr.lock().await.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Spotify token request failed: {}", e);
            bot.edit_message_text(
                msg.chat.id,
                probe.id,
                "❌ Error accessing Spotify API. Please try again later.",
            )
            .await?;
            return Ok(());
        }
    };

    let resource = match spotify::fetch_resource(&link, &token).await {
        Ok(resource) => resource,
        Err(e) => {
            warning!("Metadata fetch failed for {} {}: {}", link.kind, link.id, e);
            bot.edit_message_text(msg.chat.id, probe.id, METADATA_FAILED_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
            return Ok(());
        }
    };

    let summary = summarize(&resource);
    pending
        .lock()
        .await
        .insert(msg.chat.id, PendingDownload { resource });

    bot.edit_message_text(msg.chat.id, probe.id, summary)
        .parse_mode(ParseMode::Markdown)
        .reply_markup(keyboards::quality_menu())
        .await?;

    Ok(())
}

pub(crate) fn summarize(resource: &Resource) -> String {
    match resource {
        Resource::Track(track) => format!(
            "🎵 *Found Track:*\n\
             *Title:* {title}\n\
             *Artist:* {artist}\n\
             *Duration:* {duration}\n\
             *Album:* {album}\n\n\
             Please select your preferred audio quality:",
            title = track.name,
            artist = track.artists,
            duration = utils::format_duration(track.duration_ms),
            album = track.album,
        ),
        Resource::Album(album) => format!(
            "📀 *Found Album:*\n\
             *Title:* {title}\n\
             *Artist:* {artist}\n\
             *Tracks:* {tracks} songs\n\
             *Release Date:* {release_date}\n\n\
             Please select your preferred audio quality:",
            title = album.name,
            artist = album.artists,
            tracks = album.total_tracks,
            release_date = album.release_date,
        ),
        Resource::Playlist(playlist) => format!(
            "📋 *Found Playlist:*\n\
             *Title:* {title}\n\
             *Owner:* {owner}\n\
             *Tracks:* {tracks} songs\n\
             *Description:* {description}\n\n\
             Please select your preferred audio quality:",
            title = playlist.name,
            owner = playlist.owner,
            tracks = playlist.total_tracks,
            description = if playlist.description.is_empty() {
                "No description"
            } else {
                playlist.description.as_str()
            },
        ),
    }
}
