use std::time::Duration;

use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, MessageId, ParseMode},
};

use crate::{
    Res, config, downloader,
    types::{AlbumMeta, PlaylistMeta, Resource, TrackMeta},
    utils::{self, Quality},
    warning,
};

const DOWNLOAD_FAILED_TEXT: &str = "\
❌ *Download Failed*

Could not find or download this track from available sources.
Please try another song or check if the link is valid.";

pub async fn deliver(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    resource: Resource,
    quality: Quality,
) -> Res<()> {
    match resource {
        Resource::Track(track) => deliver_track(bot, chat_id, message_id, track, quality).await,
        Resource::Album(album) => deliver_album(bot, chat_id, message_id, album, quality).await,
        Resource::Playlist(playlist) => {
            deliver_playlist(bot, chat_id, message_id, playlist, quality).await
        }
    }
}

async fn deliver_track(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    track: TrackMeta,
    quality: Quality,
) -> Res<()> {
    bot.edit_message_text(
        chat_id,
        message_id,
        "🎵 *Please wait, your music is being processed...*\n⏳ *This may take 30-60 seconds*",
    )
    .parse_mode(ParseMode::Markdown)
    .await?;

    let audio_file = match downloader::fetch_track_audio(&track, quality).await {
        Ok(path) => path,
        Err(e) => {
            warning!("Download failed for {}: {}", track.name, e);
            bot.edit_message_text(chat_id, message_id, DOWNLOAD_FAILED_TEXT)
                .parse_mode(ParseMode::Markdown)
                .await?;
            return Ok(());
        }
    };

    if let Ok(metadata) = async_fs::metadata(&audio_file).await {
        if metadata.len() > config::max_audio_file_size() {
            warning!(
                "File too large to send: {} ({})",
                audio_file.display(),
                utils::format_file_size(metadata.len())
            );
            downloader::cleanup(&audio_file).await;
            bot.edit_message_text(
                chat_id,
                message_id,
                "❌ *File is too large to send via Telegram.*",
            )
            .parse_mode(ParseMode::Markdown)
            .await?;
            return Ok(());
        }
    }

    bot.edit_message_text(chat_id, message_id, "📤 *Uploading your song...*")
        .parse_mode(ParseMode::Markdown)
        .await?;

    let caption = format!(
        "🎵 *{title}*\n👤 *{artist}*\n📀 *{album}*",
        title = utils::escape_markdown(&track.name),
        artist = utils::escape_markdown(&track.artists),
        album = utils::escape_markdown(&track.album),
    );

    let mut request = bot
        .send_audio(chat_id, InputFile::file(audio_file.clone()))
        .title(track.name.clone())
        .performer(track.artists.clone())
        .duration((track.duration_ms / 1000) as u32)
        .caption(caption)
        .parse_mode(ParseMode::Markdown);

    if let Some(cover) = fetch_cover_art(track.album_art_url.as_deref()).await {
        request = request.thumb(InputFile::memory(cover).file_name("cover.jpg"));
    }

    let sent = request.await;
    downloader::cleanup(&audio_file).await;
    sent?;

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "✅ *Download Complete!*\n\n\
             🎵 *Track:* {title}\n\
             👤 *Artist:* {artist}\n\
             🔊 *Quality:* {quality}\n\n\
             Enjoy your music! 🎶",
            title = track.name,
            artist = track.artists,
            quality = quality.title(),
        ),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;

    Ok(())
}

async fn deliver_album(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    album: AlbumMeta,
    quality: Quality,
) -> Res<()> {
    bot.edit_message_text(chat_id, message_id, "📀 *Processing album...*")
        .parse_mode(ParseMode::Markdown)
        .await?;

    let total_tracks = album.tracks.len();
    if total_tracks == 0 {
        bot.edit_message_text(chat_id, message_id, "❌ No tracks found in this album.")
            .await?;
        return Ok(());
    }

    let mut successful = 0;
    for (i, track) in album.tracks.iter().enumerate() {
        bot.edit_message_text(
            chat_id,
            message_id,
            format!(
                "⬇️ *Downloading Album...*\n\n\
                 📀 *{album}*\n\
                 🎵 Processing: {track}\n\
                 📊 Progress: {current}/{total}",
                album = album.name,
                track = track.name,
                current = i + 1,
                total = total_tracks,
            ),
        )
        .parse_mode(ParseMode::Markdown)
        .await?;

        let caption = format!(
            "🎵 {title} - {artist}\n📀 {album}",
            title = utils::escape_markdown(&track.name),
            artist = utils::escape_markdown(&track.artists),
            album = utils::escape_markdown(&album.name),
        );

        if send_collection_track(bot, chat_id, track, quality, &caption).await {
            successful += 1;
        }
    }

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "✅ *Album Download Complete!*\n\n\
             📀 *Album:* {album}\n\
             👤 *Artist:* {artist}\n\
             📊 *Downloaded:* {successful}/{total} tracks\n\
             🔊 *Quality:* {quality}\n\n\
             Enjoy your music! 🎶",
            album = album.name,
            artist = album.artists,
            successful = successful,
            total = total_tracks,
            quality = quality.title(),
        ),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;

    Ok(())
}

async fn deliver_playlist(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    playlist: PlaylistMeta,
    quality: Quality,
) -> Res<()> {
    bot.edit_message_text(chat_id, message_id, "📋 *Processing playlist...*")
        .parse_mode(ParseMode::Markdown)
        .await?;

    let total_tracks = playlist.tracks.len();
    if total_tracks == 0 {
        bot.edit_message_text(chat_id, message_id, "❌ No tracks found in this playlist.")
            .await?;
        return Ok(());
    }

    // the fetch already capped the listing; tell the user when it did
    if playlist.total_tracks > total_tracks as u64 {
        bot.edit_message_text(
            chat_id,
            message_id,
            format!(
                "⚠️ *Large Playlist Detected*\n\n\
                 This playlist has {all} tracks.\n\
                 To prevent spam, I'll download the first {capped} tracks.\n\n\
                 Processing first {capped} tracks...",
                all = playlist.total_tracks,
                capped = total_tracks,
            ),
        )
        .parse_mode(ParseMode::Markdown)
        .await?;
    }

    let mut successful = 0;
    for (i, track) in playlist.tracks.iter().enumerate() {
        bot.edit_message_text(
            chat_id,
            message_id,
            format!(
                "⬇️ *Downloading Playlist...*\n\n\
                 📋 *{playlist}*\n\
                 🎵 Processing: {track}\n\
                 📊 Progress: {current}/{total}",
                playlist = playlist.name,
                track = track.name,
                current = i + 1,
                total = total_tracks,
            ),
        )
        .parse_mode(ParseMode::Markdown)
        .await?;

        let caption = format!(
            "🎵 {title} - {artist}\n📋 {playlist}",
            title = utils::escape_markdown(&track.name),
            artist = utils::escape_markdown(&track.artists),
            playlist = utils::escape_markdown(&playlist.name),
        );

        if send_collection_track(bot, chat_id, track, quality, &caption).await {
            successful += 1;
        }
    }

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "✅ *Playlist Download Complete!*\n\n\
             📋 *Playlist:* {playlist}\n\
             📊 *Downloaded:* {successful}/{total} tracks\n\
             🔊 *Quality:* {quality}\n\n\
             Enjoy your music! 🎶",
            playlist = playlist.name,
            successful = successful,
            total = total_tracks,
            quality = quality.title(),
        ),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;

    Ok(())
}

/// Downloads and sends one track of an album or playlist. Failures are
/// logged and skipped so one broken track does not sink the whole batch.
async fn send_collection_track(
    bot: &Bot,
    chat_id: ChatId,
    track: &TrackMeta,
    quality: Quality,
    caption: &str,
) -> bool {
    let audio_file = match downloader::fetch_track_audio(track, quality).await {
        Ok(path) => path,
        Err(e) => {
            warning!("Skipping track {}: {}", track.name, e);
            return false;
        }
    };

    if let Ok(metadata) = async_fs::metadata(&audio_file).await {
        if metadata.len() > config::max_audio_file_size() {
            warning!(
                "Skipping oversized file: {} ({})",
                audio_file.display(),
                utils::format_file_size(metadata.len())
            );
            downloader::cleanup(&audio_file).await;
            return false;
        }
    }

    let sent = bot
        .send_audio(chat_id, InputFile::file(audio_file.clone()))
        .title(track.name.clone())
        .performer(track.artists.clone())
        .duration((track.duration_ms / 1000) as u32)
        .caption(caption.to_string())
        .parse_mode(ParseMode::Markdown)
        .await;

    downloader::cleanup(&audio_file).await;

    match sent {
        Ok(_) => true,
        Err(e) => {
            warning!("Failed to send {}: {}", track.name, e);
            false
        }
    }
}

/// Fetches the album cover for use as an audio thumbnail. Best effort: any
/// failure just means the audio goes out without artwork.
async fn fetch_cover_art(url: Option<&str>) -> Option<Vec<u8>> {
    let url = url?;

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    response.bytes().await.ok().map(|b| b.to_vec())
}
