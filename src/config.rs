//! Configuration management for the Spotigram bot.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the Telegram bot token, Spotify
//! API credentials, keep-alive server settings, and delivery limits.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotigram/.env`. When no file exists there,
/// a `.env` in the working directory is tried instead; when neither exists
/// the process environment is used as-is, which is the normal situation on
/// hosting platforms that inject configuration directly.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotigram/.env`
/// - macOS: `~/Library/Application Support/spotigram/.env`
/// - Windows: `%LOCALAPPDATA%/spotigram/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotigram/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else if PathBuf::from(".env").is_file() {
        dotenv::dotenv().map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Returns the Telegram bot token used for all Bot API requests.
///
/// Retrieves the `TELEGRAM_BOT_TOKEN` environment variable, the token
/// issued by @BotFather for this bot.
///
/// # Panics
///
/// Panics if the `TELEGRAM_BOT_TOKEN` environment variable is not set.
pub fn telegram_bot_token() -> String {
    env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. Together
/// with the client ID this drives the client-credentials token request.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL` and falls back to the public endpoint when the
/// variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token endpoint used for the client-credentials flow.
///
/// Reads `SPOTIFY_API_TOKEN_URL` and falls back to the public accounts
/// endpoint when the variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the port the keep-alive HTTP server binds to.
///
/// Reads `PORT` (the variable hosting platforms inject) and falls back to
/// 8080. Unparseable values also fall back to 8080.
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080)
}

/// Returns the maximum number of tracks delivered for a single playlist.
///
/// Reads `MAX_PLAYLIST_TRACKS`, default 50. Larger playlists are truncated
/// with a notice to the user.
pub fn max_playlist_tracks() -> usize {
    env::var("MAX_PLAYLIST_TRACKS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(50)
}

/// Returns the maximum audio file size in bytes the bot will upload.
///
/// Reads `MAX_AUDIO_FILE_SIZE`, default 50 MiB (the Telegram Bot API upload
/// limit for files sent by bots).
pub fn max_audio_file_size() -> u64 {
    env::var("MAX_AUDIO_FILE_SIZE")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(50 * 1024 * 1024)
}
