//! # Spotify Integration Module
//!
//! This module implements the Spotify Web API surface the bot needs: token
//! acquisition via the client-credentials flow and metadata retrieval for
//! tracks, albums, and playlists. It is the only layer that talks to the
//! Spotify HTTP endpoints; higher layers work with the domain types in
//! [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Telegram Layer (handlers, delivery)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Track Metadata
//!     ├── Album Metadata (with track paging)
//!     └── Playlist Metadata (with track paging)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The bot has no end user of its own on the Spotify side, so it uses the
//! OAuth 2.0 client-credentials grant: a `POST` to the token endpoint with a
//! `Basic` authorization header built from the client ID and secret. The
//! resulting app token is cached and refreshed by
//! [`crate::management::TokenManager`].
//!
//! ## Error Handling
//!
//! - 429 Too Many Requests: the `Retry-After` header is honored for delays
//!   up to 120 seconds, after which a warning is emitted and the error
//!   propagates.
//! - 502 Bad Gateway: retried after a 10 second delay.
//! - Everything else surfaces as `reqwest::Error` to the caller, which
//!   turns it into a user-facing chat message.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token request
//! - `GET /tracks/{id}` - single track metadata
//! - `GET /albums/{id}` - album metadata with track listing
//! - `GET /playlists/{id}` - playlist metadata with track listing
//!
//! Album and playlist track listings are paged; the `next` links are
//! followed until the listing is complete (playlists stop early at the
//! configured delivery cap).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    types::{ArtistRef, Image, Resource},
    utils::{ResourceKind, SpotifyLink},
    warning,
};

pub mod albums;
pub mod auth;
pub mod playlists;
pub mod tracks;

/// Resolves a parsed Spotify link to its full metadata.
pub async fn fetch_resource(link: &SpotifyLink, token: &str) -> Result<Resource, reqwest::Error> {
    match link.kind {
        ResourceKind::Track => Ok(Resource::Track(tracks::get_track(&link.id, token).await?)),
        ResourceKind::Album => Ok(Resource::Album(albums::get_album(&link.id, token).await?)),
        ResourceKind::Playlist => Ok(Resource::Playlist(
            playlists::get_playlist(&link.id, token).await?,
        )),
    }
}

/// Issues an authenticated GET and retries rate-limit and gateway hiccups.
pub(crate) async fn get_with_retry(
    api_url: &str,
    token: &str,
) -> Result<reqwest::Response, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = match client.get(api_url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(err), // network or reqwest error
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds.",
                    retry_after
                );
            }
        }

        match response.error_for_status() {
            Ok(valid_response) => return Ok(valid_response),
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }

                return Err(err); // propagate other errors
            }
        }
    }
}

/// Joins artist names into the display string used everywhere in chat.
pub(crate) fn join_artists(artists: &[ArtistRef]) -> String {
    if artists.is_empty() {
        return "Unknown Artist".to_string();
    }

    artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Picks the largest image from a Spotify images array.
pub(crate) fn best_image(images: &[Image]) -> Option<String> {
    images
        .iter()
        .max_by_key(|img| img.width.unwrap_or(0) as u64 * img.height.unwrap_or(0) as u64)
        .map(|img| img.url.clone())
}
