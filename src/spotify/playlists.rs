use crate::{
    config,
    types::{GetPlaylistResponse, PlaylistMeta, PlaylistTracksPage, TrackMeta},
};

/// Retrieves playlist metadata and its track listing.
///
/// Playlist items can be episodes or local files; those are skipped. Track
/// pages are followed via `next` links, but collection stops at the
/// configured delivery cap so an enormous playlist does not turn into an
/// unbounded chain of API requests.
pub async fn get_playlist(playlist_id: &str, token: &str) -> Result<PlaylistMeta, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let response = super::get_with_retry(&api_url, token).await?;
    let playlist = response.json::<GetPlaylistResponse>().await?;

    let cap = config::max_playlist_tracks();
    let mut total = playlist.tracks.total.unwrap_or(0);
    let mut tracks: Vec<TrackMeta> = Vec::new();

    let mut items = playlist.tracks.items;
    let mut next = playlist.tracks.next;
    loop {
        for item in items {
            let Some(track) = item.track else {
                continue;
            };
            // skip episodes and local files
            if track.kind.as_deref() != Some("track") {
                continue;
            }
            let Some(id) = track.id else {
                continue;
            };

            let artists = super::join_artists(&track.artists);
            let album = track
                .album
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            let album_art_url = track
                .album
                .as_ref()
                .and_then(|a| super::best_image(a.images.as_deref().unwrap_or_default()));

            tracks.push(TrackMeta {
                id,
                name: track.name,
                artists,
                album,
                duration_ms: track.duration_ms.unwrap_or(0),
                track_number: None,
                album_art_url,
            });

            if tracks.len() >= cap {
                break;
            }
        }

        if tracks.len() >= cap {
            break;
        }

        match next {
            Some(next_url) => {
                let response = super::get_with_retry(&next_url, token).await?;
                let page = response.json::<PlaylistTracksPage>().await?;
                if let Some(t) = page.total {
                    total = t;
                }
                items = page.items;
                next = page.next;
            }
            None => break,
        }
    }

    if total == 0 {
        total = tracks.len() as u64;
    }

    Ok(PlaylistMeta {
        id: playlist.id,
        name: playlist.name,
        owner: playlist
            .owner
            .display_name
            .unwrap_or_else(|| "Unknown".to_string()),
        description: playlist.description.unwrap_or_default(),
        total_tracks: total,
        image_url: super::best_image(playlist.images.as_deref().unwrap_or_default()),
        tracks,
    })
}
