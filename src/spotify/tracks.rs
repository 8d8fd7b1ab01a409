use crate::{
    config,
    types::{GetTrackResponse, TrackMeta},
};

/// Retrieves metadata for a single track from the Spotify Web API.
///
/// Rate limiting and gateway errors are handled by the shared retry logic;
/// other errors are propagated to the caller.
pub async fn get_track(track_id: &str, token: &str) -> Result<TrackMeta, reqwest::Error> {
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    let response = super::get_with_retry(&api_url, token).await?;
    let json = response.json::<GetTrackResponse>().await?;

    let album_art_url = super::best_image(json.album.images.as_deref().unwrap_or_default());

    Ok(TrackMeta {
        id: json.id,
        name: json.name,
        artists: super::join_artists(&json.artists),
        album: json.album.name,
        duration_ms: json.duration_ms,
        track_number: json.track_number,
        album_art_url,
    })
}
