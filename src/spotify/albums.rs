use crate::{
    config,
    types::{AlbumMeta, AlbumTracksPage, GetAlbumResponse, TrackMeta},
};

/// Retrieves album metadata including the complete track listing.
///
/// The album endpoint returns the first page of tracks inline; any further
/// pages are fetched by following the `next` links until the listing is
/// complete.
pub async fn get_album(album_id: &str, token: &str) -> Result<AlbumMeta, reqwest::Error> {
    let api_url = format!(
        "{uri}/albums/{id}",
        uri = &config::spotify_apiurl(),
        id = album_id
    );

    let response = super::get_with_retry(&api_url, token).await?;
    let album = response.json::<GetAlbumResponse>().await?;

    let album_name = album.name.clone();
    let artists = super::join_artists(&album.artists);
    let image_url = super::best_image(album.images.as_deref().unwrap_or_default());

    let mut items = album.tracks.items;
    let mut next = album.tracks.next;
    while let Some(next_url) = next {
        let response = super::get_with_retry(&next_url, token).await?;
        let page = response.json::<AlbumTracksPage>().await?;
        items.extend(page.items);
        next = page.next;
    }

    let tracks: Vec<TrackMeta> = items
        .into_iter()
        .map(|t| {
            let artists = super::join_artists(&t.artists);
            TrackMeta {
                id: t.id,
                name: t.name,
                artists,
                album: album_name.clone(),
                duration_ms: t.duration_ms,
                track_number: t.track_number,
                album_art_url: image_url.clone(),
            }
        })
        .collect();

    Ok(AlbumMeta {
        id: album.id,
        name: album_name,
        artists,
        release_date: album.release_date,
        total_tracks: album.total_tracks,
        image_url,
        tracks,
    })
}
