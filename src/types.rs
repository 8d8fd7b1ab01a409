use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    pub images: Option<Vec<Image>>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTrackResponse {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
    pub duration_ms: u64,
    pub track_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAlbumResponse {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub release_date: String,
    pub total_tracks: u64,
    pub images: Option<Vec<Image>>,
    pub tracks: AlbumTracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksPage {
    pub items: Vec<AlbumTrackObject>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrackObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub duration_ms: u64,
    pub track_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: PlaylistOwner,
    pub images: Option<Vec<Image>>,
    pub tracks: PlaylistTracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<PlaylistTrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackObject {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TrackMeta {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub album: String,
    pub duration_ms: u64,
    pub track_number: Option<u32>,
    pub album_art_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AlbumMeta {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub release_date: String,
    pub total_tracks: u64,
    pub image_url: Option<String>,
    pub tracks: Vec<TrackMeta>,
}

#[derive(Debug, Clone)]
pub struct PlaylistMeta {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub total_tracks: u64,
    pub image_url: Option<String>,
    pub tracks: Vec<TrackMeta>,
}

#[derive(Debug, Clone)]
pub enum Resource {
    Track(TrackMeta),
    Album(AlbumMeta),
    Playlist(PlaylistMeta),
}

#[derive(Debug, Clone)]
pub struct PendingDownload {
    pub resource: Resource,
}
