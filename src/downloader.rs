//! Audio retrieval via yt-dlp.
//!
//! Spotify serves metadata only, so the actual audio is located on YouTube:
//! a `ytsearch1:` probe finds the best match for a track, then a second
//! yt-dlp invocation extracts MP3 audio at the requested bitrate into the
//! OS temp directory. Both invocations run as subprocesses under a timeout.

use std::{env, fmt, path::PathBuf, time::Duration};

use serde_json::Value;
use tokio::{process::Command, time::timeout};

use crate::{
    types::TrackMeta,
    utils::{self, Quality},
    warning,
};

const YTDLP_BIN: &str = "yt-dlp";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(45);
const MIN_AUDIO_BYTES: u64 = 100_000;
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "ogg", "m4a", "flac"];

#[derive(Debug)]
pub enum DownloadError {
    NoMatch,
    Timeout,
    IoError(std::io::Error),
    ToolError(String),
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        DownloadError::IoError(err)
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NoMatch => write!(f, "no matching source found"),
            DownloadError::Timeout => write!(f, "operation timed out"),
            DownloadError::IoError(e) => write!(f, "io error: {}", e),
            DownloadError::ToolError(msg) => write!(f, "yt-dlp failed: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

/// Searches for a track and downloads it as MP3 at the given quality.
///
/// Returns the path of the validated audio file in the temp directory. The
/// caller is responsible for removing the file once it has been delivered.
pub async fn fetch_track_audio(
    track: &TrackMeta,
    quality: Quality,
) -> Result<PathBuf, DownloadError> {
    // first artist only, the full list hurts search accuracy
    let artist = track
        .artists
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let video_url = search(&track.name, &artist).await?;
    let path = download(&video_url, &track.name, &artist, quality).await?;

    if !is_valid_audio_file(&path).await {
        let _ = async_fs::remove_file(&path).await;
        return Err(DownloadError::ToolError(
            "downloaded file failed validation".to_string(),
        ));
    }

    Ok(path)
}

/// Builds the search query variations, most precise first.
pub fn build_search_queries(track_name: &str, artist_name: &str) -> Vec<String> {
    vec![
        format!("\"{}\" \"{}\" official audio", track_name, artist_name),
        format!("\"{}\" \"{}\" official", track_name, artist_name),
        format!("\"{}\" by \"{}\"", track_name, artist_name),
        format!("{} - {} official audio", artist_name, track_name),
        format!("{} {} lyrics", artist_name, track_name),
        format!("{} {}", track_name, artist_name),
    ]
}

pub fn search_args(query: &str) -> Vec<String> {
    vec![
        "--dump-json".to_string(),
        "--no-download".to_string(),
        "--playlist-end".to_string(),
        "1".to_string(),
        "--no-check-certificate".to_string(),
        "--socket-timeout".to_string(),
        "10".to_string(),
        "--no-warnings".to_string(),
        format!("ytsearch1:{}", query),
    ]
}

pub fn download_args(video_url: &str, output_template: &str, quality: Quality) -> Vec<String> {
    vec![
        "--extract-audio".to_string(),
        "--audio-format".to_string(),
        "mp3".to_string(),
        "--audio-quality".to_string(),
        format!("{}K", quality.bitrate_kbps()),
        "--no-playlist".to_string(),
        "--no-check-certificate".to_string(),
        "--socket-timeout".to_string(),
        "15".to_string(),
        "--retries".to_string(),
        "2".to_string(),
        "--fragment-retries".to_string(),
        "2".to_string(),
        "--no-warnings".to_string(),
        "--output".to_string(),
        output_template.to_string(),
        video_url.to_string(),
    ]
}

async fn search(track_name: &str, artist_name: &str) -> Result<String, DownloadError> {
    for query in build_search_queries(track_name, artist_name) {
        match search_youtube(&query).await {
            Ok(Some(url)) => return Ok(url),
            Ok(None) => continue,
            Err(DownloadError::Timeout) => {
                warning!("Search timed out for: {}", utils::truncate_text(&query, 50));
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Err(DownloadError::NoMatch)
}

async fn search_youtube(query: &str) -> Result<Option<String>, DownloadError> {
    let output = timeout(
        SEARCH_TIMEOUT,
        Command::new(YTDLP_BIN).args(search_args(query)).output(),
    )
    .await
    .map_err(|_| DownloadError::Timeout)??;

    if !output.status.success() {
        return Ok(None);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let video_info: Value = match serde_json::from_str(stdout.trim()) {
        Ok(info) => info,
        Err(_) => return Ok(None),
    };

    let video_url = video_info["webpage_url"]
        .as_str()
        .or_else(|| video_info["url"].as_str())
        .map(|s| s.to_string());

    Ok(video_url)
}

async fn download(
    video_url: &str,
    track_name: &str,
    artist_name: &str,
    quality: Quality,
) -> Result<PathBuf, DownloadError> {
    let filename = utils::clean_filename(&format!("{} - {}", artist_name, track_name));
    let output_template = env::temp_dir().join(format!("{}.%(ext)s", filename));

    let args = download_args(
        video_url,
        &output_template.to_string_lossy(),
        quality,
    );

    let output = timeout(
        DOWNLOAD_TIMEOUT,
        Command::new(YTDLP_BIN).args(&args).output(),
    )
    .await
    .map_err(|_| DownloadError::Timeout)??;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DownloadError::ToolError(utils::truncate_text(
            stderr.trim(),
            100,
        )));
    }

    let expected = env::temp_dir().join(format!("{}.mp3", filename));
    if expected.is_file() {
        return Ok(expected);
    }

    // yt-dlp occasionally mangles the name; scan the temp dir for the prefix
    let prefix: String = filename.chars().take(20).collect();
    for entry in std::fs::read_dir(env::temp_dir())? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.contains(&prefix) && name.ends_with(".mp3") {
            return Ok(entry.path());
        }
    }

    Err(DownloadError::ToolError(
        "file not found after download".to_string(),
    ))
}

/// A real audio file exists, carries a known extension, and is not a stub.
pub async fn is_valid_audio_file(path: &PathBuf) -> bool {
    let Ok(metadata) = async_fs::metadata(path).await else {
        return false;
    };

    if metadata.len() < MIN_AUDIO_BYTES {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Removes a delivered temp file; failures are logged, not fatal.
pub async fn cleanup(path: &PathBuf) {
    if let Err(e) = async_fs::remove_file(path).await {
        warning!("Could not remove temp file {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_queries_order() {
        let queries = build_search_queries("Circles", "Post Malone");

        // Quoted precision queries come first, the bare fallback last
        assert_eq!(queries.len(), 6);
        assert_eq!(queries[0], "\"Circles\" \"Post Malone\" official audio");
        assert_eq!(queries[5], "Circles Post Malone");

        // Every variation mentions both the track and the artist
        for query in &queries {
            assert!(query.contains("Circles"));
            assert!(query.contains("Post Malone"));
        }
    }

    #[test]
    fn test_search_args() {
        let args = search_args("test query");

        assert!(args.contains(&"--dump-json".to_string()));
        assert!(args.contains(&"--no-download".to_string()));
        assert_eq!(args.last().unwrap(), "ytsearch1:test query");
    }

    #[test]
    fn test_download_args_quality() {
        let high = download_args("https://example.com/v", "/tmp/x.%(ext)s", Quality::High);
        let low = download_args("https://example.com/v", "/tmp/x.%(ext)s", Quality::Low);

        assert!(high.contains(&"320K".to_string()));
        assert!(low.contains(&"128K".to_string()));

        // format and template are always present
        assert!(high.contains(&"mp3".to_string()));
        assert!(high.contains(&"/tmp/x.%(ext)s".to_string()));
        assert_eq!(high.last().unwrap(), "https://example.com/v");
    }

    #[test]
    fn test_download_args_single_video_only() {
        let args = download_args("https://example.com/v", "/tmp/x.%(ext)s", Quality::Medium);
        assert!(args.contains(&"--no-playlist".to_string()));
    }
}
