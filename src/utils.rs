use std::fmt;

use url::Url;

/// Audio quality tier offered to the user before a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    High,
    Medium,
    Low,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::High, Quality::Medium, Quality::Low];

    pub fn bitrate_kbps(&self) -> u32 {
        match self {
            Quality::High => 320,
            Quality::Medium => 192,
            Quality::Low => 128,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::High => "High Quality (320kbps)",
            Quality::Medium => "Medium Quality (192kbps)",
            Quality::Low => "Low Quality (128kbps)",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quality::High => "High",
            Quality::Medium => "Medium",
            Quality::Low => "Low",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
        };
        write!(f, "{}", s)
    }
}

pub fn parse_quality(input: &str) -> Result<Quality, String> {
    let normalized = input.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "high" | "320" | "320k" => Ok(Quality::High),
        "medium" | "192" | "192k" => Ok(Quality::Medium),
        "low" | "128" | "128k" => Ok(Quality::Low),
        other => Err(format!("invalid quality '{}'", other)),
    }
}

/// Kind of Spotify resource a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Track,
    Album,
    Playlist,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Track => "track",
            ResourceKind::Album => "album",
            ResourceKind::Playlist => "playlist",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyLink {
    pub kind: ResourceKind,
    pub id: String,
}

/// Loose check used to pick an error message: the text mentions Spotify even
/// if it does not parse as a usable link.
pub fn looks_like_spotify_link(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("spotify:")
        || text.contains("open.spotify.com/")
        || text.contains("spotify.com/")
}

/// Parses a Spotify track/album/playlist link into its kind and ID.
///
/// Accepts `https://open.spotify.com/...` and `https://spotify.com/...`
/// links (with or without scheme, including localized `/intl-xx/` paths)
/// as well as `spotify:kind:id` URIs. Query strings and fragments are
/// ignored. Returns `None` for anything else.
pub fn parse_spotify_link(text: &str) -> Option<SpotifyLink> {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix("spotify:") {
        let mut parts = rest.split(':');
        let kind = parse_resource_kind(parts.next()?)?;
        let id = parts.next()?;
        if !is_valid_spotify_id(id) {
            return None;
        }
        return Some(SpotifyLink {
            kind,
            id: id.to_string(),
        });
    }

    let candidate = if text.starts_with("http://") || text.starts_with("https://") {
        text.to_string()
    } else {
        format!("https://{}", text)
    };

    let url = Url::parse(&candidate).ok()?;
    match url.host_str()? {
        "open.spotify.com" | "spotify.com" | "www.spotify.com" => {}
        _ => return None,
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let mut first = segments.next()?;
    if first.starts_with("intl-") {
        first = segments.next()?;
    }

    let kind = parse_resource_kind(first)?;
    let id = segments.next()?;
    if !is_valid_spotify_id(id) {
        return None;
    }

    Some(SpotifyLink {
        kind,
        id: id.to_string(),
    })
}

fn parse_resource_kind(segment: &str) -> Option<ResourceKind> {
    match segment {
        "track" => Some(ResourceKind::Track),
        "album" => Some(ResourceKind::Album),
        "playlist" => Some(ResourceKind::Playlist),
        _ => None,
    }
}

fn is_valid_spotify_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Strips characters that are unsafe in filenames and caps the length.
pub fn clean_filename(filename: &str) -> String {
    let stripped: String = filename
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .collect();

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    let capped: String = collapsed.chars().take(100).collect();
    let trimmed = capped.trim().to_string();

    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed
    }
}

pub fn format_duration(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_file_size(size_bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size_bytes, UNITS[unit])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Escapes characters that Telegram's Markdown parser treats specially.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }

    let kept: String = chars[..max_length.saturating_sub(3)].iter().collect();
    format!("{}...", kept)
}
