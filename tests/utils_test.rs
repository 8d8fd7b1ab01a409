use spotigram::utils::*;

#[test]
fn test_quality_bitrates() {
    assert_eq!(Quality::High.bitrate_kbps(), 320);
    assert_eq!(Quality::Medium.bitrate_kbps(), 192);
    assert_eq!(Quality::Low.bitrate_kbps(), 128);
}

#[test]
fn test_quality_display() {
    assert_eq!(Quality::High.to_string(), "high");
    assert_eq!(Quality::Medium.to_string(), "medium");
    assert_eq!(Quality::Low.to_string(), "low");
}

#[test]
fn test_quality_labels() {
    assert_eq!(Quality::High.label(), "High Quality (320kbps)");
    assert_eq!(Quality::Medium.label(), "Medium Quality (192kbps)");
    assert_eq!(Quality::Low.label(), "Low Quality (128kbps)");

    assert_eq!(Quality::High.title(), "High");
}

#[test]
fn test_parse_quality_valid_inputs() {
    // Tier names
    assert_eq!(parse_quality("high").unwrap(), Quality::High);
    assert_eq!(parse_quality("medium").unwrap(), Quality::Medium);
    assert_eq!(parse_quality("low").unwrap(), Quality::Low);

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_quality(" HIGH ").unwrap(), Quality::High);

    // Bitrate aliases
    assert_eq!(parse_quality("320").unwrap(), Quality::High);
    assert_eq!(parse_quality("192k").unwrap(), Quality::Medium);
    assert_eq!(parse_quality("128K").unwrap(), Quality::Low);
}

#[test]
fn test_parse_quality_invalid_inputs() {
    let result = parse_quality("ultra");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid quality"));

    assert!(parse_quality("").is_err());
}

#[test]
fn test_quality_all_constant() {
    assert_eq!(Quality::ALL.len(), 3);
    assert!(Quality::ALL.contains(&Quality::High));
    assert!(Quality::ALL.contains(&Quality::Medium));
    assert!(Quality::ALL.contains(&Quality::Low));
}

#[test]
fn test_parse_spotify_link_track_url() {
    let link =
        parse_spotify_link("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(link.kind, ResourceKind::Track);
    assert_eq!(link.id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_spotify_link_album_and_playlist() {
    let album = parse_spotify_link("https://open.spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE").unwrap();
    assert_eq!(album.kind, ResourceKind::Album);

    let playlist =
        parse_spotify_link("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(playlist.kind, ResourceKind::Playlist);
    assert_eq!(playlist.id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_spotify_link_query_string_ignored() {
    let link = parse_spotify_link(
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123&utm_source=copy",
    )
    .unwrap();
    assert_eq!(link.id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_spotify_link_without_scheme() {
    let link = parse_spotify_link("open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(link.kind, ResourceKind::Track);

    let link = parse_spotify_link("spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE").unwrap();
    assert_eq!(link.kind, ResourceKind::Album);
}

#[test]
fn test_parse_spotify_link_localized_path() {
    let link =
        parse_spotify_link("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC")
            .unwrap();
    assert_eq!(link.kind, ResourceKind::Track);
    assert_eq!(link.id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_spotify_link_uri_form() {
    let link = parse_spotify_link("spotify:track:4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(link.kind, ResourceKind::Track);
    assert_eq!(link.id, "4uLU6hMCjMI75M1A2tKUQC");

    let link = parse_spotify_link("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(link.kind, ResourceKind::Playlist);
}

#[test]
fn test_parse_spotify_link_rejects_junk() {
    // Not links at all
    assert!(parse_spotify_link("hello there").is_none());
    assert!(parse_spotify_link("").is_none());

    // Wrong host
    assert!(parse_spotify_link("https://example.com/track/4uLU6hMCjMI75M1A2tKUQC").is_none());
    assert!(parse_spotify_link("https://music.youtube.com/watch?v=abc").is_none());

    // Unsupported resource kinds
    assert!(parse_spotify_link("https://open.spotify.com/artist/4NHQUGzhtTLFvgF5SZesLK").is_none());
    assert!(parse_spotify_link("spotify:show:4rOoJ6Egrf8K2IrywzwOMk").is_none());

    // Missing or malformed IDs
    assert!(parse_spotify_link("https://open.spotify.com/track/").is_none());
    assert!(parse_spotify_link("https://open.spotify.com/track/abc-def").is_none());
    assert!(parse_spotify_link("spotify:track:").is_none());
}

#[test]
fn test_looks_like_spotify_link() {
    assert!(looks_like_spotify_link("https://open.spotify.com/track/x%%%"));
    assert!(looks_like_spotify_link("spotify:track:"));
    assert!(looks_like_spotify_link("check this: open.spotify.com/track/abc"));

    assert!(!looks_like_spotify_link("hello there"));
    assert!(!looks_like_spotify_link("https://example.com/music"));
}

#[test]
fn test_clean_filename_strips_invalid_characters() {
    let cleaned = clean_filename("AC/DC - Back<>In:Black?*");
    assert!(!cleaned.contains('/'));
    assert!(!cleaned.contains('<'));
    assert!(!cleaned.contains(':'));
    assert!(!cleaned.contains('?'));
    assert!(!cleaned.contains('*'));
    assert_eq!(cleaned, "ACDC - BackInBlack");
}

#[test]
fn test_clean_filename_collapses_whitespace() {
    assert_eq!(clean_filename("  too   many    spaces  "), "too many spaces");
}

#[test]
fn test_clean_filename_caps_length() {
    let long_name = "a".repeat(250);
    let cleaned = clean_filename(&long_name);
    assert_eq!(cleaned.chars().count(), 100);
}

#[test]
fn test_clean_filename_empty_fallback() {
    assert_eq!(clean_filename(""), "untitled");
    assert_eq!(clean_filename("???"), "untitled");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(1_000), "0:01");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(212_000), "3:32");

    // Sub-second remainders are floored
    assert_eq!(format_duration(59_999), "0:59");
}

#[test]
fn test_format_file_size() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(2_048), "2.00 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
}

#[test]
fn test_escape_markdown() {
    assert_eq!(escape_markdown("plain text"), "plain text");
    assert_eq!(escape_markdown("a_b"), "a\\_b");
    assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
    assert_eq!(escape_markdown("[link](url)"), "\\[link\\]\\(url\\)");
}

#[test]
fn test_truncate_text() {
    // Short text passes through untouched
    assert_eq!(truncate_text("short", 100), "short");

    // Long text is cut down with an ellipsis, respecting the budget
    let truncated = truncate_text("abcdefghijklmnop", 10);
    assert_eq!(truncated, "abcdefg...");
    assert_eq!(truncated.chars().count(), 10);
}
