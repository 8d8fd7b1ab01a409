use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::{demo::DemoTrack, utils::Quality};

pub fn start_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "🎵 Try Demo Songs",
            "demo_songs",
        )],
        vec![InlineKeyboardButton::callback(
            "❓ Help & Instructions",
            "help",
        )],
    ])
}

pub fn help_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "🏠 Back to Start",
            "back_start",
        )],
        vec![InlineKeyboardButton::callback("🎵 Try Demo", "demo_songs")],
    ])
}

pub fn invalid_link_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🎵 Try Demo Songs",
        "demo_songs",
    )]])
}

pub fn quality_menu() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Quality::ALL
        .iter()
        .map(|quality| {
            vec![InlineKeyboardButton::callback(
                quality_button_label(quality),
                format!("quality_{}", quality),
            )]
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback("❌ Cancel", "cancel")]);

    InlineKeyboardMarkup::new(rows)
}

fn quality_button_label(quality: &Quality) -> &'static str {
    match quality {
        Quality::High => "🔥 High Quality (320kbps)",
        Quality::Medium => "⚡ Medium Quality (192kbps)",
        Quality::Low => "📱 Low Quality (128kbps)",
    }
}

/// One button per demo pick, carrying the stable catalog index in the
/// callback data.
pub fn demo_menu(picks: &[(usize, &DemoTrack)]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = picks
        .iter()
        .map(|(index, track)| {
            vec![InlineKeyboardButton::callback(
                format!("🎵 {} - {}", track.name, track.artist),
                format!("demo_{}", index),
            )]
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback(
        "🔄 More Songs",
        "demo_songs",
    )]);
    rows.push(vec![InlineKeyboardButton::callback(
        "🏠 Back to Start",
        "back_start",
    )]);

    InlineKeyboardMarkup::new(rows)
}
