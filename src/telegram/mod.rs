//! # Telegram Module
//!
//! The user-facing layer of the bot. It wires the teloxide dispatcher and
//! implements the complete interaction script:
//!
//! - **Commands**: `/start` welcome menu and `/help` instructions
//! - **Messages**: Spotify link detection, metadata summary, and the
//!   quality-selection keyboard
//! - **Callbacks**: quality choices, demo songs, menu navigation, cancel
//! - **Delivery**: download-and-send loops for tracks, albums, and
//!   playlists with progress reported through message edits
//!
//! ## Data Flow
//!
//! ```text
//! Telegram Update
//!     ↓ (dispatcher branch)
//! Handler (commands / messages / callbacks)
//!     ↓
//! Management Layer (token cache, pending downloads)
//!     ↓
//! Spotify Metadata + yt-dlp Audio
//!     ↓
//! Delivery (send_audio with progress edits)
//! ```
//!
//! Handlers never crash the dispatcher on upstream failures: Spotify or
//! download errors are logged and surfaced to the user as an edited chat
//! message, while Telegram transport errors propagate to the dispatcher's
//! error handler.

mod callbacks;
mod commands;
mod delivery;
mod keyboards;
mod messages;

pub use callbacks::handle_callback;
pub use commands::Command;
pub use commands::handle_command;
pub use messages::handle_message;

use std::sync::Arc;

use teloxide::prelude::*;
use tokio::sync::Mutex;

use crate::{
    demo::DemoCatalog,
    management::{PendingManager, TokenManager},
};

/// Builds the dispatcher and runs long polling until shutdown.
pub async fn dispatch(
    bot: Bot,
    token_mgr: Arc<Mutex<TokenManager>>,
    pending: Arc<Mutex<PendingManager>>,
    catalog: Arc<DemoCatalog>,
) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![token_mgr, pending, catalog])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
