//! Spotigram Bot Library
//!
//! This library provides the building blocks for a Telegram bot that turns
//! Spotify links into downloadable MP3 audio. It includes modules for the
//! Spotify Web API, the Telegram chat surface, audio retrieval, configuration
//! management, and various utilities.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the keep-alive server
//! - `config` - Configuration management and environment variables
//! - `demo` - Built-in demo track catalog
//! - `downloader` - Audio search and retrieval via yt-dlp
//! - `management` - Token caching and per-chat pending state
//! - `server` - Keep-alive HTTP server for hosting platforms
//! - `spotify` - Spotify Web API client implementation
//! - `telegram` - Telegram bot handlers and dispatch
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotigram::{config, telegram};
//!
//! #[tokio::main]
//! async fn main() -> spotigram::Res<()> {
//!     config::load_env().await?;
//!     // Build the bot and dispatch updates...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod downloader;
pub mod management;
pub mod server;
pub mod spotify;
pub mod telegram;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use spotigram::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting keep-alive server...");
/// info!("Resolved {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Webhook cleared");
/// success!("Delivered {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// during startup; inside update handlers prefer `warning!` and a reply to
/// the user instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("Could not fetch cover art: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
