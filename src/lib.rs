//! Statsify Web Application Library
//!
//! This library provides a small web application that signs a user in to
//! Spotify using the OAuth 2.0 authorization-code flow and renders their top
//! artists, top tracks and top genres. Tokens live in a signed browser cookie;
//! there is no server-side persistence.
//!
//! # Modules
//!
//! - `api` - Route handlers for pages, OAuth and the JSON data endpoint
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for upstream calls and configuration
//! - `server` - Router construction and the HTTP listener
//! - `session` - Signed cookie session (token store)
//! - `spotify` - Spotify Web API client implementation
//! - `state` - Shared, immutable application state
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions, including genre ranking
//! - `views` - Minimal HTML rendering for page routes
//!
//! # Example
//!
//! ```
//! use statsify::{config, server, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> statsify::Res<()> {
//!     config::load_env(None)?;
//!     let config = config::Config::from_env()?;
//!     let listener = server::bind(config.server_address).await?;
//!     server::serve(listener, AppState::new(config)).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod spotify;
pub mod state;
pub mod types;
pub mod utils;
pub mod views;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for startup plumbing using a
/// boxed dynamic error trait object. Upstream calls use the typed
/// [`error::ApiError`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
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
/// info!("Listening on {}", addr);
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
/// # Example
///
/// ```
/// success!("Session created");
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
/// Only used during startup, where a failure leaves nothing to serve. Route
/// handlers report failures with [`warning!`] and keep running.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}", addr);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed token exchange or an upstream
/// request that could not be completed.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
