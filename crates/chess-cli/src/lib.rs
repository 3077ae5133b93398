//! Terminal front end for the chess engine.
//!
//! This crate provides:
//! - [`Command`] - parsing of the text commands typed at the prompt
//! - [`Config`] - settings from `chess.toml`
//! - [`SaveStore`] - saved games as JSON files in a directory
//! - [`render()`] - the board as a box-drawing grid
//! - [`Session`] - the interactive loop tying them together
//!
//! No chess rules live here; everything is delegated to `chess-engine`.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
pub mod storage;

pub use command::{Command, CommandError};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use render::render;
pub use session::{Session, SessionError};
pub use storage::{SaveStore, StorageError};
