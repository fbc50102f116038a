//! Core domain types for VidStream
//!
//! Holds the session-immutable video catalog and the domain models
//! shared by the player and the command interpreter.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::VideoCatalog;
pub use error::{CatalogError, CatalogResult};
pub use types::{PlaybackState, Video, VideoId};
