//! VidStream player core
//!
//! The stateful heart of the application: the flag registry, the
//! playlist store, the playback state machine, and search, tied
//! together by [`PlayerSession`]. Every operation is synchronous and
//! returns a tagged outcome; rendering is the caller's job.

pub mod flags;
pub mod playback;
pub mod playlists;
pub mod search;
pub mod session;

pub use flags::{FlagError, FlagRegistry, DEFAULT_FLAG_REASON};
pub use playback::{NowPlaying, PlayTransition, PlaybackController, PlaybackError};
pub use playlists::{Playlist, PlaylistEntry, PlaylistError, PlaylistStore};
pub use search::{search_by_tag, search_by_title, NoSelection, SelectionProvider};
pub use session::{FlagOutcome, PlayerSession};
