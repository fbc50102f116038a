//! Domain types for VidStream
//!
//! - `video`: videos and their catalog-assigned ids
//! - `playback`: the play/pause/stop state

mod playback;
mod video;

pub use playback::PlaybackState;
pub use video::{Video, VideoId};
