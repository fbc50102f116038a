//! Playback state model

use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// The play/pause/stop state of the player.
///
/// At most one video is active (playing or paused) at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing is playing (initial state)
    #[default]
    Stopped,
    /// The given video is playing
    Playing(VideoId),
    /// The given video is paused
    Paused(VideoId),
}

impl PlaybackState {
    /// Returns the active video id, playing or paused
    pub fn active_video(&self) -> Option<&VideoId> {
        match self {
            Self::Stopped => None,
            Self::Playing(id) | Self::Paused(id) => Some(id),
        }
    }

    /// Returns true if nothing is active
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true if a video is paused
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}
