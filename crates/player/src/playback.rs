//! The play/pause/stop state machine
//!
//! Consults the flag registry on every transition into `Playing`: a
//! flagged video can never become active, and flagging the active
//! video forces a stop via [`PlaybackController::force_stop_if_active`].

use crate::flags::FlagRegistry;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use vidstream_core::{PlaybackState, Video, VideoCatalog, VideoId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: VideoId, reason: String },

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video already paused: {}", .0.title)]
    AlreadyPaused(Video),

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoEligibleVideos,
}

/// Result of a successful `play`: what started, and what was
/// implicitly stopped to make room for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTransition {
    pub started: Video,
    pub stopped: Option<Video>,
}

/// The currently active video, as reported by `now_playing`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// Owns the playback state and its transitions
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Starts playing a video, implicitly stopping any active one
    pub fn play(
        &mut self,
        catalog: &VideoCatalog,
        flags: &FlagRegistry,
        id: &VideoId,
    ) -> Result<PlayTransition, PlaybackError> {
        let video = catalog
            .get(id)
            .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))?;
        if let Some(reason) = flags.reason_for(id) {
            return Err(PlaybackError::VideoFlagged {
                id: id.clone(),
                reason: reason.to_string(),
            });
        }

        let stopped = self.take_active(catalog);
        self.state = PlaybackState::Playing(video.id.clone());
        Ok(PlayTransition {
            started: video.clone(),
            stopped,
        })
    }

    /// Plays a uniformly random unflagged video.
    ///
    /// "No videos at all" and "every video flagged" are reported the
    /// same way; the caller cannot tell them apart and has no use for
    /// the distinction.
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        catalog: &VideoCatalog,
        flags: &FlagRegistry,
        rng: &mut R,
    ) -> Result<PlayTransition, PlaybackError> {
        let candidates: Vec<&Video> = catalog
            .all()
            .iter()
            .filter(|video| !flags.is_flagged(&video.id))
            .collect();
        let chosen = candidates
            .choose(rng)
            .ok_or(PlaybackError::NoEligibleVideos)?;
        let id = chosen.id.clone();
        self.play(catalog, flags, &id)
    }

    /// Stops the active video, playing or paused
    pub fn stop(&mut self, catalog: &VideoCatalog) -> Result<Video, PlaybackError> {
        self.take_active(catalog).ok_or(PlaybackError::NothingPlaying)
    }

    /// Pauses the playing video
    pub fn pause(&mut self, catalog: &VideoCatalog) -> Result<Video, PlaybackError> {
        match self.state.clone() {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Paused(id) => Err(PlaybackError::AlreadyPaused(lookup(catalog, &id)?)),
            PlaybackState::Playing(id) => {
                let video = lookup(catalog, &id)?;
                self.state = PlaybackState::Paused(id);
                Ok(video)
            }
        }
    }

    /// Resumes the paused video
    pub fn resume(&mut self, catalog: &VideoCatalog) -> Result<Video, PlaybackError> {
        match self.state.clone() {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlaybackError::NotPaused),
            PlaybackState::Paused(id) => {
                let video = lookup(catalog, &id)?;
                self.state = PlaybackState::Playing(id);
                Ok(video)
            }
        }
    }

    /// Reports the active video without changing state
    pub fn now_playing(&self, catalog: &VideoCatalog) -> Option<NowPlaying> {
        let id = self.state.active_video()?;
        catalog.get(id).map(|video| NowPlaying {
            video: video.clone(),
            paused: self.state.is_paused(),
        })
    }

    /// Stops playback if the given video is active.
    ///
    /// The hook the flag operation invokes; returns the stopped id.
    pub fn force_stop_if_active(&mut self, id: &VideoId) -> Option<VideoId> {
        if self.state.active_video() == Some(id) {
            self.state = PlaybackState::Stopped;
            Some(id.clone())
        } else {
            None
        }
    }

    fn take_active(&mut self, catalog: &VideoCatalog) -> Option<Video> {
        let id = self.state.active_video()?.clone();
        self.state = PlaybackState::Stopped;
        catalog.get(&id).cloned()
    }
}

fn lookup(catalog: &VideoCatalog, id: &VideoId) -> Result<Video, PlaybackError> {
    catalog
        .get(id)
        .cloned()
        .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))
}
