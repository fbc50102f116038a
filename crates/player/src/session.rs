//! The session state-holder
//!
//! Owns the catalog plus all mutable state (flags, playlists, playback)
//! and wires the cross-component contracts: flagging the active video
//! forces a stop, and a post-search selection triggers playback. No
//! process-wide state; everything lives in this struct.

use crate::flags::{FlagError, FlagRegistry};
use crate::playback::{NowPlaying, PlayTransition, PlaybackController, PlaybackError};
use crate::playlists::{PlaylistEntry, PlaylistError, PlaylistStore};
use crate::search::{self, SelectionProvider};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vidstream_core::{PlaybackState, Video, VideoCatalog, VideoId};

/// Result of a successful flag operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: Video,
    pub reason: String,
    /// Set when the flag forced the active video to stop
    pub stopped: Option<Video>,
}

/// A single user's library session
pub struct PlayerSession {
    catalog: VideoCatalog,
    flags: FlagRegistry,
    playlists: PlaylistStore,
    playback: PlaybackController,
    rng: StdRng,
}

impl PlayerSession {
    /// Creates a session over the given catalog
    pub fn new(catalog: VideoCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied rng, for deterministic tests
    pub fn with_rng(catalog: VideoCatalog, rng: StdRng) -> Self {
        info!("Starting session with {} videos", catalog.len());
        Self {
            catalog,
            flags: FlagRegistry::new(),
            playlists: PlaylistStore::new(),
            playback: PlaybackController::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    /// Number of videos in the catalog
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// All videos in catalog order, each with its flag reason if flagged
    pub fn all_videos(&self) -> Vec<(Video, Option<String>)> {
        self.catalog
            .all()
            .iter()
            .map(|video| {
                let reason = self.flags.reason_for(&video.id).map(str::to_string);
                (video.clone(), reason)
            })
            .collect()
    }

    // ===== Playback =====

    pub fn play(&mut self, id: &VideoId) -> Result<PlayTransition, PlaybackError> {
        let transition = self.playback.play(&self.catalog, &self.flags, id)?;
        info!("Playing {}", transition.started.id);
        Ok(transition)
    }

    pub fn play_random(&mut self) -> Result<PlayTransition, PlaybackError> {
        let transition = self
            .playback
            .play_random(&self.catalog, &self.flags, &mut self.rng)?;
        info!("Playing {} (random)", transition.started.id);
        Ok(transition)
    }

    pub fn stop(&mut self) -> Result<Video, PlaybackError> {
        let stopped = self.playback.stop(&self.catalog)?;
        info!("Stopped {}", stopped.id);
        Ok(stopped)
    }

    pub fn pause(&mut self) -> Result<Video, PlaybackError> {
        self.playback.pause(&self.catalog)
    }

    pub fn resume(&mut self) -> Result<Video, PlaybackError> {
        self.playback.resume(&self.catalog)
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.playback.now_playing(&self.catalog)
    }

    pub fn playback_state(&self) -> &PlaybackState {
        self.playback.state()
    }

    // ===== Playlists =====

    pub fn create_playlist(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.playlists.create(name)?;
        info!("Created playlist {name}");
        Ok(())
    }

    pub fn add_to_playlist(&mut self, name: &str, id: &VideoId) -> Result<Video, PlaylistError> {
        self.playlists.add_video(name, id, &self.catalog, &self.flags)
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        id: &VideoId,
    ) -> Result<Video, PlaylistError> {
        self.playlists.remove_video(name, id, &self.catalog)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.playlists.clear(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.playlists.delete(name)?;
        info!("Deleted playlist {name}");
        Ok(())
    }

    pub fn show_playlist(&self, name: &str) -> Result<Vec<PlaylistEntry>, PlaylistError> {
        self.playlists.show(name, &self.catalog, &self.flags)
    }

    pub fn list_playlists(&self) -> Vec<String> {
        self.playlists.list_all()
    }

    // ===== Flags =====

    /// Flags a video, stopping it first if it is the active one
    pub fn flag_video(
        &mut self,
        id: &VideoId,
        reason: Option<&str>,
    ) -> Result<FlagOutcome, FlagError> {
        let video = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| FlagError::VideoNotFound(id.clone()))?;
        let reason = self.flags.flag(id, reason)?;
        let stopped = self
            .playback
            .force_stop_if_active(id)
            .and_then(|stopped_id| self.catalog.get(&stopped_id).cloned());
        info!("Flagged {id} (reason: {reason})");
        Ok(FlagOutcome {
            video,
            reason,
            stopped,
        })
    }

    /// Removes a flag, returning the video it was on
    pub fn allow_video(&mut self, id: &VideoId) -> Result<Video, FlagError> {
        let video = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| FlagError::VideoNotFound(id.clone()))?;
        self.flags.allow(id)?;
        info!("Removed flag from {id}");
        Ok(video)
    }

    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.flags.is_flagged(id)
    }

    pub fn flag_reason(&self, id: &VideoId) -> Option<&str> {
        self.flags.reason_for(id)
    }

    // ===== Search =====

    pub fn search_by_title(&self, term: &str) -> Vec<Video> {
        search::search_by_title(&self.catalog, &self.flags, term)
    }

    pub fn search_by_tag(&self, tag: &str) -> Vec<Video> {
        search::search_by_tag(&self.catalog, &self.flags, tag)
    }

    /// Offers the given search results to the selection provider and
    /// plays the chosen one.
    ///
    /// `Ok(None)` means no selection was made, including out-of-range
    /// input; that is defined behavior, not an error.
    pub fn play_selection(
        &mut self,
        results: &[Video],
        provider: &mut dyn SelectionProvider,
    ) -> Result<Option<PlayTransition>, PlaybackError> {
        if results.is_empty() {
            return Ok(None);
        }
        let Some(choice) = provider.request_selection(results.len()) else {
            debug!("No selection made from {} results", results.len());
            return Ok(None);
        };
        if choice == 0 || choice > results.len() {
            return Ok(None);
        }
        let id = results[choice - 1].id.clone();
        self.play(&id).map(Some)
    }
}
