//! Named playlist store
//!
//! Playlists are identified case-insensitively but keep the display
//! name exactly as it was first given. Each playlist holds an ordered,
//! duplicate-free list of video ids.

use crate::flags::FlagRegistry;
use std::collections::HashMap;
use thiserror::Error;
use vidstream_core::{Video, VideoCatalog, VideoId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    #[error("A playlist with the same name already exists")]
    AlreadyExists(String),

    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: VideoId, reason: String },

    #[error("Video already added")]
    AlreadyInPlaylist(VideoId),

    #[error("Video is not in playlist")]
    NotInPlaylist(VideoId),
}

/// A named, ordered, duplicate-free list of video ids
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Display name, case preserved as originally given
    pub name: String,
    pub videos: Vec<VideoId>,
}

/// One row of [`PlaylistStore::show`]: a video and its flag reason, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub video: Video,
    pub flag_reason: Option<String>,
}

/// Store of all playlists, keyed case-insensitively by name
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a caller-supplied name to the normalized store key.
    ///
    /// Every operation goes through this; a `None` means the playlist
    /// does not exist for that operation.
    fn resolve(&self, name: &str) -> Option<String> {
        let key = name.to_uppercase();
        self.playlists.contains_key(&key).then_some(key)
    }

    /// Creates an empty playlist with the given display name
    pub fn create(&mut self, name: &str) -> Result<(), PlaylistError> {
        if self.resolve(name).is_some() {
            return Err(PlaylistError::AlreadyExists(name.to_string()));
        }
        self.playlists.insert(
            name.to_uppercase(),
            Playlist {
                name: name.to_string(),
                videos: Vec::new(),
            },
        );
        Ok(())
    }

    /// Adds a video to a playlist, returning the added video.
    ///
    /// Checks in priority order: playlist exists, video exists, video
    /// unflagged, video not already present.
    pub fn add_video(
        &mut self,
        name: &str,
        id: &VideoId,
        catalog: &VideoCatalog,
        flags: &FlagRegistry,
    ) -> Result<Video, PlaylistError> {
        let key = self
            .resolve(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        let video = catalog
            .get(id)
            .ok_or_else(|| PlaylistError::VideoNotFound(id.clone()))?;
        if let Some(reason) = flags.reason_for(id) {
            return Err(PlaylistError::VideoFlagged {
                id: id.clone(),
                reason: reason.to_string(),
            });
        }

        // resolve() guarantees the key is present
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        if playlist.videos.contains(id) {
            return Err(PlaylistError::AlreadyInPlaylist(id.clone()));
        }
        playlist.videos.push(id.clone());
        Ok(video.clone())
    }

    /// Removes a video from a playlist, returning the removed video.
    ///
    /// Flag state does not block removal.
    pub fn remove_video(
        &mut self,
        name: &str,
        id: &VideoId,
        catalog: &VideoCatalog,
    ) -> Result<Video, PlaylistError> {
        let key = self
            .resolve(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        let video = catalog
            .get(id)
            .ok_or_else(|| PlaylistError::VideoNotFound(id.clone()))?;

        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        let position = playlist
            .videos
            .iter()
            .position(|v| v == id)
            .ok_or_else(|| PlaylistError::NotInPlaylist(id.clone()))?;
        playlist.videos.remove(position);
        Ok(video.clone())
    }

    /// Empties a playlist, keeping the playlist itself
    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        let key = self
            .resolve(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        if let Some(playlist) = self.playlists.get_mut(&key) {
            playlist.videos.clear();
        }
        Ok(())
    }

    /// Deletes a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<(), PlaylistError> {
        let key = self
            .resolve(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        self.playlists.remove(&key);
        Ok(())
    }

    /// Returns the playlist's videos in insertion order, each with its
    /// flag reason if flagged. An empty list is a valid result,
    /// distinct from not-found.
    pub fn show(
        &self,
        name: &str,
        catalog: &VideoCatalog,
        flags: &FlagRegistry,
    ) -> Result<Vec<PlaylistEntry>, PlaylistError> {
        let key = self
            .resolve(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;
        let playlist = self
            .playlists
            .get(&key)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        Ok(playlist
            .videos
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|video| PlaylistEntry {
                video: video.clone(),
                flag_reason: flags.reason_for(&video.id).map(str::to_string),
            })
            .collect())
    }

    /// Returns the display name for a playlist, as originally given
    pub fn display_name(&self, name: &str) -> Option<&str> {
        let key = self.resolve(name)?;
        self.playlists.get(&key).map(|p| p.name.as_str())
    }

    /// Returns all display names, sorted alphabetically
    pub fn list_all(&self) -> Vec<String> {
        let mut names: Vec<String> = self.playlists.values().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    /// Returns the number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Returns true if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
