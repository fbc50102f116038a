//! Moderation flag registry
//!
//! Maps video ids to a flag reason. A video is flagged iff it is
//! present here, regardless of catalog membership; callers validate
//! catalog presence before registering.

use std::collections::HashMap;
use thiserror::Error;
use vidstream_core::VideoId;

/// Reason stored when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    #[error("Video is already flagged")]
    AlreadyFlagged(VideoId),

    #[error("Video is not flagged")]
    NotFlagged(VideoId),
}

/// Registry of flagged videos and their reasons
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    reasons: HashMap<VideoId, String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags a video, returning the stored reason.
    ///
    /// A missing or blank reason is stored as [`DEFAULT_FLAG_REASON`].
    pub fn flag(&mut self, id: &VideoId, reason: Option<&str>) -> Result<String, FlagError> {
        if self.reasons.contains_key(id) {
            return Err(FlagError::AlreadyFlagged(id.clone()));
        }
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON)
            .to_string();
        self.reasons.insert(id.clone(), reason.clone());
        Ok(reason)
    }

    /// Removes a flag, returning the reason it was flagged with
    pub fn allow(&mut self, id: &VideoId) -> Result<String, FlagError> {
        self.reasons
            .remove(id)
            .ok_or_else(|| FlagError::NotFlagged(id.clone()))
    }

    /// Returns the flag reason for a video, if flagged
    pub fn reason_for(&self, id: &VideoId) -> Option<&str> {
        self.reasons.get(id).map(String::as_str)
    }

    /// Returns true if the video is flagged
    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.reasons.contains_key(id)
    }

    /// Returns the number of flagged videos
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Returns true if no videos are flagged
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}
