//! Video domain models

use serde::{Deserialize, Serialize};

/// Unique identifier for a video, assigned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Creates a VideoId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a video in the catalog.
///
/// Immutable for the session: the tag list is copied at construction,
/// so later changes to the caller's input cannot affect the stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    tags: Vec<String>,
}

impl Video {
    /// Creates a new video, copying the provided tags
    pub fn new(id: impl Into<VideoId>, title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Creates a new video from owned parts
    pub fn from_parts(id: VideoId, title: String, tags: Vec<String>) -> Self {
        Self { id, title, tags }
    }

    /// Returns the tags of this video
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if any tag matches exactly, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Returns the tags joined by spaces, like `#cat #animal`
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}

impl std::fmt::Display for Video {
    /// Renders the canonical video line, like
    /// `Amazing Cats (amazing_cats_video_id) [#cat #animal]`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tag_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_roundtrip() {
        let id = VideoId::new("amazing_cats_video_id");
        assert_eq!(id.as_str(), "amazing_cats_video_id");
        assert_eq!(id.to_string(), "amazing_cats_video_id");
    }

    #[test]
    fn test_video_tags_are_copied() {
        let mut input = vec!["#cat", "#animal"];
        let video = Video::new("v1", "Cats", &input);
        input.clear();
        assert_eq!(video.tags(), &["#cat".to_string(), "#animal".to_string()]);
    }

    #[test]
    fn test_has_tag_exact_case_insensitive() {
        let video = Video::new("v1", "Cats", &["#cat", "#animal"]);
        assert!(video.has_tag("#CAT"));
        assert!(video.has_tag("#animal"));
        // Substring of a tag is not a match
        assert!(!video.has_tag("#ca"));
        assert!(!video.has_tag("cat"));
    }

    #[test]
    fn test_display_with_tags() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]);
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", &[]);
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_serde_roundtrip() {
        let video = Video::new("v1", "Cats", &["#cat"]);
        let json = serde_json::to_string(&video).unwrap();
        let back: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(video, back);
    }
}
