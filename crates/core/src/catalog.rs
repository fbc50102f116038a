//! The read-only video catalog
//!
//! The catalog is fixed for the lifetime of a session: videos can be
//! looked up by id or enumerated in a stable, catalog-defined order.

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Video, VideoId};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A fixed set of known videos, queryable by id
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl VideoCatalog {
    /// Builds a catalog from a list of videos, rejecting duplicate ids
    pub fn from_videos(videos: Vec<Video>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(videos.len());
        for (position, video) in videos.iter().enumerate() {
            if index.insert(video.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }
        Ok(Self { videos, index })
    }

    /// Loads a catalog from a pipe-separated text file.
    ///
    /// One video per line: `Title|video_id|#tag1 #tag2`. The tag field
    /// is optional and may separate tags with spaces or commas. Blank
    /// lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut videos = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            videos.push(parse_line(line_no + 1, line)?);
        }
        Self::from_videos(videos)
    }

    /// Loads a catalog from a JSON array of videos
    pub fn load_json(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path)?;
        let videos: Vec<Video> = serde_json::from_str(&contents)?;
        Self::from_videos(videos)
    }

    /// The built-in demo library
    pub fn demo() -> Self {
        let videos = vec![
            Video::new("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            Video::new(
                "another_cat_video_id",
                "Another Cat Video",
                &["#cat", "#animal"],
            ),
            Video::new(
                "life_at_google_video_id",
                "Life at Google",
                &["#google", "#career"],
            ),
            Video::new("nothing_video_id", "Video about nothing", &[]),
        ];
        // A fixed list with distinct ids cannot fail
        Self::from_videos(videos).unwrap_or_default()
    }

    /// Looks up a video by id
    pub fn get(&self, id: &VideoId) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    /// Returns all videos in catalog order
    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    /// Returns the number of videos in the catalog
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Returns true if the catalog holds no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

fn parse_line(line_no: usize, line: &str) -> CatalogResult<Video> {
    let malformed = || CatalogError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let mut fields = line.splitn(3, '|');
    let title = fields.next().map(str::trim).ok_or_else(malformed)?;
    let id = fields.next().map(str::trim).ok_or_else(malformed)?;
    if title.is_empty() || id.is_empty() {
        return Err(malformed());
    }

    let tags = fields
        .next()
        .map(|field| {
            field
                .split([',', ' '])
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::from_parts(VideoId::new(id), title.to_string(), tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_demo_catalog() {
        let catalog = VideoCatalog::demo();
        assert_eq!(catalog.len(), 5);
        let cats = catalog.get(&VideoId::new("amazing_cats_video_id")).unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert!(cats.has_tag("#cat"));
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = VideoCatalog::demo();
        assert!(catalog.get(&VideoId::new("missing")).is_none());
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let catalog = VideoCatalog::demo();
        let first: Vec<_> = catalog.all().iter().map(|v| v.id.clone()).collect();
        let second: Vec<_> = catalog.all().iter().map(|v| v.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0].as_str(), "funny_dogs_video_id");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let videos = vec![
            Video::new("v1", "One", &[]),
            Video::new("v1", "One again", &[]),
        ];
        let result = VideoCatalog::from_videos(videos);
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_load_pipe_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Amazing Cats|amazing_cats_video_id|#cat,#animal").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Video about nothing|nothing_video_id").unwrap();

        let catalog = VideoCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let cats = catalog.get(&VideoId::new("amazing_cats_video_id")).unwrap();
        assert_eq!(cats.tags(), &["#cat".to_string(), "#animal".to_string()]);

        let nothing = catalog.get(&VideoId::new("nothing_video_id")).unwrap();
        assert!(nothing.tags().is_empty());
    }

    #[test]
    fn test_load_space_separated_tags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Funny Dogs|funny_dogs_video_id|#dog #animal").unwrap();

        let catalog = VideoCatalog::load(file.path()).unwrap();
        let dogs = catalog.get(&VideoId::new("funny_dogs_video_id")).unwrap();
        assert_eq!(dogs.tags(), &["#dog".to_string(), "#animal".to_string()]);
    }

    #[test]
    fn test_load_malformed_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "just a title with no id").unwrap();

        let result = VideoCatalog::load(file.path());
        assert!(matches!(
            result,
            Err(CatalogError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[{{"id":"v1","title":"Cats","tags":["#cat"]}}]"##
        )
        .unwrap();

        let catalog = VideoCatalog::load_json(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&VideoId::new("v1")).unwrap().title, "Cats");
    }
}
