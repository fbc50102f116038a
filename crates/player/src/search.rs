//! Title and tag search over unflagged videos
//!
//! Results keep catalog enumeration order; flagged videos never appear.

use crate::flags::FlagRegistry;
use vidstream_core::{Video, VideoCatalog};

/// Case-insensitive substring match against video titles
pub fn search_by_title(catalog: &VideoCatalog, flags: &FlagRegistry, term: &str) -> Vec<Video> {
    let needle = term.to_uppercase();
    catalog
        .all()
        .iter()
        .filter(|video| !flags.is_flagged(&video.id))
        .filter(|video| video.title.to_uppercase().contains(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive exact match against any single tag
pub fn search_by_tag(catalog: &VideoCatalog, flags: &FlagRegistry, tag: &str) -> Vec<Video> {
    catalog
        .all()
        .iter()
        .filter(|video| !flags.is_flagged(&video.id))
        .filter(|video| video.has_tag(tag))
        .cloned()
        .collect()
}

/// Supplies the post-search selection.
///
/// `max_index` is the length of the result list; the return value is a
/// 1-based index into it. `None` means "no selection" (including
/// non-numeric or out-of-range input) and is never an error.
pub trait SelectionProvider {
    fn request_selection(&mut self, max_index: usize) -> Option<usize>;
}

/// Provider that never selects anything; useful for non-interactive callers
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl SelectionProvider for NoSelection {
    fn request_selection(&mut self, _max_index: usize) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidstream_core::VideoId;

    fn setup() -> (VideoCatalog, FlagRegistry) {
        let catalog = VideoCatalog::from_videos(vec![
            Video::new("v1", "Amazing Cats", &["#cat", "#animal"]),
            Video::new("v2", "Another Cat Video", &["#cat", "#animal"]),
            Video::new("v3", "Funny Dogs", &["#dog", "#animal"]),
        ])
        .unwrap();
        (catalog, FlagRegistry::new())
    }

    #[test]
    fn test_title_substring_match() {
        let (catalog, flags) = setup();
        let results = search_by_title(&catalog, &flags, "cat");
        assert_eq!(results.len(), 2);
        // Catalog enumeration order, not re-sorted
        assert_eq!(results[0].id, VideoId::new("v1"));
        assert_eq!(results[1].id, VideoId::new("v2"));
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let (catalog, flags) = setup();
        assert_eq!(search_by_title(&catalog, &flags, "FUNNY").len(), 1);
    }

    #[test]
    fn test_title_no_results() {
        let (catalog, flags) = setup();
        assert!(search_by_title(&catalog, &flags, "opera").is_empty());
    }

    #[test]
    fn test_title_search_excludes_flagged() {
        let (catalog, mut flags) = setup();
        flags.flag(&VideoId::new("v1"), Some("r")).unwrap();
        let results = search_by_title(&catalog, &flags, "cat");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, VideoId::new("v2"));
    }

    #[test]
    fn test_tag_exact_match_only() {
        let (catalog, flags) = setup();
        assert_eq!(search_by_tag(&catalog, &flags, "#cat").len(), 2);
        // Substring of a tag does not match
        assert!(search_by_tag(&catalog, &flags, "#ca").is_empty());
        assert!(search_by_tag(&catalog, &flags, "cat").is_empty());
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let (catalog, flags) = setup();
        assert_eq!(search_by_tag(&catalog, &flags, "#ANIMAL").len(), 3);
    }

    #[test]
    fn test_tag_search_excludes_flagged() {
        let (catalog, mut flags) = setup();
        flags.flag(&VideoId::new("v3"), None).unwrap();
        assert!(search_by_tag(&catalog, &flags, "#dog").is_empty());
    }
}
