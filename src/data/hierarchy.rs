//! Folder hierarchy derived from virtual paths.
//!
//! Posts carry a flat `filename` like `blog/engineering/backend/x.md`;
//! the folder tree is never stored. Instead, every proper prefix of a
//! path's directory segments counts as a folder, and the synthetic root
//! folder [`ROOT_FOLDER`] matches every post.

use super::types::Post;
use std::collections::BTreeSet;

/// The synthetic root folder. Matches every post, placed or not.
pub const ROOT_FOLDER: &str = "All";

/// Collect the folder set contributed by a list of posts.
///
/// For a filename with segments `[s1, ..., sn, file]` the contributed
/// folders are `s1`, `s1/s2`, ..., `s1/.../sn`. The result always
/// contains [`ROOT_FOLDER`] and is lexicographically sorted; the root
/// takes whatever position plain string ordering gives it.
pub fn derive_folders(posts: &[Post]) -> Vec<String> {
    let mut folders = BTreeSet::new();
    folders.insert(ROOT_FOLDER.to_owned());

    for post in posts {
        let Some(filename) = &post.filename else {
            continue;
        };
        let segments: Vec<&str> = filename.split('/').collect();
        let mut prefix = String::new();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            folders.insert(prefix.clone());
        }
    }

    folders.into_iter().collect()
}

/// Filter posts down to a folder.
///
/// [`ROOT_FOLDER`] passes everything through unchanged. Any other
/// folder keeps posts whose filename starts with it as a literal string
/// prefix. The match is not segment-aware: `blog/eng` also matches
/// `blog/engineering/...`.
pub fn filter_by_folder(posts: &[Post], folder: &str) -> Vec<Post> {
    if folder == ROOT_FOLDER {
        return posts.to_vec();
    }
    posts
        .iter()
        .filter(|post| {
            post.filename
                .as_deref()
                .is_some_and(|filename| filename.starts_with(folder))
        })
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, filename: Option<&str>) -> Post {
        Post {
            id: id.to_owned(),
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            excerpt: String::new(),
            content: String::new(),
            author: "Unknown".to_owned(),
            published_at: "2024-01-01".to_owned(),
            tags: vec![],
            cover_image: None,
            filename: filename.map(str::to_owned),
        }
    }

    #[test]
    fn test_derive_folders_nested() {
        let posts = vec![
            post("1", Some("blog/a/b/x.md")),
            post("2", Some("blog/a/c/y.md")),
        ];
        let folders = derive_folders(&posts);
        assert_eq!(folders, vec!["All", "blog", "blog/a", "blog/a/b", "blog/a/c"]);
    }

    #[test]
    fn test_derive_folders_ignores_unplaced_posts() {
        let posts = vec![post("1", None)];
        assert_eq!(derive_folders(&posts), vec!["All"]);
    }

    #[test]
    fn test_derive_folders_top_level_file() {
        // A file directly under one segment contributes just that segment.
        let posts = vec![post("1", Some("blog/x.md"))];
        assert_eq!(derive_folders(&posts), vec!["All", "blog"]);
    }

    #[test]
    fn test_filter_root_passes_everything() {
        let posts = vec![post("1", Some("blog/a/x.md")), post("2", None)];
        let filtered = filter_by_folder(&posts, ROOT_FOLDER);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");
    }

    #[test]
    fn test_filter_by_prefix() {
        let posts = vec![
            post("1", Some("blog/a/b/x.md")),
            post("2", Some("blog/a/c/y.md")),
        ];
        let filtered = filter_by_folder(&posts, "blog/a/b");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_filter_drops_unplaced_posts() {
        let posts = vec![post("1", None)];
        assert!(filter_by_folder(&posts, "blog").is_empty());
    }

    #[test]
    fn test_filter_uses_literal_prefix() {
        // Not segment-aware: a partial segment still matches.
        let posts = vec![post("1", Some("blog/engineering/x.md"))];
        let filtered = filter_by_folder(&posts, "blog/eng");
        assert_eq!(filtered.len(), 1);
    }
}
