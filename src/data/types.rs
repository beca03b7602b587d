//! Core data types for posts and authors.

use serde::Serialize;

/// A fully hydrated blog post.
///
/// Every field is populated by the time a `Post` leaves the store;
/// missing metadata is substituted with defaults during hydration, so
/// consumers never deal with half-filled records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque identifier, unique within the store.
    pub id: String,

    pub title: String,

    /// URL-safe identifier derived from the title.
    pub slug: String,

    /// Short summary shown in listings.
    pub excerpt: String,

    /// Markdown body.
    pub content: String,

    /// Author name, resolved against the author directory on demand.
    pub author: String,

    /// Publication date string (`YYYY-MM-DD` for published posts).
    pub published_at: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Virtual path of the backing document (e.g. `blog/ai/post.md`).
    /// `None` means the post has no folder placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Input to [`crate::data::store::PostStore::create`]: a post minus the
/// fields the store computes (`id`, `published_at`, `filename`).
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

/// An author profile.
///
/// Directory lookups never fail; unknown names get a synthesized
/// profile instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
}
