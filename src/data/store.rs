//! In-memory post repository.
//!
//! Documents live in an insertion-ordered map from virtual path to raw
//! front-matter text, seeded with the sample posts. Operations model a
//! remote backend: each one suspends for a fixed simulated latency so
//! callers can exercise loading states. Mutations are applied
//! synchronously *before* the latency sleep, so a caller that awaits a
//! `create` and then lists is guaranteed to observe its own write.
//!
//! There is no persistence: the store is process-wide state that starts
//! from the seed on every run and grows monotonically as posts are
//! published.

use crate::frontmatter;
use crate::utils::date;
use parking_lot::RwLock;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use super::seed::seed_documents;
use super::types::{Post, PostDraft};

/// Simulated latency for listing posts.
const LIST_LATENCY: Duration = Duration::from_millis(600);

/// Simulated latency for publishing a post.
const CREATE_LATENCY: Duration = Duration::from_millis(800);

/// Only documents under this prefix are posts.
const POSTS_PREFIX: &str = "blog/";

/// Length of generated post ids (base-36 alphabet, unguarded against
/// collision; the id space is large enough for a process lifetime).
const ID_LEN: usize = 9;

// ============================================================================
// Store
// ============================================================================

/// The in-memory document store.
///
/// Insertion order is the listing order. Re-publishing to an existing
/// virtual path silently overwrites the document at its original
/// position (last write wins).
pub struct PostStore {
    documents: RwLock<Vec<(String, String)>>,
}

impl PostStore {
    /// Store seeded with the sample documents.
    pub fn new() -> Self {
        Self::with_documents(seed_documents())
    }

    /// Store over an explicit document set. Used by tests.
    pub fn with_documents(documents: Vec<(String, String)>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// List every post under `blog/`, in insertion order.
    ///
    /// Each raw document is decoded and hydrated with defaults for any
    /// missing metadata. Side-effect free.
    pub async fn list(&self) -> Vec<Post> {
        sleep(LIST_LATENCY).await;

        self.documents
            .read()
            .iter()
            .filter(|(path, _)| path.starts_with(POSTS_PREFIX))
            .enumerate()
            .map(|(index, (path, raw))| hydrate(index, path, raw))
            .collect()
    }

    /// Find a post by id. `None` when absent; never an error.
    pub async fn find_by_id(&self, id: &str) -> Option<Post> {
        self.list().await.into_iter().find(|post| post.id == id)
    }

    /// Publish a draft into `folder` and return the stored post.
    ///
    /// Generates a fresh id, stamps today's date, normalizes the folder
    /// under `blog/`, and writes the encoded document at
    /// `{folder}/{slug}.md`, overwriting any document already at that
    /// path. The insertion happens before the simulated latency.
    pub async fn create(&self, draft: PostDraft, folder: &str) -> Post {
        let id = random_id();
        let published_at = date::today();
        let folder = normalize_folder(folder);
        let filename = format!("{folder}/{}.md", draft.slug);

        let post = Post {
            id,
            title: draft.title,
            slug: draft.slug,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            published_at,
            tags: draft.tags,
            cover_image: draft.cover_image,
            filename: Some(filename.clone()),
        };

        let raw = encode_post(&post);
        {
            let mut documents = self.documents.write();
            match documents.iter_mut().find(|(path, _)| *path == filename) {
                Some(entry) => entry.1 = raw,
                None => documents.push((filename, raw)),
            }
        }

        sleep(CREATE_LATENCY).await;
        post
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Hydration
// ============================================================================

/// Turn a raw document into a `Post`, substituting defaults for every
/// missing metadata field. This is the single place the default policy
/// lives.
fn hydrate(index: usize, path: &str, raw: &str) -> Post {
    let (meta, body) = frontmatter::parse(raw);

    let excerpt = meta
        .get("excerpt")
        .map(str::to_owned)
        .unwrap_or_else(|| default_excerpt(&body));

    Post {
        id: meta
            .get("id")
            .map(str::to_owned)
            .unwrap_or_else(|| format!("generated-{index}")),
        title: meta.get("title").unwrap_or("Untitled Post").to_owned(),
        slug: meta.get("slug").unwrap_or("untitled").to_owned(),
        excerpt,
        author: meta.get("author").unwrap_or("Unknown").to_owned(),
        published_at: meta
            .get("publishedAt")
            .map(str::to_owned)
            .unwrap_or_else(date::now_rfc3339),
        tags: meta.get_list("tags").map(<[String]>::to_vec).unwrap_or_default(),
        cover_image: meta.get("coverImage").map(str::to_owned),
        filename: Some(path.to_owned()),
        content: body,
    }
}

/// First 150 characters of the body plus an ellipsis.
fn default_excerpt(body: &str) -> String {
    let prefix: String = body.chars().take(150).collect();
    format!("{prefix}...")
}

/// Encode a post back into document form, in the fixed key order the
/// published documents use.
fn encode_post(post: &Post) -> String {
    let mut meta = frontmatter::FrontMatter::new();
    meta.push_scalar("id", &post.id);
    meta.push_scalar("title", &post.title);
    meta.push_scalar("slug", &post.slug);
    meta.push_scalar("author", &post.author);
    meta.push_scalar("publishedAt", &post.published_at);
    meta.push_list("tags", post.tags.clone());
    if let Some(cover) = &post.cover_image {
        meta.push_scalar("coverImage", cover);
    }
    meta.push_scalar("excerpt", &post.excerpt);
    frontmatter::render(&meta, &post.content)
}

/// Strip a trailing `/` and root the folder under `blog/`.
fn normalize_folder(folder: &str) -> String {
    let folder = folder.strip_suffix('/').unwrap_or(folder);
    if folder.starts_with("blog") {
        folder.to_owned()
    } else {
        format!("blog/{folder}")
    }
}

fn random_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
