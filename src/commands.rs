//! Command implementations behind the CLI subcommands.
//!
//! Each function takes the shared stores it needs and logs its outcome;
//! presentation stays here so the data layer remains print-free.

use crate::config::ZenithConfig;
use crate::data::authors::AuthorDirectory;
use crate::data::hierarchy::{self, ROOT_FOLDER};
use crate::data::store::PostStore;
use crate::data::types::PostDraft;
use crate::editor::drafts::{DraftStore, EditorDraft};
use crate::editor::export::{export_markdown, split_tags};
use crate::editor::import::import_markdown;
use crate::generate::GeminiClient;
use crate::log;
use crate::utils::{date, slug};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Reading
// ============================================================================

/// List posts, optionally narrowed to a folder.
pub async fn list(store: &PostStore, folder: Option<String>, json: bool) -> Result<()> {
    let posts = store.list().await;
    let folder = folder.unwrap_or_else(|| ROOT_FOLDER.to_owned());
    let visible = hierarchy::filter_by_folder(&posts, &folder);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    log!("list"; "{} articles in {folder}", visible.len());
    for post in &visible {
        let placement = post
            .filename
            .as_deref()
            .and_then(|name| name.rsplit_once('/'))
            .map_or("-", |(dir, _)| dir);
        log!("list"; "{}  {:<9}  {}  ({placement})", post.published_at, post.id, post.title);
    }
    Ok(())
}

/// Print the folder hierarchy derived from post paths.
pub async fn folders(store: &PostStore) -> Result<()> {
    let posts = store.list().await;
    for folder in hierarchy::derive_folders(&posts) {
        let depth = if folder == ROOT_FOLDER {
            0
        } else {
            folder.matches('/').count() + 1
        };
        log!("folders"; "{}{folder}", "  ".repeat(depth));
    }
    Ok(())
}

/// Show one post in full, with its author profile.
pub async fn show(store: &PostStore, directory: &AuthorDirectory, id: &str) -> Result<()> {
    let Some(post) = store.find_by_id(id).await else {
        bail!("no post with id `{id}`");
    };

    if let Some(filename) = &post.filename {
        let trail = filename.trim_end_matches(".md").replace('/', " > ");
        log!("show"; "Home > {trail}");
    }
    log!("show"; "{}", post.title);
    log!("show"; "by {} on {}", post.author, post.published_at);
    if !post.tags.is_empty() {
        log!("show"; "tags: {}", post.tags.join(", "));
    }
    println!("\n{}\n", post.content);

    let profile = directory.get(&post.author).await;
    log!("show"; "About the author: {} ({})", profile.name, profile.role);
    log!("show"; "{}", profile.bio);
    Ok(())
}

/// Print an author profile (synthesized for unknown names).
pub async fn author(directory: &AuthorDirectory, name: &str) -> Result<()> {
    let profile = directory.get(name).await;
    log!("author"; "{} ({})", profile.name, profile.role);
    log!("author"; "{}", profile.bio);
    log!("author"; "avatar: {}", profile.avatar);
    Ok(())
}

// ============================================================================
// Editing
// ============================================================================

/// Import a markdown file into the saved draft.
pub fn import_file(drafts: &DraftStore, config: &ZenithConfig, path: &PathBuf) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading `{}`", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let imported = import_markdown(&text, &file_name);

    let mut draft = drafts.load().unwrap_or_else(|| fresh_draft(config));
    if let Some(title) = imported.title {
        draft.title = title;
    }
    if let Some(tags) = imported.tags {
        draft.tags = tags;
    }
    draft.content = imported.content;
    drafts.save(&draft)?;

    log!("draft"; "imported `{}`, title: {}", path.display(), display_or(&draft.title, "(none)"));
    Ok(())
}

/// Export the saved draft as a standalone markdown file.
pub fn export_draft(
    drafts: &DraftStore,
    config: &ZenithConfig,
    out: Option<PathBuf>,
) -> Result<()> {
    let Some(draft) = drafts.load() else {
        bail!("no saved draft to export");
    };
    if draft.content.is_empty() {
        bail!("draft has no content to export");
    }

    let exported = export_markdown(&draft, &config.base.author, &date::today());
    let out = out.unwrap_or_else(|| PathBuf::from(&exported.file_name));
    fs::write(&out, &exported.text)
        .with_context(|| format!("writing `{}`", out.display()))?;

    log!("draft"; "exported to `{}`", out.display());
    Ok(())
}

/// Draft content from a topic with the generation service.
///
/// The draft is only touched after generation succeeds, so a failed
/// request leaves prior editor state intact.
pub async fn generate(
    drafts: &DraftStore,
    config: &ZenithConfig,
    topic: &str,
    tone: Option<String>,
) -> Result<()> {
    let client = GeminiClient::from_config(&config.generate)?;
    let tone = tone.unwrap_or_else(|| config.generate.tone.clone());

    log!("generate"; "drafting `{topic}` ({tone})");
    let content = client
        .generate_draft(topic, &tone)
        .await
        .context("failed to generate content")?;

    let mut draft = drafts.load().unwrap_or_else(|| fresh_draft(config));
    draft.content = content;
    if draft.title.is_empty() {
        draft.title = title_from_topic(topic);
    }
    draft.topic = topic.to_owned();
    drafts.save(&draft)?;

    log!("generate"; "draft updated, title: {}", draft.title);
    Ok(())
}

/// Rewrite the saved draft's content with the generation service.
pub async fn improve(
    drafts: &DraftStore,
    config: &ZenithConfig,
    instruction: &str,
) -> Result<()> {
    let Some(mut draft) = drafts.load() else {
        bail!("no saved draft to improve");
    };
    if draft.content.is_empty() {
        bail!("draft has no content to improve");
    }

    let client = GeminiClient::from_config(&config.generate)?;
    log!("generate"; "rewriting draft: {instruction}");
    draft.content = client
        .improve(&draft.content, instruction)
        .await
        .context("failed to improve content")?;
    drafts.save(&draft)?;

    log!("generate"; "draft updated, {} characters", draft.content.chars().count());
    Ok(())
}

/// Publish the saved draft to the post store and clear it.
pub async fn publish(
    store: &PostStore,
    drafts: &DraftStore,
    config: &ZenithConfig,
    folder: Option<String>,
) -> Result<()> {
    let Some(draft) = drafts.load() else {
        bail!("no saved draft to publish");
    };
    if draft.title.is_empty() || draft.content.is_empty() {
        bail!("draft needs both a title and content before publishing");
    }

    let post_draft = PostDraft {
        slug: slug::slugify_or(&draft.title, "untitled"),
        excerpt: excerpt_of(&draft.content),
        author: config.base.author.clone(),
        tags: split_tags(&draft.tags, "General"),
        cover_image: Some(format!(
            "https://picsum.photos/800/400?random={}",
            rand::random::<f64>()
        )),
        title: draft.title,
        content: draft.content,
    };
    let folder = folder.unwrap_or(draft.folder);

    let post = store.create(post_draft, &folder).await;
    drafts.clear()?;

    log!("publish"; "published `{}` ({})", post.title, post.id);
    if let Some(filename) = &post.filename {
        log!("publish"; "stored at {filename}");
    }
    Ok(())
}

/// Print the saved draft.
pub fn draft_show(drafts: &DraftStore) -> Result<()> {
    let Some(draft) = drafts.load() else {
        log!("draft"; "no saved draft");
        return Ok(());
    };

    log!("draft"; "title:  {}", display_or(&draft.title, "(none)"));
    log!("draft"; "topic:  {}", display_or(&draft.topic, "(none)"));
    log!("draft"; "tags:   {}", display_or(&draft.tags, "(none)"));
    log!("draft"; "folder: {}", draft.folder);
    log!("draft"; "{} characters of content", draft.content.chars().count());
    Ok(())
}

/// Delete the saved draft.
pub fn draft_clear(drafts: &DraftStore) -> Result<()> {
    drafts.clear()?;
    log!("draft"; "cleared");
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// First 150 characters of the content plus an ellipsis, matching the
/// excerpt the store would synthesize for a bare document.
fn excerpt_of(content: &str) -> String {
    let prefix: String = content.chars().take(150).collect();
    format!("{prefix}...")
}

/// Title-case a topic for use as a post title.
fn title_from_topic(topic: &str) -> String {
    topic
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// An empty draft placed in the configured default folder.
fn fresh_draft(config: &ZenithConfig) -> EditorDraft {
    EditorDraft {
        folder: config.editor.default_folder.clone(),
        ..EditorDraft::default()
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
