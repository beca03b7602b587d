//! Markdown file export.
//!
//! Turns the editor draft into a standalone markdown file with front
//! matter, named after the title's slug so the exported file imports
//! back under the same identity.

use crate::editor::drafts::EditorDraft;
use crate::frontmatter::{self, FrontMatter};
use crate::utils::slug;

/// A rendered export: the suggested file name and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub text: String,
}

/// Render `draft` for export.
///
/// Front matter carries `title` (or `Untitled`), `date`, `author`, and
/// the comma-split tags (or `Draft` when none were entered). The file
/// name is `{slug}.md`, falling back to `untitled.md`.
pub fn export_markdown(draft: &EditorDraft, author: &str, date: &str) -> ExportedFile {
    let title = if draft.title.is_empty() {
        "Untitled"
    } else {
        &draft.title
    };

    let mut meta = FrontMatter::new();
    meta.push_scalar("title", title);
    meta.push_scalar("date", date);
    meta.push_scalar("author", author);
    meta.push_list("tags", split_tags(&draft.tags, "Draft"));

    ExportedFile {
        file_name: format!("{}.md", slug::slugify_or(&draft.title, "untitled")),
        text: frontmatter::render(&meta, &draft.content),
    }
}

/// Split a raw comma-separated tag string, defaulting when empty.
pub fn split_tags(raw: &str, default: &str) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect();
    if tags.is_empty() {
        vec![default.to_owned()]
    } else {
        tags
    }
}

// ============================================================================
// Tests
// ============================================================================
