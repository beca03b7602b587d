//! Markdown file import.
//!
//! Pulls title, tags, and body out of an external markdown file so the
//! editor can pick up where another tool left off. Files without front
//! matter fall back to the first top-level heading for the title, and
//! failing that, the file name.

use crate::frontmatter;

/// Fields recovered from an imported file.
///
/// `title` and `tags` are `None` when the file carried no usable value
/// for them; the caller decides whether to overwrite its own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedDraft {
    pub title: Option<String>,
    pub tags: Option<String>,
    pub content: String,
}

/// Interpret `text` as a markdown document named `file_name`.
///
/// With front matter: title from the `title` key, tags re-joined from
/// the `tags` list, body without the metadata block. Without front
/// matter: the whole text is the body and the title falls back to the
/// first `# ` heading line, then to the file stem.
pub fn import_markdown(text: &str, file_name: &str) -> ImportedDraft {
    if frontmatter::has_front_matter(text) {
        let (meta, body) = frontmatter::parse(text);
        return ImportedDraft {
            title: meta.get("title").map(str::to_owned),
            tags: meta.get_list("tags").map(|tags| tags.join(", ")),
            content: body,
        };
    }

    ImportedDraft {
        title: first_heading(text)
            .map(str::to_owned)
            .or_else(|| Some(file_stem(file_name).to_owned())),
        tags: None,
        content: text.to_owned(),
    }
}

/// The text of the first `# ` heading line, if any.
fn first_heading(text: &str) -> Option<&str> {
    text.lines().find_map(|line| {
        line.strip_prefix("# ")
            .map(str::trim)
            .filter(|heading| !heading.is_empty())
    })
}

/// File name without its last extension.
fn file_stem(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

// ============================================================================
// Tests
// ============================================================================
