//! Local draft persistence.
//!
//! The editor keeps exactly one work-in-progress draft, saved as JSON
//! on explicit request, loaded once when the editor starts, and cleared
//! on publish. A missing or unreadable draft file is treated as "no
//! saved draft", never as an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The editor's persisted state.
///
/// `tags` stays a raw comma-separated string until publish; splitting
/// happens at the repository boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorDraft {
    pub title: String,
    pub content: String,
    pub topic: String,
    pub tags: String,
    pub folder: String,
}

impl Default for EditorDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            topic: String::new(),
            tags: String::new(),
            folder: "blog".to_owned(),
        }
    }
}

/// File-backed storage for the single editor draft.
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default draft location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zenith")
            .join("draft.json")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist the draft, creating parent directories as needed.
    pub fn save(&self, draft: &EditorDraft) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating draft directory `{}`", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(draft)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing draft to `{}`", self.path.display()))
    }

    /// Load the saved draft, if any.
    ///
    /// Returns `None` when the file is absent or does not parse;
    /// a corrupt draft degrades to an empty editor rather than a
    /// startup failure.
    pub fn load(&self) -> Option<EditorDraft> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Remove the saved draft. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("removing draft `{}`", self.path.display()))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DraftStore {
        DraftStore::new(dir.path().join("drafts").join("draft.json"))
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let draft = EditorDraft {
            title: "WIP".to_owned(),
            content: "# WIP\n".to_owned(),
            topic: "rust async".to_owned(),
            tags: "rust, async".to_owned(),
            folder: "blog/engineering".to_owned(),
        };
        store.save(&draft).unwrap();

        assert_eq!(store.load(), Some(draft));
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_load_corrupt_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&EditorDraft::default()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // Clearing again is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_default_folder_fills_missing_field() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"title": "Only Title"}"#).unwrap();

        let draft = store.load().unwrap();
        assert_eq!(draft.title, "Only Title");
        assert_eq!(draft.folder, "blog");
    }
}
