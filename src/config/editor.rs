//! `[editor]` section configuration.
//!
//! Controls where the local draft is persisted and the default folder
//! new posts publish into.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[editor]` section in zenith.toml.
///
/// # Example
/// ```toml
/// [editor]
/// draft_path = "/home/alice/.zenith/draft.json"
/// default_folder = "blog/engineering"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Where the local draft file lives.
    /// Defaults to `draft.json` under the platform data directory.
    #[serde(default = "defaults::editor::draft_path")]
    #[educe(Default = defaults::editor::draft_path())]
    pub draft_path: Option<PathBuf>,

    /// Folder new drafts start in.
    #[serde(default = "defaults::editor::default_folder")]
    #[educe(Default = defaults::editor::default_folder())]
    pub default_folder: String,
}
