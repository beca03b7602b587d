//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Zenith".into()
    }

    pub fn author() -> String {
        "You".into()
    }
}

// ============================================================================
// [editor] Section Defaults
// ============================================================================

pub mod editor {
    use std::path::PathBuf;

    pub fn draft_path() -> Option<PathBuf> {
        None
    }

    pub fn default_folder() -> String {
        "blog".into()
    }
}

// ============================================================================
// [generate] Section Defaults
// ============================================================================

pub mod generate {
    pub fn model() -> String {
        "gemini-2.5-flash".into()
    }

    pub fn api_key_env() -> String {
        "GEMINI_API_KEY".into()
    }

    pub fn endpoint() -> String {
        "https://generativelanguage.googleapis.com/v1beta".into()
    }

    pub fn tone() -> String {
        "professional".into()
    }
}
