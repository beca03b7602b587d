//! The editor: local draft persistence plus markdown import/export.

pub mod drafts;
pub mod export;
pub mod import;
