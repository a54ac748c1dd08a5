//! Uploaded document metadata.
//!
//! # Responsibility
//! - Describe one uploaded file and where its bytes live on disk.
//! - Normalize client-supplied filenames before they reach the filesystem.
//!
//! # Invariants
//! - `id` exists before the file is written; the on-disk name is
//!   `{id}_{filename}`.
//! - `filename` never contains path separators or control characters.

use super::RecordId;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static UNSAFE_FILENAME_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1f\x7f]+").expect("valid control char regex"));

/// Metadata recorded for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub filename: String,
    /// Display title; uploads use the filename.
    pub title: String,
    /// Text after the last `.` of the filename, or the whole name without one.
    pub file_type: String,
    /// Size in bytes as read back from disk.
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Name of the stored file inside the upload directory.
    pub fn stored_file_name(&self) -> String {
        stored_file_name(&self.id, &self.filename)
    }
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

/// Collision-resistant on-disk name for an upload.
pub fn stored_file_name(id: &str, filename: &str) -> String {
    format!("{id}_{filename}")
}

/// Derives the file type label from a filename.
pub fn file_type_of(filename: &str) -> String {
    filename.rsplit('.').next().unwrap_or_default().to_string()
}

/// Reduces a client filename to a bare, printable file name.
///
/// Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let last_component = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned = UNSAFE_FILENAME_CHARS_RE.replace_all(last_component, "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{file_type_of, sanitize_filename, stored_file_name};

    #[test]
    fn file_type_uses_last_extension() {
        assert_eq!(file_type_of("notes.txt"), "txt");
        assert_eq!(file_type_of("archive.tar.gz"), "gz");
        assert_eq!(file_type_of("README"), "README");
        assert_eq!(file_type_of("trailing."), "");
    }

    #[test]
    fn sanitize_strips_directories_and_control_chars() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename(r"C:\Users\me\lecture 1.pdf").as_deref(),
            Some("lecture 1.pdf")
        );
        assert_eq!(sanitize_filename("a\nb.txt").as_deref(), Some("ab.txt"));
    }

    #[test]
    fn sanitize_rejects_empty_names() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("dir/"), None);
        assert_eq!(sanitize_filename(".."), None);
    }

    #[test]
    fn stored_name_prefixes_id() {
        assert_eq!(stored_file_name("abc", "notes.txt"), "abc_notes.txt");
    }
}
