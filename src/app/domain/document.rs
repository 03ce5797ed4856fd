use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_io::{read_text, write_text};
use crate::app::services::text_ops::extract_filename;

/// Whether the document needs a confirmation before it can be thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Clean,
    Dirty,
}

/// The single text document being edited.
///
/// `is_dirty()` is false right after a successful load or save and becomes
/// true on any other text mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
    dirty: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> DocumentState {
        if self.dirty {
            DocumentState::Dirty
        } else {
            DocumentState::Clean
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replace the text. Always marks the document dirty, even when the new
    /// text is identical.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Name shown in the window title.
    pub fn display_name(&self) -> String {
        match self.path {
            Some(ref path) => extract_filename(path),
            None => "untitled".to_string(),
        }
    }

    /// Load `path` decoded as `encoding`. Leaves the document untouched on failure.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>, encoding: &'static Encoding) -> Result<()> {
        let path = path.as_ref();
        let text = read_text(path, encoding)?;
        self.text = text;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Save to `path`, or to the current path when `None`.
    ///
    /// Line endings are normalized to `\n` on disk; the in-memory text is kept
    /// as is. Fails with [`AppError::NoTargetPath`] for an untitled document
    /// saved without a path.
    pub fn save_to_path(&mut self, path: Option<&Path>, encoding: &'static Encoding) -> Result<()> {
        let target = match path.or(self.path.as_deref()) {
            Some(target) => target.to_path_buf(),
            None => return Err(AppError::NoTargetPath),
        };
        write_text(&target, &self.text, encoding)?;
        self.path = Some(target);
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::file_io::DEFAULT_ENCODING;
    use encoding_rs::GBK;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new();
        assert!(doc.path().is_none());
        assert_eq!(doc.text(), "");
        assert_eq!(doc.state(), DocumentState::Clean);
        assert_eq!(doc.display_name(), "untitled");
    }

    #[test]
    fn test_set_text_always_dirties() {
        let mut doc = Document::new();
        doc.set_text("");
        assert!(doc.is_dirty());

        let dir = tempdir().unwrap();
        let path = dir.path().join("same.txt");
        fs::write(&path, "same").unwrap();
        doc.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        assert!(!doc.is_dirty());
        doc.set_text("same");
        assert_eq!(doc.state(), DocumentState::Dirty);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.txt");
        let text = "line one\n\tindented ünïcödé\n\nlast line without newline";

        let mut doc = Document::new();
        doc.set_text(text);
        doc.save_to_path(Some(&path), DEFAULT_ENCODING).unwrap();
        assert!(!doc.is_dirty());
        assert_eq!(doc.path(), Some(path.as_path()));

        let mut reloaded = Document::new();
        reloaded.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        assert_eq!(reloaded.text(), text);
        assert!(!reloaded.is_dirty());
        assert_eq!(reloaded.display_name(), "round.txt");
    }

    #[test]
    fn test_newlines_normalized_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.txt");

        let mut doc = Document::new();
        doc.set_text("a\r\nb\rc\n");
        doc.save_to_path(Some(&path), DEFAULT_ENCODING).unwrap();
        assert_eq!(doc.text(), "a\r\nb\rc\n");

        let mut reloaded = Document::new();
        reloaded.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        assert_eq!(reloaded.text(), "a\nb\nc\n");
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("windows.txt");
        fs::write(&path, b"a\r\nb\rc\n").unwrap();

        let mut doc = Document::new();
        doc.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        assert_eq!(doc.text(), "a\nb\nc\n");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_mark_dirty_keeps_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("touched.txt");
        fs::write(&path, "unchanged").unwrap();

        let mut doc = Document::new();
        doc.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        doc.mark_dirty();
        assert_eq!(doc.state(), DocumentState::Dirty);
        assert_eq!(doc.text(), "unchanged");

        doc.save_to_path(None, DEFAULT_ENCODING).unwrap();
        assert_eq!(doc.state(), DocumentState::Clean);
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::new();
        doc.set_text("orphan");
        let err = doc.save_to_path(None, DEFAULT_ENCODING).unwrap_err();
        assert!(matches!(err, AppError::NoTargetPath));
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_save_uses_current_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("current.txt");
        fs::write(&path, "old").unwrap();

        let mut doc = Document::new();
        doc.load_from_path(&path, DEFAULT_ENCODING).unwrap();
        doc.set_text("new");
        doc.save_to_path(None, DEFAULT_ENCODING).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_failed_load_leaves_document_unchanged() {
        let dir = tempdir().unwrap();
        let gbk = dir.path().join("gbk.txt");
        fs::write(&gbk, [0xD6, 0xD0, 0xCE, 0xC4]).unwrap();

        let mut doc = Document::new();
        doc.set_text("keep me");
        let before = doc.clone();

        let err = doc.load_from_path(&gbk, DEFAULT_ENCODING).unwrap_err();
        assert!(err.is_decode());
        assert_eq!(doc, before);

        let err = doc
            .load_from_path(dir.path().join("missing.txt"), DEFAULT_ENCODING)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(doc, before);

        doc.load_from_path(&gbk, GBK).unwrap();
        assert_eq!(doc.text(), "中文");
    }

    #[test]
    fn test_failed_save_keeps_dirty_and_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();

        let mut doc = Document::new();
        doc.set_text("content");
        let result = doc.save_to_path(Some(&blocker.join("child.txt")), DEFAULT_ENCODING);
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(doc.is_dirty());
        assert!(doc.path().is_none());
    }
}
