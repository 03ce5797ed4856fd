//! Document lifecycle: open, save, save as, new and close.
//!
//! Everything that needs the user (file pickers, confirmations, the encoding
//! prompt) or shows feedback goes through [`Prompter`] and [`Notifier`], so
//! these flows run without a display.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::app::domain::document::{Document, DocumentState};
use crate::app::infrastructure::error::AppError;
use crate::app::services::file_filters::UNTITLED_FILE_NAME;
use crate::app::services::file_io::DEFAULT_ENCODING;
use crate::app::services::recent_files::RecentFiles;

/// Answer to "the document has unsaved changes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// Questions the flows need answered by the user. Every call blocks until answered.
pub trait Prompter {
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// `suggested` is the current path, or a bare file name for untitled documents.
    fn pick_save_path(&mut self, suggested: &Path) -> Option<PathBuf>;

    /// Save has default focus. Dismissing the dialog counts as `Cancel`.
    fn confirm_unsaved(&mut self) -> UnsavedChoice;

    fn confirm_overwrite(&mut self, path: &Path) -> bool;

    /// Offer another encoding after `error` prevented `path` from decoding.
    fn choose_encoding(&mut self, path: &Path, error: &AppError) -> Option<&'static Encoding>;
}

/// Transient feedback to the user.
pub trait Notifier {
    /// Short-lived toast for successful actions.
    fn notify(&mut self, message: &str);

    /// Transient status message for failures.
    fn report_error(&mut self, message: &str);
}

pub struct DocumentController {
    document: Document,
    recent: RecentFiles,
}

impl DocumentController {
    pub fn new(recent: RecentFiles) -> Self {
        Self {
            document: Document::new(),
            recent,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn recent(&self) -> &RecentFiles {
        &self.recent
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Sync the document with the editor contents. Returns true when the
    /// text actually changed (and the document is therefore dirty).
    pub fn editor_changed(&mut self, current: &str) -> bool {
        if current == self.document.text() {
            return false;
        }
        self.document.set_text(current);
        true
    }

    /// Shared gate for anything that throws the current document away.
    /// Returns true when it is fine to proceed.
    pub fn confirm_discard<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        match self.document.state() {
            DocumentState::Clean => true,
            DocumentState::Dirty => match shell.confirm_unsaved() {
                UnsavedChoice::Save => self.ensure_saved(shell),
                UnsavedChoice::Discard => {
                    log::info!("Discarding unsaved changes to {}", self.document.display_name());
                    true
                }
                UnsavedChoice::Cancel => false,
            },
        }
    }

    /// Replace the document with an empty untitled one.
    pub fn new_document<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        if !self.confirm_discard(shell) {
            return false;
        }
        self.document = Document::new();
        true
    }

    /// Whether the window may close.
    pub fn request_close<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        self.confirm_discard(shell)
    }

    pub fn open<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        match shell.pick_open_path() {
            Some(path) => self.open_path(&path, shell),
            None => false,
        }
    }

    /// Load `path`, offering one retry with a user-chosen encoding if it
    /// doesn't decode as UTF-8. The current document is untouched on failure.
    pub fn open_path<S>(&mut self, path: &Path, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        if !self.confirm_discard(shell) {
            return false;
        }

        let mut candidate = Document::new();
        let loaded = match candidate.load_from_path(path, DEFAULT_ENCODING) {
            Ok(()) => true,
            Err(e) if e.is_decode() => {
                log::warn!("{}", e);
                match shell.choose_encoding(path, &e) {
                    Some(encoding) => match candidate.load_from_path(path, encoding) {
                        Ok(()) => true,
                        Err(e) => {
                            log::error!("Failed to open {} as {}: {}", path.display(), encoding.name(), e);
                            false
                        }
                    },
                    None => false,
                }
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                false
            }
        };

        if !loaded {
            shell.report_error(&format!("Failed to open: {}", path.display()));
            return false;
        }

        // The editor widget cuts text at the first NUL
        if candidate.text().contains('\0') {
            log::error!("Refusing to open {}: contains NUL characters", path.display());
            shell.report_error(&format!("Failed to open: {} (binary content)", path.display()));
            return false;
        }

        self.document = candidate;
        log::info!("Opened {}", path.display());
        self.recent.add(&path.to_string_lossy());
        shell.notify("Opened");
        true
    }

    /// Save to the current path, or ask for one if the document is untitled.
    /// Returns false if nothing was written.
    pub fn ensure_saved<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        match self.document.save_to_path(None, DEFAULT_ENCODING) {
            Ok(()) => {
                log::info!("Saved {}", self.document.display_name());
                shell.notify("Saved");
                true
            }
            Err(AppError::NoTargetPath) => self.save_as(shell),
            Err(e) => {
                let path = self.document.path().map(Path::to_path_buf).unwrap_or_default();
                log::error!("Failed to save {}: {}", path.display(), e);
                shell.report_error(&format!("Failed to save: {}", path.display()));
                false
            }
        }
    }

    pub fn save_as<S>(&mut self, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        let suggested = self
            .document
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(UNTITLED_FILE_NAME));
        match shell.pick_save_path(&suggested) {
            Some(candidate) => self.save_as_path(&candidate, shell),
            None => false,
        }
    }

    /// Save to `candidate`, asking before replacing some other existing file.
    pub fn save_as_path<S>(&mut self, candidate: &Path, shell: &mut S) -> bool
    where
        S: Prompter + Notifier + ?Sized,
    {
        let is_current = self
            .document
            .path()
            .is_some_and(|current| same_file(current, candidate));
        if candidate.exists() && !is_current && !shell.confirm_overwrite(candidate) {
            return false;
        }

        match self.document.save_to_path(Some(candidate), DEFAULT_ENCODING) {
            Ok(()) => {
                log::info!("Saved {}", candidate.display());
                self.recent.add(&candidate.to_string_lossy());
                shell.notify("Saved");
                true
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", candidate.display(), e);
                shell.report_error(&format!("Failed to save: {}", candidate.display()));
                false
            }
        }
    }
}

/// Paths refer to the same file, looking through symlinks and relative
/// components when both paths resolve.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
