use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use fltk::{app::Sender, dialog};

use crate::app::controllers::document::{Notifier, Prompter, UnsavedChoice};
use crate::app::domain::messages::Message;
use crate::app::infrastructure::error::AppError;
use crate::app::services::text_ops::extract_filename;
use super::dialogs::{encoding::show_encoding_dialog, unsaved::show_unsaved_dialog};
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::snackbar::Snackbar;
use super::status_bar::StatusBar;

/// Real dialogs and feedback widgets behind the document flows.
pub struct FltkShell {
    pub status_bar: StatusBar,
    pub snackbar: Snackbar,
    sender: Sender<Message>,
    /// Name used by the unsaved-changes prompt.
    document_name: String,
}

impl FltkShell {
    pub fn new(status_bar: StatusBar, snackbar: Snackbar, sender: Sender<Message>) -> Self {
        Self {
            status_bar,
            snackbar,
            sender,
            document_name: "untitled".to_string(),
        }
    }

    pub fn set_document_name(&mut self, name: &str) {
        self.document_name = name.to_string();
    }
}

impl Prompter for FltkShell {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        native_open_dialog()
    }

    fn pick_save_path(&mut self, suggested: &Path) -> Option<PathBuf> {
        native_save_dialog(suggested)
    }

    fn confirm_unsaved(&mut self) -> UnsavedChoice {
        show_unsaved_dialog(&self.document_name)
    }

    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        let message = format!("\"{}\" already exists.\nDo you want to replace it?", extract_filename(path));
        matches!(dialog::choice2_default(&message, "Cancel", "Replace", ""), Some(1))
    }

    fn choose_encoding(&mut self, path: &Path, error: &AppError) -> Option<&'static Encoding> {
        log::debug!("Asking for an encoding after: {}", error);
        show_encoding_dialog(path)
    }
}

impl Notifier for FltkShell {
    fn notify(&mut self, message: &str) {
        self.snackbar.show(message, &self.sender);
    }

    fn report_error(&mut self, message: &str) {
        self.status_bar.show_transient(message, &self.sender);
    }
}
