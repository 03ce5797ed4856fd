use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::services::file_filters::get_text_files_filter;

pub fn native_open_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    nfc.set_filter(&get_text_files_filter());
    nfc.show(); // blocks until close
    chosen(&nfc)
}

/// `suggested` may be a full path (preselects its directory) or a bare file name.
pub fn native_save_dialog(suggested: &Path) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save As");
    nfc.set_filter(&get_text_files_filter());
    if let Some(dir) = suggested.parent()
        && !dir.as_os_str().is_empty()
        && let Err(e) = nfc.set_directory(&dir)
    {
        log::debug!("Could not preselect {}: {:?}", dir.display(), e);
    }
    if let Some(name) = suggested.file_name() {
        nfc.set_preset_file(&name.to_string_lossy());
    }
    nfc.show();
    chosen(&nfc)
}

fn chosen(nfc: &NativeFileChooser) -> Option<PathBuf> {
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
