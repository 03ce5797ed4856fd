pub mod buffer_text;
pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod shell;
pub mod sidebar_panel;
pub mod snackbar;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
