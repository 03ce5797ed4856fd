use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{app, prelude::*};

use scribe_one::app::domain::messages::Message;
use scribe_one::app::domain::settings::AppSettings;
use scribe_one::app::state::AppState;
use scribe_one::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings_path = AppSettings::get_config_path();
    let settings = AppSettings::load_from(&settings_path);
    log::info!("Using settings at {}", settings_path.display());

    let mut widgets = build_main_window(&sender, &settings);
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, Rc::new(RefCell::new(settings)), settings_path);

    // ScribeOne [FILE]
    if let Some(arg) = std::env::args_os().nth(1) {
        state.open_path(&PathBuf::from(arg));
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::OpenPath(path) => state.open_path(&path),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.request_close() {
                        app.quit();
                    }
                }
                Message::ClearRecent => state.clear_recent(),

                Message::BufferModified => state.buffer_modified(),
                Message::CursorMoved => state.update_cursor_position(),

                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleSidebar => state.toggle_sidebar(),
                Message::SidebarTick => state.sidebar_tick(),
                Message::PointerMoved(x) => state.pointer_moved(x),
                Message::WindowResized => state.layout_overlays(),
                Message::ApplyTheme(theme) => state.set_theme(theme),

                Message::StatusExpired(generation) => state.status_expired(generation),
                Message::ToastExpired(generation) => state.toast_expired(generation),

                Message::ShowAbout => state.show_about(),
            }
        }
    }
}
