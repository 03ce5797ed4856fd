use std::path::PathBuf;

use super::settings::ThemeName;

/// All messages that can be sent through the FLTK channel.
/// Each menu/toolbar callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    OpenPath(PathBuf),
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,
    ClearRecent,

    // Editor
    BufferModified,
    CursorMoved,

    // View
    ToggleWordWrap,
    ToggleSidebar,
    SidebarTick,
    PointerMoved(i32),
    WindowResized,
    ApplyTheme(ThemeName),

    // Timers (payload is the generation that scheduled them)
    StatusExpired(u64),
    ToastExpired(u64),

    // Help
    ShowAbout,
}
