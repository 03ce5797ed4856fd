use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::{AppSettings, ThemeName};

pub const WORD_WRAP_ITEM: &str = "View/Word Wrap";
pub const SIDEBAR_ITEM: &str = "View/Sidebar";
pub const LIGHT_THEME_ITEM: &str = "View/Theme/Light";
pub const DARK_THEME_ITEM: &str = "View/Theme/Dark";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Clear Recent Files", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ClearRecent) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(WORD_WRAP_ITEM, Shortcut::Alt | 'z', ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    let sb_flag = if settings.sidebar_visible { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(SIDEBAR_ITEM, Shortcut::Ctrl | 'b', sb_flag, { let s = *s; move |_| s.send(Message::ToggleSidebar) });
    let (light_flag, dark_flag) = match settings.theme {
        ThemeName::Light => (MenuFlag::Radio | MenuFlag::Value, MenuFlag::Radio),
        ThemeName::Dark => (MenuFlag::Radio, MenuFlag::Radio | MenuFlag::Value),
    };
    menu.add(LIGHT_THEME_ITEM, Shortcut::None, light_flag, { let s = *s; move |_| s.send(Message::ApplyTheme(ThemeName::Light)) });
    menu.add(DARK_THEME_ITEM, Shortcut::None, dark_flag, { let s = *s; move |_| s.send(Message::ApplyTheme(ThemeName::Dark)) });

    // Help
    menu.add("Help/About ScribeOne", Shortcut::None | Key::F1, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Sync a toggle/radio item with state changed from elsewhere (toolbar, edge reveal).
pub fn set_menu_checked(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0
        && let Some(mut item) = menu.at(idx)
    {
        if checked {
            item.set();
        } else {
            item.clear();
        }
    }
}
