use fltk::{
    app::{self, Sender},
    enums::{Event, Font},
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use super::menu::build_menu;
use super::sidebar_panel::SidebarPanel;
use super::snackbar::Snackbar;
use super::status_bar::{StatusBar, STATUS_BAR_HEIGHT};
use super::toolbar::{Toolbar, TOOLBAR_HEIGHT};

pub const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: StatusBar,
    pub sidebar: SidebarPanel,
    pub snackbar: Snackbar,
}

/// Top edge of the area the sidebar overlays (below menu and toolbar).
pub fn content_top() -> i32 {
    MENU_HEIGHT + TOOLBAR_HEIGHT
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let (w, h) = (900, 640);
    let mut wind = Window::new(100, 100, w, h, "untitled - ScribeOne");
    wind.set_xclass("ScribeOne");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);
    build_menu(&mut menu, sender, settings);

    let toolbar = Toolbar::new(sender, settings);
    flex.fixed(&toolbar.row, TOOLBAR_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(14);
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    let status_bar = StatusBar::new();
    flex.fixed(&status_bar.row, STATUS_BAR_HEIGHT);

    flex.end();

    // Overlays: added after the content so they draw on top of it
    let sidebar = SidebarPanel::new(sender);
    let snackbar = Snackbar::new();

    wind.end();
    wind.resizable(&flex);
    wind.size_range(480, 320, 0, 0);

    wire_events(&mut wind, &mut text_editor, &buffer, sender);

    MainWidgets {
        wind,
        menu,
        toolbar,
        text_editor,
        buffer,
        status_bar,
        sidebar,
        snackbar,
    }
}

fn wire_events(wind: &mut Window, editor: &mut TextEditor, buffer: &TextBuffer, sender: &Sender<Message>) {
    // Close button goes through the unsaved-changes check; Escape doesn't close
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    wind.resize_callback({
        let s = *sender;
        move |_, _, _, _, _| s.send(Message::WindowResized)
    });

    wind.handle({
        let s = *sender;
        move |_, event| {
            if event == Event::Move {
                s.send(Message::PointerMoved(app::event_x()));
            }
            false
        }
    });

    let mut buffer = buffer.clone();
    buffer.add_modify_callback({
        let s = *sender;
        move |_pos, _inserted, _deleted, _restyled, _deleted_text| {
            s.send(Message::BufferModified);
        }
    });

    editor.handle({
        let s = *sender;
        move |_, event| {
            if matches!(event, Event::KeyUp | Event::Released) {
                s.send(Message::CursorMoved);
            }
            false
        }
    });
}
