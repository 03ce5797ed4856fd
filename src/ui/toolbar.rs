use fltk::{
    app::Sender,
    button::{Button, ToggleButton},
    enums::FrameType,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use super::theme::Palette;

pub const TOOLBAR_HEIGHT: i32 = 34;

pub struct Toolbar {
    pub row: Flex,
    buttons: Vec<Button>,
    wrap: ToggleButton,
    sidebar: ToggleButton,
}

impl Toolbar {
    /// Build inside the currently open group.
    pub fn new(sender: &Sender<Message>, settings: &AppSettings) -> Self {
        let mut row = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
        row.set_type(FlexType::Row);
        row.set_margins(6, 4, 6, 4);
        row.set_spacing(4);
        row.set_frame(FrameType::FlatBox);

        let mut buttons = Vec::new();
        for (label, tooltip, message) in [
            ("New", "New document (Ctrl+N)", Message::FileNew),
            ("Open", "Open a file (Ctrl+O)", Message::FileOpen),
            ("Save", "Save (Ctrl+S)", Message::FileSave),
            ("Save As", "Save under a new name (Ctrl+Shift+S)", Message::FileSaveAs),
        ] {
            let mut button = Button::default().with_label(label);
            button.set_tooltip(tooltip);
            button.set_frame(FrameType::FlatBox);
            button.clear_visible_focus();
            let s = *sender;
            button.set_callback(move |_| s.send(message.clone()));
            row.fixed(&button, 72);
            buttons.push(button);
        }

        // spacer
        fltk::frame::Frame::default();

        let mut wrap = ToggleButton::default().with_label("Wrap");
        wrap.set_tooltip("Word wrap (Alt+Z)");
        wrap.set_value(settings.word_wrap_enabled);
        wrap.clear_visible_focus();
        wrap.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleWordWrap)
        });
        row.fixed(&wrap, 64);

        let mut sidebar = ToggleButton::default().with_label("Sidebar");
        sidebar.set_tooltip("Show or hide the sidebar (Ctrl+B)");
        sidebar.set_value(settings.sidebar_visible);
        sidebar.clear_visible_focus();
        sidebar.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleSidebar)
        });
        row.fixed(&sidebar, 72);

        row.end();

        Self {
            row,
            buttons,
            wrap,
            sidebar,
        }
    }

    pub fn set_wrap(&mut self, enabled: bool) {
        self.wrap.set_value(enabled);
    }

    pub fn set_sidebar(&mut self, visible: bool) {
        self.sidebar.set_value(visible);
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.row.set_color(palette.menu_bg);
        for button in &mut self.buttons {
            button.set_color(palette.menu_bg);
            button.set_selection_color(palette.menu_hover);
            button.set_label_color(palette.menu_fg);
        }
        for toggle in [&mut self.wrap, &mut self.sidebar] {
            toggle.set_color(palette.menu_bg);
            toggle.set_selection_color(palette.menu_hover);
            toggle.set_label_color(palette.menu_fg);
        }
        self.row.redraw();
    }
}
