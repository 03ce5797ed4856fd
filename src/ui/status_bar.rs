use fltk::{
    app::{self, Sender},
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::messages::Message;
use super::theme::Palette;

pub const STATUS_BAR_HEIGHT: i32 = 24;

/// Seconds an error message stays before the resting message returns.
const TRANSIENT_SECS: f64 = 5.0;

/// Bottom bar: document message on the left, cursor position and wrap state on the right.
pub struct StatusBar {
    pub row: Flex,
    message: Frame,
    position: Frame,
    wrap: Frame,
    resting: String,
    transient: bool,
    generation: u64,
}

impl StatusBar {
    /// Build inside the currently open group.
    pub fn new() -> Self {
        let mut row = Flex::new(0, 0, 0, STATUS_BAR_HEIGHT, None);
        row.set_type(FlexType::Row);
        row.set_margins(8, 0, 8, 0);
        row.set_frame(FrameType::FlatBox);

        let mut message = Frame::default();
        message.set_align(Align::Left | Align::Inside | Align::Clip);
        message.set_label_size(12);

        let mut position = Frame::default().with_label("Ln 1, Col 1");
        position.set_label_size(12);
        row.fixed(&position, 110);

        let mut wrap = Frame::default();
        wrap.set_label_size(12);
        row.fixed(&wrap, 80);

        row.end();

        Self {
            row,
            message,
            position,
            wrap,
            resting: String::new(),
            transient: false,
            generation: 0,
        }
    }

    /// Message shown whenever no transient message is up.
    pub fn set_resting_message(&mut self, text: &str) {
        self.resting = text.to_string();
        if !self.transient {
            self.message.set_label(&self.resting);
        }
    }

    pub fn show_transient(&mut self, text: &str, sender: &Sender<Message>) {
        self.generation += 1;
        self.transient = true;
        self.message.set_label(text);

        let s = *sender;
        let generation = self.generation;
        app::add_timeout3(TRANSIENT_SECS, move |_| {
            s.send(Message::StatusExpired(generation));
        });
    }

    /// Drop the transient message if no newer one replaced it.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation && self.transient {
            self.transient = false;
            self.message.set_label(&self.resting);
        }
    }

    pub fn set_position(&mut self, line: usize, col: usize) {
        self.position.set_label(&format!("Ln {}, Col {}", line, col));
    }

    pub fn set_wrap(&mut self, enabled: bool) {
        self.wrap.set_label(if enabled { "Wrap: On" } else { "Wrap: Off" });
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.row.set_color(palette.bar_bg);
        for frame in [&mut self.message, &mut self.position, &mut self.wrap] {
            frame.set_label_color(palette.bar_fg);
        }
        self.row.redraw();
    }
}
