use fltk::{
    app::{self, Sender},
    enums::{Align, FrameType},
    frame::Frame,
    prelude::*,
};

use crate::app::domain::messages::Message;
use super::theme::Palette;

const TOAST_SECS: f64 = 1.5;
const TOAST_HEIGHT: i32 = 32;
const TOAST_MIN_WIDTH: i32 = 140;
/// Gap between the toast and the bottom of the area it floats over.
const TOAST_OFFSET: i32 = 16;

/// Small toast floating above the editor, bottom centre.
pub struct Snackbar {
    frame: Frame,
    generation: u64,
}

impl Snackbar {
    /// Build inside the currently open group (the main window, after the
    /// content so it draws on top).
    pub fn new() -> Self {
        let mut frame = Frame::new(0, 0, TOAST_MIN_WIDTH, TOAST_HEIGHT, None);
        frame.set_frame(FrameType::RFlatBox);
        frame.set_align(Align::Center | Align::Inside);
        frame.set_label_size(13);
        frame.hide();
        Self { frame, generation: 0 }
    }

    pub fn show(&mut self, text: &str, sender: &Sender<Message>) {
        self.generation += 1;
        self.frame.set_label(text);
        let (label_w, _) = self.frame.measure_label();
        self.frame.set_size((label_w + 40).max(TOAST_MIN_WIDTH), TOAST_HEIGHT);
        self.frame.show();
        if let Some(mut parent) = self.frame.parent() {
            self.place(parent.w(), parent.h() - super::status_bar::STATUS_BAR_HEIGHT);
            parent.redraw();
        }

        let s = *sender;
        let generation = self.generation;
        app::add_timeout3(TOAST_SECS, move |_| {
            s.send(Message::ToastExpired(generation));
        });
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation && self.frame.visible() {
            self.frame.hide();
            if let Some(mut parent) = self.frame.parent() {
                parent.redraw();
            }
        }
    }

    /// Centre horizontally in `area_w`, just above `area_bottom`.
    pub fn place(&mut self, area_w: i32, area_bottom: i32) {
        let w = self.frame.w();
        self.frame
            .resize((area_w - w) / 2, area_bottom - TOAST_HEIGHT - TOAST_OFFSET, w, TOAST_HEIGHT);
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.frame.set_color(palette.toast_bg);
        self.frame.set_label_color(palette.toast_fg);
    }
}
