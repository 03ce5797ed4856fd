use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use encoding_rs::Encoding;
use fltk::{
    button::{Button, ReturnButton},
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    menu::Choice,
    prelude::*,
    window::Window,
};

use crate::app::services::file_io::{encoding_for_label, COMMON_ENCODINGS};
use crate::app::services::text_ops::extract_filename;
use super::run_dialog;

/// Ask which encoding to retry `path` with. `None` when cancelled.
pub fn show_encoding_dialog(path: &Path) -> Option<&'static Encoding> {
    let mut dialog = Window::default()
        .with_size(420, 150)
        .with_label("Choose Encoding")
        .center_screen();
    dialog.make_modal(true);

    let mut column = Flex::new(15, 15, 390, 120, None);
    column.set_type(FlexType::Column);
    column.set_spacing(10);

    let mut message = Frame::default();
    message.set_label(&format!(
        "\"{}\" could not be read as UTF-8.\nPick the encoding to try instead:",
        extract_filename(path)
    ));
    message.set_align(Align::Left | Align::Inside);

    let mut choice = Choice::default();
    for label in COMMON_ENCODINGS {
        choice.add_choice(label);
    }
    // utf-8 just failed; start on the next entry
    choice.set_value(1);
    column.fixed(&choice, 28);

    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
    buttons.set_spacing(10);
    Frame::default();
    let mut cancel = Button::default().with_label("Cancel");
    let mut ok = ReturnButton::default().with_label("Retry");
    buttons.fixed(&cancel, 90);
    buttons.fixed(&ok, 90);
    buttons.end();
    column.fixed(&buttons, 32);

    column.end();
    dialog.end();

    let picked: Rc<RefCell<Option<&'static Encoding>>> = Rc::new(RefCell::new(None));

    cancel.set_callback({
        let mut d = dialog.clone();
        move |_| d.hide()
    });
    ok.set_callback({
        let picked = picked.clone();
        let choice = choice.clone();
        let mut d = dialog.clone();
        move |_| {
            let label = choice.choice().unwrap_or_default();
            match encoding_for_label(&label) {
                Ok(encoding) => *picked.borrow_mut() = Some(encoding),
                Err(e) => log::error!("{}", e),
            }
            d.hide();
        }
    });

    dialog.show();
    run_dialog(&dialog);
    picked.take()
}
