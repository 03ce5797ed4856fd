use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    button::{Button, ReturnButton},
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use crate::app::controllers::document::UnsavedChoice;
use super::run_dialog;

/// Ask what to do with unsaved changes to `name`. Save is the default
/// button; closing the dialog (X or Escape) answers Cancel.
pub fn show_unsaved_dialog(name: &str) -> UnsavedChoice {
    let mut dialog = Window::default()
        .with_size(400, 130)
        .with_label("Unsaved Changes")
        .center_screen();
    dialog.make_modal(true);

    let mut column = Flex::new(15, 15, 370, 100, None);
    column.set_type(FlexType::Column);
    column.set_spacing(15);

    let mut message = Frame::default();
    message.set_label(&format!("\"{}\" has unsaved changes.\nSave them before continuing?", name));
    message.set_align(Align::Left | Align::Inside);

    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
    buttons.set_spacing(10);
    Frame::default();
    let mut cancel = Button::default().with_label("Cancel");
    let mut discard = Button::default().with_label("Discard");
    let mut save = ReturnButton::default().with_label("Save");
    buttons.fixed(&cancel, 90);
    buttons.fixed(&discard, 90);
    buttons.fixed(&save, 90);
    buttons.end();
    column.fixed(&buttons, 32);

    column.end();
    dialog.end();

    let choice = Rc::new(Cell::new(UnsavedChoice::Cancel));
    cancel.set_callback(answer(&choice, &dialog, UnsavedChoice::Cancel));
    discard.set_callback(answer(&choice, &dialog, UnsavedChoice::Discard));
    save.set_callback(answer(&choice, &dialog, UnsavedChoice::Save));

    dialog.show();
    let _ = save.take_focus();
    run_dialog(&dialog);
    choice.get()
}

fn answer<W: 'static>(
    choice: &Rc<Cell<UnsavedChoice>>,
    dialog: &Window,
    value: UnsavedChoice,
) -> impl FnMut(&mut W) + 'static {
    let choice = choice.clone();
    let mut dialog = dialog.clone();
    move |_| {
        choice.set(value);
        dialog.hide();
    }
}
