use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    browser::{BrowserType, FileBrowser, HoldBrowser},
    enums::{Event, FrameType},
    group::{Group, Tabs},
    prelude::*,
};

use crate::app::controllers::sidebar::SidebarFrame;
use crate::app::domain::messages::Message;
use crate::app::services::file_filters::EXPLORER_PATTERN;
use super::theme::{blend, Palette};

const TAB_HEADER_HEIGHT: i32 = 25;

/// Overlay panel with an Explorer tab (`*.txt` files under the home
/// directory) and a Recent tab. Double-clicking a file sends `OpenPath`.
pub struct SidebarPanel {
    group: Group,
    tabs: Tabs,
    explorer: FileBrowser,
    recent: HoldBrowser,
    recent_paths: Rc<RefCell<Vec<String>>>,
}

impl SidebarPanel {
    /// Build inside the currently open group. Starts hidden; the animator
    /// decides geometry through [`SidebarPanel::apply_frame`].
    pub fn new(sender: &Sender<Message>) -> Self {
        let (w, h) = (260, 400);
        let mut group = Group::new(0, 0, w, h, None);
        group.set_frame(FrameType::FlatBox);

        let mut tabs = Tabs::new(0, 0, w, h, None);

        let explorer_tab = Group::new(0, TAB_HEADER_HEIGHT, w, h - TAB_HEADER_HEIGHT, "Explorer");
        let mut explorer = FileBrowser::new(0, TAB_HEADER_HEIGHT, w, h - TAB_HEADER_HEIGHT, None);
        explorer.set_type(BrowserType::Hold);
        explorer.set_frame(FrameType::FlatBox);
        explorer.set_filter(EXPLORER_PATTERN);
        explorer_tab.end();

        let recent_tab = Group::new(0, TAB_HEADER_HEIGHT, w, h - TAB_HEADER_HEIGHT, "Recent");
        let mut recent = HoldBrowser::new(0, TAB_HEADER_HEIGHT, w, h - TAB_HEADER_HEIGHT, None);
        recent.set_frame(FrameType::FlatBox);
        recent_tab.end();

        tabs.end();
        tabs.resizable(&explorer_tab);
        group.end();
        group.resizable(&tabs);
        group.hide();

        let root = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let current_dir = Rc::new(RefCell::new(root));
        if let Err(e) = explorer.load(&*current_dir.borrow()) {
            log::warn!("Failed to list {}: {:?}", current_dir.borrow().display(), e);
        }

        explorer.handle({
            let s = *sender;
            let current_dir = current_dir.clone();
            move |b, event| {
                if event != Event::Released || !app::event_clicks() {
                    return false;
                }
                let Some(name) = b.text(b.value()) else {
                    return false;
                };

                let target = {
                    let dir = current_dir.borrow();
                    if name == "../" {
                        dir.parent().map(|p| p.to_path_buf())
                    } else {
                        Some(dir.join(name.trim_end_matches('/')))
                    }
                };
                match target {
                    Some(dir) if dir.is_dir() => {
                        match b.load(&dir) {
                            Ok(()) => *current_dir.borrow_mut() = dir,
                            Err(e) => log::warn!("Failed to list {}: {:?}", dir.display(), e),
                        }
                        true
                    }
                    Some(file) => {
                        s.send(Message::OpenPath(file));
                        true
                    }
                    None => false,
                }
            }
        });

        let recent_paths: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        recent.handle({
            let s = *sender;
            let recent_paths = recent_paths.clone();
            move |b, event| {
                if event != Event::Released || !app::event_clicks() || b.value() < 1 {
                    return false;
                }
                // browser lines are 1-based
                let index = (b.value() - 1) as usize;
                match recent_paths.borrow().get(index) {
                    Some(path) => {
                        s.send(Message::OpenPath(PathBuf::from(path)));
                        true
                    }
                    None => false,
                }
            }
        });

        Self {
            group,
            tabs,
            explorer,
            recent,
            recent_paths,
        }
    }

    pub fn set_recent(&mut self, paths: &[String]) {
        self.recent.clear();
        for path in paths {
            // '@' starts a format code in browser lines
            self.recent.add(&path.replace('@', "@@"));
        }
        *self.recent_paths.borrow_mut() = paths.to_vec();
        self.recent.redraw();
    }

    /// Show the panel at `frame`, spanning `top..top + height` of the window.
    pub fn apply_frame(&mut self, frame: SidebarFrame, top: i32, height: i32, palette: &Palette) {
        if frame.width <= 0 || height <= 0 {
            self.group.hide();
            return;
        }

        self.group.resize(0, top, frame.width, height);

        // No real alpha in FLTK; fade by mixing towards the window background
        let bg = blend(palette.window_bg, palette.sidebar_bg, frame.opacity);
        let fg = blend(palette.window_bg, palette.sidebar_fg, frame.opacity);
        self.group.set_color(bg);
        self.tabs.set_color(bg);
        self.tabs.set_selection_color(bg);
        self.tabs.set_label_color(fg);
        for child in 0..self.tabs.children() {
            if let Some(mut tab) = self.tabs.child(child) {
                tab.set_color(bg);
                tab.set_selection_color(bg);
                tab.set_label_color(fg);
            }
        }
        self.explorer.set_color(bg);
        self.explorer.set_text_color(fg);
        self.explorer.set_selection_color(palette.selection);
        self.recent.set_color(bg);
        self.recent.set_text_color(fg);
        self.recent.set_selection_color(palette.selection);

        self.group.show();
        self.group.redraw();
    }
}
