use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use fltk::{
    app::{self, Sender},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::controllers::document::DocumentController;
use super::controllers::sidebar::{SidebarAnimator, SidebarFrame, SidebarStep};
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, ThemeName};
use super::services::text_ops::cursor_line_col;
use crate::ui::buffer_text::read_buffer_text;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::{content_top, MainWidgets};
use crate::ui::menu::{set_menu_checked, DARK_THEME_ITEM, LIGHT_THEME_ITEM, SIDEBAR_ITEM, WORD_WRAP_ITEM};
use crate::ui::shell::FltkShell;
use crate::ui::sidebar_panel::SidebarPanel;
use crate::ui::status_bar::STATUS_BAR_HEIGHT;
use crate::ui::theme::{apply_theme, Palette};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::toolbar::Toolbar;

/// Seconds between sidebar animation frames.
const SIDEBAR_FRAME_SECS: f64 = 0.016;

/// Main window controller: owns the widgets and the document, and routes
/// every channel message to the flow that handles it.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub sidebar: SidebarPanel,
    pub shell: FltkShell,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    settings_path: PathBuf,
    documents: DocumentController,
    sidebar_animator: SidebarAnimator,
    sidebar_tick_pending: bool,
    last_sidebar_tick: Instant,
    palette: Palette,
    word_wrap: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        settings_path: PathBuf,
    ) -> Self {
        let MainWidgets {
            wind,
            menu,
            toolbar,
            text_editor,
            buffer,
            status_bar,
            mut sidebar,
            snackbar,
        } = widgets;

        let (recent, animator, theme, word_wrap) = {
            let s = settings.borrow();
            (
                s.recent_files.clone(),
                SidebarAnimator::restore(s.sidebar_visible, s.sidebar_width),
                s.theme,
                s.word_wrap_enabled,
            )
        };
        sidebar.set_recent(recent.list());

        let mut state = Self {
            window: wind,
            menu,
            toolbar,
            editor: text_editor,
            buffer,
            sidebar,
            shell: FltkShell::new(status_bar, snackbar, sender),
            sender,
            settings,
            settings_path,
            documents: DocumentController::new(recent),
            sidebar_animator: animator,
            sidebar_tick_pending: false,
            last_sidebar_tick: Instant::now(),
            palette: Palette::for_theme(theme),
            word_wrap,
        };

        state.paint_theme(theme);
        state.shell.status_bar.set_wrap(word_wrap);
        state.layout_overlays();
        state.update_chrome();
        state
    }

    // --- Document flows ---

    pub fn file_new(&mut self) {
        if self.documents.new_document(&mut self.shell) {
            self.load_editor_from_document();
        }
        self.after_document_flow();
    }

    pub fn file_open(&mut self) {
        if self.documents.open(&mut self.shell) {
            self.load_editor_from_document();
        }
        self.after_document_flow();
    }

    pub fn open_path(&mut self, path: &Path) {
        if self.documents.open_path(path, &mut self.shell) {
            self.load_editor_from_document();
        }
        self.after_document_flow();
    }

    pub fn file_save(&mut self) {
        self.documents.ensure_saved(&mut self.shell);
        self.after_document_flow();
    }

    pub fn file_save_as(&mut self) {
        self.documents.save_as(&mut self.shell);
        self.after_document_flow();
    }

    /// Returns true if the window may close. On success the sidebar state is persisted.
    pub fn request_close(&mut self) -> bool {
        let ok = self.documents.request_close(&mut self.shell);
        self.after_document_flow();
        if ok {
            {
                let mut s = self.settings.borrow_mut();
                s.sidebar_visible = self.sidebar_animator.is_visible();
                s.sidebar_width = self.sidebar_animator.target_width();
            }
            self.persist_settings();
            log::info!("Closing");
        }
        ok
    }

    pub fn clear_recent(&mut self) {
        self.documents.clear_recent();
        self.sync_recent();
    }

    /// The buffer changed (typing, paste, or a reload).
    pub fn buffer_modified(&mut self) {
        let text = read_buffer_text(&self.buffer);
        if self.documents.editor_changed(&text) {
            self.update_chrome();
        }
        self.update_cursor_position_with(&text);
    }

    pub fn update_cursor_position(&mut self) {
        let text = read_buffer_text(&self.buffer);
        self.update_cursor_position_with(&text);
    }

    fn update_cursor_position_with(&mut self, text: &str) {
        let pos = self.editor.insert_position().max(0) as usize;
        let (line, col) = cursor_line_col(text, pos);
        self.shell.status_bar.set_position(line, col);
    }

    fn load_editor_from_document(&mut self) {
        self.buffer.set_text(self.documents.document().text());
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn after_document_flow(&mut self) {
        self.update_chrome();
        self.sync_recent();
    }

    /// Window title and resting status message.
    fn update_chrome(&mut self) {
        let doc = self.documents.document();
        let name = doc.display_name();
        let prefix = if doc.is_dirty() { "*" } else { "" };
        self.window.set_label(&format!("{}{} - ScribeOne", prefix, name));

        let resting = match doc.path() {
            Some(path) => path.display().to_string(),
            None => "(unsaved)".to_string(),
        };
        self.shell.status_bar.set_resting_message(&resting);
        self.shell.set_document_name(&name);
    }

    fn sync_recent(&mut self) {
        let recent = self.documents.recent();
        if self.settings.borrow().recent_files == *recent {
            return;
        }
        self.settings.borrow_mut().recent_files = recent.clone();
        self.sidebar.set_recent(recent.list());
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.borrow().save_to(&self.settings_path) {
            log::error!("Failed to save settings to {}: {}", self.settings_path.display(), e);
        }
    }

    // --- View ---

    pub fn toggle_word_wrap(&mut self) {
        self.word_wrap = !self.word_wrap;
        if self.word_wrap {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.editor.redraw();

        self.toolbar.set_wrap(self.word_wrap);
        set_menu_checked(&self.menu, WORD_WRAP_ITEM, self.word_wrap);
        self.shell.status_bar.set_wrap(self.word_wrap);

        self.settings.borrow_mut().word_wrap_enabled = self.word_wrap;
        self.persist_settings();
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.paint_theme(theme);
        self.settings.borrow_mut().theme = theme;
        self.persist_settings();
    }

    fn paint_theme(&mut self, theme: ThemeName) {
        self.palette = Palette::for_theme(theme);
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, &self.palette);
        self.toolbar.apply_palette(&self.palette);
        self.shell.status_bar.apply_palette(&self.palette);
        self.shell.snackbar.apply_palette(&self.palette);
        self.apply_sidebar_frame(self.sidebar_animator.frame());

        set_menu_checked(&self.menu, LIGHT_THEME_ITEM, !theme.is_dark());
        set_menu_checked(&self.menu, DARK_THEME_ITEM, theme.is_dark());

        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme.is_dark());
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }

    // --- Sidebar ---

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_animator.toggle();
        self.sidebar_transition_started();
    }

    pub fn pointer_moved(&mut self, x: i32) {
        if self.sidebar_animator.pointer_moved(x) {
            self.sidebar_transition_started();
        }
    }

    fn sidebar_transition_started(&mut self) {
        let visible = self.sidebar_animator.is_visible();
        self.toolbar.set_sidebar(visible);
        set_menu_checked(&self.menu, SIDEBAR_ITEM, visible);

        if self.sidebar_animator.is_animating() && !self.sidebar_tick_pending {
            self.last_sidebar_tick = Instant::now();
            self.schedule_sidebar_tick();
        }
    }

    fn schedule_sidebar_tick(&mut self) {
        self.sidebar_tick_pending = true;
        let s = self.sender;
        app::add_timeout3(SIDEBAR_FRAME_SECS, move |_| {
            s.send(Message::SidebarTick);
        });
    }

    pub fn sidebar_tick(&mut self) {
        self.sidebar_tick_pending = false;
        let now = Instant::now();
        let dt = now.duration_since(self.last_sidebar_tick);
        self.last_sidebar_tick = now;

        match self.sidebar_animator.advance(dt) {
            SidebarStep::Idle => {}
            SidebarStep::Animating(frame) => {
                self.apply_sidebar_frame(frame);
                self.schedule_sidebar_tick();
            }
            SidebarStep::Finished { frame, persist } => {
                self.apply_sidebar_frame(frame);
                {
                    let mut s = self.settings.borrow_mut();
                    s.sidebar_visible = persist.visible;
                    s.sidebar_width = persist.width;
                }
                self.persist_settings();
                log::debug!("Sidebar settled: visible={} width={}", persist.visible, persist.width);
            }
        }
    }

    /// Re-place the overlays after the window changed size.
    pub fn layout_overlays(&mut self) {
        self.apply_sidebar_frame(self.sidebar_animator.frame());
        let (w, h) = (self.window.w(), self.window.h());
        self.shell.snackbar.place(w, h - STATUS_BAR_HEIGHT);
    }

    fn apply_sidebar_frame(&mut self, frame: SidebarFrame) {
        let top = content_top();
        let height = self.window.h() - top - STATUS_BAR_HEIGHT;
        self.sidebar.apply_frame(frame, top, height, &self.palette);
        // uncover whatever the panel used to hide
        self.window.redraw();
    }

    // --- Timers ---

    pub fn status_expired(&mut self, generation: u64) {
        self.shell.status_bar.expire(generation);
    }

    pub fn toast_expired(&mut self, generation: u64) {
        self.shell.snackbar.expire(generation);
    }
}
