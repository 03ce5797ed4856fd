use fltk::{
    enums::Color,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::settings::ThemeName;

/// Colours for one theme. Each UI component picks the entries it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_bg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_hover: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub toast_bg: Color,
    pub toast_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Dark => Self {
                window_bg: Color::from_rgb(25, 25, 25),
                editor_bg: Color::from_rgb(30, 30, 30),
                editor_fg: Color::from_rgb(220, 220, 220),
                cursor: Color::from_rgb(255, 255, 255),
                selection: Color::from_rgb(70, 70, 100),
                menu_bg: Color::from_rgb(35, 35, 35),
                menu_fg: Color::from_rgb(220, 220, 220),
                menu_hover: Color::from_rgb(60, 60, 60),
                bar_bg: Color::from_rgb(40, 40, 40),
                bar_fg: Color::from_rgb(170, 170, 170),
                sidebar_bg: Color::from_rgb(45, 45, 48),
                sidebar_fg: Color::from_rgb(210, 210, 210),
                toast_bg: Color::from_rgb(230, 230, 230),
                toast_fg: Color::from_rgb(20, 20, 20),
            },
            ThemeName::Light => Self {
                window_bg: Color::from_rgb(240, 240, 240),
                editor_bg: Color::White,
                editor_fg: Color::Black,
                cursor: Color::Black,
                selection: Color::from_rgb(173, 216, 230),
                menu_bg: Color::from_rgb(240, 240, 240),
                menu_fg: Color::Black,
                menu_hover: Color::from_rgb(200, 200, 200),
                bar_bg: Color::from_rgb(228, 228, 228),
                bar_fg: Color::from_rgb(60, 60, 60),
                sidebar_bg: Color::from_rgb(248, 248, 248),
                sidebar_fg: Color::from_rgb(30, 30, 30),
                toast_bg: Color::from_rgb(50, 50, 50),
                toast_fg: Color::from_rgb(245, 245, 245),
            },
        }
    }
}

pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, palette: &Palette) {
    editor.set_color(palette.editor_bg);
    editor.set_text_color(palette.editor_fg);
    editor.set_cursor_color(palette.cursor);
    editor.set_selection_color(palette.selection);
    window.set_color(palette.window_bg);
    window.set_label_color(palette.menu_fg);
    menu.set_color(palette.menu_bg);
    menu.set_text_color(palette.menu_fg);
    menu.set_selection_color(palette.menu_hover); // Hover color

    editor.redraw();
    window.redraw();
    menu.redraw();
}

/// Linear mix of two colours; `t = 0` gives `from`, `t = 1` gives `to`.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = from.to_rgb();
    let (r2, g2, b2) = to.to_rgb();
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::from_rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE, 19 = same attribute on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
