use fltk::text::TextBuffer;

/// Copy the whole buffer into a `String`.
///
/// `TextBuffer::text()` never frees the C string FLTK hands back, and the
/// editor reads the buffer after every modification, so go through the FFI
/// and release the copy ourselves.
pub fn read_buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: the pointer comes from a live TextBuffer. Fl_Text_Buffer_text
    // returns a malloc'd NUL-terminated copy (or null), which is read once
    // and then freed with the matching allocator.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
