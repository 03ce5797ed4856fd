/// Pattern the sidebar explorer lists files with. Directories are always shown.
pub const EXPLORER_PATTERN: &str = "*.txt";

/// File name suggested by "Save As" for an untitled document.
pub const UNTITLED_FILE_NAME: &str = "untitled.txt";

/// Get filter pattern for the open/save dialogs
///
/// Returns a multi-line filter string where each line is a separate filter option.
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
pub fn get_text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_format() {
        let filter = get_text_files_filter();
        let lines: Vec<&str> = filter.lines().collect();
        assert_eq!(lines, vec!["Text Files\t*.txt", "All Files\t*"]);
    }

    #[test]
    fn test_untitled_name_matches_explorer_pattern() {
        let ext = EXPLORER_PATTERN.trim_start_matches('*');
        assert!(UNTITLED_FILE_NAME.ends_with(ext));
    }
}
