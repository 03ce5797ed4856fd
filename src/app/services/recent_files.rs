use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 5;

/// Most-recent-first list of opened/saved paths, deduplicated by exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles(Vec<String>);

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `path` to the front, dropping the oldest entries past the limit.
    pub fn add(&mut self, path: &str) {
        self.0.retain(|p| p != path);
        self.0.insert(0, path.to_string());
        self.0.truncate(MAX_RECENT_FILES);
    }

    pub fn list(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_puts_newest_first() {
        let mut recent = RecentFiles::new();
        recent.add("/a.txt");
        recent.add("/b.txt");
        assert_eq!(recent.list(), ["/b.txt", "/a.txt"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut recent = RecentFiles::new();
        recent.add("/a.txt");
        recent.add("/b.txt");
        recent.add("/a.txt");
        assert_eq!(recent.list(), ["/a.txt", "/b.txt"]);
        assert_eq!(recent.list().len(), 2);
    }

    #[test]
    fn test_sixth_path_evicts_oldest() {
        let mut recent = RecentFiles::new();
        for i in 1..=6 {
            recent.add(&format!("/file{i}.txt"));
        }
        assert_eq!(recent.list().len(), MAX_RECENT_FILES);
        assert_eq!(recent.list()[0], "/file6.txt");
        assert!(!recent.list().iter().any(|p| p == "/file1.txt"));
    }

    #[test]
    fn test_dedup_is_exact_match() {
        let mut recent = RecentFiles::new();
        recent.add("/notes/a.txt");
        recent.add("/notes/./a.txt");
        assert_eq!(recent.list().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut recent = RecentFiles::new();
        recent.add("/a.txt");
        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut recent = RecentFiles::new();
        recent.add("/a.txt");
        recent.add("/b.txt");
        let json = serde_json::to_string(&recent).unwrap();
        assert_eq!(json, r#"["/b.txt","/a.txt"]"#);
        let loaded: RecentFiles = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, recent);
    }
}
