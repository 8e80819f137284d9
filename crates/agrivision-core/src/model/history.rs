/// The analysis history ledger: most-recent-first, capped.
use super::result::AnalysisResult;

/// Maximum number of results retained. Older entries fall off the end.
pub const MAX_HISTORY_ENTRIES: usize = 25;

/// Ordered list of past results, newest at index 0.
///
/// Order is strictly by insertion and never re-sorted; `len() <= MAX_HISTORY_ENTRIES`
/// holds for every value reachable through this API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<AnalysisResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries (already newest-first), truncating to the cap.
    pub fn from_entries(mut entries: Vec<AnalysisResult>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }

    /// Insert a new result at the front, dropping the oldest beyond the cap.
    pub fn prepend(&mut self, result: AnalysisResult) {
        self.entries.insert(0, result);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisResult> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a AnalysisResult;
    type IntoIter = std::slice::Iter<'a, AnalysisResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(tag: usize) -> AnalysisResult {
        AnalysisResult {
            disease: format!("d{tag}"),
            confidence: 0.9,
            treatment: String::new(),
            date: format!("2025-01-01T00:00:{:02}.000Z", tag % 60),
            image: String::new(),
        }
    }

    #[test]
    fn test_prepend_is_newest_first() {
        let mut h = History::new();
        h.prepend(result(1));
        h.prepend(result(2));
        assert_eq!(h.latest().unwrap().disease, "d2");
        assert_eq!(h.entries()[1].disease, "d1");
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut h = History::new();
        for i in 0..40 {
            h.prepend(result(i));
            assert_eq!(h.len(), (i + 1).min(MAX_HISTORY_ENTRIES));
        }
        // Newest is 39, oldest retained is 15.
        assert_eq!(h.entries()[0].disease, "d39");
        assert_eq!(h.entries()[MAX_HISTORY_ENTRIES - 1].disease, "d15");
    }

    #[test]
    fn test_from_entries_truncates() {
        let h = History::from_entries((0..30).map(result).collect());
        assert_eq!(h.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(h.entries()[0].disease, "d0");
    }

    #[test]
    fn test_clear() {
        let mut h = History::from_entries(vec![result(1)]);
        h.clear();
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }
}
