use super::PushRequest;
use crate::validation::filter_batch;

/// One editable row of a batch form, kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchEntry {
    pub destination: String,
    pub content: String,
}

impl BatchEntry {
    pub fn new(destination: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            content: content.into(),
        }
    }
}

/// The variable-length list of entries behind a batch submission.
///
/// A fresh draft holds a single empty entry. Blank rows are allowed while
/// editing and are dropped by [`BatchDraft::to_requests`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDraft {
    entries: Vec<BatchEntry>,
}

impl Default for BatchDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchDraft {
    pub fn new() -> Self {
        Self {
            entries: vec![BatchEntry::default()],
        }
    }

    /// Appends an empty entry and returns its position.
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(BatchEntry::default());
        self.entries.len() - 1
    }

    /// Overwrites the entry at `index`. Returns `false` if there is none.
    pub fn update_entry(
        &mut self,
        index: usize,
        destination: impl Into<String>,
        content: impl Into<String>,
    ) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = BatchEntry::new(destination, content);
                true
            }
            None => false,
        }
    }

    /// Removes the entry at `index`; out-of-range indices are ignored.
    pub fn remove_entry(&mut self, index: usize) -> Option<BatchEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Drops every entry but the first and clears it.
    pub fn reset(&mut self) {
        self.entries.truncate(1);
        match self.entries.first_mut() {
            Some(first) => *first = BatchEntry::default(),
            None => self.entries.push(BatchEntry::default()),
        }
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requests for every entry with a non-blank destination and content.
    pub fn to_requests(&self) -> Vec<PushRequest> {
        filter_batch(
            self.entries
                .iter()
                .map(|entry| (entry.destination.as_str(), entry.content.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_entry() {
        let draft = BatchDraft::new();
        assert_eq!(draft.entries(), &[BatchEntry::default()]);
        assert!(draft.to_requests().is_empty());
    }

    #[test]
    fn test_edit_and_remove_entries() {
        let mut draft = BatchDraft::new();
        assert!(draft.update_entry(0, "https://a.example.com", "first"));
        let second = draft.add_entry();
        assert!(draft.update_entry(second, "https://b.example.com", "second"));
        let third = draft.add_entry();
        assert!(draft.update_entry(third, "https://c.example.com", "third"));

        let removed = draft.remove_entry(1);
        assert_eq!(removed.map(|e| e.content), Some("second".to_string()));
        assert_eq!(draft.remove_entry(10), None);
        assert!(!draft.update_entry(10, "x", "y"));

        let requests = draft.to_requests();
        let destinations: Vec<&str> = requests.iter().map(|r| r.destination()).collect();
        assert_eq!(destinations, ["https://a.example.com", "https://c.example.com"]);
    }

    #[test]
    fn test_reset_keeps_single_blank_entry() {
        let mut draft = BatchDraft::new();
        draft.update_entry(0, "https://a.example.com", "first");
        draft.add_entry();
        draft.add_entry();

        draft.reset();
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.entries()[0], BatchEntry::default());

        draft.remove_entry(0);
        draft.reset();
        assert_eq!(draft.len(), 1);
    }
}
