//! Files staged for upload.
//!
//! The selection is the only mutable model behind the upload dashboard;
//! the file list is rendered straight from it.

use crate::config::{MAX_TOTAL_SIZE, MIB};
use crate::format::format_file_size;
use crate::{AppError, AppResult, FileEntry};

/// Ordered list of staged files, bounded by [`MAX_TOTAL_SIZE`].
#[derive(Clone, Debug)]
pub struct Selection<C> {
    entries: Vec<FileEntry<C>>,
    next_id: u64,
    limit: u64,
}

impl<C> Default for Selection<C> {
    fn default() -> Self {
        Self::with_limit(MAX_TOTAL_SIZE)
    }
}

impl<C> Selection<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            limit,
        }
    }

    pub fn entries(&self) -> &[FileEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry sizes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Appends a batch, or rejects all of it if the ceiling would be crossed.
    pub fn add_files(&mut self, incoming: Vec<FileEntry<C>>) -> AppResult<()> {
        let incoming_size: u64 = incoming.iter().map(|e| e.size).sum();
        let total = self.total_size().saturating_add(incoming_size);
        if total > self.limit {
            return Err(AppError::SizeExceeded {
                total,
                limit_mib: self.limit / MIB,
            });
        }

        for mut entry in incoming {
            entry.id = self.next_id;
            self.next_id += 1;
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Removes the entry at `index`. Out of range is ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<FileEntry<C>> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Footer line under the file list.
    pub fn total_label(&self) -> String {
        format!(
            "Total size: {} / {}MB",
            format_file_size(self.total_size()),
            self.limit / MIB
        )
    }
}

impl<C: Clone> Selection<C> {
    /// Content handles to submit, in selection order.
    pub fn contents_for_submit(&self) -> AppResult<Vec<C>> {
        if self.entries.is_empty() {
            return Err(AppError::EmptySelection);
        }
        Ok(self.entries.iter().map(|e| e.content.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64) -> FileEntry<Vec<u8>> {
        FileEntry::new(name, size, Vec::new())
    }

    fn names(selection: &Selection<Vec<u8>>) -> Vec<&str> {
        selection.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_order_and_assigns_ids() {
        let mut selection = Selection::new();
        selection
            .add_files(vec![entry("a.txt", 10), entry("b.txt", 20)])
            .unwrap();
        selection.add_files(vec![entry("c.txt", 30)]).unwrap();

        assert_eq!(names(&selection), ["a.txt", "b.txt", "c.txt"]);
        let ids: Vec<u64> = selection.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(selection.total_size(), 60);
    }

    #[test]
    fn test_batch_over_ceiling_is_rejected_whole() {
        let mut selection = Selection::new();
        selection.add_files(vec![entry("big.iso", 40 * MIB)]).unwrap();

        let err = selection
            .add_files(vec![entry("small.txt", MIB), entry("huge.bin", 20 * MIB)])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Total file size (61.00 MB) exceeds maximum limit of 50MB"
        );
        assert_eq!(names(&selection), ["big.iso"]);
        assert_eq!(selection.total_size(), 40 * MIB);
    }

    #[test]
    fn test_exactly_at_ceiling_is_accepted() {
        let mut selection = Selection::new();
        selection.add_files(vec![entry("a", 52_428_800)]).unwrap();
        assert_eq!(selection.total_size(), MAX_TOTAL_SIZE);

        let err = selection.add_files(vec![entry("b", 1)]).unwrap_err();
        assert!(err.to_string().contains("(50.00 MB)"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut selection = Selection::new();
        selection.add_files(vec![entry("a", 1), entry("b", 2)]).unwrap();

        assert!(selection.remove_file(5).is_none());
        assert_eq!(selection.len(), 2);

        let removed = selection.remove_file(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(names(&selection), ["b"]);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut selection = Selection::new();
        selection
            .add_files(vec![entry("a", 100), entry("b", 200), entry("c", 300)])
            .unwrap();
        selection.remove_file(1);
        assert_eq!(selection.total_size(), 400);

        selection.add_files(vec![entry("d", 50)]).unwrap();
        assert_eq!(selection.total_size(), 450);

        selection.clear_all();
        assert_eq!(selection.total_size(), 0);
        assert!(selection.is_empty());

        // ids keep increasing after a clear
        selection.add_files(vec![entry("e", 5)]).unwrap();
        assert_eq!(selection.entries()[0].id, 5);
    }

    #[test]
    fn test_empty_selection_cannot_be_submitted() {
        let selection: Selection<Vec<u8>> = Selection::new();
        assert_eq!(selection.contents_for_submit(), Err(AppError::EmptySelection));
    }

    #[test]
    fn test_contents_in_selection_order() {
        let mut selection = Selection::new();
        selection
            .add_files(vec![
                FileEntry::new("a", 1, vec![1u8]),
                FileEntry::new("b", 1, vec![2u8]),
            ])
            .unwrap();
        assert_eq!(selection.contents_for_submit().unwrap(), vec![vec![1u8], vec![2u8]]);
    }

    #[test]
    fn test_total_label() {
        let mut selection = Selection::new();
        selection.add_files(vec![entry("a", 1536)]).unwrap();
        assert_eq!(selection.total_label(), "Total size: 1.5 KB / 50MB");
    }
}
