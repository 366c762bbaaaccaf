// SPDX-License-Identifier: MPL-2.0
//! Ordered, gap-free list of image records with a protected sample prefix.

use super::record::{ImageRecord, ImageSource, RecordId};

/// The records shown in the grid, in display order.
///
/// Positions `0..len()` are always contiguous. The first `sample_count()`
/// records are the ones captured at startup and survive
/// [`truncate_to_samples`](Self::truncate_to_samples).
#[derive(Debug, Clone, Default)]
pub struct ImageList {
    records: Vec<ImageRecord>,
    sample_count: usize,
    next_id: u64,
}

impl ImageList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content with the startup samples.
    ///
    /// Missing labels become "Image N" (1-based position). Only the first
    /// `sample_limit` records are protected; any surplus is kept but behaves
    /// like an upload when clearing.
    pub fn seed<I>(&mut self, samples: I, sample_limit: usize)
    where
        I: IntoIterator<Item = (ImageSource, Option<String>)>,
    {
        self.records.clear();
        for (position, (source, label)) in samples.into_iter().enumerate() {
            let label = label.unwrap_or_else(|| format!("Image {}", position + 1));
            let id = self.allocate_id();
            self.records.push(ImageRecord::new(id, source, label));
        }
        self.sample_count = self.records.len().min(sample_limit);
    }

    /// Appends a record built by `build` from a fresh id, returning that id.
    pub fn push_with(&mut self, build: impl FnOnce(RecordId) -> ImageRecord) -> RecordId {
        let id = self.allocate_id();
        let record = build(id);
        debug_assert_eq!(record.id(), id);
        self.records.push(record);
        id
    }

    /// Removes the record at `index`, shifting later records down by one.
    pub fn remove(&mut self, index: usize) -> Option<ImageRecord> {
        if index >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(index);
        if index < self.sample_count {
            self.sample_count -= 1;
        }
        Some(removed)
    }

    /// Drops every record after the sample prefix, returning how many were removed.
    pub fn truncate_to_samples(&mut self) -> usize {
        let before = self.records.len();
        self.records.truncate(self.sample_count);
        before - self.records.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length of the protected prefix.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Current position of the record with `id`, if it still exists.
    #[must_use]
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut ImageRecord> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ImageRecord> {
        self.records.iter_mut()
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
