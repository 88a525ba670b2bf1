use numscope_core::{Dataset, SortedDataset};

/// An analyzer's private copy of the dataset, sorted on first demand.
#[derive(Debug, Clone, Default)]
pub(crate) struct Snapshot {
    pending: Option<Dataset>,
    sorted: SortedDataset,
}

impl Snapshot {
    /// Take an explicit copy of `dataset`.
    pub(crate) fn of(dataset: &Dataset) -> Self {
        Self {
            pending: Some(dataset.snapshot()),
            sorted: SortedDataset::default(),
        }
    }

    /// Take an explicit copy of `dataset` and sort it immediately.
    pub(crate) fn sorted_of(dataset: &Dataset) -> Self {
        Self {
            pending: None,
            sorted: dataset.snapshot().into_sorted(),
        }
    }

    /// Sort in place if not done yet and return the sorted view.
    pub(crate) fn sorted(&mut self) -> &SortedDataset {
        if let Some(dataset) = self.pending.take() {
            self.sorted = dataset.into_sorted();
        }
        &self.sorted
    }

    /// Current contents, in whatever order they are in right now.
    pub(crate) fn values(&self) -> &[i32] {
        self.pending
            .as_ref()
            .map_or(self.sorted.as_slice(), Dataset::as_slice)
    }
}
