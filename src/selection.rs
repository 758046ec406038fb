/// Keyboard selection cursor over the latest search results
///
/// The cursor belongs to the UI, not the search engine. It is kept across
/// keystrokes and clamped to whatever the newest result list holds.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedIndex(usize);

impl SelectedIndex {
    pub fn new(index: usize) -> Self {
        SelectedIndex(index)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Pull the cursor back onto the last row when the list shrank.
    /// Returns `None` when there is nothing to select.
    pub fn clamp(self, len: usize) -> Option<SelectedIndex> {
        match len {
            0 => None,
            _ => Some(SelectedIndex(self.0.min(len - 1))),
        }
    }

    pub fn select_next(self, len: usize) -> SelectedIndex {
        match self.clamp(len) {
            Some(SelectedIndex(i)) if i + 1 < len => SelectedIndex(i + 1),
            Some(clamped) => clamped,
            None => SelectedIndex(0),
        }
    }

    pub fn select_previous(self) -> SelectedIndex {
        SelectedIndex(self.0.saturating_sub(1))
    }

    pub fn selected<T>(self, items: &[T]) -> Option<&T> {
        self.clamp(items.len()).and_then(|index| items.get(index.0))
    }
}
