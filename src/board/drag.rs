//! Drag gesture state.

/// The single drag slot of a board.
///
/// Starting a drag while one is recorded replaces it; there is no queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<usize>,
}

/// What dropping at a hovered index would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPreview {
    pub from: usize,
    pub to: usize,
}

impl DropPreview {
    /// Whether the drop would leave the order as it is.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.source = Some(index);
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Preview a drop at `index` without changing anything.
    pub fn preview(&self, index: usize) -> Option<DropPreview> {
        self.source.map(|from| DropPreview { from, to: index })
    }

    /// Clears the slot, returning the index that was being dragged.
    pub fn take(&mut self) -> Option<usize> {
        self.source.take()
    }
}
