//! Cart panel visibility.

/// Whether the order-review panel is open. Independent of filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartVisibility {
    is_open: bool,
}

impl CartVisibility {
    /// Open the panel. No-op if already open.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the panel. No-op if already closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
