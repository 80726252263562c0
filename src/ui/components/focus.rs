//! Focus tracking for forms and menus.

/// Index of the focused control among a fixed number of controls.
///
/// Moving past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    /// Create a ring over `len` controls with the first one focused.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// The focused index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check whether `index` is focused.
    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }

    /// Focus a specific control. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Focus the next control.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Focus the previous control.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Focus the first control.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
