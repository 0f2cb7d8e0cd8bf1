/// Position within a fixed-length sequence. Moves are clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
}

impl Cursor {
    /// Starts at 0. A zero length is treated as one so the invariant
    /// `position < len` always holds.
    pub fn new(len: usize) -> Self {
        Self {
            position: 0,
            len: len.max(1),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `false` when already at the last position.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 >= self.len {
            return false;
        }
        self.position += 1;
        true
    }

    /// Returns `false` when already at position 0.
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }
}
