//! Keyboard focus over the rendered suggestion rows

/// The highlighted suggestion row, or none
///
/// Arrow navigation wraps in both directions. With no rows there is nothing
/// to focus and the index stays empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusIndex(Option<usize>);

impl FocusIndex {
    pub const NONE: FocusIndex = FocusIndex(None);

    pub fn get(self) -> Option<usize> {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Whether row `index` carries the highlight
    pub fn is_active(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// Move to the next row (ArrowDown), wrapping to the first
    pub fn step_down(&mut self, count: usize) {
        if count == 0 {
            self.0 = None;
            return;
        }

        self.0 = match self.0 {
            Some(current) if current + 1 < count => Some(current + 1),
            _ => Some(0),
        };
    }

    /// Move to the previous row (ArrowUp), wrapping to the last
    pub fn step_up(&mut self, count: usize) {
        if count == 0 {
            self.0 = None;
            return;
        }

        self.0 = match self.0 {
            Some(current) if current > 0 && current < count => Some(current - 1),
            _ => Some(count - 1),
        };
    }
}

#[cfg(test)]
#[path = "focus_tests.rs"]
mod focus_tests;
