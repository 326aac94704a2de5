//! Single-select state for a group of base buttons.

use crate::convert::Base;

/// A mutually exclusive choice over the supported bases.
///
/// At most one option is active at a time; the selection lives in a single
/// slot, so activating an option deactivates the previous one in the same
/// assignment. The cursor tracks the keyboard highlight and moves
/// independently of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionGroup {
    cursor: usize,
    selected: Option<usize>,
}

impl SelectionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A group with `base` already active, cursor on it.
    pub fn with_selected(base: Base) -> Self {
        let index = Base::ALL
            .iter()
            .position(|candidate| *candidate == base)
            .unwrap_or(0);
        Self {
            cursor: index,
            selected: Some(index),
        }
    }

    pub fn options(&self) -> &'static [Base] {
        &Base::ALL
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active base, or `None` if nothing has been selected yet.
    pub fn selected(&self) -> Option<Base> {
        self.selected.map(|index| Base::ALL[index])
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Move the keyboard cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: i32) {
        let len = Base::ALL.len();
        self.cursor = if direction.is_negative() {
            if self.cursor == 0 {
                len - 1
            } else {
                self.cursor - 1
            }
        } else if self.cursor + 1 >= len {
            0
        } else {
            self.cursor + 1
        };
    }

    /// Activate the option under the cursor.
    pub fn select_cursor(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// Activate the option at `index` (digit shortcut). Out-of-range
    /// indexes are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index < Base::ALL.len() {
            self.cursor = index;
            self.selected = Some(index);
        }
    }
}
