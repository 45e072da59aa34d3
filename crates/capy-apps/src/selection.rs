//! Keyboard selection over the visible match list.

/// Which row is highlighted.
///
/// `Selected(i)` always refers to an existing row of the list it was last
/// rebuilt or moved against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(usize),
}

impl Selection {
    /// The list was replaced. Select the first row if there is one.
    pub fn list_rebuilt(len: usize) -> Self {
        if len > 0 {
            Selection::Selected(0)
        } else {
            Selection::None
        }
    }

    /// Move down one row. Stays put on the last row.
    pub fn move_down(self, len: usize) -> Self {
        match self {
            Selection::Selected(i) if i + 1 < len => Selection::Selected(i + 1),
            other => other,
        }
    }

    /// Move up one row. Stays put on the first row.
    pub fn move_up(self) -> Self {
        match self {
            Selection::Selected(i) if i > 0 => Selection::Selected(i - 1),
            other => other,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Selected(i) => Some(i),
            Selection::None => None,
        }
    }
}
