use std::collections::HashSet;

use tilepath_core::{Board, Cell};

/// Grid view consumed by the search — bounds plus a blocked-cell test.
///
/// The search treats the view as immutable for the duration of one call.
/// Start and goal are assumed traversable; a blocked endpoint simply
/// yields no path.
pub trait BlockedGrid {
    /// Grid width in cells.
    fn width(&self) -> i32;

    /// Grid height in cells.
    fn height(&self) -> i32;

    /// Whether `cell` cannot be entered.
    fn is_blocked(&self, cell: Cell) -> bool;
}

impl BlockedGrid for Board {
    fn width(&self) -> i32 {
        Board::width(self)
    }

    fn height(&self) -> i32 {
        Board::height(self)
    }

    fn is_blocked(&self, cell: Cell) -> bool {
        self.is_wall(cell)
    }
}

/// Borrowing [`BlockedGrid`] over a caller-owned blocked-cell set, for
/// callers that keep their own wall state instead of a
/// [`Board`](tilepath_core::Board).
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    width: i32,
    height: i32,
    blocked: &'a HashSet<Cell>,
}

impl<'a> GridView<'a> {
    /// Create a view over `blocked` with the given dimensions.
    pub fn new(width: i32, height: i32, blocked: &'a HashSet<Cell>) -> Self {
        Self {
            width,
            height,
            blocked,
        }
    }
}

impl BlockedGrid for GridView<'_> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }
}
