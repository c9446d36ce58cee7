//! Editable grid state: walls and the two path endpoints.
//!
//! [`Board`] holds everything a grid editor mutates between searches: the
//! wall set, the start and finish markers, and the placement rules that
//! keep them consistent (walls never overlap endpoints, endpoints never
//! land on walls). Rendering and input handling are the caller's concern;
//! the board is plain state.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::Cell;

/// Errors from [`Board::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height below 1.
    EmptyGrid { width: i32, height: i32 },
    /// The board cannot hold two distinct endpoints.
    TooSmall { width: i32, height: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be at least 1x1, got {width}x{height}")
            }
            Self::TooSmall { width, height } => {
                write!(
                    f,
                    "{width}x{height} board cannot hold two distinct endpoints"
                )
            }
        }
    }
}

impl Error for BoardError {}

/// A bounded grid of unit cells with a wall set and two endpoints.
///
/// Cells are addressed by [`Cell`] coordinates in `[0, width) × [0, height)`.
/// Every mutating method validates its target and reports whether anything
/// changed, so callers can redraw (or re-search) only when needed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: i32,
    height: i32,
    walls: HashSet<Cell>,
    start: Cell,
    finish: Cell,
}

impl Board {
    /// Create an empty board with default endpoint placement: start at
    /// (w/2 − w/4, h/2) and finish at (w/2 + w/4, h/2), one quarter in
    /// from each side of the middle row. Tiny boards where those collapse
    /// to the same cell fall back to adjacent corner cells.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width < 1 || height < 1 {
            return Err(BoardError::EmptyGrid { width, height });
        }
        if width == 1 && height == 1 {
            return Err(BoardError::TooSmall { width, height });
        }

        let mid_y = height / 2;
        let mut start = Cell::new(width / 2 - width / 4, mid_y);
        let mut finish = Cell::new(width / 2 + width / 4, mid_y);
        if start == finish {
            start = Cell::new(0, 0);
            finish = if height > 1 {
                Cell::new(0, 1)
            } else {
                Cell::new(1, 0)
            };
        }

        Ok(Self {
            width,
            height,
            walls: HashSet::new(),
            start,
            finish,
        })
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The start endpoint.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The finish endpoint.
    #[inline]
    pub fn finish(&self) -> Cell {
        self.finish
    }

    /// Whether `cell` lies within the board.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Whether `cell` is in bounds and neither a wall nor an endpoint.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell)
            && !self.is_wall(cell)
            && cell != self.start
            && cell != self.finish
    }

    /// Iterate over all wall cells, in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().copied()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Place a wall at `cell`. Refuses cells out of bounds or occupied by
    /// an endpoint. Returns `true` if the board changed.
    pub fn set_wall(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || cell == self.start || cell == self.finish {
            return false;
        }
        self.walls.insert(cell)
    }

    /// Remove the wall at `cell`, if any. Returns `true` if the board
    /// changed.
    pub fn clear_wall(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    /// Flip `cell` between wall and empty, subject to the same rules as
    /// [`set_wall`](Self::set_wall). Returns `true` if the board changed.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if self.is_wall(cell) {
            self.clear_wall(cell)
        } else {
            self.set_wall(cell)
        }
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Move the start endpoint to `cell`. A drop is rejected (returning
    /// `false`) when the target is out of bounds, a wall, or the finish
    /// endpoint.
    pub fn move_start(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.is_wall(cell) || cell == self.finish {
            return false;
        }
        self.start = cell;
        true
    }

    /// Move the finish endpoint to `cell`, under the same rules as
    /// [`move_start`](Self::move_start).
    pub fn move_finish(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.is_wall(cell) || cell == self.start {
            return false;
        }
        self.finish = cell;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_placement() {
        let b = Board::new(20, 20).unwrap();
        assert_eq!(b.start(), Cell::new(5, 10));
        assert_eq!(b.finish(), Cell::new(15, 10));
    }

    #[test]
    fn tiny_board_falls_back_to_corner_cells() {
        let b = Board::new(1, 2).unwrap();
        assert_eq!(b.start(), Cell::new(0, 0));
        assert_eq!(b.finish(), Cell::new(0, 1));

        let b = Board::new(2, 1).unwrap();
        assert_eq!(b.start(), Cell::new(0, 0));
        assert_eq!(b.finish(), Cell::new(1, 0));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::EmptyGrid {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            Board::new(3, -1),
            Err(BoardError::EmptyGrid {
                width: 3,
                height: -1
            })
        );
        assert_eq!(
            Board::new(1, 1),
            Err(BoardError::TooSmall {
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn large_dimensions_are_valid() {
        // Dimension validation must not multiply width by height; near
        // i32::MAX-sized products previously overflowed.
        let b = Board::new(46_341, 46_341).unwrap();
        assert!(b.in_bounds(b.start()));
        assert!(b.in_bounds(b.finish()));
        assert_ne!(b.start(), b.finish());

        let b = Board::new(i32::MAX, 1).unwrap();
        assert!(b.in_bounds(b.start()));
        assert!(b.in_bounds(b.finish()));
    }

    #[test]
    fn boards_compare_by_state() {
        let a = Board::new(5, 5).unwrap();
        let mut b = Board::new(5, 5).unwrap();
        assert_eq!(a, b);
        b.set_wall(Cell::new(1, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn wall_edits() {
        let mut b = Board::new(5, 5).unwrap();
        let c = Cell::new(3, 3);
        assert!(b.set_wall(c));
        assert!(b.is_wall(c));
        assert!(!b.set_wall(c)); // already a wall
        assert!(b.clear_wall(c));
        assert!(!b.clear_wall(c)); // already empty

        assert!(b.toggle_wall(c));
        assert!(b.is_wall(c));
        assert!(b.toggle_wall(c));
        assert!(!b.is_wall(c));
    }

    #[test]
    fn walls_refuse_endpoints_and_out_of_bounds() {
        let mut b = Board::new(5, 5).unwrap();
        assert!(!b.set_wall(b.start()));
        assert!(!b.set_wall(b.finish()));
        assert!(!b.set_wall(Cell::new(-1, 0)));
        assert!(!b.set_wall(Cell::new(5, 0)));
        assert_eq!(b.wall_count(), 0);
    }

    #[test]
    fn clear_walls_empties_everything() {
        let mut b = Board::new(5, 5).unwrap();
        b.set_wall(Cell::new(0, 0));
        b.set_wall(Cell::new(4, 4));
        assert_eq!(b.wall_count(), 2);
        b.clear_walls();
        assert_eq!(b.wall_count(), 0);
    }

    #[test]
    fn endpoint_drops_are_constrained() {
        let mut b = Board::new(5, 5).unwrap();
        b.set_wall(Cell::new(0, 0));

        assert!(!b.move_start(Cell::new(0, 0))); // wall
        assert!(!b.move_start(b.finish())); // other endpoint
        assert!(!b.move_start(Cell::new(9, 9))); // out of bounds
        assert!(b.move_start(Cell::new(4, 4)));
        assert_eq!(b.start(), Cell::new(4, 4));

        assert!(!b.move_finish(Cell::new(4, 4))); // now the start
        assert!(b.move_finish(Cell::new(0, 4)));
        assert_eq!(b.finish(), Cell::new(0, 4));
    }

    #[test]
    fn is_free_accounts_for_walls_and_endpoints() {
        let mut b = Board::new(5, 5).unwrap();
        b.set_wall(Cell::new(2, 0));
        assert!(!b.is_free(Cell::new(2, 0)));
        assert!(!b.is_free(b.start()));
        assert!(!b.is_free(Cell::new(5, 5)));
        assert!(b.is_free(Cell::new(0, 0)));
    }
}
