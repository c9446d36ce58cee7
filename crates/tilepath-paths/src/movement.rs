//! Movement modes and step costs.

use tilepath_core::Cell;

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of one diagonal step. A fixed rational approximation of √2,
/// matching the reference grid editor's constant exactly.
pub const DIAGONAL_COST: f64 = 1.4;

/// Cardinal offsets, in the fixed expansion order: down, right, up, left.
/// The order is load-bearing — it determines which of several equal-cost
/// paths the search returns.
const CARDINAL_OFFSETS: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
];

/// Cardinal offsets followed by the four diagonals, same ordering rule.
const ALL_OFFSETS: [Cell; 8] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
    Cell::new(1, 1),
    Cell::new(1, -1),
    Cell::new(-1, -1),
    Cell::new(-1, 1),
];

/// How the search may step between adjacent cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-directional movement only.
    #[default]
    Cardinal,
    /// 8-directional movement: cardinal steps plus diagonals.
    Diagonal,
}

impl Movement {
    /// The relative offsets to try from each expanded cell, in fixed order.
    #[inline]
    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Self::Cardinal => &CARDINAL_OFFSETS,
            Self::Diagonal => &ALL_OFFSETS,
        }
    }

    /// Whether this mode permits diagonal steps.
    #[inline]
    pub fn allows_diagonal(self) -> bool {
        self == Self::Diagonal
    }
}

/// Whether `offset` is a diagonal step.
#[inline]
pub(crate) fn is_diagonal(offset: Cell) -> bool {
    offset.x != 0 && offset.y != 0
}

/// Cost of stepping by `offset`.
#[inline]
pub(crate) fn step_cost(offset: Cell) -> f64 {
    if is_diagonal(offset) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_enumeration_order() {
        assert_eq!(
            Movement::Cardinal.offsets(),
            &[
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(0, -1),
                Cell::new(-1, 0),
            ]
        );
        // Diagonals are appended after the cardinal four, never interleaved.
        assert_eq!(
            &Movement::Diagonal.offsets()[..4],
            Movement::Cardinal.offsets()
        );
        assert_eq!(
            &Movement::Diagonal.offsets()[4..],
            &[
                Cell::new(1, 1),
                Cell::new(1, -1),
                Cell::new(-1, -1),
                Cell::new(-1, 1),
            ]
        );
    }

    #[test]
    fn step_costs() {
        assert_eq!(step_cost(Cell::new(0, 1)), 1.0);
        assert_eq!(step_cost(Cell::new(-1, 0)), 1.0);
        assert_eq!(step_cost(Cell::new(1, -1)), 1.4);
        assert_eq!(step_cost(Cell::new(-1, -1)), 1.4);
    }
}
