//! Grid-based A* shortest-path search.
//!
//! This crate implements minimum-cost pathfinding over a bounded 2D
//! lattice of unit cells, some of which are blocked, with 4- or
//! 8-directional movement:
//!
//! - [`Search`] owns reusable buffers so repeated queries incur no
//!   allocations after warm-up; [`Search::find_path`] runs one search.
//! - [`find_path`] is a one-shot wrapper over a raw blocked-cell set.
//! - [`BlockedGrid`] is the seam between the search and whatever owns the
//!   grid state; `tilepath_core::Board` and [`GridView`] both implement it.
//!
//! The default behavior matches the original grid editor this engine was
//! extracted from, quirks included: the Manhattan heuristic is used even
//! for 8-way movement (where it overestimates), finalized cells are never
//! reopened, and a diagonal step is refused only when both of its flanking
//! orthogonal cells are blocked. [`SearchConfig`] exposes opt-in switches
//! for an admissible heuristic, reopening, and an iteration budget.
//!
//! # Example
//!
//! ```
//! use tilepath_core::Cell;
//! use tilepath_paths::{Movement, Search, GridView};
//! use std::collections::HashSet;
//!
//! let blocked: HashSet<Cell> = [Cell::new(1, 0), Cell::new(1, 1)].into_iter().collect();
//! let view = GridView::new(3, 3, &blocked);
//! let mut search = Search::new();
//! let path = search
//!     .find_path(&view, Cell::new(0, 0), Cell::new(2, 0), Movement::Cardinal)
//!     .unwrap()
//!     .unwrap();
//! // Paths run goal to start.
//! assert_eq!(path.first(), Some(&Cell::new(2, 0)));
//! assert_eq!(path.last(), Some(&Cell::new(0, 0)));
//! ```

mod astar;
mod distance;
mod error;
mod movement;
mod search;
mod traits;

pub use astar::find_path;
pub use distance::{chebyshev, manhattan, octile};
pub use error::SearchError;
pub use movement::{DIAGONAL_COST, Movement, ORTHOGONAL_COST};
pub use search::{Heuristic, Search, SearchConfig};
pub use traits::{BlockedGrid, GridView};
