//! Error types for the search engine.
//!
//! An unreachable goal is *not* an error: [`Search::find_path`] reports it
//! as `Ok(None)`. The variants here cover caller contract violations and
//! the optional iteration budget.
//!
//! [`Search::find_path`]: crate::Search::find_path

use std::error::Error;
use std::fmt;

use tilepath_core::Cell;

/// Errors from [`Search::find_path`](crate::Search::find_path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Width or height below 1.
    EmptyGrid { width: i32, height: i32 },
    /// Start or goal outside `[0, width) × [0, height)`.
    OutOfBounds {
        cell: Cell,
        width: i32,
        height: i32,
    },
    /// The configured `max_iterations` bound was reached before the
    /// frontier was exhausted. Distinguishable from a proven "no path".
    IterationBudgetExceeded { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be at least 1x1, got {width}x{height}")
            }
            Self::OutOfBounds {
                cell,
                width,
                height,
            } => {
                write!(f, "cell {cell} is outside the {width}x{height} grid")
            }
            Self::IterationBudgetExceeded { limit } => {
                write!(f, "search exceeded the iteration budget of {limit}")
            }
        }
    }
}

impl Error for SearchError {}
