use std::collections::HashMap;

use indexmap::IndexMap;
use tilepath_core::Cell;

use crate::distance;

/// Sentinel parent index for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

/// One visited-or-frontier cell during a single search run. Nodes live in
/// the [`Search`] arena; `parent` is an index into that arena (or
/// [`NO_PARENT`] for the start node).
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: Cell,
    pub(crate) parent: usize,
    /// Cost accumulated from the start.
    pub(crate) g: f64,
    /// Heuristic estimate to the goal.
    pub(crate) h: f64,
    /// Priority: always `g + h`.
    pub(crate) f: f64,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Heuristic used to score frontier nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Manhattan distance, regardless of movement mode. This reproduces
    /// the reference behavior exactly, but overestimates under diagonal
    /// movement (it is inadmissible there).
    #[default]
    Manhattan,
    /// Octile distance under the 1.0 / 1.4 step costs. Admissible in both
    /// movement modes; changes which of several paths is returned.
    Octile,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        match self {
            Self::Manhattan => f64::from(distance::manhattan(from, to)),
            Self::Octile => distance::octile(from, to),
        }
    }
}

/// Tuning knobs for [`Search`]. The default configuration reproduces the
/// reference behavior; every deviation is opt-in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Frontier scoring heuristic.
    pub heuristic: Heuristic,
    /// Re-admit a finalized cell when a strictly cheaper path to it is
    /// found. Off by default: the reference never reopens, which can yield
    /// a slightly suboptimal path when the inadmissible default heuristic
    /// meets diagonal movement.
    pub reopen_closed: bool,
    /// Abort with [`SearchError::IterationBudgetExceeded`] after this many
    /// expansions. `None` (the default) runs until the frontier empties.
    ///
    /// [`SearchError::IterationBudgetExceeded`]: crate::SearchError::IterationBudgetExceeded
    pub max_iterations: Option<usize>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A* search coordinator.
///
/// Owns the node arena, frontier, and closed set so that repeated searches
/// reuse their allocations. All buffers are cleared at the start of each
/// [`find_path`](Search::find_path) call; no state carries over between
/// calls.
#[derive(Clone, Debug, Default)]
pub struct Search {
    config: SearchConfig,
    /// Arena of every node created during the current call.
    pub(crate) nodes: Vec<SearchNode>,
    /// Frontier: position → arena index, in insertion order. At most one
    /// live entry per position; insertion order drives tie-breaking.
    pub(crate) open: IndexMap<Cell, usize>,
    /// Finalized cells: position → arena index of the finalized node.
    pub(crate) closed: HashMap<Cell, usize>,
}

impl Search {
    /// Create a search with the default (reference-parity) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with an explicit configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
    }

    /// Select the frontier entry with minimum `f`, breaking ties toward
    /// the earliest-inserted entry, and remove it. The scan keeps the
    /// current candidate unless a strictly smaller `f` appears, and
    /// removal shifts later entries without reordering them — both halves
    /// of the reference tie-break contract.
    pub(crate) fn pop_best(&mut self) -> Option<usize> {
        let mut best_slot = 0;
        let mut best_f = f64::INFINITY;
        for (slot, &idx) in self.open.values().enumerate() {
            let f = self.nodes[idx].f;
            if f < best_f {
                best_slot = slot;
                best_f = f;
            }
        }
        self.open.shift_remove_index(best_slot).map(|(_, idx)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reference_parity() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert!(!cfg.reopen_closed);
        assert_eq!(cfg.max_iterations, None);
    }

    #[test]
    fn manhattan_estimate_ignores_diagonals() {
        let h = Heuristic::Manhattan;
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(3, 3)), 6.0);
    }

    #[test]
    fn octile_estimate_counts_diagonals() {
        let h = Heuristic::Octile;
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(3, 3)), 3.0 + 0.4 * 3.0);
    }

    #[test]
    fn pop_best_prefers_earliest_on_ties() {
        let mut s = Search::new();
        for (i, (cell, f)) in [
            (Cell::new(0, 0), 3.0),
            (Cell::new(1, 0), 2.0),
            (Cell::new(2, 0), 2.0),
        ]
        .into_iter()
        .enumerate()
        {
            s.nodes.push(SearchNode {
                pos: cell,
                parent: NO_PARENT,
                g: 0.0,
                h: f,
                f,
            });
            s.open.insert(cell, i);
        }

        // (1,0) and (2,0) tie at f = 2; the earlier insertion wins.
        let idx = s.pop_best().unwrap();
        assert_eq!(s.nodes[idx].pos, Cell::new(1, 0));
        // Remaining entries keep their relative order.
        let remaining: Vec<Cell> = s.open.keys().copied().collect();
        assert_eq!(remaining, vec![Cell::new(0, 0), Cell::new(2, 0)]);
    }
}
