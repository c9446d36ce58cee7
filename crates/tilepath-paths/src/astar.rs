//! A* shortest-path search over a bounded grid.
//!
//! The algorithm reproduces the reference grid editor's search exactly in
//! its default configuration: Manhattan heuristic in both movement modes,
//! 1.0 / 1.4 step costs, earliest-insertion tie-breaking, a permanent
//! closed set, and the permissive diagonal corner rule (a diagonal step is
//! refused only when *both* flanking orthogonal cells are blocked).

use std::collections::HashSet;

use log::{debug, warn};
use tilepath_core::Cell;

use crate::error::SearchError;
use crate::movement::{self, Movement};
use crate::search::{NO_PARENT, Search, SearchNode};
use crate::traits::{BlockedGrid, GridView};

impl Search {
    /// Compute a minimum-cost path from `start` to `goal`.
    ///
    /// Returns the path ordered **goal to start**, both endpoints
    /// included, or `Ok(None)` when the goal is unreachable. Out-of-bounds
    /// endpoints and degenerate grids are reported as errors rather than
    /// silently yielding no path.
    pub fn find_path<G: BlockedGrid>(
        &mut self,
        grid: &G,
        start: Cell,
        goal: Cell,
        movement: Movement,
    ) -> Result<Option<Vec<Cell>>, SearchError> {
        let width = grid.width();
        let height = grid.height();
        if width < 1 || height < 1 {
            return Err(SearchError::EmptyGrid { width, height });
        }
        for cell in [start, goal] {
            if cell.x < 0 || cell.x >= width || cell.y < 0 || cell.y >= height {
                return Err(SearchError::OutOfBounds {
                    cell,
                    width,
                    height,
                });
            }
        }

        self.reset();

        let h0 = self.config().heuristic.estimate(start, goal);
        self.nodes.push(SearchNode {
            pos: start,
            parent: NO_PARENT,
            g: 0.0,
            h: h0,
            f: h0,
        });
        self.open.insert(start, 0);

        let mut iterations = 0usize;
        while !self.open.is_empty() {
            if let Some(limit) = self.config().max_iterations {
                if iterations >= limit {
                    warn!("search from {start} to {goal} hit the iteration budget of {limit}");
                    return Err(SearchError::IterationBudgetExceeded { limit });
                }
            }
            iterations += 1;

            // Lowest-f frontier node, earliest insertion on ties.
            let Some(current) = self.pop_best() else {
                break;
            };
            let current_pos = self.nodes[current].pos;

            if current_pos == goal {
                let path = self.reconstruct(current);
                debug!(
                    "path from {start} to {goal}: {} cells, {iterations} iterations",
                    path.len()
                );
                return Ok(Some(path));
            }

            self.closed.insert(current_pos, current);
            let current_g = self.nodes[current].g;

            for &offset in movement.offsets() {
                let next = current_pos + offset;
                if next.x < 0 || next.x >= width || next.y < 0 || next.y >= height {
                    continue;
                }
                if grid.is_blocked(next) {
                    continue;
                }
                // Corner rule: a diagonal step is refused only when both
                // orthogonal cells flanking it are blocked. One blocked
                // flank does not stop the move.
                if movement::is_diagonal(offset)
                    && grid.is_blocked(Cell::new(next.x, current_pos.y))
                    && grid.is_blocked(Cell::new(current_pos.x, next.y))
                {
                    continue;
                }

                let tentative = current_g + movement::step_cost(offset);

                if let Some(ci) = self.closed.get(&next).copied() {
                    if !self.config().reopen_closed || tentative >= self.nodes[ci].g {
                        continue;
                    }
                    // Opt-in reopening: re-admit the cell with its cheaper
                    // cost. Rejoins the frontier as a fresh insertion.
                    self.closed.remove(&next);
                    let node = &mut self.nodes[ci];
                    node.g = tentative;
                    node.f = tentative + node.h;
                    node.parent = current;
                    self.open.insert(next, ci);
                    continue;
                }

                match self.open.get(&next).copied() {
                    None => {
                        let h = self.config().heuristic.estimate(next, goal);
                        let idx = self.nodes.len();
                        self.nodes.push(SearchNode {
                            pos: next,
                            parent: current,
                            g: tentative,
                            h,
                            f: tentative + h,
                        });
                        self.open.insert(next, idx);
                    }
                    Some(ni) if tentative < self.nodes[ni].g => {
                        // Cheaper route to a frontier cell: overwrite g, f
                        // and parent in place, keeping its frontier slot.
                        let node = &mut self.nodes[ni];
                        node.g = tentative;
                        node.f = tentative + node.h;
                        node.parent = current;
                    }
                    Some(_) => {}
                }
            }
        }

        debug!("no path from {start} to {goal} after {iterations} iterations");
        Ok(None)
    }

    /// Walk parent links from the goal node back to the start. The result
    /// is ordered goal-to-start by contract; it is never reversed.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.nodes[ci].pos);
            ci = self.nodes[ci].parent;
        }
        path
    }
}

/// One-shot convenience wrapper around [`Search::find_path`] for callers
/// holding a raw blocked-cell set.
pub fn find_path(
    start: Cell,
    goal: Cell,
    width: i32,
    height: i32,
    blocked: &HashSet<Cell>,
    movement: Movement,
) -> Result<Option<Vec<Cell>>, SearchError> {
    let view = GridView::new(width, height, blocked);
    Search::new().find_path(&view, start, goal, movement)
}
