//! Breadth-first shortest-path search over canonical board states.
//!
//! Key points:
//! - Visited set keyed by [`Signature`], so boards that differ only by
//!   swapping same-shaped pieces are expanded once
//! - FxHashSet for faster state deduplication
//! - Every discovered board is stored once in an arena with a back-pointer
//!   to its parent; the path is rebuilt only when a goal is found
//! - Progress is reported through a [`Progress`] observer rather than printed

use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::canonical::Signature;
use crate::grid::Board;
use crate::moves::all_moves;
use crate::pieces::{Direction, Label};

/// Expansions between progress reports unless configured otherwise.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// One move of a solution and the board it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: Label,
    pub direction: Direction,
    pub board: Board,
}

/// Counters describing how much of the state space a search touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards taken off the frontier and expanded.
    pub expanded: usize,
    /// Distinct canonical states seen, including the initial board.
    pub discovered: usize,
    /// Boards waiting on the frontier.
    pub frontier: usize,
}

/// Outcome of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Shortest move sequence to a goal, or `None` if no goal is reachable.
    /// Empty when the initial board is already a goal.
    pub path: Option<Vec<Step>>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    /// The goal board reached by the last step.
    ///
    /// `None` when no goal is reachable, and also when the path is empty
    /// because the initial board was already a goal.
    pub fn final_board(&self) -> Option<&Board> {
        self.path.as_deref()?.last().map(|step| &step.board)
    }
}

/// Receives periodic progress while a search runs.
pub trait Progress {
    fn on_progress(&mut self, stats: &SearchStats);
}

impl<F: FnMut(&SearchStats)> Progress for F {
    fn on_progress(&mut self, stats: &SearchStats) {
        self(stats)
    }
}

/// Ignores progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_progress(&mut self, _stats: &SearchStats) {}
}

/// Reports progress as `info` log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn on_progress(&mut self, stats: &SearchStats) {
        info!(
            "explored {} states, queue size: {}, visited size: {}",
            stats.expanded, stats.frontier, stats.discovered
        );
    }
}

/// How a board was reached from the board at `node` in the arena.
#[derive(Clone, Copy)]
struct Parent {
    node: usize,
    label: Label,
    direction: Direction,
}

struct Node {
    board: Board,
    parent: Option<Parent>,
}

/// Breadth-first solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    progress_interval: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many expansions pass between progress reports; 0 disables them.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn solve(&self, initial: &Board) -> SearchResult {
        self.solve_with(initial, &mut NoProgress)
    }

    /// Finds a shortest move sequence from `initial` to a goal board.
    ///
    /// Moves are generated in label then direction order and boards are
    /// expanded first in, first out, so among equally short solutions the
    /// result is always the same one.
    pub fn solve_with<P: Progress>(&self, initial: &Board, progress: &mut P) -> SearchResult {
        let mut stats = SearchStats {
            discovered: 1,
            ..SearchStats::default()
        };

        if initial.is_goal() {
            debug!("initial board is already solved");
            return SearchResult {
                path: Some(Vec::new()),
                stats,
            };
        }

        let mut nodes = vec![Node {
            board: initial.clone(),
            parent: None,
        }];
        let mut visited: FxHashSet<Signature> = FxHashSet::default();
        visited.insert(initial.signature());
        let mut frontier: VecDeque<usize> = VecDeque::from([0]);

        while let Some(current) = frontier.pop_front() {
            stats.expanded += 1;
            stats.frontier = frontier.len();
            stats.discovered = visited.len();
            if self.progress_interval > 0 && stats.expanded % self.progress_interval == 0 {
                progress.on_progress(&stats);
            }

            for next in all_moves(&nodes[current].board) {
                // skip boards equivalent to one already seen
                if !visited.insert(next.board.signature()) {
                    continue;
                }

                let reached_goal = next.board.is_goal();
                nodes.push(Node {
                    board: next.board,
                    parent: Some(Parent {
                        node: current,
                        label: next.label,
                        direction: next.direction,
                    }),
                });

                if reached_goal {
                    stats.discovered = visited.len();
                    stats.frontier = frontier.len();
                    let path = trace_path(&nodes, nodes.len() - 1);
                    debug!(
                        "solved in {} moves after expanding {} states ({} visited)",
                        path.len(),
                        stats.expanded,
                        stats.discovered
                    );
                    return SearchResult {
                        path: Some(path),
                        stats,
                    };
                }

                frontier.push_back(nodes.len() - 1);
            }
        }

        stats.discovered = visited.len();
        stats.frontier = 0;
        debug!(
            "no solution after expanding {} states ({} visited)",
            stats.expanded, stats.discovered
        );
        SearchResult { path: None, stats }
    }
}

/// Finds a shortest solution with the default configuration.
pub fn solve(initial: &Board) -> SearchResult {
    Solver::default().solve(initial)
}

/// Follows back-pointers from `goal` to the root, returning the steps in
/// play order.
fn trace_path(nodes: &[Node], goal: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut index = goal;

    while let Some(parent) = nodes[index].parent {
        steps.push(Step {
            label: parent.label,
            direction: parent.direction,
            board: nodes[index].board.clone(),
        });
        index = parent.node;
    }

    steps.reverse();
    steps
}
