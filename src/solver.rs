//! A* search over the 8-puzzle state graph.
//!
//! The open set maps each discovered board to its best-known node, and a
//! binary heap orders the frontier by `f`, then `h`, then insertion order.
//! Heap entries left behind when a board is re-scored are skipped lazily.
//! Finalized boards go to the closed set and are never reopened.
//!
//! Without a budget the search always terminates: the reachable half of the
//! permutation space is finite, so unsolvable input drains the frontier and
//! is reported as [`PuzzleError::Unsolvable`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::expansion::{expand, SearchNode};
use crate::puzzle::{Board, Direction};

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum number of node expansions (None = unbounded)
    pub max_expansions: Option<usize>,
    /// Maximum time to search (None = unbounded)
    pub timeout: Option<Duration>,
}

impl SolverConfig {
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// One entry of a solution path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Slide that produced `board`; `None` for the initial board
    pub direction: Option<Direction>,
    pub board: Board,
}

impl Step {
    /// Human-readable move label, empty for the initial board
    pub fn label(&self) -> &'static str {
        self.direction.map_or("", Direction::as_str)
    }
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded
    pub expanded: usize,
    /// Child nodes generated by expansion
    pub generated: usize,
    /// Largest open set seen
    pub max_open: usize,
    pub time_elapsed_ms: u64,
}

/// An optimal path from the initial board to the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Initial board first, goal last
    pub steps: Vec<Step>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn moves(&self) -> Vec<Direction> {
        self.steps.iter().filter_map(|s| s.direction).collect()
    }

    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.steps.iter().map(|s| &s.board)
    }
}

/// Frontier heap entry; ordered so the max-heap pops the smallest `(f, h, seq)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    h: u32,
    seq: u64,
    board: Board,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.h, other.seq).cmp(&(self.f, self.h, self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open and closed sets owned by a single solve call
struct SearchContext {
    /// Best node per open board, tagged with the seq of its live heap entry
    open: HashMap<Board, (SearchNode, u64)>,
    frontier: BinaryHeap<FrontierEntry>,
    closed: HashMap<Board, SearchNode>,
    next_seq: u64,
    stats: SearchStats,
}

impl SearchContext {
    fn new(initial: SearchNode) -> Self {
        let mut ctx = Self {
            open: HashMap::new(),
            frontier: BinaryHeap::new(),
            closed: HashMap::new(),
            next_seq: 0,
            stats: SearchStats::default(),
        };
        ctx.open_node(initial);
        ctx
    }

    fn open_node(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.frontier.push(FrontierEntry {
            f: node.f(),
            h: node.h,
            seq,
            board: node.board,
        });
        self.open.insert(node.board, (node, seq));
        self.stats.max_open = self.stats.max_open.max(self.open.len());
    }

    /// Remove and return the open node with the lowest `(f, h, seq)`
    fn pop_best(&mut self) -> Option<SearchNode> {
        while let Some(entry) = self.frontier.pop() {
            match self.open.get(&entry.board) {
                Some(&(node, seq)) if seq == entry.seq => {
                    self.open.remove(&entry.board);
                    return Some(node);
                }
                _ => continue, // superseded or already closed
            }
        }
        None
    }

    /// Open `child` unless it is closed or an open node already scores strictly better
    fn relax(&mut self, child: SearchNode) {
        if self.closed.contains_key(&child.board) {
            return;
        }
        if let Some((existing, _)) = self.open.get(&child.board) {
            if existing.f() < child.f() {
                return;
            }
        }
        self.open_node(child);
    }
}

/// Solve with no expansion or time budget.
pub fn solve(initial: &Board) -> Result<Solution> {
    solve_with_config(initial, &SolverConfig::default())
}

/// Validate a raw grid at the boundary, then solve it.
pub fn solve_grid(grid: &[Vec<u8>]) -> Result<Solution> {
    let board = Board::from_grid(grid)?;
    solve(&board)
}

/// Find a minimum-length slide sequence from `initial` to the goal.
///
/// Returns `Unsolvable` if the frontier drains, `Exhausted` if
/// `config.max_expansions` is hit, and `Timeout` past `config.timeout`.
/// No partial path is ever returned.
pub fn solve_with_config(initial: &Board, config: &SolverConfig) -> Result<Solution> {
    let start_time = Instant::now();
    let deadline = config.timeout.map(|t| start_time + t);

    let root = SearchNode::initial(*initial);
    debug!("solving from h={}:\n{}", root.h, initial);

    let mut ctx = SearchContext::new(root);

    loop {
        if let Some(deadline) = deadline {
            if Instant::now() > deadline {
                let elapsed_ms = start_time.elapsed().as_millis() as u64;
                debug!(
                    "timed out after {} ms, {} expansions",
                    elapsed_ms, ctx.stats.expanded
                );
                return Err(PuzzleError::Timeout { elapsed_ms });
            }
        }

        let Some(node) = ctx.pop_best() else {
            debug!("frontier drained, {} states closed", ctx.closed.len());
            return Err(PuzzleError::Unsolvable {
                explored: ctx.closed.len(),
            });
        };

        ctx.closed.insert(node.board, node);

        if node.board.is_goal() {
            let steps = reconstruct_path(&ctx.closed, &node.board)?;
            ctx.stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;
            info!(
                "solved in {} moves ({} expanded, {} generated, {} ms)",
                node.g, ctx.stats.expanded, ctx.stats.generated, ctx.stats.time_elapsed_ms
            );
            return Ok(Solution {
                steps,
                stats: ctx.stats,
            });
        }

        if let Some(max) = config.max_expansions {
            if ctx.stats.expanded >= max {
                debug!("expansion budget {} reached", max);
                return Err(PuzzleError::Exhausted {
                    expanded: ctx.stats.expanded,
                });
            }
        }

        ctx.stats.expanded += 1;
        trace!("expand g={} h={} open={}", node.g, node.h, ctx.open.len());

        for child in expand(&node) {
            ctx.stats.generated += 1;
            ctx.relax(child);
        }
    }
}

/// Walk predecessor keys back from `goal` and return the path initial-first.
pub fn reconstruct_path(closed: &HashMap<Board, SearchNode>, goal: &Board) -> Result<Vec<Step>> {
    let mut node = closed.get(goal).ok_or(PuzzleError::BrokenPath)?;
    let mut steps = Vec::with_capacity(node.g as usize + 1);

    loop {
        steps.push(Step {
            direction: node.direction,
            board: node.board,
        });
        if node.is_initial() {
            break;
        }
        // a well-formed chain is never longer than the closed set
        if steps.len() > closed.len() {
            return Err(PuzzleError::BrokenPath);
        }
        let prev = node.predecessor.ok_or(PuzzleError::BrokenPath)?;
        node = closed.get(&prev).ok_or(PuzzleError::BrokenPath)?;
    }

    steps.reverse();
    Ok(steps)
}
