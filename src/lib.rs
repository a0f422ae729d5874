//! Optimal solver for the 3x3 sliding tile puzzle.
//!
//! This crate finds a shortest slide sequence from any arrangement of
//! tiles 1-8 and a blank to `[[1,2,3],[4,5,6],[7,8,0]]`, using A* search
//! with the Manhattan distance heuristic.

pub mod error;
pub mod expansion;
pub mod heuristic;
pub mod puzzle;
pub mod shuffle;
pub mod solver;

// Re-export main types
pub use error::{PuzzleError, Result};
pub use expansion::{expand, SearchNode};
pub use heuristic::manhattan_distance;
pub use puzzle::{Board, Direction, Position};
pub use shuffle::{random_neighbor, shuffle, DEFAULT_SHUFFLE_MOVES};
pub use solver::{
    reconstruct_path, solve, solve_grid, solve_with_config, SearchStats, Solution, SolverConfig,
    Step,
};
