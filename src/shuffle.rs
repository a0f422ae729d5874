//! Random scrambles built from legal slides.
//!
//! Starting at the goal and only ever applying moves from
//! [`Board::neighbors`] keeps every scramble solvable.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::puzzle::Board;

/// Number of random slides used for a default scramble
pub const DEFAULT_SHUFFLE_MOVES: usize = 999;

/// A uniformly chosen board one slide away from `board`
pub fn random_neighbor<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    board
        .neighbors()
        .map(|(_, next)| next)
        .choose(rng)
        .unwrap_or(*board)
}

/// Apply `moves` random slides to the goal board
pub fn shuffle<R: Rng + ?Sized>(moves: usize, rng: &mut R) -> Board {
    (0..moves).fold(Board::goal(), |board, _| random_neighbor(&board, rng))
}
