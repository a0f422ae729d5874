//! Manhattan distance estimate of remaining moves.
//!
//! Only tiles 1-8 are counted. Each slide moves exactly one tile by one cell,
//! so the sum changes by exactly one per move: the estimate is admissible
//! and consistent, and A* never needs to reopen a closed state.

use crate::puzzle::{Board, Position, BLANK, SIZE};

/// Sum of each tile's taxicab distance to its goal cell
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(index, &value)| {
            let here = Position::new(index / SIZE, index % SIZE);
            let target = value as usize - 1;
            here.manhattan(Position::new(target / SIZE, target % SIZE))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::try_from(grid).unwrap()
    }

    #[test]
    fn test_goal_is_zero() {
        assert_eq!(manhattan_distance(&Board::goal()), 0);
    }

    #[test]
    fn test_one_move_from_goal() {
        let b = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(manhattan_distance(&b), 1);
    }

    #[test]
    fn test_known_distances() {
        // 8:3 1:1 2:2 6:2 5:2
        let b = board([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        assert_eq!(manhattan_distance(&b), 10);

        let b = board([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        assert_eq!(manhattan_distance(&b), 21);
    }

    #[test]
    fn test_agrees_with_goal_positions() {
        let b = board([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        let expected: u32 = (1..=8u8)
            .map(|v| {
                b.position_of(v)
                    .unwrap()
                    .manhattan(Board::goal_position(v).unwrap())
            })
            .sum();
        assert_eq!(manhattan_distance(&b), expected);
    }

    #[test]
    fn test_changes_by_one_per_slide() {
        let b = board([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        let h = manhattan_distance(&b) as i64;
        for (_, next) in b.neighbors() {
            assert_eq!((manhattan_distance(&next) as i64 - h).abs(), 1);
        }
    }
}
