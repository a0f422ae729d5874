//! Search nodes and one-slide expansion.

use smallvec::SmallVec;

use crate::heuristic::manhattan_distance;
use crate::puzzle::{Board, Direction};

/// Children produced by one expansion (a 3x3 blank has at most four moves)
pub type Children = SmallVec<[SearchNode; 4]>;

/// A board plus its A* bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    /// Moves taken from the initial board
    pub g: u32,
    /// Manhattan estimate of moves remaining
    pub h: u32,
    /// Key of the parent board; `None` for the initial node
    pub predecessor: Option<Board>,
    /// Slide that produced this node; `None` for the initial node
    pub direction: Option<Direction>,
}

impl SearchNode {
    pub fn initial(board: Board) -> Self {
        Self {
            board,
            g: 0,
            h: manhattan_distance(&board),
            predecessor: None,
            direction: None,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn is_initial(&self) -> bool {
        self.direction.is_none()
    }
}

/// Generate every node one blank slide away from `node`, in `Direction::ALL` order
pub fn expand(node: &SearchNode) -> Children {
    node.board
        .neighbors()
        .map(|(direction, board)| SearchNode {
            board,
            g: node.g + 1,
            h: manhattan_distance(&board),
            predecessor: Some(node.board),
            direction: Some(direction),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(grid: [[u8; 3]; 3]) -> SearchNode {
        SearchNode::initial(Board::try_from(grid).unwrap())
    }

    #[test]
    fn test_initial_node() {
        let n = node([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(n.g, 0);
        assert_eq!(n.h, 1);
        assert_eq!(n.f(), 1);
        assert!(n.is_initial());
        assert_eq!(n.predecessor, None);
    }

    #[test]
    fn test_expand_corner() {
        let parent = SearchNode::initial(Board::goal());
        let children = expand(&parent);
        let dirs: Vec<Direction> = children.iter().filter_map(|c| c.direction).collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_expand_centre_order() {
        let parent = node([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let children = expand(&parent);
        let dirs: Vec<Direction> = children.iter().filter_map(|c| c.direction).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
        assert!(!children.spilled());
    }

    #[test]
    fn test_children_bookkeeping() {
        let mut parent = node([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        parent.g = 7;
        for child in expand(&parent) {
            assert_eq!(child.g, 8);
            assert_eq!(child.h, manhattan_distance(&child.board));
            assert_eq!(child.predecessor, Some(parent.board));
            let dir = child.direction.unwrap();
            assert_eq!(parent.board.slide(dir), Some(child.board));
        }
    }

    #[test]
    fn test_child_count_everywhere() {
        // Slide the blank across every cell of a snake path and check 2..=4 children each time
        let mut board = Board::goal();
        for dir in [
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Up,
        ] {
            let n = expand(&SearchNode::initial(board)).len();
            assert!((2..=4).contains(&n));
            board = board.slide(dir).unwrap();
        }
        assert_eq!(board.blank().unwrap(), crate::puzzle::Position::new(0, 0));
    }
}
