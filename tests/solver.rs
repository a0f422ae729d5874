//! End-to-end checks against a breadth-first search over the full state graph.

use std::collections::{HashMap, VecDeque};

use eight_puzzle::{
    expand, manhattan_distance, shuffle, solve, solve_grid, Board, PuzzleError, SearchNode,
};
use rand::{rngs::StdRng, SeedableRng};

/// Exact distance to the goal for every board reachable from it
fn bfs_distances() -> HashMap<Board, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(Board::goal(), 0);
    queue.push_back(Board::goal());

    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        for (_, next) in board.neighbors() {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn assert_valid_path(start: &Board, solution: &eight_puzzle::Solution) {
    assert_eq!(solution.steps.first().unwrap().board, *start);
    assert_eq!(solution.steps.first().unwrap().label(), "");
    assert!(solution.steps.last().unwrap().board.is_goal());

    for pair in solution.steps.windows(2) {
        let dir = pair[1].direction.expect("non-initial step has a direction");
        assert_eq!(pair[0].board.slide_to(&pair[1].board), Some(dir));
    }
}

#[test]
fn test_reachable_space_size() {
    assert_eq!(bfs_distances().len(), 181_440);
}

#[test]
fn test_heuristic_admissible_and_consistent_everywhere() {
    let dist = bfs_distances();
    for (board, &d) in &dist {
        let h = manhattan_distance(board);
        assert!(h <= d, "h={} exceeds true distance {} for\n{}", h, d, board);
        for (_, next) in board.neighbors() {
            assert!(h <= manhattan_distance(&next) + 1);
        }
    }
}

#[test]
fn test_optimal_on_shuffled_boards() {
    let dist = bfs_distances();
    let mut rng = StdRng::seed_from_u64(89);

    for moves in [1, 2, 5, 10, 20, 50, 200, 999] {
        let start = shuffle(moves, &mut rng);
        let solution = solve(&start).unwrap();
        assert_valid_path(&start, &solution);
        assert_eq!(solution.move_count() as u32, dist[&start]);
    }
}

#[test]
fn test_optimal_on_deepest_boards() {
    let dist = bfs_distances();
    let mut deepest: Vec<Board> = dist
        .iter()
        .filter(|&(_, &d)| d == 31)
        .map(|(b, _)| *b)
        .collect();
    deepest.sort();
    assert_eq!(deepest.len(), 2);

    for start in deepest {
        let solution = solve(&start).unwrap();
        assert_valid_path(&start, &solution);
        assert_eq!(solution.move_count(), 31);
    }
}

#[test]
fn test_replay_reproduces_each_step() {
    let start = Board::try_from([[4, 1, 3], [7, 2, 6], [0, 5, 8]]).unwrap();
    let solution = solve(&start).unwrap();

    let mut board = start;
    for (i, dir) in solution.moves().into_iter().enumerate() {
        board = board.slide(dir).unwrap();
        assert_eq!(board, solution.steps[i + 1].board);
    }
    assert!(board.is_goal());
}

#[test]
fn test_grid_scenarios() {
    let one_move = solve_grid(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
    assert_eq!(one_move.steps.len(), 2);
    assert_eq!(one_move.steps[1].label(), "right");

    let solved = solve_grid(&Board::goal().to_grid()).unwrap();
    assert_eq!(solved.steps.len(), 1);
    assert_eq!(solved.steps[0].label(), "");

    assert!(matches!(
        solve_grid(&[vec![1, 2, 3, 4, 5, 6, 7, 8, 0]]),
        Err(PuzzleError::MalformedInput { .. })
    ));
}

#[test]
fn test_expansion_children_everywhere() {
    for board in bfs_distances().keys().take(2_000) {
        let parent = SearchNode::initial(*board);
        let children = expand(&parent);
        assert!((2..=4).contains(&children.len()));
        for child in &children {
            assert_eq!(child.g, parent.g + 1);
            assert!(board.slide_to(&child.board).is_some());
        }
    }
}

#[test]
fn test_independent_calls_agree() {
    let start = Board::try_from([[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
    let a = solve(&start).unwrap();
    let b = solve(&start).unwrap();
    assert_eq!(a.steps, b.steps);
}
