//! Board representation for the 3x3 sliding tile puzzle.
//!
//! A [`Board`] is a fixed nine-cell array in row-major order, `0` marking the
//! blank. It is `Copy` and hashes on the full grid, so it doubles as the key
//! for the solver's open and closed sets. On the wire it is a nested
//! `[[u8; 3]; 3]` JSON array, validated on deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// Side length of the grid
pub const SIZE: usize = 3;

/// Number of cells on the grid
pub const CELLS: usize = SIZE * SIZE;

/// Value marking the empty cell
pub const BLANK: u8 = 0;

const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, BLANK];

/// Direction the blank travels during a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset applied to the blank
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell coordinates on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Neighbouring cell in `direction`, if it is on the grid
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < SIZE && col < SIZE {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Taxicab distance between two cells
    pub fn manhattan(self, other: Position) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

/// A puzzle configuration: tiles 1-8 plus one blank, each exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// The solved arrangement `[[1,2,3],[4,5,6],[7,8,0]]`
    pub fn goal() -> Self {
        Self { cells: GOAL }
    }

    /// Build from a row-major cell array, checking every value appears once
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen
                .get_mut(value as usize)
                .ok_or_else(|| PuzzleError::malformed(format!("value {} out of range 0..=8", value)))?;
            if *slot {
                return Err(PuzzleError::malformed(format!("value {} appears twice", value)));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    /// Build from nested rows, rejecting anything that is not 3x3 over {0..8}
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self> {
        if grid.len() != SIZE {
            return Err(PuzzleError::malformed(format!(
                "expected {} rows, got {}",
                SIZE,
                grid.len()
            )));
        }

        let mut cells = [BLANK; CELLS];
        for (r, row) in grid.iter().enumerate() {
            if row.len() != SIZE {
                return Err(PuzzleError::malformed(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    SIZE
                )));
            }
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }

        Self::from_cells(cells)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(SIZE).map(|row| row.to_vec()).collect()
    }

    pub fn get(&self, position: Position) -> u8 {
        self.cells[position.index()]
    }

    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Cell currently holding `value`
    pub fn position_of(&self, value: u8) -> Result<Position> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(Position::from_index)
            .ok_or(PuzzleError::ValueNotFound { value })
    }

    /// Cell holding `value` in the solved arrangement
    pub fn goal_position(value: u8) -> Result<Position> {
        match value {
            BLANK => Ok(Position::from_index(CELLS - 1)),
            1..=8 => Ok(Position::from_index(value as usize - 1)),
            _ => Err(PuzzleError::ValueNotFound { value }),
        }
    }

    pub fn blank(&self) -> Result<Position> {
        self.position_of(BLANK)
    }

    /// Slide the blank one cell in `direction`; `None` if that leaves the grid
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let blank = self.blank().ok()?;
        let target = blank.step(direction)?;
        let mut cells = self.cells;
        cells.swap(blank.index(), target.index());
        Some(Board { cells })
    }

    /// Every board one slide away, in `Direction::ALL` order
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, Board)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.slide(dir).map(|board| (dir, board)))
    }

    /// Direction of the single slide turning `self` into `other`, if any
    pub fn slide_to(&self, other: &Board) -> Option<Direction> {
        self.neighbors()
            .find(|(_, board)| board == other)
            .map(|(dir, _)| dir)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = PuzzleError;

    fn try_from(grid: Vec<Vec<u8>>) -> Result<Self> {
        Board::from_grid(&grid)
    }
}

impl TryFrom<[[u8; SIZE]; SIZE]> for Board {
    type Error = PuzzleError;

    fn try_from(grid: [[u8; SIZE]; SIZE]) -> Result<Self> {
        let mut cells = [BLANK; CELLS];
        for (r, row) in grid.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Board::from_cells(cells)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_grid()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == BLANK { "_".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
