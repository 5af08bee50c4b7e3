//! Core crossword engine: word placement, clue numbering, and display
//! projection.
//!
//! The engine takes a flat list of candidate words, places as many as fit on
//! a bounded square grid, and numbers the result into across/down clue lists
//! following standard crossword convention. Where the words come from and how
//! the puzzle is drawn are the caller's business.
//!
//! ```
//! use crossword_core::{ClueBank, Generator};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator
//!     .generate(&["SUN", "MOON", "STARS"], &ClueBank::builtin())
//!     .unwrap();
//! println!("{}", puzzle.grid);
//! ```

mod clues;
mod display;
mod generator;

pub use clues::{assign_clues, Clue, ClueBank, ClueList};
pub use display::{project, DisplayCell};
pub use generator::{GenerateError, Generator, GeneratorConfig, MIN_WORD_LEN};

use serde::{Deserialize, Serialize};

/// Placement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The orthogonal direction, which a crossing word must take
    pub fn perpendicular(&self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A cell coordinate on the grid, row-major ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square letter grid
///
/// Cells hold either an uppercase letter or nothing. The grid is only
/// mutated while a [`Generator`] is placing words; the finished grid is
/// handed to the caller by value and exposes no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid of `size` x `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Width and height of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at a position, or `None` for an empty cell
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row * self.size + pos.col] = Some(letter);
    }

    /// Number of filled cells
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when no cell holds a letter
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(letter) => write!(f, "{}", letter)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One successfully placed word, before clue assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl PlacedWord {
    /// Start cell of the word
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Grid cell holding the letter at `offset` within the word
    pub fn cell(&self, offset: usize) -> Position {
        match self.direction {
            Direction::Across => Position::new(self.row, self.col + offset),
            Direction::Down => Position::new(self.row + offset, self.col),
        }
    }
}

/// A finished puzzle: the filled grid plus numbered clue lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub clues: ClueList,
}

impl Puzzle {
    /// Width and height of the puzzle grid
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Total number of placed words
    pub fn word_count(&self) -> usize {
        self.clues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Across).unwrap(),
            "\"across\""
        );
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }

    #[test]
    fn test_grid_display_marks_empty_cells() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(1, 1), 'B');

        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["A . .", ". B .", ". . ."]);
    }

    #[test]
    fn test_placed_word_cells_follow_direction() {
        let across = PlacedWord {
            word: "SUN".to_string(),
            row: 2,
            col: 4,
            direction: Direction::Across,
        };
        assert_eq!(across.cell(2), Position::new(2, 6));

        let down = PlacedWord {
            word: "SUN".to_string(),
            row: 2,
            col: 4,
            direction: Direction::Down,
        };
        assert_eq!(down.cell(2), Position::new(4, 4));
    }

    #[test]
    fn test_perpendicular_flips_direction() {
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
    }
}
