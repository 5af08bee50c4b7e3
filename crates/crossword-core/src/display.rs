use crate::{ClueList, Grid, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cell of the render-ready projection of a finished puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCell {
    /// Letter the solved cell holds, `None` for a blocked cell
    pub letter: Option<char>,
    /// Clue number shown in the cell's corner, only on start cells
    pub number: Option<u32>,
    /// True for cells no word passes through
    pub is_empty: bool,
}

/// Project a finished grid and its clues into a per-cell view for renderers
///
/// Numbers land only on cells that start a word, across clues checked before
/// down clues. Pure and read-only; safe to recompute any number of times.
pub fn project(grid: &Grid, clues: &ClueList) -> Vec<Vec<DisplayCell>> {
    let mut numbers: HashMap<(usize, usize), u32> = HashMap::new();
    for clue in clues.iter() {
        numbers.entry((clue.row, clue.col)).or_insert(clue.number);
    }

    let size = grid.size();
    let mut cells = Vec::with_capacity(size);
    for row in 0..size {
        let mut line = Vec::with_capacity(size);
        for col in 0..size {
            let letter = grid.get(Position::new(row, col));
            line.push(DisplayCell {
                letter,
                number: numbers.get(&(row, col)).copied(),
                is_empty: letter.is_none(),
            });
        }
        cells.push(line);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClueBank, Generator, Position};

    #[test]
    fn test_numbers_appear_only_on_start_cells() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator
            .generate(&["SUN", "MOON", "STARS"], &ClueBank::builtin())
            .unwrap();

        let cells = project(&puzzle.grid, &puzzle.clues);

        for (row, line) in cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let clue_here = puzzle
                    .clues
                    .iter()
                    .find(|c| (c.row, c.col) == (row, col));
                match clue_here {
                    Some(clue) => assert_eq!(cell.number, Some(clue.number)),
                    None => assert_eq!(cell.number, None),
                }
            }
        }
    }

    #[test]
    fn test_empty_flag_mirrors_grid() {
        let mut generator = Generator::with_seed(8);
        let puzzle = generator
            .generate(&["PEACE", "APPLE"], &ClueBank::builtin())
            .unwrap();

        let cells = project(&puzzle.grid, &puzzle.clues);
        assert_eq!(cells.len(), puzzle.size());
        for (row, line) in cells.iter().enumerate() {
            assert_eq!(line.len(), puzzle.size());
            for (col, cell) in line.iter().enumerate() {
                let letter = puzzle.grid.get(Position::new(row, col));
                assert_eq!(cell.letter, letter);
                assert_eq!(cell.is_empty, letter.is_none());
            }
        }
    }

    #[test]
    fn test_projection_is_repeatable() {
        let mut generator = Generator::with_seed(21);
        let puzzle = generator
            .generate(&["FRIEND", "FAMILY", "FEAST"], &ClueBank::builtin())
            .unwrap();

        let first = project(&puzzle.grid, &puzzle.clues);
        let second = project(&puzzle.grid, &puzzle.clues);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_puzzle_projects_blank_cells() {
        let mut generator = Generator::with_seed(3);
        let puzzle = generator
            .generate::<&str>(&[], &ClueBank::builtin())
            .unwrap();

        let cells = project(&puzzle.grid, &puzzle.clues);
        assert!(cells
            .iter()
            .flatten()
            .all(|c| c.is_empty && c.letter.is_none() && c.number.is_none()));
    }
}
