//! Basic example of using the crossword engine

use crossword_core::{project, ClueBank, Generator};

fn main() {
    // Generate a puzzle from a handful of themed words
    println!("Generating a 12x12 crossword...\n");
    let words = [
        "HARVEST", "PUMPKIN", "AUTUMN", "LEAVES", "GOLDEN", "CRISP", "APPLE", "COZY", "FIRE",
        "SUN",
    ];

    let mut generator = Generator::new();
    let puzzle = match generator.generate(&words, &ClueBank::builtin()) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            return;
        }
    };

    println!("Filled grid:");
    println!("{}", puzzle.grid);

    // Show some stats
    println!("Words placed: {}", puzzle.word_count());
    println!("Letters used: {}", puzzle.grid.letter_count());

    // Clue lists as they would appear under the printed puzzle
    println!("\nAcross:");
    for clue in &puzzle.clues.across {
        println!("  {}. {} ({})", clue.number, clue.text, clue.word.len());
    }
    println!("\nDown:");
    for clue in &puzzle.clues.down {
        println!("  {}. {} ({})", clue.number, clue.text, clue.word.len());
    }

    // The display projection a renderer would consume
    let cells = project(&puzzle.grid, &puzzle.clues);
    let starts = cells
        .iter()
        .flatten()
        .filter(|cell| cell.number.is_some())
        .count();
    println!("\nNumbered start cells: {}", starts);
}
