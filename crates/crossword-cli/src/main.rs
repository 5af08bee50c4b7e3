//! Command-line crossword puzzle generator
//!
//! Reads words from arguments or a file, places them on a grid, and prints
//! the puzzle (or its JSON form for downstream renderers).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossword_core::{project, ClueBank, Generator, GeneratorConfig, Puzzle};

#[derive(Parser, Debug)]
#[command(name = "crossword")]
#[command(version, about = "Generate a crossword puzzle from a word list", long_about = None)]
struct Cli {
    /// Words to place on the grid
    words: Vec<String>,

    /// File with one word per line; `#` starts a comment
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// JSON file mapping words to clue text, overriding built-in clues
    #[arg(long)]
    clues_file: Option<PathBuf>,

    /// Width and height of the square grid
    #[arg(long, default_value_t = 12)]
    grid_size: usize,

    /// Maximum number of words to place
    #[arg(long, default_value_t = 15)]
    max_words: usize,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the puzzle as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the filled letters instead of the blank puzzle
    #[arg(long)]
    solution: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut words = cli.words.clone();
    if let Some(path) = &cli.words_file {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        words.extend(parse_word_lines(&contents));
    }

    let mut bank = ClueBank::builtin();
    if let Some(path) = &cli.clues_file {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| format!("invalid clue file {}: {}", path.display(), e))?;
        bank.extend(overrides);
    }

    let config = GeneratorConfig {
        grid_size: cli.grid_size,
        max_words: cli.max_words,
    };
    let mut generator = match cli.seed {
        Some(seed) => Generator::with_config_and_seed(config, seed),
        None => Generator::with_config(config),
    };

    let puzzle = generator
        .generate(&words, &bank)
        .map_err(|e| e.to_string())?;

    if cli.json {
        let out = serde_json::to_string_pretty(&puzzle).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        print_puzzle(&puzzle, cli.solution);
    }
    Ok(())
}

/// Split a words file into entries, skipping blanks and comments
fn parse_word_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| {
            let entry = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            }
            .trim();
            if entry.is_empty() {
                None
            } else {
                Some(entry.to_string())
            }
        })
        .collect()
}

fn print_puzzle(puzzle: &Puzzle, solution: bool) {
    if solution {
        print!("{}", puzzle.grid);
    } else {
        // Blank puzzle view: numbered start cells, open boxes for the rest
        // of each word's path, dots for blocked cells.
        let cells = project(&puzzle.grid, &puzzle.clues);
        for line in &cells {
            let row: Vec<String> = line
                .iter()
                .map(|cell| {
                    if cell.is_empty {
                        ".".to_string()
                    } else {
                        match cell.number {
                            Some(number) => number.to_string(),
                            None => "_".to_string(),
                        }
                    }
                })
                .map(|mark| format!("{:>2}", mark))
                .collect();
            println!("{}", row.join(" "));
        }
    }

    if !puzzle.clues.across.is_empty() {
        println!("\nAcross");
        for clue in &puzzle.clues.across {
            println!("  {}. {} ({})", clue.number, clue.text, clue.word.len());
        }
    }
    if !puzzle.clues.down.is_empty() {
        println!("\nDown");
        for clue in &puzzle.clues.down {
            println!("  {}. {} ({})", clue.number, clue.text, clue.word.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_lines_skips_comments_and_blanks() {
        let contents = "SUN\n# themed words\nMOON  # our neighbor\n\n  STARS  \n";
        assert_eq!(parse_word_lines(contents), vec!["SUN", "MOON", "STARS"]);
    }

    #[test]
    fn test_parse_word_lines_empty_file() {
        assert!(parse_word_lines("# nothing here\n\n").is_empty());
    }
}
