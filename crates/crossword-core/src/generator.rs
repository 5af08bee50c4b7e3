use crate::{assign_clues, ClueBank, Direction, Grid, PlacedWord, Position, Puzzle};

/// Shortest word the placement search will accept
pub const MIN_WORD_LEN: usize = 3;

/// Random positions tried before an unplaceable word is dropped
const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    /// Maximum number of words placed on one grid
    pub max_words: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 12,
            max_words: 15,
        }
    }
}

impl GeneratorConfig {
    /// Reject configurations that cannot hold a puzzle
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.grid_size < MIN_WORD_LEN {
            return Err(GenerateError::GridTooSmall(self.grid_size));
        }
        if self.max_words == 0 {
            return Err(GenerateError::ZeroWordCap);
        }
        Ok(())
    }
}

/// Errors from an invalid generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Grid too small to hold even the shortest legal word
    GridTooSmall(usize),
    /// A word cap of zero leaves nothing to place
    ZeroWordCap,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::GridTooSmall(size) => write!(
                f,
                "grid size {} cannot hold a {}-letter word",
                size, MIN_WORD_LEN
            ),
            GenerateError::ZeroWordCap => write!(f, "word cap must be at least 1"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Crossword puzzle generator
///
/// Owns the grid for the duration of one placement run. Words are placed
/// longest first: the first word seeds the grid center, every later word
/// either crosses an already-placed word or falls back to a bounded number
/// of random positions. Words that fit nowhere are dropped silently.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Create a seeded generator with custom configuration
    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Place as many words as fit on a fresh grid
    ///
    /// Returns the filled grid and one record per placed word, in placement
    /// order. An input that leaves no valid words yields an empty grid and
    /// no placements.
    pub fn place<S: AsRef<str>>(
        &mut self,
        words: &[S],
    ) -> Result<(Grid, Vec<PlacedWord>), GenerateError> {
        self.config.validate()?;

        let candidates = self.valid_words(words);
        let mut grid = Grid::new(self.config.grid_size);
        let mut placed: Vec<PlacedWord> = Vec::new();

        for word in candidates {
            if placed.len() >= self.config.max_words {
                break;
            }

            if let Some((start, direction)) = self.find_placement(&grid, &word, &placed) {
                let placement = PlacedWord {
                    row: start.row,
                    col: start.col,
                    direction,
                    word,
                };
                write_word(&mut grid, &placement);
                placed.push(placement);
            }
        }

        Ok((grid, placed))
    }

    /// Generate a complete puzzle: placement plus numbered clues
    pub fn generate<S: AsRef<str>>(
        &mut self,
        words: &[S],
        bank: &ClueBank,
    ) -> Result<Puzzle, GenerateError> {
        let (grid, placed) = self.place(words)?;
        let clues = assign_clues(&placed, bank);
        Ok(Puzzle { grid, clues })
    }

    /// Normalize the input list and order it longest first
    ///
    /// Ties keep input order; longer words anchor the puzzle better, so they
    /// are attempted before short ones.
    fn valid_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut valid: Vec<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| w.len() >= MIN_WORD_LEN && w.len() <= self.config.grid_size)
            .collect();
        valid.sort_by(|a, b| b.len().cmp(&a.len()));
        valid
    }

    /// Find a start cell and direction for a word, or give up
    fn find_placement(
        &mut self,
        grid: &Grid,
        word: &str,
        placed: &[PlacedWord],
    ) -> Option<(Position, Direction)> {
        let size = self.config.grid_size;
        let len = word.len();

        // The first word seeds the grid horizontally near the center so
        // every later word has something to cross.
        if placed.is_empty() {
            return Some((Position::new(size / 2, (size - len) / 2), Direction::Across));
        }

        if let Some(found) = best_intersection(grid, word, placed, size) {
            return Some(found);
        }

        // No crossing fits; try random positions before giving up.
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let direction = if self.rng.next_usize(2) == 0 {
                Direction::Across
            } else {
                Direction::Down
            };
            let (max_row, max_col) = match direction {
                Direction::Across => (size - 1, size - len),
                Direction::Down => (size - len, size - 1),
            };
            let start = Position::new(
                self.rng.next_usize(max_row + 1),
                self.rng.next_usize(max_col + 1),
            );
            if can_place(grid, word, start, direction) {
                return Some((start, direction));
            }
        }

        None
    }
}

/// Uppercase a raw word and strip anything that is not a letter
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Best-scoring crossing of an already-placed word
///
/// Every matching letter pair between the candidate and a placed word
/// yields one perpendicular start position; feasible positions are scored
/// by closeness to the grid center and ties go to the first one found.
fn best_intersection(
    grid: &Grid,
    word: &str,
    placed: &[PlacedWord],
    size: usize,
) -> Option<(Position, Direction)> {
    let letters: Vec<char> = word.chars().collect();
    let mut best: Option<(i64, Position, Direction)> = None;

    for anchor in placed {
        for (i, &letter) in letters.iter().enumerate() {
            for (j, other) in anchor.word.chars().enumerate() {
                if letter != other {
                    continue;
                }

                // Shift the candidate so its letter i lands on the anchor's
                // letter j, running perpendicular to the anchor.
                let (row, col) = match anchor.direction {
                    Direction::Across => {
                        (anchor.row as i64 - i as i64, anchor.col as i64 + j as i64)
                    }
                    Direction::Down => {
                        (anchor.row as i64 + j as i64, anchor.col as i64 - i as i64)
                    }
                };
                if row < 0 || col < 0 {
                    continue;
                }

                let start = Position::new(row as usize, col as usize);
                let direction = anchor.direction.perpendicular();
                if !can_place(grid, word, start, direction) {
                    continue;
                }

                let score = center_score(start, size);
                match best {
                    Some((best_score, _, _)) if best_score >= score => {}
                    _ => best = Some((score, start, direction)),
                }
            }
        }
    }

    best.map(|(_, start, direction)| (start, direction))
}

/// Placements closer to the grid center score higher
fn center_score(start: Position, size: usize) -> i64 {
    let distance =
        (2 * start.row as i64 - size as i64).abs() + (2 * start.col as i64 - size as i64).abs();
    200 - distance
}

/// Check whether a word fits at a position without breaking crossword rules
///
/// Cells along the path must be empty or already hold the matching letter.
/// Empty path cells must not sit flush against an unrelated parallel word,
/// and the cells capping both ends must be empty so no word gets extended.
fn can_place(grid: &Grid, word: &str, start: Position, direction: Direction) -> bool {
    let size = grid.size();
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len();

    match direction {
        Direction::Across if start.col + len > size => return false,
        Direction::Down if start.row + len > size => return false,
        _ => {}
    }

    for (i, &letter) in letters.iter().enumerate() {
        let (r, c) = match direction {
            Direction::Across => (start.row, start.col + i),
            Direction::Down => (start.row + i, start.col),
        };

        match grid.get(Position::new(r, c)) {
            Some(existing) if existing != letter => return false,
            // Crossing an existing word at a matching letter; neighbors of
            // this cell belong to that word and need no check.
            Some(_) => continue,
            None => {}
        }

        match direction {
            Direction::Across => {
                if r > 0 && conflicts(grid.get(Position::new(r - 1, c)), letter) {
                    return false;
                }
                if r + 1 < size && conflicts(grid.get(Position::new(r + 1, c)), letter) {
                    return false;
                }
            }
            Direction::Down => {
                if c > 0 && conflicts(grid.get(Position::new(r, c - 1)), letter) {
                    return false;
                }
                if c + 1 < size && conflicts(grid.get(Position::new(r, c + 1)), letter) {
                    return false;
                }
            }
        }
    }

    match direction {
        Direction::Across => {
            if start.col > 0 && grid.get(Position::new(start.row, start.col - 1)).is_some() {
                return false;
            }
            if start.col + len < size
                && grid.get(Position::new(start.row, start.col + len)).is_some()
            {
                return false;
            }
        }
        Direction::Down => {
            if start.row > 0 && grid.get(Position::new(start.row - 1, start.col)).is_some() {
                return false;
            }
            if start.row + len < size
                && grid.get(Position::new(start.row + len, start.col)).is_some()
            {
                return false;
            }
        }
    }

    true
}

fn conflicts(cell: Option<char>, letter: char) -> bool {
    matches!(cell, Some(existing) if existing != letter)
}

/// Write a placement's letters onto the grid
fn write_word(grid: &mut Grid, placement: &PlacedWord) {
    for (i, letter) in placement.word.chars().enumerate() {
        grid.set(placement.cell(i), letter);
    }
}

/// Simple PRNG for no-std compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
