use crate::{Direction, PlacedWord, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A numbered clue for one placed word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub word: String,
    pub text: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Clue {
    /// Start cell of the clue's word
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Across and down clue lists, each ordered by clue number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueList {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl ClueList {
    /// Total number of clues across both lists
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// All clues, across first then down
    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.across.iter().chain(self.down.iter())
    }
}

/// Word-to-clue lookup merged from the built-in bank and caller overrides
///
/// Overrides win over built-in entries; a word absent from both gets a
/// generated fallback clue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueBank {
    entries: HashMap<String, String>,
}

impl ClueBank {
    /// Empty bank; every word falls back to a generated clue
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank preloaded with the built-in clues
    pub fn builtin() -> Self {
        let entries = BUILTIN_CLUES
            .iter()
            .map(|&(word, clue)| (word.to_string(), clue.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or override the clue for one word
    pub fn insert(&mut self, word: &str, clue: &str) {
        self.entries
            .insert(word.to_ascii_uppercase(), clue.to_string());
    }

    /// Merge overrides in, later entries winning
    pub fn extend<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (word, clue) in overrides {
            self.insert(&word, &clue);
        }
    }

    /// Clue text for a word, if the bank has one
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Clue text for a word, falling back to a generated description
    pub fn clue_for(&self, word: &str) -> String {
        match self.lookup(word) {
            Some(text) => text.to_string(),
            None => format!("A word meaning {}", word.to_lowercase()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number placements in reading order and split them into clue lists
///
/// Numbers are assigned top-to-bottom, left-to-right; two words starting in
/// the same cell share one number, per crossword convention. Each output
/// list is ordered by number.
pub fn assign_clues(placed: &[PlacedWord], bank: &ClueBank) -> ClueList {
    let mut ordered: Vec<&PlacedWord> = placed.iter().collect();
    ordered.sort_by_key(|p| (p.row, p.col));

    let mut numbers: HashMap<(usize, usize), u32> = HashMap::new();
    let mut next = 1;
    let mut clues = ClueList::default();

    for placement in ordered {
        let number = *numbers
            .entry((placement.row, placement.col))
            .or_insert_with(|| {
                let assigned = next;
                next += 1;
                assigned
            });

        let clue = Clue {
            number,
            word: placement.word.clone(),
            text: bank.clue_for(&placement.word),
            row: placement.row,
            col: placement.col,
            direction: placement.direction,
        };
        match placement.direction {
            Direction::Across => clues.across.push(clue),
            Direction::Down => clues.down.push(clue),
        }
    }

    clues.across.sort_by_key(|c| c.number);
    clues.down.sort_by_key(|c| c.number);
    clues
}

/// Built-in clue bank: seasonal, holiday, and everyday words plus weekday
/// and month names
const BUILTIN_CLUES: &[(&str, &str)] = &[
    // Seasonal
    ("SNOW", "White winter precipitation"),
    ("COLD", "Low temperature feeling"),
    ("FROST", "Ice crystals on windows"),
    ("COZY", "Warm and comfortable"),
    ("WARM", "Pleasant temperature"),
    ("SCARF", "Winter neck garment"),
    ("FIRE", "Keeps you warm in winter"),
    ("COCOA", "Hot chocolate drink"),
    ("BLOOM", "Flowers do this in spring"),
    ("RAIN", "Water from clouds"),
    ("GREEN", "Color of spring grass"),
    ("BIRDS", "They sing in the morning"),
    ("FRESH", "New and clean"),
    ("SUNNY", "Bright and cheerful weather"),
    ("GARDEN", "Place to grow flowers"),
    ("TULIP", "Spring flower from Holland"),
    ("BEACH", "Sandy shore by water"),
    ("SWIM", "Activity in water"),
    ("PICNIC", "Outdoor meal"),
    ("RELAX", "Rest and unwind"),
    ("BREEZE", "Gentle wind"),
    ("FUN", "Enjoyable time"),
    ("LEAVES", "They fall in autumn"),
    ("CRISP", "Fresh autumn air"),
    ("APPLE", "Red fruit, popular in fall"),
    ("HARVEST", "Gathering crops"),
    ("GOLDEN", "Color of autumn leaves"),
    ("COOL", "Pleasantly cold"),
    ("AUTUMN", "Fall season"),
    // Holidays
    ("PARTY", "Celebration gathering"),
    ("CHEERS", "Toast at celebrations"),
    ("HAPPY", "Feeling of joy"),
    ("YEAR", "365 days"),
    ("LOVE", "Deep affection"),
    ("HEART", "Symbol of love"),
    ("ROSES", "Romantic flowers"),
    ("SWEET", "Sugar taste"),
    ("BUNNY", "Easter animal"),
    ("EGGS", "Easter hunt items"),
    ("SPRING", "Season after winter"),
    ("JOY", "Great happiness"),
    ("FLAG", "National symbol"),
    ("FREE", "Liberty"),
    ("PRIDE", "National feeling"),
    ("STARS", "Lights in the night sky"),
    ("CANDY", "Sweet treats"),
    ("TREAT", "Special reward"),
    ("PUMPKIN", "Orange fall vegetable"),
    ("THANKS", "Gratitude"),
    ("FAMILY", "Loved ones at home"),
    ("FEAST", "Large meal"),
    ("TURKEY", "Thanksgiving bird"),
    ("GIFTS", "Presents"),
    ("CHEER", "Holiday happiness"),
    ("TREE", "Christmas decoration"),
    ("MERRY", "Happy, festive"),
    ("SANTA", "Gift giver at Christmas"),
    // Positive words
    ("SMILE", "Happy facial expression"),
    ("HOPE", "Positive expectation"),
    ("PEACE", "Calm and quiet"),
    ("KIND", "Caring and gentle"),
    ("FRIEND", "Close companion"),
    ("CARE", "Look after someone"),
    ("GOOD", "Positive quality"),
    // Days and months
    ("SUNDAY", "First day of the week"),
    ("MONDAY", "Start of work week"),
    ("TUESDAY", "Second work day"),
    ("WEDNESDAY", "Middle of the week"),
    ("THURSDAY", "Fourth work day"),
    ("FRIDAY", "Last work day"),
    ("SATURDAY", "Weekend day"),
    ("JANUARY", "First month"),
    ("FEBRUARY", "Shortest month"),
    ("MARCH", "Spring begins"),
    ("APRIL", "Showers month"),
    ("MAY", "Fifth month"),
    ("JUNE", "Start of summer"),
    ("JULY", "Independence month"),
    ("AUGUST", "Late summer month"),
    ("SEPTEMBER", "Back to school month"),
    ("OCTOBER", "Halloween month"),
    ("NOVEMBER", "Thanksgiving month"),
    ("DECEMBER", "Holiday month"),
];
