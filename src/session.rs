// Grid Session - nine-cell daily board, guess budget, terminal state
//
// Transitions are pure: guess() and give_up() return the successor
// state instead of mutating in place, so a caller can persist every
// intermediate state or replay a session from its move list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::compiler::compile;
use crate::entities::{Domain, GridEntity};
use crate::predicate::evaluate;

/// Cells on the board. Fixed 3x3.
pub const GRID_SIZE: usize = 9;
/// Starting guess budget, one per cell.
pub const STARTING_GUESSES: u8 = 9;

// ============================================================================
// DAILY GRID
// ============================================================================

/// One day's puzzle: three row labels and three column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGrid {
    pub rows: [String; 3],
    pub columns: [String; 3],
}

impl DailyGrid {
    /// Row and column labels governing a cell, row-major from the
    /// top left. None for an out-of-range index.
    pub fn cell_labels(&self, cell: usize) -> Option<(&str, &str)> {
        if cell >= GRID_SIZE {
            return None;
        }
        Some((self.rows[cell / 3].as_str(), self.columns[cell % 3].as_str()))
    }
}

// ============================================================================
// SESSION STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// What a single guess did to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Both the row and column predicates accepted the entity.
    Correct { cell: usize, name: String },
    /// Known entity, wrong for this cell.
    Incorrect,
    /// No entity in the dataset answers to that name.
    UnknownEntity,
    /// Entity already placed somewhere on this board.
    AlreadyUsed,
    /// Out-of-range or already-filled cell.
    InvalidCell,
    /// Session already over; nothing changed.
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSession {
    pub grid: DailyGrid,
    pub domain: Domain,
    pub guesses_left: u8,
    pub board: [Cell; GRID_SIZE],
    /// Canonical names already placed, lowercased.
    pub used: BTreeSet<String>,
}

impl GridSession {
    pub fn new(grid: DailyGrid, domain: Domain) -> Self {
        GridSession {
            grid,
            domain,
            guesses_left: STARTING_GUESSES,
            board: std::array::from_fn(|_| Cell::Empty),
            used: BTreeSet::new(),
        }
    }

    /// The session ends when the guess budget is spent or every cell
    /// is filled.
    pub fn is_over(&self) -> bool {
        self.guesses_left == 0 || self.board.iter().all(|c| !c.is_empty())
    }

    pub fn correct_count(&self) -> usize {
        self.board.iter().filter(|c| !c.is_empty()).count()
    }

    /// Apply one guess. Every non-terminal guess consumes exactly one
    /// unit of budget, whatever its outcome; a guess against a finished
    /// session changes nothing.
    pub fn guess<E: GridEntity>(&self, records: &[E], name: &str, cell: usize) -> (Self, GuessOutcome) {
        if self.is_over() {
            return (self.clone(), GuessOutcome::GameOver);
        }

        let mut next = self.clone();
        next.guesses_left = next.guesses_left.saturating_sub(1);

        if cell >= GRID_SIZE || !self.board[cell].is_empty() {
            return (next, GuessOutcome::InvalidCell);
        }

        let wanted = name.trim().to_lowercase();
        let Some(record) = records.iter().find(|r| r.matches_name(&wanted)) else {
            return (next, GuessOutcome::UnknownEntity);
        };

        let canonical = record.canonical_name().to_string();
        if next.used.contains(&canonical.to_lowercase()) {
            return (next, GuessOutcome::AlreadyUsed);
        }

        if self.cell_accepts(record, cell) {
            next.board[cell] = Cell::Filled(canonical.clone());
            next.used.insert(canonical.to_lowercase());
            (next, GuessOutcome::Correct { cell, name: canonical })
        } else {
            (next, GuessOutcome::Incorrect)
        }
    }

    /// Forfeit: the budget drops to zero and the session is over.
    pub fn give_up(&self) -> Self {
        let mut next = self.clone();
        next.guesses_left = 0;
        next
    }

    /// All entities satisfying both predicates of a cell, for the
    /// endgame reveal.
    pub fn valid_answers<'a, E: GridEntity>(&self, records: &'a [E], cell: usize) -> Vec<&'a str> {
        records
            .iter()
            .filter(|r| self.cell_accepts(*r, cell))
            .map(|r| r.canonical_name())
            .collect()
    }

    fn cell_accepts<E: GridEntity>(&self, record: &E, cell: usize) -> bool {
        let Some((row_label, col_label)) = self.grid.cell_labels(cell) else {
            return false;
        };
        let row = compile(row_label, self.domain);
        let col = compile(col_label, self.domain);
        evaluate(&row, record) && evaluate(&col, record)
    }

    /// Shareable results block: score line plus one "row x col" line
    /// per cell, with a dash for cells that were never filled.
    pub fn share_text(&self) -> String {
        let mut out = format!(
            "{} Grid Results\n{}/{} correct\n\n",
            self.domain.name(),
            self.correct_count(),
            GRID_SIZE
        );
        for (i, cell) in self.board.iter().enumerate() {
            let (row_label, col_label) = self
                .grid
                .cell_labels(i)
                .unwrap_or(("", ""));
            let (guess, mark) = match cell {
                Cell::Filled(name) => (name.as_str(), '\u{2705}'),
                Cell::Empty => ("\u{2014}", '\u{274c}'),
            };
            out.push_str(&format!("{row_label} \u{d7} {col_label}: {guess} {mark}\n"));
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
