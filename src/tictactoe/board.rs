//! Grid state representation and basic queries

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the 3x3 grid
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player (and the mark it places)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

/// Snapshot of the nine cells, indexed row-major (`row * 3 + col`).
///
/// Search derives new states from old ones and never mutates a state it has
/// already handed out, so states can be hashed into a visited set and compared
/// by value. The type is `Copy` since it is only nine bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        BoardState { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored. The remaining characters must be exactly nine
    /// cells: `X` or `x`, `O`, `o` or `0`, and `.`, `_` or `-` for empty.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not nine or a character is not a
    /// valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Nine character label, e.g. `XO..X...O`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Iterate over empty positions in ascending order
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Lowest empty position, or `None` on a full board
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == Cell::Empty)
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `player`'s mark at `pos` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is off the board or already marked.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<BoardState, crate::Error> {
        if pos >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        Ok(self.with_mark(pos, player))
    }

    /// Copy of the board with `player` written at `pos`, without checking the
    /// cell. Callers must only pass empty in-range positions.
    #[must_use = "with_mark returns a new board state; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, player: Player) -> BoardState {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let base = row * 3;
            writeln!(
                f,
                " {} | {} | {}",
                self.cells[base].to_char(),
                self.cells[base + 1].to_char(),
                self.cells[base + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
