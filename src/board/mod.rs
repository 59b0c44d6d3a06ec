//! Board model: cell storage and bounds-checked mutation.
//!
//! The board is a flat buffer indexed `row * cols + col`, owned by value and
//! freed with it. Every cell holds either the empty sentinel or a player
//! mark. The single write path records the last mutated cell; occupancy rules
//! live in the session layer, not here.
//!
//! Line detection lives in the `scan` submodule and is exposed as inherent
//! methods on [`Board`].

mod scan;

pub use scan::WIN_RUN;

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::error::GameError;

/// Minimum side length. Anything smaller cannot host a 3-in-a-row.
pub const MIN_SIDE: u8 = 3;

/// Rectangular grid of marks with a configurable empty sentinel.
///
/// Dimensions are 3-255 per side. Cells are read through [`Board::get`]
/// (checked) or [`Board::mark_at`] (panicking) and written only through
/// [`Board::set`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Mark>,
    empty_mark: Mark,
    last_write: Option<(u8, u8)>,
}

impl Board {
    /// Create a board filled with the conventional `'.'` sentinel.
    ///
    /// Panics if either dimension is below [`MIN_SIDE`].
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        Self::with_fill(rows, cols, Mark::EMPTY)
    }

    /// Create a board filled with `fill`, which becomes the empty sentinel.
    ///
    /// Panics if either dimension is below [`MIN_SIDE`].
    #[must_use]
    pub fn with_fill(rows: u8, cols: u8, fill: Mark) -> Self {
        assert!(rows >= MIN_SIDE, "Board needs at least {MIN_SIDE} rows");
        assert!(cols >= MIN_SIDE, "Board needs at least {MIN_SIDE} columns");

        Self {
            rows,
            cols,
            cells: vec![fill; rows as usize * cols as usize],
            empty_mark: fill,
            last_write: None,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// `(rows, cols)` pair.
    #[must_use]
    pub fn dimensions(&self) -> (u8, u8) {
        (self.rows, self.cols)
    }

    /// The sentinel denoting an unoccupied cell.
    #[must_use]
    pub fn empty_mark(&self) -> Mark {
        self.empty_mark
    }

    /// Coordinate of the most recent write, if any since the last reset.
    #[must_use]
    pub fn last_write(&self) -> Option<(u8, u8)> {
        self.last_write
    }

    #[must_use]
    fn in_bounds(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Read a cell, panicking on out-of-bounds coordinates.
    ///
    /// Prefer [`Board::get`] outside hot scan loops.
    #[must_use]
    pub fn mark_at(&self, row: u8, col: u8) -> Mark {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    /// Read a cell, failing with [`GameError::OutOfRange`] on bad coordinates.
    pub fn get(&self, row: u8, col: u8) -> Result<Mark, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Write a mark, failing with [`GameError::OutOfRange`] on bad
    /// coordinates. Records the coordinate as the last write.
    ///
    /// No occupancy validation happens here: overwriting a non-empty cell is
    /// the caller's rule to enforce.
    pub fn set(&mut self, row: u8, col: u8, mark: Mark) -> Result<(), GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let index = self.index(row, col);
        self.cells[index] = mark;
        self.last_write = Some((row, col));
        Ok(())
    }

    /// Refill every cell with the current sentinel and clear the last-write
    /// record. Idempotent.
    pub fn reset(&mut self) {
        self.cells.fill(self.empty_mark);
        self.last_write = None;
    }

    /// Replace the sentinel with `fill`, then refill every cell with it.
    pub fn reset_with(&mut self, fill: Mark) {
        self.empty_mark = fill;
        self.reset();
    }

    /// Discard contents and reallocate to the new dimensions, filled with
    /// `fill` (which becomes the sentinel).
    ///
    /// Panics if either dimension is below [`MIN_SIDE`].
    pub fn resize(&mut self, rows: u8, cols: u8, fill: Mark) {
        assert!(rows >= MIN_SIDE, "Board needs at least {MIN_SIDE} rows");
        assert!(cols >= MIN_SIDE, "Board needs at least {MIN_SIDE} columns");

        self.rows = rows;
        self.cols = cols;
        self.empty_mark = fill;
        self.cells = vec![fill; rows as usize * cols as usize];
        self.last_write = None;
    }

    /// True when no cell holds the sentinel.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&self.empty_mark)
    }

    /// Coordinate of the cell nearest the geometric center. For an even
    /// dimension the smaller of the two central indices is chosen.
    #[must_use]
    pub fn center_cell(&self) -> (u8, u8) {
        let mut center_row = self.rows / 2;
        let mut center_col = self.cols / 2;

        if self.rows % 2 == 0 {
            center_row -= 1;
        }
        if self.cols % 2 == 0 {
            center_col -= 1;
        }

        (center_row, center_col)
    }

    /// Mark stored at [`Board::center_cell`].
    #[must_use]
    pub fn center_mark(&self) -> Mark {
        let (row, col) = self.center_cell();
        self.cells[self.index(row, col)]
    }
}

/// Renders rows of space-separated mark characters, newline-separated, with
/// the sentinel printed literally. No trailing newline after the final row.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[self.index(row, col)])?;
            }
        }
        Ok(())
    }
}
