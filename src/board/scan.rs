//! Line detection: whole-board scans for runs of identical marks.
//!
//! A run of [`WIN_RUN`] or more consecutive cells holding the queried mark is
//! a hit, on any of four axes. Runs are *not* required to span the full board
//! side - that is what generalizes the classic 3x3 game to larger boards.
//!
//! The two diagonal scans walk from each eligible anchor cell and abort the
//! walk at the first mismatch; partial runs never carry across anchors.

use super::Board;
use crate::core::Mark;

/// Run length that ends a match.
pub const WIN_RUN: usize = 3;

impl Board {
    /// True if some row contains a run of >= [`WIN_RUN`] cells of `mark`,
    /// scanning each row left to right.
    #[must_use]
    pub fn has_row_run(&self, mark: Mark) -> bool {
        for row in 0..self.rows() {
            let mut count = 0;
            for col in 0..self.cols() {
                if self.mark_at(row, col) == mark {
                    count += 1;
                    if count >= WIN_RUN {
                        return true;
                    }
                } else {
                    count = 0;
                }
            }
        }
        false
    }

    /// True if some column contains a run of >= [`WIN_RUN`] cells of `mark`,
    /// scanning each column top to bottom.
    #[must_use]
    pub fn has_col_run(&self, mark: Mark) -> bool {
        for col in 0..self.cols() {
            let mut count = 0;
            for row in 0..self.rows() {
                if self.mark_at(row, col) == mark {
                    count += 1;
                    if count >= WIN_RUN {
                        return true;
                    }
                } else {
                    count = 0;
                }
            }
        }
        false
    }

    /// True if some down-right diagonal contains a run of >= [`WIN_RUN`]
    /// cells of `mark`.
    ///
    /// Walks from every cell that can anchor a full run within bounds; a
    /// mismatch aborts that anchor's walk.
    #[must_use]
    pub fn has_diagonal_run(&self, mark: Mark) -> bool {
        let rows = self.rows() as usize;
        let cols = self.cols() as usize;

        for row in 0..=(rows - WIN_RUN) {
            for col in 0..=(cols - WIN_RUN) {
                let mut count = 0;
                let mut step = 0;
                while row + step < rows && col + step < cols {
                    if self.mark_at((row + step) as u8, (col + step) as u8) == mark {
                        count += 1;
                        if count >= WIN_RUN {
                            return true;
                        }
                    } else {
                        break;
                    }
                    step += 1;
                }
            }
        }
        false
    }

    /// True if some down-left diagonal contains a run of >= [`WIN_RUN`] cells
    /// of `mark`. Mirrored indexing of [`Board::has_diagonal_run`].
    #[must_use]
    pub fn has_anti_diagonal_run(&self, mark: Mark) -> bool {
        let rows = self.rows() as usize;
        let cols = self.cols() as usize;

        for row in 0..=(rows - WIN_RUN) {
            for col in ((WIN_RUN - 1)..cols).rev() {
                let mut count = 0;
                let mut step = 0;
                while row + step < rows && step <= col {
                    if self.mark_at((row + step) as u8, (col - step) as u8) == mark {
                        count += 1;
                        if count >= WIN_RUN {
                            return true;
                        }
                    } else {
                        break;
                    }
                    step += 1;
                }
            }
        }
        false
    }

    /// True if any of the four axis scans finds a run of `mark`. This is the
    /// session's win test for the just-written mark.
    #[must_use]
    pub fn has_any_run(&self, mark: Mark) -> bool {
        self.has_row_run(mark)
            || self.has_col_run(mark)
            || self.has_diagonal_run(mark)
            || self.has_anti_diagonal_run(mark)
    }
}
