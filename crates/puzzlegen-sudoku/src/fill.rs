//! Randomized backtracking fill of an empty grid.

use log::trace;
use rand::{Rng, seq::SliceRandom as _};

use crate::{CELL_COUNT, Digit, SudokuGrid};

/// Search state for one cell: its shuffled candidate digits and how many were tried.
#[derive(Debug)]
struct Frame {
    digits: [Digit; 9],
    tried: usize,
}

impl Frame {
    fn new<R: Rng>(rng: &mut R) -> Self {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        Self { digits, tried: 0 }
    }
}

/// Fills every cell in row-major order, trying digits in random order and
/// undoing a cell when none of its remaining digits fits.
///
/// Uses an explicit stack of frames, one per filled cell, instead of recursion.
/// Returns `None` only if the search space is exhausted.
pub(crate) fn fill_solution<R: Rng>(rng: &mut R) -> Option<SudokuGrid> {
    let mut grid = SudokuGrid::new();
    let mut stack = vec![Frame::new(rng)];
    let mut backtracks = 0_usize;

    loop {
        let depth = stack.len();
        let frame = stack.last_mut()?;
        let pos = SudokuGrid::position(depth - 1);
        grid.set(pos, None);

        let next = loop {
            let Some(&digit) = frame.digits.get(frame.tried) else {
                break None;
            };
            frame.tried += 1;
            if grid.can_place(pos, digit) {
                break Some(digit);
            }
        };

        match next {
            Some(digit) => {
                grid.set(pos, Some(digit));
                if depth == CELL_COUNT {
                    trace!("filled grid after {backtracks} backtracks");
                    return Some(grid);
                }
                stack.push(Frame::new(rng));
            }
            None => {
                stack.pop();
                backtracks += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use puzzlegen_core::PuzzleSeed;

    use super::*;

    #[test]
    fn test_fill_is_complete() {
        for phrase in ["one", "two", "three", "four"] {
            let mut rng = PuzzleSeed::from_phrase(phrase).rng();
            let grid = fill_solution(&mut rng).unwrap();
            assert!(grid.is_complete(), "{phrase}:\n{grid}");
        }
    }

    fn fill(phrase: &str) -> SudokuGrid {
        let mut rng = PuzzleSeed::from_phrase(phrase).rng();
        fill_solution(&mut rng).unwrap()
    }

    #[test]
    fn test_fill_depends_on_seed() {
        let a = fill("a");
        let b = fill("b");
        let a_again = fill("a");
        assert_eq!(a, a_again);
        assert_ne!(a, b);
    }
}
