//! Crossword engine.
//!
//! Builds a small interlocking crossword from a themed word pool:
//!
//! 1. ask the [`WordSupply`](puzzlegen_words::WordSupply) for candidates,
//! 2. pick a length-balanced subset, longest first,
//! 3. center the first word that fits across the middle row,
//! 4. greedily attach the rest at scored perpendicular intersections.
//!
//! Placement guarantees that every filled cell belongs to a placed word, that no
//! word's ends touch another letter along its own line, and that the grid is a
//! single connected group of letters.

pub use self::{
    generator::{CrosswordGenerator, required_words},
    puzzle::{Clue, Clues, CrosswordPuzzle, Direction, PlacedWord},
};

mod generator;
mod layout;
mod puzzle;
#[cfg(test)]
mod testing;
