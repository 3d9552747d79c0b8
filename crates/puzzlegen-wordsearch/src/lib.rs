//! Word-search engine.
//!
//! Hides the longest words of a themed pool along six directions, letting words
//! share cells when their letters agree, then fills every remaining cell with a
//! random letter.

pub use self::{
    generator::WordSearchGenerator,
    puzzle::{WordSearchDirection, WordSearchEntry, WordSearchPuzzle},
};

mod generator;
mod puzzle;
