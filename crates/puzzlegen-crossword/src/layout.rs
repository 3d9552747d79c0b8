//! In-progress crossword state and the placement rules applied to it.

use std::cmp::Reverse;

use puzzlegen_core::{GridPos, LetterGrid, PuzzleSeed, WordEntry};
use rand::{Rng, seq::SliceRandom as _};

use crate::{Clues, CrosswordPuzzle, Direction, PlacedWord};

/// Candidates tried in shuffled order before the rest are tried by score.
const TOP_CANDIDATES: usize = 5;
/// Manhattan radius within which an existing word counts as crowding a candidate.
const CROWDING_RADIUS: isize = 2;
/// Same-direction words closer than this (in rows or columns) must not overlap in span.
const MIN_PARALLEL_DISTANCE: isize = 2;

const BASE_SCORE: isize = 100;
const CENTER_DISTANCE_PENALTY: isize = 2;
const CROWDING_PENALTY: isize = 15;
const BALANCE_BONUS: isize = 10;

/// A word ready for placement: the supplied entry plus its grid letters.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) entry: WordEntry,
    pub(crate) letters: Vec<char>,
}

impl Candidate {
    pub(crate) fn new(entry: WordEntry) -> Self {
        let letters = entry.letters();
        Self { entry, letters }
    }

    pub(crate) fn len(&self) -> usize {
        self.letters.len()
    }
}

/// A prospective start cell and direction. Coordinates may lie off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) row: isize,
    pub(crate) col: isize,
    pub(crate) direction: Direction,
}

impl Slot {
    fn cell(self, i: usize) -> (isize, isize) {
        match self.direction {
            Direction::Horizontal => (self.row, self.col + signed(i)),
            Direction::Vertical => (self.row + signed(i), self.col),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredSlot {
    pub(crate) slot: Slot,
    pub(crate) score: isize,
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn grid_pos(row: isize, col: isize) -> Option<GridPos> {
    Some(GridPos::new(
        usize::try_from(row).ok()?,
        usize::try_from(col).ok()?,
    ))
}

/// Smallest Manhattan distance between a cell of `placed` and a cell of the
/// `len`-letter word at `slot`.
fn min_distance(placed: &PlacedWord, slot: Slot, len: usize) -> isize {
    let mut min = isize::MAX;
    for pos in placed.cells() {
        let (row, col) = (signed(pos.row), signed(pos.col));
        for i in 0..len {
            let (r, c) = slot.cell(i);
            min = min.min((r - row).abs() + (c - col).abs());
        }
    }
    min
}

/// Grid and placed words threaded through one crossword build.
#[derive(Debug)]
pub(crate) struct Layout {
    grid: LetterGrid,
    words: Vec<PlacedWord>,
    next_number: usize,
}

impl Layout {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            grid: LetterGrid::new(size),
            words: Vec::new(),
            next_number: 1,
        }
    }

    pub(crate) fn placed_count(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn contains_word(&self, candidate: &Candidate) -> bool {
        let key = candidate.entry.dedup_key();
        self.words.iter().any(|w| w.word.to_lowercase() == key)
    }

    fn size(&self) -> isize {
        signed(self.grid.size())
    }

    fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        grid_pos(row, col).and_then(|pos| self.grid.get(pos))
    }

    /// Places `candidate` horizontally across the middle row, centered.
    ///
    /// Returns `false` if the word is longer than the grid.
    pub(crate) fn place_anchor(&mut self, candidate: &Candidate) -> bool {
        let size = self.grid.size();
        if candidate.len() > size {
            return false;
        }
        let slot = Slot {
            row: signed(size / 2),
            col: signed((size - candidate.len()) / 2),
            direction: Direction::Horizontal,
        };
        self.place(candidate, slot);
        true
    }

    /// Places `candidate` across an existing word if any intersection is legal.
    ///
    /// The five best-scoring intersections are tried in random order, then the
    /// rest in score order. A word sharing no letter with the grid is not placed.
    pub(crate) fn try_place<R: Rng>(&mut self, candidate: &Candidate, rng: &mut R) -> bool {
        let slots = self.intersections(&candidate.letters);
        let split = slots.len().min(TOP_CANDIDATES);
        let mut top = slots[..split].to_vec();
        top.shuffle(rng);

        let chosen = top
            .iter()
            .chain(&slots[split..])
            .map(|scored| scored.slot)
            .find(|&slot| self.can_place(&candidate.letters, slot));
        match chosen {
            Some(slot) => {
                self.place(candidate, slot);
                true
            }
            None => false,
        }
    }

    /// Every perpendicular alignment of `letters` on a shared letter of a placed
    /// word, best score first. Equal scores keep enumeration order.
    pub(crate) fn intersections(&self, letters: &[char]) -> Vec<ScoredSlot> {
        let mut slots = Vec::new();
        for placed in &self.words {
            let placed_letters = placed.letters();
            let (row, col) = (signed(placed.start_row), signed(placed.start_col));
            for (i, &letter) in letters.iter().enumerate() {
                for (j, _) in placed_letters
                    .iter()
                    .enumerate()
                    .filter(|&(_, &other)| other == letter)
                {
                    let slot = match placed.direction {
                        Direction::Horizontal => Slot {
                            row: row - signed(i),
                            col: col + signed(j),
                            direction: Direction::Vertical,
                        },
                        Direction::Vertical => Slot {
                            row: row + signed(j),
                            col: col - signed(i),
                            direction: Direction::Horizontal,
                        },
                    };
                    let score = self.score(slot, letters.len());
                    slots.push(ScoredSlot { slot, score });
                }
            }
        }
        slots.sort_by_key(|scored| Reverse(scored.score));
        slots
    }

    /// Heuristic rank of a slot: prefers the center, sparse neighborhoods, and
    /// the under-represented direction.
    pub(crate) fn score(&self, slot: Slot, len: usize) -> isize {
        let center = self.size() / 2;
        let distance = (slot.row - center).abs() + (slot.col - center).abs();

        let crowding = self
            .words
            .iter()
            .filter(|placed| min_distance(placed, slot, len) <= CROWDING_RADIUS)
            .count();

        let horizontal = self
            .words
            .iter()
            .filter(|w| w.direction == Direction::Horizontal)
            .count();
        let vertical = self.words.len() - horizontal;
        let balances = match slot.direction {
            Direction::Horizontal => vertical > horizontal,
            Direction::Vertical => horizontal > vertical,
        };

        let mut score = BASE_SCORE - CENTER_DISTANCE_PENALTY * distance;
        score -= CROWDING_PENALTY * signed(crowding);
        if balances {
            score += BALANCE_BONUS;
        }
        score
    }

    /// Checks every placement rule for `letters` at `slot`.
    pub(crate) fn can_place(&self, letters: &[char], slot: Slot) -> bool {
        self.fits_in_bounds(letters.len(), slot)
            && self.letters_agree(letters, slot)
            && self.ends_are_open(letters.len(), slot)
            && self.clear_of_parallel_words(letters.len(), slot)
            && self.avoids_stray_crossings(letters, slot)
    }

    fn fits_in_bounds(&self, len: usize, slot: Slot) -> bool {
        let (last_row, last_col) = slot.cell(len.saturating_sub(1));
        len > 0
            && slot.row >= 0
            && slot.col >= 0
            && last_row < self.size()
            && last_col < self.size()
    }

    fn letters_agree(&self, letters: &[char], slot: Slot) -> bool {
        letters.iter().enumerate().all(|(i, &letter)| {
            let (row, col) = slot.cell(i);
            self.letter_at(row, col)
                .is_none_or(|existing| existing == letter)
        })
    }

    /// The cells just before and after the word must be blank or off-grid, and
    /// the word must not run into the open end of an existing word.
    fn ends_are_open(&self, len: usize, slot: Slot) -> bool {
        let (before_row, before_col) = match slot.direction {
            Direction::Horizontal => (slot.row, slot.col - 1),
            Direction::Vertical => (slot.row - 1, slot.col),
        };
        let (after_row, after_col) = slot.cell(len);
        if self.letter_at(before_row, before_col).is_some()
            || self.letter_at(after_row, after_col).is_some()
        {
            return false;
        }

        (0..len).all(|i| {
            let (row, col) = slot.cell(i);
            self.letter_at(row, col).is_some() || !self.is_end_cap(row, col)
        })
    }

    /// Returns `true` if `(row, col)` is the cell right before or after a placed word.
    fn is_end_cap(&self, row: isize, col: isize) -> bool {
        self.words.iter().any(|placed| {
            let (start_row, start_col) = (signed(placed.start_row), signed(placed.start_col));
            let len = signed(placed.length);
            match placed.direction {
                Direction::Horizontal => {
                    row == start_row && (col == start_col - 1 || col == start_col + len)
                }
                Direction::Vertical => {
                    col == start_col && (row == start_row - 1 || row == start_row + len)
                }
            }
        })
    }

    fn clear_of_parallel_words(&self, len: usize, slot: Slot) -> bool {
        let len = signed(len);
        self.words
            .iter()
            .filter(|placed| placed.direction == slot.direction)
            .all(|placed| {
                let (placed_row, placed_col) = (signed(placed.start_row), signed(placed.start_col));
                let placed_len = signed(placed.length);
                let (gap, start, placed_start) = match slot.direction {
                    Direction::Horizontal => ((slot.row - placed_row).abs(), slot.col, placed_col),
                    Direction::Vertical => ((slot.col - placed_col).abs(), slot.row, placed_row),
                };
                let end = start + len - 1;
                let placed_end = placed_start + placed_len - 1;
                gap >= MIN_PARALLEL_DISTANCE || end < placed_start || start > placed_end
            })
    }

    /// A new letter must not be wedged between two letters on its perpendicular
    /// sides unless those letters belong to a real perpendicular word.
    fn avoids_stray_crossings(&self, letters: &[char], slot: Slot) -> bool {
        let crossing = slot.direction.perpendicular();
        letters.iter().enumerate().all(|(i, &letter)| {
            let (row, col) = slot.cell(i);
            let existing = self.letter_at(row, col);
            if existing == Some(letter) {
                return true;
            }
            let (side_a, side_b) = match slot.direction {
                Direction::Horizontal => ((row - 1, col), (row + 1, col)),
                Direction::Vertical => ((row, col - 1), (row, col + 1)),
            };
            let flanked = self.letter_at(side_a.0, side_a.1).is_some()
                && self.letter_at(side_b.0, side_b.1).is_some();
            !(flanked && existing.is_none())
                || self.is_part_of_word(side_a, crossing)
                || self.is_part_of_word(side_b, crossing)
        })
    }

    fn is_part_of_word(&self, (row, col): (isize, isize), direction: Direction) -> bool {
        grid_pos(row, col).is_some_and(|pos| {
            self.words
                .iter()
                .any(|placed| placed.direction == direction && placed.covers(pos))
        })
    }

    fn place(&mut self, candidate: &Candidate, slot: Slot) {
        for (i, &letter) in candidate.letters.iter().enumerate() {
            let (row, col) = slot.cell(i);
            if let Some(pos) = grid_pos(row, col) {
                self.grid[pos] = Some(letter);
            }
        }
        let (start_row, start_col) = (
            usize::try_from(slot.row).unwrap_or_default(),
            usize::try_from(slot.col).unwrap_or_default(),
        );
        self.words.push(PlacedWord {
            word: candidate.entry.word.clone(),
            clue: candidate.entry.clue.clone(),
            start_row,
            start_col,
            direction: slot.direction,
            number: self.next_number,
            length: candidate.len(),
        });
        self.next_number += 1;
    }

    pub(crate) fn into_puzzle(self, seed: PuzzleSeed) -> CrosswordPuzzle {
        let clues = Clues::from_words(&self.words);
        CrosswordPuzzle {
            grid: self.grid,
            placed_words: self.words,
            clues,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use puzzlegen_core::WordEntry;

    use super::*;

    fn candidate(word: &str) -> Candidate {
        Candidate::new(WordEntry::new(word, format!("clue for {word}"), 1))
    }

    fn slot(row: isize, col: isize, direction: Direction) -> Slot {
        Slot {
            row,
            col,
            direction,
        }
    }

    fn fits(layout: &Layout, word: &str, slot: Slot) -> bool {
        layout.can_place(&candidate(word).letters, slot)
    }

    fn layout_with_anchor(size: usize, word: &str) -> Layout {
        let mut layout = Layout::new(size);
        assert!(layout.place_anchor(&candidate(word)));
        layout
    }

    #[test]
    fn test_anchor_is_centered() {
        let layout = layout_with_anchor(11, "PLANET");
        let anchor = &layout.words[0];
        assert_eq!((anchor.start_row, anchor.start_col), (5, 2));
        assert_eq!(anchor.direction, Direction::Horizontal);
        assert_eq!(anchor.number, 1);
        assert_eq!(layout.grid.get(GridPos::new(5, 7)), Some('T'));
    }

    #[test]
    fn test_anchor_longer_than_grid_is_rejected() {
        let mut layout = Layout::new(4);
        assert!(!layout.place_anchor(&candidate("ELEPHANT")));
        assert_eq!(layout.placed_count(), 0);
    }

    #[test]
    fn test_intersections_are_perpendicular_and_aligned() {
        let layout = layout_with_anchor(11, "PLANET");
        let slots = layout.intersections(&candidate("TAN").letters);
        assert!(!slots.is_empty());
        for scored in &slots {
            assert_eq!(scored.slot.direction, Direction::Vertical);
        }
        // T of TAN on T of PLANET (col 7), A on A (col 4), N on N (col 5)
        let mut cols: Vec<_> = slots.iter().map(|s| s.slot.col).collect();
        cols.sort_unstable();
        assert_eq!(cols, [4, 5, 7]);
        let on_t = slots.iter().find(|s| s.slot.col == 7).unwrap();
        assert_eq!(on_t.slot.row, 5);
        assert!(slots.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_score_prefers_center_and_balance() {
        let layout = layout_with_anchor(11, "PLANET");
        // one horizontal word placed, so vertical slots get the balance bonus
        let near = layout.score(slot(3, 5, Direction::Vertical), 3);
        let far = layout.score(slot(0, 0, Direction::Vertical), 3);
        assert!(near < BASE_SCORE + BALANCE_BONUS);
        assert!(far < near);

        let vertical = layout.score(slot(8, 5, Direction::Vertical), 2);
        let horizontal = layout.score(slot(8, 5, Direction::Horizontal), 2);
        assert_eq!(vertical - horizontal, BALANCE_BONUS);
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds_and_conflicts() {
        let layout = layout_with_anchor(11, "PLANET");
        assert!(!fits(&layout, "TAN", slot(-1, 7, Direction::Vertical)));
        assert!(!fits(&layout, "TOTEM", slot(8, 7, Direction::Vertical)));
        // X would overwrite the anchor's T
        assert!(!fits(&layout, "AXE", slot(4, 7, Direction::Vertical)));
        assert!(fits(&layout, "TAN", slot(5, 7, Direction::Vertical)));
    }

    #[test]
    fn test_can_place_rejects_touching_ends() {
        let layout = layout_with_anchor(11, "PLANET");
        // continuing the anchor's row right after its last letter
        assert!(!fits(&layout, "SO", slot(5, 8, Direction::Horizontal)));
        // vertical word passing through the cell right after the anchor
        assert!(!fits(&layout, "ODD", slot(4, 8, Direction::Vertical)));
    }

    #[test]
    fn test_can_place_rejects_close_parallel_words() {
        let layout = layout_with_anchor(11, "PLANET");
        assert!(!fits(&layout, "LOT", slot(6, 3, Direction::Horizontal)));
        assert!(fits(&layout, "LOT", slot(7, 3, Direction::Horizontal)));
    }

    #[test]
    fn test_try_place_skips_words_without_shared_letters() {
        let mut layout = layout_with_anchor(11, "PLANET");
        let mut rng = PuzzleSeed::from_phrase("skip").rng();
        assert!(!layout.try_place(&candidate("OX"), &mut rng));
        assert!(layout.try_place(&candidate("TAN"), &mut rng));
        assert_eq!(layout.placed_count(), 2);
        assert_eq!(layout.words[1].number, 2);
        assert!(layout.contains_word(&candidate("tan")));
    }
}
