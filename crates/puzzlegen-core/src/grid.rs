//! Square character grids shared by the word games.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use serde::{Serialize, Serializer};

/// A cell coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPos {
    /// Row index, growing downward.
    pub row: usize,
    /// Column index, growing rightward.
    pub col: usize,
}

impl GridPos {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A square grid of optional letters.
///
/// Blank cells are `None`. The crossword engine leaves blanks in its output; the
/// word-search engine fills every blank before returning.
///
/// # Examples
///
/// ```
/// use puzzlegen_core::{GridPos, LetterGrid};
///
/// let mut grid = LetterGrid::new(3);
/// grid[GridPos::new(1, 2)] = Some('Q');
/// assert_eq!(grid.get(GridPos::new(1, 2)), Some('Q'));
/// assert_eq!(grid.get(GridPos::new(0, 0)), None);
/// assert_eq!(grid.to_string(), "...\n..Q\n...\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// Creates an all-blank `size`×`size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` for a blank or out-of-range cell.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<char> {
        if pos.row < self.size && pos.col < self.size {
            self.cells[pos.row * self.size + pos.col]
        } else {
            None
        }
    }

    /// Returns `true` if the cell at `pos` is blank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_blank(&self, pos: GridPos) -> bool {
        self[pos].is_none()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| GridPos::new(row, col)))
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of non-blank cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Index<GridPos> for LetterGrid {
    type Output = Option<char>;

    fn index(&self, pos: GridPos) -> &Self::Output {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos:?} outside {size}x{size} grid",
            size = self.size
        );
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl IndexMut<GridPos> for LetterGrid {
    fn index_mut(&mut self, pos: GridPos) -> &mut Self::Output {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos:?} outside {size}x{size} grid",
            size = self.size
        );
        &mut self.cells[pos.row * self.size + pos.col]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serializes as a list of rows, blanks as `null`.
impl Serialize for LetterGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
