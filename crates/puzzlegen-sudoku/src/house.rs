use puzzlegen_core::GridPos;

/// A Sudoku house: a row, a column or a 3×3 box.
///
/// Each digit appears at most once in every house of a valid grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row, 0-8 from the top.
    Row {
        /// Row index (0-8).
        row: usize,
    },
    /// A column, 0-8 from the left.
    Column {
        /// Column index (0-8).
        col: usize,
    },
    /// A 3×3 box, numbered 0-8 left to right, top to bottom.
    Box {
        /// Box index (0-8).
        index: usize,
    },
}

impl House {
    /// All houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::Row { row: i };
            all[i + 9] = Self::Column { col: i };
            all[i + 18] = Self::Box { index: i };
            i += 1;
        }
        all
    };

    /// The row, column and box containing `pos`.
    #[must_use]
    pub const fn containing(pos: GridPos) -> [Self; 3] {
        [
            Self::Row { row: pos.row },
            Self::Column { col: pos.col },
            Self::Box {
                index: pos.row / 3 * 3 + pos.col / 3,
            },
        ]
    }

    /// The nine cells of this house.
    pub fn positions(self) -> impl Iterator<Item = GridPos> {
        (0..9).map(move |i| match self {
            Self::Row { row } => GridPos::new(row, i),
            Self::Column { col } => GridPos::new(i, col),
            Self::Box { index } => GridPos::new(index / 3 * 3 + i / 3, index % 3 * 3 + i % 3),
        })
    }
}
