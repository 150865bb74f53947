//! Piece shapes, directions and the preset boards.
//!
//! Pieces have no identity of their own: a piece is whatever set of cells
//! carries its label on a given board.

use std::fmt;

/// A (row, col) cell position, row 0 at the top.
pub type Pos = (usize, usize);

/// A piece label as it appears in board text.
pub type Label = char;

/// Text used for an empty cell.
pub const EMPTY: char = '.';

/// One-cell step directions, in move-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order moves are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (row, col) delta of one step.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Translates a position one step, or `None` if it leaves a
    /// `width` x `height` board.
    #[inline]
    pub fn step(self, (row, col): Pos, width: usize, height: usize) -> Option<Pos> {
        let (dr, dc) = self.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < height && col < width).then_some((row, col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Footprint of a piece: width in columns, height in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

impl Shape {
    /// The distinguished piece that must reach the goal region.
    pub const SQUARE: Shape = Shape::new(2, 2);
    /// One column wide, two rows tall.
    pub const VERTICAL: Shape = Shape::new(1, 2);
    /// Two columns wide, one row tall.
    pub const HORIZONTAL: Shape = Shape::new(2, 1);
    pub const SINGLE: Shape = Shape::new(1, 1);

    /// Every supported shape, in canonical labeling order.
    pub const ALL: [Shape; 4] = [
        Shape::SQUARE,
        Shape::VERTICAL,
        Shape::HORIZONTAL,
        Shape::SINGLE,
    ];

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_supported(self) -> bool {
        Shape::ALL.contains(&self)
    }

    /// Labels handed out to pieces of this shape in canonical signatures.
    ///
    /// The alphabets are disjoint so a signature cell also tells its shape.
    /// The length of the alphabet is the shape's label budget.
    pub const fn canonical_labels(self) -> &'static [char] {
        match (self.width, self.height) {
            (2, 2) => &['A'],
            (1, 2) => &['B', 'C', 'D', 'E'],
            (2, 1) => &['F'],
            _ => &['G', 'H', 'I', 'J'],
        }
    }

    #[inline]
    pub const fn budget(self) -> usize {
        self.canonical_labels().len()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A labeled piece and the cells it occupies on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub label: Label,
    /// Occupied cells in row-major order.
    pub cells: Vec<Pos>,
}

impl Piece {
    /// Returns `(min_row, max_row, min_col, max_col)` of the piece's cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty. Pieces taken from a board always hold at
    /// least one cell.
    pub fn bounds(&self) -> (usize, usize, usize, usize) {
        let (first_row, first_col) = self.cells[0];
        self.cells.iter().fold(
            (first_row, first_row, first_col, first_col),
            |(min_r, max_r, min_c, max_c), &(r, c)| {
                (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c))
            },
        )
    }

    /// Shape of the bounding box.
    pub fn shape(&self) -> Shape {
        let (min_r, max_r, min_c, max_c) = self.bounds();
        Shape::new(max_c - min_c + 1, max_r - min_r + 1)
    }

    /// True if the cells fill the bounding box exactly.
    pub fn is_solid(&self) -> bool {
        let shape = self.shape();
        self.cells.len() == shape.width * shape.height
    }
}

/// Classic opening: the 2x2 piece top center, four verticals, one horizontal.
pub const PRESET_1: &[&str] = &["ABBC", "ABBC", "DEEX", "DYZX", "K..I"];

pub const PRESET_2: &[&str] = &["ABBK", "ABBI", "CCZY", "DXXS", "D..S"];

/// Five horizontal pieces, so the horizontal class overflows its budget.
pub const PRESET_3: &[&str] = &["AAFF", "AABB", "IEEK", "JYYZ", ".SS."];

/// Named preset boards selectable from the command line.
pub const PRESETS: &[(&str, &[&str])] = &[("1", PRESET_1), ("2", PRESET_2), ("3", PRESET_3)];

/// Looks up a preset board by name.
pub fn preset(name: &str) -> Option<&'static [&'static str]> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|&(_, rows)| rows)
}
