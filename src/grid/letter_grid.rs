//! Letter grid board model
//!
//! The text form of a Flow board: one character per cell, rows separated
//! by newlines. Uppercase letters are heads, lowercase letters are path
//! cells of the same color, and `.` is an empty cell. The letter itself
//! encodes the color (`a`/`A` is color 0).

use std::collections::BTreeMap;
use std::fmt;
use crate::errors::{FlowError, FlowResult};
use crate::grid::shape::GridShape;

/// Character used for an empty cell
pub const EMPTY_CHAR: char = '.';

/// One cell of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Path { color: u8 },
    Head { color: u8 },
}

impl Cell {
    /// Color index, or None for an empty cell
    pub fn color(&self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Path { color } | Cell::Head { color } => Some(*color),
        }
    }

    pub fn is_head(&self) -> bool {
        matches!(self, Cell::Head { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used for this cell in the text form
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Path { color } => (b'a' + color) as char,
            Cell::Head { color } => (b'A' + color) as char,
        }
    }

    /// Parse one cell character
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'a'..='z' => Some(Cell::Path { color: c as u8 - b'a' }),
            'A'..='Z' => Some(Cell::Head { color: c as u8 - b'A' }),
            EMPTY_CHAR => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// A board of cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    shape: GridShape,
    cells: Vec<Cell>,
}

impl LetterGrid {
    /// Create a board from cells in row-major order
    ///
    /// # Returns
    /// The board, or `InvalidGrid` if the cell count does not match the shape
    pub fn new(shape: GridShape, cells: Vec<Cell>) -> FlowResult<Self> {
        if cells.len() != shape.cell_count() {
            return Err(FlowError::InvalidGrid(format!(
                "expected {} cells for a {} grid, got {}",
                shape.cell_count(), shape, cells.len()
            )));
        }
        Ok(LetterGrid { shape, cells })
    }

    /// Parse the text form of a board
    ///
    /// Whitespace is ignored, so both the newline-separated form and a
    /// single run of characters are accepted.
    pub fn parse(text: &str, shape: GridShape) -> FlowResult<Self> {
        let mut cells = Vec::with_capacity(shape.cell_count());
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(c)
                .ok_or_else(|| FlowError::InvalidGrid(format!("unexpected character '{}'", c)))?;
            cells.push(cell);
        }
        LetterGrid::new(shape, cells)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at (row, col), or None outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        Some(self.cells[row * self.shape.cols + col])
    }

    /// Text form: one line per row, no trailing newline
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.shape.cols)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Puzzle form of a solved board: heads stay, everything else is emptied
    pub fn strip(&self) -> LetterGrid {
        let cells = self.cells
            .iter()
            .map(|cell| if cell.is_head() { *cell } else { Cell::Empty })
            .collect();
        LetterGrid { shape: self.shape, cells }
    }

    /// Number of colors, taken as the highest head color plus one
    pub fn num_colors(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_head())
            .filter_map(Cell::color)
            .max()
            .map_or(0, |max| max as usize + 1)
    }

    /// Whether every color on the board has exactly two heads
    pub fn has_valid_heads(&self) -> bool {
        let mut heads: BTreeMap<u8, usize> = BTreeMap::new();
        for cell in &self.cells {
            if let Some(color) = cell.color() {
                *heads.entry(color).or_insert(0) += usize::from(cell.is_head());
            }
        }
        heads.values().all(|&count| count == 2)
    }

    /// Whether every path is laid out legally, allowing unfinished paths
    ///
    /// Path cells may touch at most two cells of their color and must touch
    /// at least one; heads may touch at most one.
    pub fn is_legal(&self) -> bool {
        self.all_cells(|cell, same| match cell {
            Cell::Empty => true,
            Cell::Path { .. } => (1..=2).contains(&same),
            Cell::Head { .. } => same <= 1,
        })
    }

    /// Whether the board is a complete solution
    ///
    /// No cell is empty, every path cell touches exactly two cells of its
    /// color and every head exactly one.
    pub fn is_solved(&self) -> bool {
        self.all_cells(|cell, same| match cell {
            Cell::Empty => false,
            Cell::Path { .. } => same == 2,
            Cell::Head { .. } => same == 1,
        })
    }

    fn all_cells<F>(&self, check: F) -> bool
    where
        F: Fn(Cell, usize) -> bool,
    {
        (0..self.shape.rows).all(|row| {
            (0..self.shape.cols).all(|col| {
                let cell = self.cells[row * self.shape.cols + col];
                check(cell, self.same_color_neighbours(row, col, cell))
            })
        })
    }

    fn same_color_neighbours(&self, row: usize, col: usize, cell: Cell) -> usize {
        let Some(color) = cell.color() else {
            return 0;
        };

        let mut neighbours = Vec::with_capacity(4);
        if row > 0 {
            neighbours.push(self.get(row - 1, col));
        }
        if col > 0 {
            neighbours.push(self.get(row, col - 1));
        }
        neighbours.push(self.get(row + 1, col));
        neighbours.push(self.get(row, col + 1));

        neighbours
            .into_iter()
            .flatten()
            .filter(|n| n.color() == Some(color))
            .count()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "AaaaB\nCccAb\nDdCEb\nEdDeb\neeeeB";

    fn five() -> GridShape {
        GridShape::default()
    }

    #[test]
    fn test_parse_and_render() {
        let grid = LetterGrid::parse(SOLVED, five()).unwrap();

        assert_eq!(grid.get(0, 0), Some(Cell::Head { color: 0 }));
        assert_eq!(grid.get(0, 1), Some(Cell::Path { color: 0 }));
        assert_eq!(grid.get(3, 3), Some(Cell::Path { color: 4 }));
        assert_eq!(grid.get(4, 4), Some(Cell::Head { color: 1 }));
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.render(), SOLVED);
        assert_eq!(grid.to_string(), SOLVED);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let flat = LetterGrid::parse("AaaaB CccAb\r\nDdCEb EdDeb eeeeB\n", five()).unwrap();

        assert_eq!(flat.render(), SOLVED);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(LetterGrid::parse("AaaaB\nCccAb", five()), Err(FlowError::InvalidGrid(_))));
        assert!(matches!(
            LetterGrid::parse("AaaaB\nCc#Ab\nDdCEb\nEdDeb\neeeeB", five()),
            Err(FlowError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_strip_keeps_heads() {
        let grid = LetterGrid::parse(SOLVED, five()).unwrap();
        let puzzle = grid.strip();

        assert_eq!(puzzle.render(), "A...B\nC..A.\nD.CE.\nE.D..\n....B");
        assert_eq!(puzzle.num_colors(), 5);
        assert!(puzzle.has_valid_heads());
        assert!(puzzle.is_legal());
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_solution_is_solved() {
        let grid = LetterGrid::parse(SOLVED, five()).unwrap();

        assert!(grid.is_solved());
        assert!(grid.is_legal());
        assert!(grid.has_valid_heads());
    }

    #[test]
    fn test_broken_path_is_not_solved() {
        // the 'e' path along the bottom row is cut
        let grid = LetterGrid::parse("AaaaB\nCccAb\nDdCEb\nEdDeb\neebeB", five()).unwrap();

        assert!(!grid.is_solved());
        assert!(!grid.is_legal());
    }

    #[test]
    fn test_head_counts() {
        let one_head = LetterGrid::parse("Aa\nbB", GridShape::new(2, 2).unwrap()).unwrap();
        assert!(!one_head.has_valid_heads());

        let pairs = LetterGrid::parse("AA\nBB", GridShape::new(2, 2).unwrap()).unwrap();
        assert!(pairs.has_valid_heads());
        assert!(pairs.is_solved());
    }

    #[test]
    fn test_empty_board_has_no_colors() {
        let empty = LetterGrid::parse("..\n..", GridShape::new(2, 2).unwrap()).unwrap();

        assert_eq!(empty.num_colors(), 0);
        assert!(empty.has_valid_heads());
        assert!(!empty.is_solved());
    }
}
