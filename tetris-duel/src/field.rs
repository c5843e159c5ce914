use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Empty = 0,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    // Landing projection of the current piece. Only appears in rendered snapshots,
    // never in a board's own grid.
    Ghost,
}

impl CellType {
    /// Colors a piece or a penalty cell can take
    pub const PALETTE: [CellType; 5] = [
        CellType::Red,
        CellType::Green,
        CellType::Blue,
        CellType::Yellow,
        CellType::Magenta,
    ];

    pub fn random_color(rng: &mut impl Rng) -> CellType {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }

    pub fn is_empty(self) -> bool {
        self == CellType::Empty
    }
}

/// Grid of placed cells, row 0 at the top
///
/// Every row always holds exactly `cols` cells and there are always `rows` rows.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Field {
    // Field width
    cols: usize,
    // Field height
    rows: usize,
    // Field cells
    cells: Vec<Vec<CellType>>,
}

impl Field {
    pub fn new(cols: usize, rows: usize) -> Self {
        Field {
            cols,
            rows,
            cells: vec![vec![CellType::Empty; cols]; rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row(&self, y: usize) -> &[CellType] {
        &self.cells[y]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(CellType::Empty);
        }
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell_type: CellType) {
        if x >= self.cols || y >= self.rows {
            return;
        }
        self.cells[y][x] = cell_type;
    }

    pub fn get_cell(&self, x: usize, y: usize) -> CellType {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(CellType::Empty)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.cells
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    // Check if piece intersects with the right wall, the floor or placed cells.
    // Columns left of the board are not checked: moves never take a piece there.
    pub fn collides(&self, piece: &Piece) -> bool {
        for (x, y) in piece.cells() {
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            if x >= self.cols || y >= self.rows {
                return true;
            }
            if !self.cells[y][x].is_empty() {
                return true;
            }
        }
        false
    }

    // Draw piece on field with the given cell type. Cells outside of the field are skipped.
    pub fn draw_piece(&mut self, piece: &Piece, cell_type: CellType) {
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 {
                self.set_cell(x as usize, y as usize, cell_type);
            }
        }
    }

    /// Write the piece's color into the grid
    pub fn lock(&mut self, piece: &Piece) {
        self.draw_piece(piece, piece.color());
    }

    /// Where `piece` would come to rest if dropped straight down
    ///
    /// A piece that already collides is returned unchanged.
    pub fn landing_position(&self, piece: &Piece) -> Piece {
        let mut landing = *piece;
        if self.collides(&landing) {
            return landing;
        }
        loop {
            landing.move_down();
            if self.collides(&landing) {
                landing.move_up();
                return landing;
            }
        }
    }

    /// Remove full rows and shift everything above them down
    ///
    /// Returns the number of rows removed. The same number of empty rows is
    /// inserted at the top, so the height never changes.
    pub fn clear_full_lines(&mut self) -> usize {
        let before = self.cells.len();
        self.cells
            .retain(|row| row.iter().any(|cell| cell.is_empty()));
        let removed = before - self.cells.len();
        for _ in 0..removed {
            self.cells.insert(0, vec![CellType::Empty; self.cols]);
        }
        removed
    }

    /// Push all rows up by one and fill the bottom row with random colors,
    /// leaving the cell at `hole` empty
    ///
    /// The top row scrolls off and is lost.
    pub fn push_penalty_row(&mut self, hole: usize, rng: &mut impl Rng) {
        let row: Vec<CellType> = (0..self.cols)
            .map(|x| {
                if x == hole {
                    CellType::Empty
                } else {
                    CellType::random_color(rng)
                }
            })
            .collect();
        if !self.cells.is_empty() {
            self.cells.remove(0);
        }
        self.cells.push(row);
    }

    /// Count of non-empty cells, handy for assertions
    pub fn filled_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}
