use serde::{Deserialize, Serialize};

use crate::field::{CellType, Field};
use crate::penalty::BoardId;
use crate::piece::Piece;
use crate::surface::{BoardStatus, PieceLayer, Surface};

/// Size of the next-piece preview box
pub const PREVIEW_SIZE: usize = 4;

/// Snapshot of one board, ready to render or serialize
///
/// Built by drawing the board onto it: the well holds the placed cells with
/// the ghost and the falling piece composited on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub board: BoardId,
    pub well: Field,
    pub preview: Field,
    pub status: BoardStatus,
    pub game_over: bool,
}

impl BoardState {
    pub fn blank(board: BoardId, cols: usize, rows: usize) -> Self {
        Self {
            board,
            well: Field::new(cols, rows),
            preview: Field::new(PREVIEW_SIZE, PREVIEW_SIZE),
            status: BoardStatus::default(),
            game_over: false,
        }
    }
}

impl Surface for BoardState {
    fn paint_field(&mut self, field: &Field) {
        self.well = field.clone();
    }

    fn paint_piece(&mut self, piece: &Piece, layer: PieceLayer) {
        match layer {
            PieceLayer::Active => self.well.draw_piece(piece, piece.color()),
            PieceLayer::Ghost => {
                // Ghost must not hide placed cells
                for (x, y) in piece.cells() {
                    if x >= 0 && y >= 0 && self.well.get_cell(x as usize, y as usize).is_empty() {
                        self.well.set_cell(x as usize, y as usize, CellType::Ghost);
                    }
                }
            }
        }
    }

    fn paint_preview(&mut self, piece: &Piece) {
        self.preview.clear();
        let mut shown = Piece::new(piece.id(), piece.kind(), 0, 0, piece.color());
        for _ in 0..piece.rotation() {
            shown.rotate(true);
        }
        self.preview.draw_piece(&shown, shown.color());
    }

    fn paint_status(&mut self, status: &BoardStatus) {
        self.status = *status;
    }

    fn paint_game_over(&mut self) {
        self.game_over = true;
    }
}

/// Snapshot of every board in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub boards: Vec<BoardState>,
    pub winner: Option<BoardId>,
}

impl GameState {
    pub fn board(&self, board: BoardId) -> Option<&BoardState> {
        self.boards.iter().find(|state| state.board == board)
    }
}
