//! Drawing contract between a board and whatever renders it

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::piece::Piece;

/// How a piece painted on the well should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceLayer {
    /// The falling piece
    Active,
    /// Where the falling piece would land
    Ghost,
}

/// Numbers shown next to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardStatus {
    pub score: u64,
    pub level: u32,
    pub lines: u32,
}

/// Target a board paints itself onto
///
/// [`Board::draw`](crate::Board::draw) calls these in order: field, ghost,
/// active piece, preview, status, and finally the game-over overlay if the
/// board is finished. Painting never changes the board.
pub trait Surface {
    fn paint_field(&mut self, field: &Field);
    fn paint_piece(&mut self, piece: &Piece, layer: PieceLayer);
    fn paint_preview(&mut self, piece: &Piece);
    fn paint_status(&mut self, _status: &BoardStatus) {}
    fn paint_game_over(&mut self);
}
