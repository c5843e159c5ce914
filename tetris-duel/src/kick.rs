//! Rotation with horizontal wall kicks

use crate::field::Field;
use crate::piece::Piece;

/// Farthest horizontal shift tried in each direction
pub const MAX_KICK: i32 = 3;

/// Rotate `piece` clockwise, kicking it sideways if the turn is blocked
///
/// Tries the plain rotation, then shifts of 1, 2 and 3 cells to the right, then
/// the same to the left. Shifts that would put the piece past the left wall are
/// skipped. Returns the first placement that fits, or `None` when every
/// candidate collides, in which case the caller keeps the original piece.
pub fn try_rotate(field: &Field, piece: &Piece) -> Option<Piece> {
    let mut rotated = *piece;
    rotated.rotate(true);
    if !field.collides(&rotated) {
        return Some(rotated);
    }

    for shift in 1..=MAX_KICK {
        let mut candidate = rotated;
        for _ in 0..shift {
            candidate.move_right();
        }
        if !field.collides(&candidate) {
            return Some(candidate);
        }
    }

    for shift in 1..=MAX_KICK {
        let mut candidate = rotated;
        for _ in 0..shift {
            candidate.move_left();
        }
        if candidate.x() >= 0 && !field.collides(&candidate) {
            return Some(candidate);
        }
    }

    None
}
