use crate::field::CellType;
use crate::shapes::{Mask, ROTATIONS, ShapeKind, mask_height, mask_width};

/// A falling tetromino
///
/// Moves and rotations are unconditional: whether the new position is legal
/// is decided by the board through [`Field::collides`](crate::Field::collides).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    // Serial number, unique per board
    id: u64,
    kind: ShapeKind,
    rotation: usize,
    // Top-left corner of the mask in grid coordinates
    x: i32,
    y: i32,
    color: CellType,
}

impl Piece {
    pub fn new(id: u64, kind: ShapeKind, x: i32, y: i32, color: CellType) -> Self {
        Piece {
            id,
            kind,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> CellType {
        self.color
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    // Only used to undo a move_down that ran into something
    pub(crate) fn move_up(&mut self) {
        self.y -= 1;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn rotate(&mut self, clockwise: bool) {
        self.rotation = if clockwise {
            (self.rotation + 1) % ROTATIONS
        } else {
            (self.rotation + ROTATIONS - 1) % ROTATIONS
        };
    }

    /// Mask of the active rotation
    pub fn mask(&self) -> Mask {
        self.kind.mask(self.rotation)
    }

    pub fn width(&self) -> usize {
        mask_width(self.mask())
    }

    pub fn height(&self) -> usize {
        mask_height(self.mask())
    }

    /// Absolute grid coordinates `(x, y)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.mask().iter().enumerate().flat_map(move |(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, filled)| **filled != 0)
                .map(move |(col, _)| (self.x + col as i32, self.y + row as i32))
        })
    }
}
