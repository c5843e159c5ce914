//! Tetromino catalog
//!
//! Every kind carries four precomputed rotation masks, ordered clockwise
//! starting from the spawn orientation. Masks are rows of 0/1 and are sized
//! to the piece, so an `I` is 1x4 or 4x1 and an `O` is always 2x2.

use serde::{Deserialize, Serialize};

/// Occupancy mask of one rotation state, top row first
pub type Mask = &'static [&'static [u8]];

/// Number of rotation states per shape
pub const ROTATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Position of this kind in the catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind stored at `index` in the catalog
    pub fn from_index(index: usize) -> Option<ShapeKind> {
        Self::ALL.get(index).copied()
    }

    pub fn shape(self) -> &'static Shape {
        &CATALOG[self.index()]
    }

    // Get mask for the given rotation index, wrapping modulo 4
    pub fn mask(self, rotation: usize) -> Mask {
        self.shape().rotations[rotation % ROTATIONS]
    }
}

/// A kind together with its four rotation masks
#[derive(Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub rotations: [Mask; ROTATIONS],
}

/// Width of a mask in cells
pub fn mask_width(mask: Mask) -> usize {
    mask.first().map_or(0, |row| row.len())
}

/// Height of a mask in cells
pub fn mask_height(mask: Mask) -> usize {
    mask.len()
}

const I_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const J_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

const O_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
];

const S_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const T_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const Z_ROTATIONS: [Mask; ROTATIONS] = [
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

/// The seven tetrominoes, indexed by [`ShapeKind::index`]
pub static CATALOG: [Shape; 7] = [
    Shape { kind: ShapeKind::I, rotations: I_ROTATIONS },
    Shape { kind: ShapeKind::J, rotations: J_ROTATIONS },
    Shape { kind: ShapeKind::L, rotations: L_ROTATIONS },
    Shape { kind: ShapeKind::O, rotations: O_ROTATIONS },
    Shape { kind: ShapeKind::S, rotations: S_ROTATIONS },
    Shape { kind: ShapeKind::T, rotations: T_ROTATIONS },
    Shape { kind: ShapeKind::Z, rotations: Z_ROTATIONS },
];
