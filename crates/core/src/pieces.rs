//! Pieces module - base shapes, rotation transform and wall kicks
//!
//! Every piece is 4 offset cells inside a 4x4 reference frame, measured from
//! the piece anchor. Rotation maps `(x, y)` to `(3 - y, x)`: a quarter turn
//! about the frame's corner rather than a centered rotation system, so
//! non-square pieces drift inside the frame as they turn.

use crate::types::{PieceKind, KICK_OFFSETS, SPAWN_X, SPAWN_Y};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Base (spawn) shape for a piece kind
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::O => [(1, 1), (2, 1), (1, 2), (2, 2)],
        PieceKind::T => [(1, 1), (0, 2), (1, 2), (2, 2)],
        PieceKind::S => [(1, 1), (2, 1), (0, 2), (1, 2)],
        PieceKind::Z => [(0, 1), (1, 1), (1, 2), (2, 2)],
        PieceKind::J => [(0, 1), (0, 2), (1, 2), (2, 2)],
        PieceKind::L => [(2, 1), (0, 2), (1, 2), (2, 2)],
    }
}

/// Rotate a shape 90° clockwise within the 4x4 frame.
pub fn rotate_shape(shape: &PieceShape) -> PieceShape {
    shape.map(|(x, y)| (3 - y, x))
}

/// A piece: kind, anchor and occupied offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub cells: PieceShape,
}

impl Piece {
    /// Create a piece with its base shape at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            cells: base_shape(kind),
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, shape rotated clockwise (no collision checks)
    pub fn rotated(&self) -> Self {
        Self {
            cells: rotate_shape(&self.cells),
            ..*self
        }
    }

    /// Absolute board positions of the 4 cells
    pub fn positions(&self) -> [(i8, i8); 4] {
        self.cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Try to rotate a piece clockwise with horizontal wall kicks.
///
/// `collides(candidate)` reports whether a candidate placement is blocked.
/// Kick offsets are tried in [`KICK_OFFSETS`] order; the first free one wins.
/// Returns the rotated piece and the applied x offset, or `None` when every
/// kick is blocked.
pub fn try_rotate(piece: &Piece, collides: impl Fn(&Piece) -> bool) -> Option<(Piece, i8)> {
    let rotated = piece.rotated();

    for &dx in KICK_OFFSETS.iter() {
        let candidate = rotated.shifted(dx, 0);
        if !collides(&candidate) {
            return Some((candidate, dx));
        }
    }

    None
}
