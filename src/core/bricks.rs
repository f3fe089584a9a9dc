//! Brick catalog - immutable shape data for the 7 brick kinds
//!
//! Each kind carries a fixed, ordered list of pre-computed rotation-state
//! matrices. Nothing here derives shapes by runtime transform: the catalog
//! is the single source of truth for geometry, and the rotation cursor just
//! indexes into it.

use crate::types::{BrickKind, Shape};

/// One placeable brick: a kind plus its rotation-state sequence.
///
/// Immutable once constructed; a fresh `Brick` is drawn per spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    kind: BrickKind,
    shapes: &'static [Shape],
}

impl Brick {
    /// Look up the catalog entry for a kind
    pub fn new(kind: BrickKind) -> Self {
        Self {
            kind,
            shapes: rotation_states(kind),
        }
    }

    pub fn kind(&self) -> BrickKind {
        self.kind
    }

    /// Number of distinct rotation states for this kind
    pub fn rotation_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shape matrix at the given rotation index.
    ///
    /// An index outside the rotation sequence is a programmer error.
    pub fn shape(&self, rotation: usize) -> &'static Shape {
        &self.shapes[rotation]
    }
}

/// Pre-computed rotation sequences, one entry per distinct orientation.
/// Matrices hold the kind's color code in occupied cells.
fn rotation_states(kind: BrickKind) -> &'static [Shape] {
    match kind {
        BrickKind::I => &I_SHAPES,
        BrickKind::J => &J_SHAPES,
        BrickKind::L => &L_SHAPES,
        BrickKind::O => &O_SHAPES,
        BrickKind::S => &S_SHAPES,
        BrickKind::T => &T_SHAPES,
        BrickKind::Z => &Z_SHAPES,
    }
}

const I_SHAPES: [Shape; 2] = [
    [
        [0, 0, 0, 0],
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 1, 0, 0],
    ],
];

const J_SHAPES: [Shape; 4] = [
    [
        [0, 0, 0, 0],
        [2, 2, 2, 0],
        [0, 0, 2, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 2, 0, 0],
        [0, 2, 0, 0],
        [2, 2, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [2, 0, 0, 0],
        [2, 2, 2, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 2, 2, 0],
        [0, 2, 0, 0],
        [0, 2, 0, 0],
        [0, 0, 0, 0],
    ],
];

const L_SHAPES: [Shape; 4] = [
    [
        [0, 0, 0, 0],
        [3, 3, 3, 0],
        [3, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [3, 3, 0, 0],
        [0, 3, 0, 0],
        [0, 3, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 3, 0],
        [3, 3, 3, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 3, 0, 0],
        [0, 3, 0, 0],
        [0, 3, 3, 0],
        [0, 0, 0, 0],
    ],
];

const O_SHAPES: [Shape; 1] = [[
    [0, 4, 4, 0],
    [0, 4, 4, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]];

const S_SHAPES: [Shape; 2] = [
    [
        [0, 5, 5, 0],
        [5, 5, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [5, 0, 0, 0],
        [5, 5, 0, 0],
        [0, 5, 0, 0],
        [0, 0, 0, 0],
    ],
];

const T_SHAPES: [Shape; 4] = [
    [
        [0, 6, 0, 0],
        [6, 6, 6, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 6, 0, 0],
        [0, 6, 6, 0],
        [0, 6, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0],
        [6, 6, 6, 0],
        [0, 6, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 6, 0, 0],
        [6, 6, 0, 0],
        [0, 6, 0, 0],
        [0, 0, 0, 0],
    ],
];

// Z reuses color 5 (see BrickKind::color_code)
const Z_SHAPES: [Shape; 2] = [
    [
        [5, 5, 0, 0],
        [0, 5, 5, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 5, 0, 0],
        [5, 5, 0, 0],
        [5, 0, 0, 0],
        [0, 0, 0, 0],
    ],
];
