//! Rotation cursor - tracks the active brick's rotation index
//!
//! The cursor never validates anything itself. `next_shape` exposes the
//! candidate for `(index + 1) mod count` without mutating state; the caller
//! checks it against the board and commits the returned index only on
//! success. A rejected rotation is a no-op. No wall-kick search is done.

use crate::core::bricks::Brick;
use crate::types::Shape;

/// Candidate rotation produced by [`RotationCursor::next_shape`]:
/// the shape to validate plus the index to commit if it fits.
#[derive(Debug, Clone, Copy)]
pub struct NextShape {
    pub shape: &'static Shape,
    pub rotation: usize,
}

/// (active brick, rotation index). Mutated only by a successful rotation
/// commit or by brick replacement on spawn.
#[derive(Debug, Clone)]
pub struct RotationCursor {
    brick: Brick,
    rotation: usize,
}

impl RotationCursor {
    pub fn new(brick: Brick) -> Self {
        Self { brick, rotation: 0 }
    }

    /// Replace the active brick, resetting rotation to the spawn state
    pub fn set_brick(&mut self, brick: Brick) {
        self.brick = brick;
        self.rotation = 0;
    }

    pub fn brick(&self) -> &Brick {
        &self.brick
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Shape matrix at the current rotation index
    pub fn current_shape(&self) -> &'static Shape {
        self.brick.shape(self.rotation)
    }

    /// Candidate shape one rotation ahead, without mutating the cursor
    pub fn next_shape(&self) -> NextShape {
        let rotation = (self.rotation + 1) % self.brick.rotation_count();
        NextShape {
            shape: self.brick.shape(rotation),
            rotation,
        }
    }

    /// Commit a validated candidate index.
    ///
    /// Panics if the index is outside the brick's rotation sequence; that
    /// indicates a broken invariant in the caller, not a runtime condition.
    pub fn commit(&mut self, rotation: usize) {
        assert!(
            rotation < self.brick.rotation_count(),
            "rotation index {} out of range for {:?}",
            rotation,
            self.brick.kind()
        );
        self.rotation = rotation;
    }
}
