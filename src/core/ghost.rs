//! Ghost projector - landing-position preview
//!
//! Simulates a straight drop with repeated `intersect` probes. Pure
//! function: never touches the rotation cursor or the board.

use crate::core::grid::intersect;
use crate::types::{Offset, Shape};

/// Offset the shape would come to rest at if dropped straight down from
/// `from`. The x coordinate of the result always equals `from.x`; the y
/// coordinate is never above `from.y`.
pub fn project_landing<const W: usize, const H: usize>(
    board: &[[u8; W]; H],
    shape: &Shape,
    from: Offset,
) -> Offset {
    let mut landing = from;
    loop {
        let probe = landing.translated(0, 1);
        if intersect(board, shape, probe.x, probe.y) {
            return landing;
        }
        landing = probe;
    }
}
