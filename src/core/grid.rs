//! Grid operations - pure collision / merge / line-clear functions
//!
//! Everything here is a pure function over a value-type matrix: callers get
//! new boards back, nothing is mutated through a shared reference. The
//! functions are const-generic over the grid dimensions so they can be
//! exercised on small boards in tests; the engine instantiates them at
//! 10 x 25.
//!
//! Collision convention: a shape cell above row 0 (negative absolute row) is
//! legal spawn overhang and is only checked against the column bounds, never
//! against board contents.

use arrayvec::ArrayVec;

use crate::types::{Offset, Shape, COLOR_EMPTY, SCORE_BASE_MULTIPLIER};

/// Outcome of one merge-then-clear cycle.
///
/// Immutable value; produced once, consumed and discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearResult<const W: usize, const H: usize> {
    pub lines_removed: u32,
    pub matrix: [[u8; W]; H],
    pub score_bonus: i32,
    /// Board coordinates of every occupied cell in the removed rows,
    /// recorded before the shift. Feeds mission-target bookkeeping.
    pub cleared_cells: Vec<Offset>,
}

/// Collision test for `shape` placed with its origin at (`offset_x`, `offset_y`).
///
/// True if any occupied shape cell falls outside the columns, at or below
/// the floor, or on an occupied board cell.
pub fn intersect<const W: usize, const H: usize>(
    board: &[[u8; W]; H],
    shape: &Shape,
    offset_x: i32,
    offset_y: i32,
) -> bool {
    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == COLOR_EMPTY {
                continue;
            }
            let x = offset_x + c as i32;
            let y = offset_y + r as i32;

            if x < 0 || x >= W as i32 || y >= H as i32 {
                return true;
            }
            // Above-board overhang: column bounds only
            if y >= 0 && board[y as usize][x as usize] != COLOR_EMPTY {
                return true;
            }
        }
    }
    false
}

/// Returns a board copy with every occupied shape cell written in
/// (shape color code overwrites). Cells above row 0 are dropped.
pub fn merge<const W: usize, const H: usize>(
    board: &[[u8; W]; H],
    shape: &Shape,
    offset_x: i32,
    offset_y: i32,
) -> [[u8; W]; H] {
    let mut merged = *board;
    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == COLOR_EMPTY {
                continue;
            }
            let x = offset_x + c as i32;
            let y = offset_y + r as i32;
            if x >= 0 && x < W as i32 && y >= 0 && y < H as i32 {
                merged[y as usize][x as usize] = cell;
            }
        }
    }
    merged
}

/// Remove every complete row, shift the rows above down, and compute the
/// quadratic score bonus (`SCORE_BASE_MULTIPLIER * lines^2`).
///
/// Zero complete rows yields bonus 0 and an unmodified copy.
pub fn check_removing<const W: usize, const H: usize>(board: &[[u8; W]; H]) -> ClearResult<W, H> {
    let mut full_rows: ArrayVec<usize, H> = ArrayVec::new();
    for (y, row) in board.iter().enumerate() {
        if row.iter().all(|&cell| cell != COLOR_EMPTY) {
            full_rows.push(y);
        }
    }

    if full_rows.is_empty() {
        return ClearResult {
            lines_removed: 0,
            matrix: *board,
            score_bonus: 0,
            cleared_cells: Vec::new(),
        };
    }

    let mut cleared_cells = Vec::with_capacity(full_rows.len() * W);
    for &y in &full_rows {
        for x in 0..W {
            cleared_cells.push(Offset::new(x as i32, y as i32));
        }
    }

    // Write surviving rows bottom-up; vacated rows at the top stay empty
    let mut matrix = [[COLOR_EMPTY; W]; H];
    let mut write_y = H;
    for read_y in (0..H).rev() {
        if full_rows.contains(&read_y) {
            continue;
        }
        write_y -= 1;
        matrix[write_y] = board[read_y];
    }

    let lines_removed = full_rows.len() as u32;
    ClearResult {
        lines_removed,
        matrix,
        score_bonus: SCORE_BASE_MULTIPLIER * (lines_removed * lines_removed) as i32,
        cleared_cells,
    }
}
