//! Hazard manager - the rising hazard of survival mode
//!
//! A band of rows descends from the top of the board on a fixed interval.
//! Touching any placed cell is the mode's failure signal; clearing enough
//! lines while the band is live is the survival condition.
//!
//! Time is injected: `advance` is fed elapsed deltas by the orchestrator
//! once per tick and never reads a wall clock, so tests can simulate any
//! amount of play instantly.

use crate::types::{COLOR_EMPTY, HAZARD_ADVANCE_INTERVAL_MS, HAZARD_SURVIVE_LINES, HAZARD_THICKNESS};

/// State machine: Inactive -> `activate` -> Active -> `deactivate` -> Inactive.
/// Created inert.
#[derive(Debug, Clone, Default)]
pub struct HazardManager {
    active: bool,
    /// Topmost row of the hazard band; meaningless while inactive
    front_row: usize,
    /// Injected time accumulated toward the next one-row descent
    elapsed_in_interval_ms: u64,
    /// Lines cleared while the hazard has been active
    lines_cleared: u32,
}

impl HazardManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the hazard at the top row. Calling this on an already-active
    /// manager is a no-op: the front row is not reset mid-descent.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.front_row = 0;
        self.elapsed_in_interval_ms = 0;
        self.lines_cleared = 0;
        log::info!("hazard activated at row 0");
    }

    /// Return all fields to their inactive defaults
    pub fn deactivate(&mut self) {
        *self = Self::default();
    }

    /// Alias used on full new-game reset
    pub fn reset(&mut self) {
        self.deactivate();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current front row, or None while inactive
    pub fn front_row(&self) -> Option<usize> {
        self.active.then_some(self.front_row)
    }

    /// Feed elapsed time; the band descends one row per full interval.
    /// Multiple intervals in a single delta descend multiple rows.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if !self.active {
            return;
        }
        self.elapsed_in_interval_ms += elapsed_ms;
        while self.elapsed_in_interval_ms >= HAZARD_ADVANCE_INTERVAL_MS {
            self.elapsed_in_interval_ms -= HAZARD_ADVANCE_INTERVAL_MS;
            self.front_row += 1;
            log::debug!("hazard descended to row {}", self.front_row);
        }
    }

    /// True if any occupied board cell lies within the hazard band
    /// (front row through front row + thickness - 1). This is the
    /// session's failure signal while the mode is active.
    pub fn collides_with<const W: usize, const H: usize>(&self, board: &[[u8; W]; H]) -> bool {
        if !self.active {
            return false;
        }
        let band_end = (self.front_row + HAZARD_THICKNESS).min(H);
        board[self.front_row.min(H)..band_end]
            .iter()
            .any(|row| row.iter().any(|&cell| cell != COLOR_EMPTY))
    }

    /// Rows currently covered by hazard, for presentation.
    /// The band fills continuously from the top down to its front edge.
    pub fn covered_rows<const H: usize>(&self) -> Vec<usize> {
        if !self.active {
            return Vec::new();
        }
        (0..(self.front_row + HAZARD_THICKNESS).min(H)).collect()
    }

    /// Count a cleared line; ignored while inactive
    pub fn record_line_clear(&mut self) {
        if self.active {
            self.lines_cleared += 1;
        }
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// True once enough lines have been cleared while active
    pub fn is_survive_condition_met(&self) -> bool {
        self.lines_cleared >= HAZARD_SURVIVE_LINES
    }
}
