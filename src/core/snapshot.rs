//! Snapshot values handed to presentation collaborators
//!
//! The core retains sole mutation rights over the board; collaborators get
//! copies. Everything here is serde-serializable so an external surface can
//! ship observations over whatever boundary it likes.

use serde::{Deserialize, Serialize};

use crate::core::mission::MissionKind;
use crate::types::{BoardMatrix, GameMode, Offset, Shape};

/// Per-action view of the falling brick, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewData {
    /// Active brick's shape matrix at its current rotation
    pub brick: Shape,
    /// Board position of the shape matrix origin
    pub offset: Offset,
    /// Spawn-state shape of the upcoming brick, for preview
    pub next_brick: Shape,
    /// Projected landing offset; None when no brick is in play
    pub ghost: Option<Offset>,
}

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickResult {
    /// Brick moved down one row this tick
    pub moved_down: bool,
    /// Brick landed and was merged this tick
    pub merged: bool,
    /// Lines removed this tick (0 if none)
    pub lines_removed: u32,
    /// Score bonus awarded this tick
    pub score_bonus: i32,
    /// The session ended this tick (blocked spawn, hazard touch, or timeout)
    pub game_over: bool,
}

/// Mode-specific display data, queried once per tick by presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeStatus {
    pub mode: GameMode,
    pub label: &'static str,
    /// Mode-advance criteria are currently met
    pub advance_ready: bool,
    /// Rows covered by the hazard band (empty outside Hazard-Survival)
    pub hazard_rows: Vec<usize>,
    /// Outstanding mission targets (0 outside Mission mode)
    pub remaining_targets: usize,
    /// Remaining mission time as MM:SS (None outside Mission mode)
    pub mission_time: Option<String>,
    pub mission: Option<MissionKind>,
}

/// Read-only board copy plus the session counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub matrix: BoardMatrix,
    pub score: i32,
    pub mode: GameMode,
    pub game_over: bool,
}
