//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Board dimensions (rows x columns), fixed for the session lifetime
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 25;

/// Topmost rows treated as a hidden spawn buffer by presentation.
/// Collision rules treat all rows uniformly.
pub const HIDDEN_ROWS: usize = 2;

/// Spawn offset for freshly drawn bricks
pub const SPAWN_X: i32 = 4;
pub const SPAWN_Y: i32 = 0;

/// Side length of a brick shape matrix
pub const SHAPE_SIZE: usize = 4;

/// Line-clear score bonus is `SCORE_BASE_MULTIPLIER * lines^2`
pub const SCORE_BASE_MULTIPLIER: i32 = 50;

/// Points awarded for a successful user-initiated down move
pub const SOFT_DROP_SCORE: i32 = 1;

/// Hazard band descends one row per this much injected elapsed time
pub const HAZARD_ADVANCE_INTERVAL_MS: u64 = 4000;

/// Number of contiguous rows covered by the hazard band
pub const HAZARD_THICKNESS: usize = 3;

/// Lines to clear while the hazard is active to survive the mode
pub const HAZARD_SURVIVE_LINES: u32 = 2;

/// Mission countdown limit
pub const MISSION_TIME_LIMIT_MS: u64 = 180_000;

/// Cell color codes: 0 empty, 1-6 placed brick colors, 7 mission target
pub const COLOR_EMPTY: u8 = 0;
pub const COLOR_TARGET: u8 = 7;

/// A brick's rotation-state shape matrix (0 / color-code cells)
pub type Shape = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

/// The board grid, row-major: `matrix[row][col]`
pub type BoardMatrix = [[u8; BOARD_WIDTH]; BOARD_HEIGHT];

/// Integer position of a shape matrix origin in board coordinates.
///
/// `y` may be negative during spawn overhang; a brick is never committed
/// outside the column bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy), leaving self untouched
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The seven brick kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl BrickKind {
    /// All kinds, in catalog order
    pub const ALL: [BrickKind; 7] = [
        BrickKind::I,
        BrickKind::J,
        BrickKind::L,
        BrickKind::O,
        BrickKind::S,
        BrickKind::T,
        BrickKind::Z,
    ];

    /// Color code written into the board when this kind is merged.
    ///
    /// Z shares color 5 with S: code 7 is reserved for mission targets,
    /// so only six brick colors exist.
    pub const fn color_code(self) -> u8 {
        match self {
            BrickKind::I => 1,
            BrickKind::J => 2,
            BrickKind::L => 3,
            BrickKind::O => 4,
            BrickKind::S => 5,
            BrickKind::T => 6,
            BrickKind::Z => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BrickKind::I => "I",
            BrickKind::J => "J",
            BrickKind::L => "L",
            BrickKind::O => "O",
            BrickKind::S => "S",
            BrickKind::T => "T",
            BrickKind::Z => "Z",
        }
    }
}

/// The three rule sets. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Classic,
    HazardSurvival,
    Mission,
}

impl GameMode {
    /// Cyclic successor: Classic -> HazardSurvival -> Mission -> Classic.
    /// Pure lookup; activation side effects belong to the orchestrator.
    pub const fn next(self) -> Self {
        match self {
            GameMode::Classic => GameMode::HazardSurvival,
            GameMode::HazardSurvival => GameMode::Mission,
            GameMode::Mission => GameMode::Classic,
        }
    }

    /// Lines required to advance out of this mode.
    /// Zero for Mission: advancement is gated by mission completion instead.
    pub const fn lines_required_to_advance(self) -> u32 {
        match self {
            GameMode::Classic => 1,
            GameMode::HazardSurvival => HAZARD_SURVIVE_LINES,
            GameMode::Mission => 0,
        }
    }

    /// Human-readable label for presentation
    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Classic => "CLASSIC MODE",
            GameMode::HazardSurvival => "HAZARD SURVIVAL",
            GameMode::Mission => "MISSION MODE",
        }
    }
}
