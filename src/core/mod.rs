//! Core module - pure game logic with no I/O dependencies
//!
//! Everything needed to simulate a session lives here: shape data, grid
//! math, the mode managers, and the orchestrator that ties them together.

pub mod bricks;
pub mod game;
pub mod ghost;
pub mod grid;
pub mod hazard;
pub mod mission;
pub mod rng;
pub mod rotator;
pub mod score;
pub mod snapshot;

// Re-export commonly used types
pub use bricks::Brick;
pub use game::{BoardClearResult, Game};
pub use ghost::project_landing;
pub use grid::{check_removing, intersect, merge, ClearResult};
pub use hazard::HazardManager;
pub use mission::{MissionKind, MissionManager};
pub use rng::{BrickSource, SimpleRng};
pub use rotator::{NextShape, RotationCursor};
pub use score::Score;
pub use snapshot::{BoardSnapshot, ModeStatus, TickResult, ViewData};
