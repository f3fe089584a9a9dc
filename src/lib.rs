//! brickfall - deterministic falling-block puzzle engine
//!
//! Three interchangeable rule sets (Classic, Hazard-Survival, Mission) over
//! a fixed 25x10 grid. The crate is the simulation core only: it owns the
//! board, scoring, and mode state machines, consumes discrete actions plus
//! injected elapsed time, and hands value snapshots back to whatever
//! presentation layer drives it. No rendering, input, audio, or persistence
//! lives here.

pub mod core;
pub mod types;

pub use crate::core::{Game, TickResult, ViewData};
pub use crate::types::{BrickKind, GameMode, Offset};
