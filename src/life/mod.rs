//! Simulation core: board storage, the life rule, and initial seeding.

pub mod engine;
pub mod generations;
pub mod grid;
pub mod patterns;
pub mod seed;

pub use engine::{advance, step, StepMode};
pub use generations::{Generations, Slot};
pub use grid::{wrap_index, Grid, GridError};
pub use patterns::Pattern;
pub use seed::{PatternSeeder, RandomSeeder, Seeder, DEFAULT_DENSITY};

/// Board width in cells. Not configurable.
pub const BOARD_WIDTH: usize = 10;
/// Board height in cells. Not configurable.
pub const BOARD_HEIGHT: usize = 10;
