//! Life rule (B3/S23) over a double-buffered toroidal board.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::life::generations::Generations;
use crate::life::grid::Grid;

/// How the output buffer is prepared before a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Output buffer is cleared first; next generation depends only on the
    /// current one.
    #[default]
    Clear,
    /// Output buffer keeps whatever it held two generations ago and the rule
    /// branches on that stale value.
    Legacy,
}

/// Writes the generation after `current` into `next`.
///
/// Neighbor counts are always read from `current`. What decides between the
/// birth and the survival branch depends on `mode`:
/// - [`StepMode::Clear`]: the cell's state in `current` (B3/S23). Every cell
///   of `next` is overwritten, so its prior contents do not matter.
/// - [`StepMode::Legacy`]: the value already in `next`. A cell dead there is
///   born on exactly three neighbors; a cell alive there dies on fewer than
///   two or more than three, and is otherwise left alive.
///
/// Returns `true` if any cell of `next` is alive after the pass.
pub fn advance(current: &Grid, next: &mut Grid, mode: StepMode) -> bool {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut survived = false;
    for (x, y, alive_now) in current.iter() {
        let (x, y) = (x as i64, y as i64);
        let neighbors = current.live_neighbors(x, y);

        let branch_alive = match mode {
            StepMode::Clear => alive_now,
            StepMode::Legacy => next.is_alive(x, y),
        };
        let alive = if branch_alive {
            // Under- and overpopulation
            (2..=3).contains(&neighbors)
        } else {
            // Reproduction
            neighbors == 3
        };
        next.set(x, y, alive);
        survived |= alive;
    }
    survived
}

/// Advances the active generation into the inactive buffer and makes the
/// result active. Returns whether anything is still alive.
pub fn step(generations: &mut Generations, mode: StepMode) -> bool {
    let (current, next) = generations.split_mut();
    if mode == StepMode::Clear {
        next.clear();
    }
    let survived = advance(current, next, mode);
    generations.swap();
    survived
}
