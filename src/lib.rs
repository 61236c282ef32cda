//! Conway's Game of Life on a small toroidal board, rendered in the terminal
//! and driven by a fixed-rate tick loop.

pub mod cli;
pub mod config;
pub mod life;
pub mod logging;
pub mod shutdown;
pub mod ui;
