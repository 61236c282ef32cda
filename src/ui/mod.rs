//! Terminal front end: the tick controller, its session state, and the
//! crossterm/ratatui adapters around it.

pub mod app;
pub mod board;
pub mod events;
pub mod footer;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod terminal_guard;
pub mod theme;
