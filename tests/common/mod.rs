//! Shared test utilities and fakes for the tick loop.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use lifeterm::life::{Grid, StepMode};
use lifeterm::ui::app::App;
use lifeterm::ui::events::CommandSource;
use lifeterm::ui::input::Command;
use lifeterm::ui::runtime::{Sleeper, View};
use lifeterm::ui::session::SessionState;

/// Yields one scripted entry per poll; `None` once the script runs out.
pub struct ScriptedInput {
    script: VecDeque<Option<Command>>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<Command>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }
}

impl CommandSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Option<Command>> {
        self.polls += 1;
        Ok(self.script.pop_front().flatten())
    }
}

/// Snapshot of one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub board: Grid,
    pub session: SessionState,
}

#[derive(Default)]
pub struct RecordingView {
    pub frames: Vec<Frame>,
}

impl View for RecordingView {
    fn render(&mut self, app: &App) -> io::Result<()> {
        self.frames.push(Frame {
            board: app.board().clone(),
            session: app.session().clone(),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingSleeper {
    pub sleeps: Vec<Duration>,
}

impl Sleeper for CountingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

pub fn grid(width: usize, height: usize, live: &[(i64, i64)]) -> Grid {
    Grid::with_live_cells(width, height, live).expect("valid dimensions")
}

pub fn app_with(live: &[(i64, i64)]) -> App {
    App::new(grid(10, 10, live), StepMode::Clear)
}

/// Live cells of `grid` as sorted `(x, y)` pairs.
pub fn live_cells(grid: &Grid) -> Vec<(i64, i64)> {
    grid.iter()
        .filter(|&(_, _, alive)| alive)
        .map(|(x, y, _)| (x as i64, y as i64))
        .collect()
}
