use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::life::{Grid, PatternSeeder, RandomSeeder, Seeder, BOARD_HEIGHT, BOARD_WIDTH};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{CommandSource, TerminalInput};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Displays the board and session state.
pub trait View {
    fn render(&mut self, app: &App) -> io::Result<()>;
}

/// Waits out the remainder of a tick.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

pub struct TerminalView {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl View for TerminalView {
    fn render(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    }
}

/// Drives the tick loop until the session stops.
///
/// The seeded board is shown once up front. Each tick then polls input,
/// advances the board if running, renders, and sleeps for `tick_interval`.
/// A quit observed during a tick is rendered and the loop returns without
/// sleeping.
pub fn run_loop<I, V, S>(
    app: &mut App,
    input: &mut I,
    view: &mut V,
    sleeper: &mut S,
    tick_interval: Duration,
) -> io::Result<()>
where
    I: CommandSource,
    V: View,
    S: Sleeper,
{
    view.render(app)?;
    while !app.should_quit() {
        let command = input.poll()?;
        app.tick(command);
        view.render(app)?;
        if app.should_quit() {
            break;
        }
        sleeper.sleep(tick_interval);
    }
    Ok(())
}

/// Builds the first generation according to `config`.
pub fn seed_board(config: &Config) -> anyhow::Result<Grid> {
    let mut grid = Grid::new(BOARD_WIDTH, BOARD_HEIGHT)?;
    let simulation = &config.simulation;
    match (simulation.pattern, simulation.seed) {
        (Some(pattern), seed) => {
            if seed.is_some() {
                tracing::warn!(pattern = pattern.name(), "Seed ignored when a pattern is set");
            }
            PatternSeeder::new(pattern).seed(&mut grid);
        }
        (None, Some(seed)) => RandomSeeder::from_seed(seed, simulation.density).seed(&mut grid),
        (None, None) => RandomSeeder::from_entropy(simulation.density).seed(&mut grid),
    }
    Ok(grid)
}

/// Runs the simulator in the current terminal until the user quits.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> anyhow::Result<()> {
    let board = seed_board(config)?;
    tracing::info!(
        width = board.width(),
        height = board.height(),
        population = board.population(),
        step_mode = ?config.simulation.step_mode,
        tick_ms = config.timing.tick_interval_ms,
        "Starting simulation"
    );

    let mut app = App::new(board, config.simulation.step_mode);
    let mut input = TerminalInput::new(shutdown);
    let mut sleeper = ThreadSleeper;

    let (terminal, guard) = setup_terminal()?;
    let mut view = TerminalView { terminal };
    let result = run_loop(
        &mut app,
        &mut input,
        &mut view,
        &mut sleeper,
        config.timing.tick_interval(),
    );
    drop(guard);

    tracing::info!(
        generation = app.session().generation,
        extinct = app.session().extinct,
        "Simulation finished"
    );
    Ok(result?)
}
