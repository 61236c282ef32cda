use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::shutdown::ShutdownHandle;
use crate::ui::input::{command_for_key, Command};

/// Non-blocking source of user commands, polled once per tick.
pub trait CommandSource {
    /// Returns at most one pending command, or `None` immediately if there
    /// is nothing to act on.
    fn poll(&mut self) -> io::Result<Option<Command>>;
}

/// Reads keypresses from the terminal through crossterm.
pub struct TerminalInput {
    shutdown: ShutdownHandle,
}

impl TerminalInput {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        Self { shutdown }
    }
}

impl CommandSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Option<Command>> {
        if self.shutdown.is_shutting_down() {
            return Ok(Some(Command::Quit));
        }

        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(command_for_key(key)),
            // Resize, focus and mouse events carry no command.
            _ => Ok(None),
        }
    }
}
