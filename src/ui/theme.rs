use ratatui::style::{Modifier, Style};

pub const LIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = '#';

pub const HELP_TEXT: &str = "Q: quit, P: pause/unpause";

pub fn live_cell() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dead_cell() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn help_text() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
