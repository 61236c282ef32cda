use ratatui::layout::Alignment;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::ui::session::SessionState;
use crate::ui::theme::{help_text, HELP_TEXT};

/// Status line and key help shown under the board.
pub struct Footer<'a> {
    session: &'a SessionState,
}

impl<'a> Footer<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self { session }
    }

    pub fn status_line(&self) -> String {
        let mut status = format!("Generation: {}", self.session.generation);
        if self.session.paused {
            status.push_str(" [paused]");
        }
        if self.session.extinct {
            status.push_str(" [extinct]");
        }
        status
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text = Text::from(vec![
            Line::from(self.status_line()),
            Line::from(Span::styled(HELP_TEXT, help_text())),
        ]);
        Paragraph::new(text).alignment(Alignment::Left)
    }
}
