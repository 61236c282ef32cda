use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

use crate::life::Grid;
use crate::ui::theme::{dead_cell, live_cell, DEAD_GLYPH, LIVE_GLYPH};

/// Draws one generation, cell `(x, y)` at column `x`, row `y` of the area.
/// Cells that do not fit the area are skipped.
pub struct BoardWidget<'a> {
    grid: &'a Grid,
}

impl<'a> BoardWidget<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (x, y, alive) in self.grid.iter() {
            let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if col >= area.width || row >= area.height {
                continue;
            }

            let (glyph, style) = if alive {
                (LIVE_GLYPH, live_cell())
            } else {
                (DEAD_GLYPH, dead_cell())
            };
            if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                cell.set_char(glyph).set_style(style);
            }
        }
    }
}
