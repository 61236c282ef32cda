use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::board::BoardWidget;
use crate::ui::footer::Footer;

const FOOTER_HEIGHT: u16 = 2;

/// Splits the screen into the board (top-left, one cell per column) and the
/// two footer rows right below it. Both are clipped to `area`.
pub fn layout_regions(area: Rect, board_width: usize, board_height: usize) -> (Rect, Rect) {
    let width = u16::try_from(board_width).unwrap_or(u16::MAX);
    let height = u16::try_from(board_height).unwrap_or(u16::MAX);

    let board = Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    }
    .intersection(area);
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(height),
        width: area.width,
        height: FOOTER_HEIGHT,
    }
    .intersection(area);
    (board, footer)
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let board = app.board();
    let (board_area, footer_area) = layout_regions(frame.area(), board.width(), board.height());

    frame.render_widget(BoardWidget::new(board), board_area);
    frame.render_widget(Footer::new(app.session()).widget(), footer_area);
}
