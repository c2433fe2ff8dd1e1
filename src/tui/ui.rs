//! Stateless UI rendering for the game and its history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::game::{GameView, Mark, Position, Square};
use strum::IntoEnumIterator;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const INFO_WIDTH: u16 = 36;

/// Screen regions of one frame, kept for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Sort toggle button.
    pub sort: Rect,
    /// History pane including its border.
    pub history: Rect,
    /// Inside of the history pane, one entry per line.
    pub history_rows: Rect,
    /// Display row drawn on the first line of `history_rows`.
    pub history_offset: usize,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game's regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(INFO_WIDTH)])
            .split(chunks[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Sort
                Constraint::Min(3),    // History
            ])
            .split(body[1]);

        let history = info[2];
        Self {
            title: chunks[0],
            cells: cell_rects(center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT)),
            status: info[0],
            sort: info[1],
            history,
            history_rows: Block::default().borders(Borders::ALL).inner(history),
            history_offset: 0,
            help: chunks[2],
        }
    }
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    let gapped = |len: u16| {
        [
            Constraint::Length(len),
            Constraint::Length(1),
            Constraint::Length(len),
            Constraint::Length(1),
            Constraint::Length(len),
        ]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(gapped(CELL_HEIGHT))
        .split(board);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(gapped(CELL_WIDTH))
            .split(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

/// Draws the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let mut layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app, &view);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let order = if app.game().sort_ascending() {
        "oldest first"
    } else {
        "newest first"
    };
    let sort = Paragraph::new(format!("Sort Moves ({order})"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(sort, layout.sort);

    layout.history_offset = draw_history(frame, &layout, app, &view);

    let help = if *view.board_full() && view.winning_line().is_none() {
        "Board full. r: restart  q: quit"
    } else {
        "arrows/hjkl: move  enter/1-9: play  tab: history  s: sort  r: restart  q: quit"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        layout.help,
    );

    layout
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App, view: &GameView) {
    let highlight = app
        .config()
        .highlight_winning_line()
        .then(|| *view.winning_line())
        .flatten();

    for pos in Position::iter() {
        let mut style = match view.board().get(pos) {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(mark) => match mark {
                Mark::X => Style::default().fg(Color::Blue),
                Mark::O => Style::default().fg(Color::Red),
            }
            .add_modifier(Modifier::BOLD),
        };
        if highlight.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(Color::Green);
        }

        let mut block = Block::default().borders(Borders::ALL);
        if app.focus() == Focus::Board && app.cursor() == pos {
            style = style.bg(Color::White).fg(Color::Black);
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let text = cell_text(view.board().get(pos), pos, *app.config().show_coordinates());
        let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, layout.cells[pos.index()]);
    }
}

/// Text shown inside a cell.
pub fn cell_text(square: Square, pos: Position, show_coordinates: bool) -> String {
    match square {
        Square::Occupied(mark) => mark.to_string(),
        Square::Empty if show_coordinates => pos.to_string(),
        Square::Empty => String::new(),
    }
}

/// Draws the history list scrolled to keep the selection in view and
/// returns the resulting scroll offset.
fn draw_history(frame: &mut Frame, layout: &ScreenLayout, app: &App, view: &GameView) -> usize {
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", row + 1, entry.label())).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let (border, highlight) = if focused {
        (
            Style::default().fg(Color::Yellow),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        (Style::default(), Style::default())
    };
    let history = List::new(items).highlight_style(highlight).block(
        Block::default()
            .title("History")
            .borders(Borders::ALL)
            .border_style(border),
    );

    // The selection follows the current step while the board has focus
    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(history, layout.history, &mut state);
    state.offset()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(Square::Occupied(Mark::O), Position::Center, true), "O");
        assert_eq!(cell_text(Square::Empty, Position::BottomLeft, true), "(1,3)");
        assert_eq!(cell_text(Square::Empty, Position::BottomLeft, false), "");
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
        assert!(layout.cells[0].x < layout.cells[1].x);
        assert!(layout.cells[0].y < layout.cells[3].y);
    }
}
