use std::{fmt, io::Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    maze::{Coord, Direction},
    session::Session,
};

/// One two-column tile of the drawn frame. Cells sit at odd frame coordinates, edges between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Attempted,
    Start,
    Goal,
    /// Solution cell with its 1-based position on the path
    Route(usize),
    /// Open edge between two consecutive solution cells
    RouteLink,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Tile::Route(order) = self {
            // Only the last two digits fit in a tile
            let label = format!("{:>2}", order % 100);
            return write!(f, "{}", label.with(Color::Black).on(Color::Yellow));
        }
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Attempted => "  ".on(Color::Cyan),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟪".with(Color::Magenta),
            Tile::RouteLink => "  ".on(Color::Yellow),
            Tile::Route(_) => unreachable!(),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Frame size in tiles: `(2 * width + 1, 2 * height + 1)`.
pub fn frame_size(session: &Session) -> (usize, usize) {
    (
        session.width() as usize * 2 + 1,
        session.height() as usize * 2 + 1,
    )
}

/// Lay out the session as rows of tiles. Reads the session only.
pub fn build_frame(session: &Session) -> Vec<Vec<Tile>> {
    let (cols, rows) = frame_size(session);
    let mut frame = vec![vec![Tile::Wall; cols]; rows];
    let maze = session.maze();

    // Position on the path of every solution cell, endpoints included
    let path = session.solution();
    let position = |coord: Coord| path.iter().position(|&c| c == coord);
    let is_route_link = |a: Coord, b: Coord| match (position(a), position(b)) {
        (Some(i), Some(j)) => i.abs_diff(j) == 1,
        _ => false,
    };

    for coord in maze.cells() {
        let (fx, fy) = (coord.0 as usize * 2 + 1, coord.1 as usize * 2 + 1);
        frame[fy][fx] = if session.is_start(coord) {
            Tile::Start
        } else if session.is_goal(coord) {
            Tile::Goal
        } else if let Some(order) = session.solution_order(coord) {
            Tile::Route(order)
        } else if session.is_attempted(coord) {
            Tile::Attempted
        } else {
            Tile::Empty
        };

        // Edges to the right and below, each drawn once
        for dir in [Direction::Right, Direction::Down] {
            let Some(next) = maze.neighbor(coord, dir) else {
                continue;
            };
            let (ex, ey) = match dir {
                Direction::Right => (fx + 1, fy),
                _ => (fx, fy + 1),
            };
            frame[ey][ex] = if !maze.is_connected(coord, next) {
                Tile::Wall
            } else if is_route_link(coord, next) {
                Tile::RouteLink
            } else {
                Tile::Empty
            };
        }
    }

    frame
}

/// Draw the frame and status line to `out`, clearing the screen first.
///
/// If the frame does not fit `term_size`, a resize hint is drawn instead.
pub fn draw<W: Write>(out: &mut W, session: &Session, term_size: (u16, u16)) -> std::io::Result<()> {
    let (term_width, term_height) = term_size;
    let (cols, rows) = frame_size(session);
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // One row for the status line below the frame
    if cols * Tile::WIDTH as usize > term_width as usize || rows + 1 > term_height as usize {
        let msg = format!(
            "Terminal size is too small ({}x{}) for the maze ({}x{}). Please resize the terminal, or press Q to exit.",
            term_width,
            term_height,
            session.width(),
            session.height()
        );
        let (msg, _) = msg.unicode_truncate(term_width as usize);
        queue!(
            out,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
        return out.flush();
    }

    for row in build_frame(session) {
        for tile in row {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }

    let status = format!("[{}] {}", session.solver().short_name(), session.status());
    let (status, _) = status.unicode_truncate(term_width as usize);
    queue!(
        out,
        style::PrintStyledContent(status.with(Color::Blue).attribute(Attribute::Bold))
    )?;
    out.flush()
}
