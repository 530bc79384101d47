use std::{fmt, io::Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    app::session::Session,
    maze::{Direction, Maze, NodeId, NodeState},
};

/// One character block of the drawn maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    /// A cell, coloured by its state
    Cell(NodeState),
    /// The opening between two linked cells
    Passage(NodeState),
    /// The cell the player is on
    Player,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Player => "🟡".with(Color::Yellow),
            Tile::Cell(state) | Tile::Passage(state) => match state {
                NodeState::Unvisited => "  ".with(Color::Reset),
                NodeState::Explored => "* ".with(Color::Blue),
                NodeState::Solution => "🟨".with(Color::Yellow),
                NodeState::Start => "🟩".with(Color::Green),
                NodeState::Target => "🟥".with(Color::Red),
            },
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

/// How an opening between two cells is drawn: solution only if both ends are on the path,
/// explored if both ends have been touched, blank otherwise.
fn passage_state(a: NodeState, b: NodeState) -> NodeState {
    match (a, b) {
        (NodeState::Solution, NodeState::Solution) => NodeState::Solution,
        (NodeState::Unvisited, _) | (_, NodeState::Unvisited) => NodeState::Unvisited,
        _ => NodeState::Explored,
    }
}

/// Tile grid of the maze: `2 * height + 1` rows of `2 * width + 1` tiles.
/// Cells sit at odd/odd positions, with walls or passages between them.
pub fn layout(maze: &Maze, current: NodeId) -> Vec<Vec<Tile>> {
    let rows = maze.height() as usize * 2 + 1;
    let cols = maze.width() as usize * 2 + 1;
    let mut tiles = vec![vec![Tile::Wall; cols]; rows];

    for (id, node) in maze.nodes().iter().enumerate() {
        let coord = node.coord();
        let (y, x) = (coord.row as usize * 2 + 1, coord.col as usize * 2 + 1);
        tiles[y][x] = if id == current {
            Tile::Player
        } else {
            Tile::Cell(node.state())
        };
        // Only look right and down so every passage is drawn once
        if let Some(right) = node.link(Direction::Right) {
            tiles[y][x + 1] = Tile::Passage(passage_state(node.state(), maze[right].state()));
        }
        if let Some(down) = node.link(Direction::Down) {
            tiles[y + 1][x] = Tile::Passage(passage_state(node.state(), maze[down].state()));
        }
    }
    tiles
}

const CONTROLS: [&str; 2] = [
    "n: new maze | r: reset | Esc: exit",
    "b: BFS | d: DFS | a: A* | arrows: walk",
];

/// Widest status line: the longest mode label with a full `usize` move count.
const HUD_WIDTH: u16 = 42;

fn status_line(mode: &str, moves: usize) -> String {
    format!("{mode} | Moves: {moves}")
}

/// Status lines shown under the maze. None is wider than [`HUD_WIDTH`] columns.
pub fn hud_lines(session: &Session) -> Vec<String> {
    let mode = if session.is_auto_solving() {
        format!("Solving: {}", session.strategy().abbreviation())
    } else if session.is_solved() {
        "Solved!".to_string()
    } else if session.is_locked() {
        "Manual solve".to_string()
    } else {
        "Pick a mode".to_string()
    };
    CONTROLS
        .iter()
        .map(|line| line.to_string())
        .chain([status_line(&mode, session.moves())])
        .collect()
}

/// Terminal columns and rows needed to draw the maze and its status lines.
pub fn required_size(maze: &Maze) -> (u32, u32) {
    let grid_cols = (u32::from(maze.width()) * 2 + 1) * u32::from(Tile::WIDTH);
    let rows = u32::from(maze.height()) * 2 + 1 + (CONTROLS.len() as u32 + 1);
    (grid_cols.max(u32::from(HUD_WIDTH)), rows)
}

/// Draw the whole session: maze tiles first, then the status lines.
pub fn draw<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for row in layout(session.maze(), session.current()) {
        for tile in row {
            out.queue(style::Print(tile))?;
        }
        out.queue(style::Print("\r\n"))?;
    }
    for line in hud_lines(session) {
        queue!(
            out,
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(line.with(Color::Cyan)),
            style::Print("\r\n"),
        )?;
    }
    out.flush()
}

/// Ask the user to enlarge the terminal.
pub fn draw_too_small<W: Write>(
    out: &mut W,
    needed: (u32, u32),
    actual: (u16, u16),
) -> std::io::Result<()> {
    let msg = format!(
        "Terminal size is too small ({}x{}) to display the maze, which needs {}x{}. \
         Please resize the terminal.\r\n",
        actual.0, actual.1, needed.0, needed.1
    );
    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
        style::PrintStyledContent(
            "Press Esc to exit...\r\n"
                .with(Color::Blue)
                .attribute(Attribute::Bold)
        )
    )?;
    out.flush()
}
