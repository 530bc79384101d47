use std::{fmt, str::FromStr};

/// Index of a node inside its maze's node collection (row-major).
pub type NodeId = usize;

/// A lattice position. Ordered row-major so the minimum coordinate is the top left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    pub const fn new(row: u16, col: u16) -> Self {
        Coord { row, col }
    }

    /// Sum of the absolute row and column differences.
    pub fn manhattan(self, other: Coord) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// Whether the two coordinates are one step apart horizontally or vertically.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction of `to` as seen from `from`, if they are lattice neighbours.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }
        let direction = if to.row > from.row {
            Direction::Down
        } else if to.row < from.row {
            Direction::Up
        } else if to.col > from.col {
            Direction::Right
        } else {
            Direction::Left
        };
        Some(direction)
    }

    fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!("unrecognized direction `{other}`")),
        }
    }
}

/// How a node should be drawn.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Unvisited,
    /// On the reconstructed start-to-target path.
    Solution,
    /// Expanded by a search or walked over manually.
    Explored,
    Start,
    Target,
}

/// One maze cell.
///
/// Neighbour links are ids into the owning [`Maze`](super::Maze); a node never owns another node.
#[derive(Debug, Clone)]
pub struct Node {
    coord: Coord,
    visited: bool,
    state: NodeState,
    /// Linked neighbour per direction, indexed by [`Direction::slot`]
    links: [Option<NodeId>; 4],
    /// Neighbours reachable through spanning-tree edges, in edge-list order
    reachable: Vec<NodeId>,
}

impl Node {
    pub fn new(coord: Coord) -> Self {
        Node {
            coord,
            visited: false,
            state: NodeState::default(),
            links: [None; 4],
            reachable: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Whether the wall in `direction` has been opened.
    pub fn is_connected(&self, direction: Direction) -> bool {
        self.links[direction.slot()].is_some()
    }

    /// The neighbour linked in `direction`, if any.
    pub fn link(&self, direction: Direction) -> Option<NodeId> {
        self.links[direction.slot()]
    }

    pub fn reachable(&self) -> &[NodeId] {
        &self.reachable
    }

    /// Record a tree edge to the neighbour `id` sitting at `coord`.
    /// The caller guarantees `coord` is adjacent to this node.
    pub(crate) fn attach(&mut self, id: NodeId, coord: Coord) {
        self.reachable.push(id);
        if let Some(direction) = Direction::between(self.coord, coord) {
            self.links[direction.slot()] = Some(id);
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Node {}
