pub mod edge;
pub mod node;

pub use edge::Edge;
pub use node::{Coord, Direction, Node, NodeId, NodeState};

use crate::error::MazeError;

/// A rectangular grid of cells plus the edges that open walls between them.
///
/// All nodes live in one row-major vector; links between nodes are indices into it.
#[derive(Debug, Clone)]
pub struct Maze {
    nodes: Vec<Node>,
    tree: Vec<Edge>,
    width: u16,
    height: u16,
}

impl Maze {
    /// Creates a maze with the given width and height where every wall is closed.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let nodes = (0..height)
            .flat_map(|row| (0..width).map(move |col| Node::new(Coord::new(row, col))))
            .collect();
        let mut maze = Maze {
            nodes,
            tree: Vec::new(),
            width,
            height,
        };
        maze.reset_state();
        Ok(maze)
    }

    /// Creates a maze whose open walls are exactly the given edges.
    ///
    /// Every endpoint must lie inside the grid and each edge must join lattice neighbours.
    /// No spanning-tree check is made, so the result may contain cycles or unreachable cells.
    pub fn with_edges(width: u16, height: u16, edges: Vec<Edge>) -> Result<Self, MazeError> {
        let mut maze = Maze::new(width, height)?;
        maze.connect(edges)?;
        Ok(maze)
    }

    /// Derive per-node connectivity from the edge list in a single pass.
    fn connect(&mut self, edges: Vec<Edge>) -> Result<(), MazeError> {
        let mut ids = Vec::with_capacity(edges.len());
        for edge in &edges {
            let one = self
                .node_id(edge.one)
                .ok_or(MazeError::OutOfGrid { coord: edge.one })?;
            let two = self
                .node_id(edge.two)
                .ok_or(MazeError::OutOfGrid { coord: edge.two })?;
            if !edge.one.is_adjacent(edge.two) {
                return Err(MazeError::NotAdjacent {
                    one: edge.one,
                    two: edge.two,
                });
            }
            ids.push((one, two));
        }

        for (&(one, two), edge) in ids.iter().zip(&edges) {
            self.nodes[one].attach(two, edge.two);
            self.nodes[two].attach(one, edge.one);
        }
        tracing::debug!("[maze] connected {} edges over {} nodes", edges.len(), self.len());
        self.tree = edges;
        Ok(())
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edges that open walls, in the order they were accepted.
    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }

    /// The node at the minimum coordinate.
    pub fn start(&self) -> NodeId {
        0
    }

    /// The node at the maximum coordinate.
    pub fn target(&self) -> NodeId {
        self.nodes.len() - 1
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn node_id(&self, coord: Coord) -> Option<NodeId> {
        self.is_in_bounds(coord)
            .then(|| coord.row as usize * self.width as usize + coord.col as usize)
    }

    pub fn coord(&self, id: NodeId) -> Coord {
        self.nodes[id].coord()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// The neighbour of `id` in `direction`, or `id` itself when that wall is closed.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> NodeId {
        self.nodes[id].link(direction).unwrap_or(id)
    }

    /// Clear visited flags and state tags, keeping the topology.
    /// Start and target are re-tagged afterwards.
    pub fn reset_state(&mut self) {
        for node in self.nodes.iter_mut() {
            node.set_visited(false);
            node.set_state(NodeState::Unvisited);
        }
        let (start, target) = (self.start(), self.target());
        self.nodes[start].set_state(NodeState::Start);
        self.nodes[target].set_state(NodeState::Target);
    }

    /// Manually step from `id` in `direction`.
    ///
    /// When the wall is open both the departed node and the destination are marked explored and
    /// the destination is returned. Otherwise `id` is returned and nothing changes.
    pub fn get_next(&mut self, id: NodeId, direction: Direction) -> NodeId {
        let Some(next) = self.nodes[id].link(direction) else {
            return id;
        };
        self.nodes[id].set_state(NodeState::Explored);
        self.nodes[next].set_state(NodeState::Explored);
        next
    }

    /// Like [`Maze::get_next`], taking a direction token such as `"up"`.
    /// Unrecognized tokens leave the position unchanged.
    pub fn get_next_token(&mut self, id: NodeId, token: &str) -> NodeId {
        match token.parse::<Direction>() {
            Ok(direction) => self.get_next(id, direction),
            Err(_) => id,
        }
    }
}

impl std::ops::Index<NodeId> for Maze {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeId> for Maze {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}
