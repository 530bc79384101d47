use thiserror::Error;

use crate::{logging::LoggingError, maze::Coord};

/// Structural failures raised while building a maze or querying its edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    /// A node is touched by no candidate edge, so no spanning tree can reach it.
    #[error("node at {coord} is not touched by any candidate edge")]
    InvalidTopology { coord: Coord },
    /// The candidate edges ran out before all nodes joined one component.
    #[error("candidate edges leave {components} disconnected components")]
    Disconnected { components: usize },
    /// An edge endpoint lies outside the node set.
    #[error("edge endpoint {coord} is outside the grid")]
    OutOfGrid { coord: Coord },
    /// Edges may only join lattice neighbours.
    #[error("{one} and {two} are not adjacent")]
    NotAdjacent { one: Coord, two: Coord },
    /// Asked for the opposite side of an edge with a node it does not contain.
    #[error("{coord} is not an endpoint of edge {one}-{two}")]
    InvalidEdgeEndpoint { coord: Coord, one: Coord, two: Coord },
}

/// Anything that can stop the binaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
