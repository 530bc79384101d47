use crate::{error::MazeError, maze::Coord};

/// An unordered link between two cells.
///
/// The weight only orders candidate edges during generation; it carries no meaning afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub one: Coord,
    pub two: Coord,
    pub weight: u32,
}

impl Edge {
    pub fn new(one: Coord, two: Coord, weight: u32) -> Self {
        Edge { one, two, weight }
    }

    /// Whether `coord` is one of the two endpoints.
    pub fn contains(&self, coord: Coord) -> bool {
        self.one == coord || self.two == coord
    }

    /// Given one endpoint, return the other.
    pub fn other(&self, coord: Coord) -> Result<Coord, MazeError> {
        if self.one == coord {
            Ok(self.two)
        } else if self.two == coord {
            Ok(self.one)
        } else {
            Err(MazeError::InvalidEdgeEndpoint {
                coord,
                one: self.one,
                two: self.two,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let edge = Edge::new(Coord::new(1, 1), Coord::new(1, 2), 0);
        assert!(edge.contains(Coord::new(1, 1)));
        assert!(edge.contains(Coord::new(1, 2)));
        assert!(!edge.contains(Coord::new(3, 3)));
    }

    #[test]
    fn test_other() {
        let one = Coord::new(1, 1);
        let two = Coord::new(1, 2);
        let edge = Edge::new(one, two, 0);
        assert_eq!(edge.other(one), Ok(two));
        assert_eq!(edge.other(two), Ok(one));
    }

    #[test]
    fn test_other_rejects_foreign_node() {
        let edge = Edge::new(Coord::new(1, 2), Coord::new(2, 2), 4);
        assert_eq!(
            edge.other(Coord::new(1, 3)),
            Err(MazeError::InvalidEdgeEndpoint {
                coord: Coord::new(1, 3),
                one: Coord::new(1, 2),
                two: Coord::new(2, 2),
            })
        );
    }
}
