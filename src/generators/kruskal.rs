use std::collections::HashMap;

use crate::{
    error::MazeError,
    maze::{Coord, Edge},
};

/// Disjoint sets over dense indices `0..size`.
///
/// Only lives for the duration of one spanning-tree computation.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative of the set containing `x`. Compresses the path on the way back.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merge the sets of `x` and `y`. Returns `false` if they were already joined.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Kruskal's algorithm over a candidate edge list.
///
/// Edges are taken in ascending weight order (ties keep input order); an edge is accepted when
/// its endpoints are still in different components. Returns the accepted edges in acceptance
/// order, exactly `nodes.len() - 1` of them.
///
/// # Errors
/// * [`MazeError::OutOfGrid`] if an edge endpoint is not in `nodes`
/// * [`MazeError::InvalidTopology`] if some node is touched by no edge (with more than one node)
/// * [`MazeError::Disconnected`] if the edges cannot join all nodes into one component
pub fn minimum_spanning_tree(nodes: &[Coord], edges: Vec<Edge>) -> Result<Vec<Edge>, MazeError> {
    if nodes.is_empty() {
        return Ok(Vec::new());
    }

    let index = nodes
        .iter()
        .enumerate()
        .map(|(i, &coord)| (coord, i))
        .collect::<HashMap<_, _>>();
    let lookup = |coord: Coord| {
        index
            .get(&coord)
            .copied()
            .ok_or(MazeError::OutOfGrid { coord })
    };

    let mut touched = vec![false; nodes.len()];
    let mut candidates = Vec::with_capacity(edges.len());
    for edge in edges {
        let (one, two) = (lookup(edge.one)?, lookup(edge.two)?);
        touched[one] = true;
        touched[two] = true;
        candidates.push((edge, one, two));
    }

    // A single cell is a maze on its own
    if nodes.len() > 1 {
        if let Some(i) = touched.iter().position(|&t| !t) {
            return Err(MazeError::InvalidTopology { coord: nodes[i] });
        }
    }

    // Stable, so equal weights keep their input order
    candidates.sort_by_key(|(edge, _, _)| edge.weight);

    let needed = nodes.len() - 1;
    let mut uf = UnionFind::new(nodes.len());
    let mut tree = Vec::with_capacity(needed);
    for (edge, one, two) in candidates {
        if tree.len() == needed {
            break;
        }
        if uf.unite(one, two) {
            tree.push(edge);
        }
    }

    if tree.len() < needed {
        return Err(MazeError::Disconnected {
            components: nodes.len() - tree.len(),
        });
    }
    tracing::debug!(
        "[kruskal] accepted {} edges for {} nodes",
        tree.len(),
        nodes.len()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        nodes: Vec<Coord>,
        edges: Vec<Edge>,
    }

    /// 3x3 grid at rows/cols 1..=3 with every lattice edge, weights 0..12.
    fn fixture() -> Fixture {
        let c = Coord::new;
        let nodes = (1..=3)
            .flat_map(|row| (1..=3).map(move |col| c(row, col)))
            .collect();
        let edges = vec![
            Edge::new(c(1, 1), c(1, 2), 0),
            Edge::new(c(1, 2), c(1, 3), 1),
            Edge::new(c(1, 1), c(2, 1), 2),
            Edge::new(c(2, 1), c(2, 2), 3),
            Edge::new(c(1, 2), c(2, 2), 4),
            Edge::new(c(2, 2), c(2, 3), 5),
            Edge::new(c(1, 3), c(2, 3), 6),
            Edge::new(c(2, 1), c(3, 1), 7),
            Edge::new(c(3, 1), c(3, 2), 8),
            Edge::new(c(2, 2), c(3, 2), 9),
            Edge::new(c(3, 2), c(3, 3), 10),
            Edge::new(c(2, 3), c(3, 3), 11),
        ];
        Fixture { nodes, edges }
    }

    fn expected_tree(edges: &[Edge]) -> Vec<Edge> {
        [0, 1, 2, 3, 5, 7, 8, 10]
            .iter()
            .map(|&i| edges[i])
            .collect()
    }

    #[test]
    fn test_spanning_tree_from_sorted_edges() {
        let Fixture { nodes, edges } = fixture();
        let tree = minimum_spanning_tree(&nodes, edges.clone()).unwrap();
        assert_eq!(tree, expected_tree(&edges));
    }

    #[test]
    fn test_spanning_tree_ignores_input_order() {
        let Fixture { nodes, edges } = fixture();
        let shuffled = [1, 0, 3, 5, 4, 2, 9, 7, 6, 11, 8, 10]
            .iter()
            .map(|&i| edges[i])
            .collect();
        let tree = minimum_spanning_tree(&nodes, shuffled).unwrap();
        assert_eq!(tree, expected_tree(&edges));
    }

    #[test]
    fn test_untouched_node_is_invalid_topology() {
        let Fixture { nodes, edges } = fixture();
        let result = minimum_spanning_tree(&nodes, edges[5..].to_vec());
        assert_eq!(
            result,
            Err(MazeError::InvalidTopology {
                coord: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn test_disconnected_candidates() {
        let c = Coord::new;
        let nodes = vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3)];
        let edges = vec![
            Edge::new(c(0, 0), c(0, 1), 0),
            Edge::new(c(0, 2), c(0, 3), 1),
        ];
        assert_eq!(
            minimum_spanning_tree(&nodes, edges),
            Err(MazeError::Disconnected { components: 2 })
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        let c = Coord::new;
        let nodes = vec![c(0, 0), c(0, 1)];
        let edges = vec![Edge::new(c(0, 1), c(0, 2), 0)];
        assert_eq!(
            minimum_spanning_tree(&nodes, edges),
            Err(MazeError::OutOfGrid { coord: c(0, 2) })
        );
    }

    #[test]
    fn test_single_node_needs_no_edges() {
        let tree = minimum_spanning_tree(&[Coord::new(0, 0)], Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert!(minimum_spanning_tree(&[], Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_find_follows_chains() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.find(2), 2);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(1, 2));
        assert!(!uf.unite(0, 2));
        assert_eq!(uf.find(2), uf.find(0));
        assert_ne!(uf.find(3), uf.find(0));
    }

    #[test]
    fn test_find_is_idempotent_throughout() {
        let Fixture { nodes, edges } = fixture();
        let index = |coord: Coord| nodes.iter().position(|&n| n == coord).unwrap();
        let mut uf = UnionFind::new(nodes.len());
        let check = |uf: &mut UnionFind| {
            for i in 0..nodes.len() {
                let rep = uf.find(i);
                assert_eq!(uf.find(rep), rep);
            }
        };
        check(&mut uf);
        for edge in &edges {
            uf.unite(index(edge.one), index(edge.two));
            check(&mut uf);
        }
        let root = uf.find(0);
        assert!((0..nodes.len()).all(|i| uf.find(i) == root));
    }
}
