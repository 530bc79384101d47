use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::Worklist;
use crate::maze::{Coord, Maze, NodeId};

/// Best-first by known distance from the origin plus Manhattan distance to the goal.
///
/// A node is pushed again every time it is rediscovered; the stale copy is skipped later because
/// the search sees it as already visited.
pub(super) struct HeuristicWorklist {
    /// Min-heap of (priority, insertion sequence, node).
    /// The sequence breaks ties first-in first-out.
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    /// Best known path length from the origin to each discovered node
    distances: HashMap<NodeId, u32>,
    goal: Coord,
    next_seq: u64,
}

impl HeuristicWorklist {
    pub(super) fn new(origin: NodeId, goal: NodeId, maze: &Maze) -> Self {
        let goal = maze.coord(goal);
        let mut worklist = HeuristicWorklist {
            heap: BinaryHeap::new(),
            distances: HashMap::from([(origin, 0)]),
            goal,
            next_seq: 0,
        };
        worklist.push(maze.coord(origin).manhattan(goal), origin);
        worklist
    }

    fn push(&mut self, priority: u32, node: NodeId) {
        self.heap.push(Reverse((priority, self.next_seq, node)));
        self.next_seq += 1;
    }
}

impl Worklist for HeuristicWorklist {
    fn insert(&mut self, node: NodeId, from: NodeId, maze: &Maze) {
        let candidate = self.distances.get(&from).copied().unwrap_or(0) + 1;
        // Only ever lower a recorded distance
        let best = self
            .distances
            .entry(node)
            .and_modify(|d| *d = (*d).min(candidate))
            .or_insert(candidate);
        let priority = *best + maze.coord(node).manhattan(self.goal);
        self.push(priority, node);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        let mut entries = self.heap.iter().map(|Reverse(entry)| *entry).collect::<Vec<_>>();
        entries.sort_unstable();
        entries.into_iter().map(|(_, _, node)| node).collect()
    }
}
