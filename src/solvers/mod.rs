mod astar;
mod bfs;
mod dfs;

use std::collections::HashMap;

use crate::maze::{Maze, NodeId, NodeState};
use astar::HeuristicWorklist;
use bfs::FifoWorklist;
use dfs::LifoWorklist;

/// Pending nodes of a search. The only point where strategies differ.
trait Worklist {
    /// Queue `node`, which was discovered while expanding `from`.
    fn insert(&mut self, node: NodeId, from: NodeId, maze: &Maze);
    /// Take the next node to expand.
    fn remove(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    /// Pending nodes in the order they would be removed.
    fn pending(&self) -> Vec<NodeId>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar];

    /// Short name for narrow status lines.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "Breadth-First Search (BFS)"),
            Strategy::DepthFirst => write!(f, "Depth-First Search (DFS)"),
            Strategy::AStar => write!(f, "A* Search"),
        }
    }
}

/// A search from one node to another that advances one node per call.
pub struct Search {
    strategy: Strategy,
    from: NodeId,
    to: NodeId,
    worklist: Box<dyn Worklist>,
    /// The node each discovered node was first reached from. The origin maps to itself.
    came_from: HashMap<NodeId, NodeId>,
    solved: bool,
    steps: usize,
}

impl Search {
    pub fn new(strategy: Strategy, from: NodeId, to: NodeId, maze: &Maze) -> Self {
        let worklist: Box<dyn Worklist> = match strategy {
            Strategy::BreadthFirst => Box::new(FifoWorklist::new(from)),
            Strategy::DepthFirst => Box::new(LifoWorklist::new(from)),
            Strategy::AStar => Box::new(HeuristicWorklist::new(from, to, maze)),
        };
        Search {
            strategy,
            from,
            to,
            worklist,
            came_from: HashMap::from([(from, from)]),
            solved: false,
            steps: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn origin(&self) -> NodeId {
        self.from
    }

    pub fn target(&self) -> NodeId {
        self.to
    }

    /// Whether the target has been reached and its path traced.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the worklist is empty. Once exhausted, every call to
    /// [`Search::advance`] returns the target without doing anything.
    pub fn is_exhausted(&self) -> bool {
        self.worklist.len() == 0
    }

    /// Number of nodes removed from the worklist so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Pending nodes in the order they would be expanded.
    pub fn pending(&self) -> Vec<NodeId> {
        self.worklist.pending()
    }

    /// Progress the search by one node and return that node.
    ///
    /// * Exhausted worklist: returns the target unchanged.
    /// * Target removed: marks the path back to the origin as the solution and returns the target.
    /// * Already visited node removed: returns it without expanding.
    /// * Otherwise queues every unvisited reachable neighbour, marks the node visited and
    ///   returns it.
    pub fn advance(&mut self, maze: &mut Maze) -> NodeId {
        let Some(next) = self.worklist.remove() else {
            return self.to;
        };
        self.steps += 1;

        if next == self.to {
            self.trace(maze, next);
            return next;
        }
        if maze[next].is_visited() {
            return next;
        }

        let neighbors = maze[next].reachable().to_vec();
        for neighbor in neighbors {
            if !maze[neighbor].is_visited() {
                self.came_from.insert(neighbor, next);
                self.worklist.insert(neighbor, next, maze);
            }
        }
        maze[next].set_visited(true);
        next
    }

    /// Step until the target is reached or the worklist runs dry, then trace the target's path.
    /// Returns whether a path was found.
    pub fn force_finish(&mut self, maze: &mut Maze) -> bool {
        if self.solved {
            return true;
        }
        while self.advance(maze) != self.to {}
        self.trace(maze, self.to);
        tracing::debug!(
            "[search] {} finished after {} steps, solved: {}",
            self.strategy,
            self.steps,
            self.solved
        );
        self.solved
    }

    /// Mark every node on the predecessor chain of `last` as part of the solution.
    /// Does nothing if `last` was never discovered.
    fn trace(&mut self, maze: &mut Maze, last: NodeId) {
        let path = self.path_to(last);
        if path.is_empty() {
            return;
        }
        self.solved = true;
        for id in path {
            maze[id].set_state(NodeState::Solution);
        }
    }

    /// Nodes from the origin to `last` following predecessor links.
    /// Empty if `last` was never discovered.
    fn path_to(&self, last: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = last;
        while let Some(&previous) = self.came_from.get(&current) {
            path.push(current);
            if previous == current {
                path.reverse();
                return path;
            }
            current = previous;
        }
        Vec::new()
    }

    /// The origin-to-target path once solved.
    pub fn path(&self) -> Option<Vec<NodeId>> {
        self.solved.then(|| self.path_to(self.to))
    }
}

/// Outcome of solving a maze eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub strategy: Strategy,
    /// Worklist removals needed to reach the target
    pub steps: usize,
    /// Nodes on the start-to-target path, both ends included
    pub path: Vec<NodeId>,
    /// Nodes expanded along the way
    pub explored: usize,
}

/// Reset the maze and search it from start to target in one go.
/// Returns `None` if the target cannot be reached.
pub fn solve(strategy: Strategy, maze: &mut Maze) -> Option<SolveReport> {
    maze.reset_state();
    let mut search = Search::new(strategy, maze.start(), maze.target(), maze);
    if !search.force_finish(maze) {
        tracing::debug!("[search] {} exhausted without reaching the target", strategy);
        return None;
    }
    let path = search.path()?;
    Some(SolveReport {
        strategy,
        steps: search.steps(),
        path,
        explored: maze.nodes().iter().filter(|n| n.is_visited()).count(),
    })
}
