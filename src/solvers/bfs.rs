use std::collections::VecDeque;

use super::Worklist;
use crate::maze::{Maze, NodeId};

/// First in, first out.
pub(super) struct FifoWorklist {
    queue: VecDeque<NodeId>,
}

impl FifoWorklist {
    pub(super) fn new(origin: NodeId) -> Self {
        FifoWorklist {
            queue: VecDeque::from([origin]),
        }
    }
}

impl Worklist for FifoWorklist {
    fn insert(&mut self, node: NodeId, _from: NodeId, _maze: &Maze) {
        self.queue.push_back(node);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        self.queue.iter().copied().collect()
    }
}
