use super::Worklist;
use crate::maze::{Maze, NodeId};

/// Last in, first out. The top of the stack is the end of the vector.
pub(super) struct LifoWorklist {
    stack: Vec<NodeId>,
}

impl LifoWorklist {
    pub(super) fn new(origin: NodeId) -> Self {
        LifoWorklist {
            stack: vec![origin],
        }
    }
}

impl Worklist for LifoWorklist {
    fn insert(&mut self, node: NodeId, _from: NodeId, _maze: &Maze) {
        self.stack.push(node);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        self.stack.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let maze = Maze::new(3, 3).unwrap();
        let mut worklist = LifoWorklist::new(0);
        assert_eq!(worklist.remove(), Some(0));
        worklist.insert(1, 0, &maze);
        worklist.insert(2, 0, &maze);
        worklist.insert(3, 0, &maze);
        assert_eq!(worklist.pending(), vec![3, 2, 1]);
        assert_eq!(worklist.remove(), Some(3));
        assert_eq!(worklist.remove(), Some(2));
    }
}
