use rand::rngs::StdRng;

use crate::{
    error::MazeError,
    generators::{generate_with_rng, get_rng},
    maze::{Direction, Maze, NodeId, NodeState},
    solvers::{Search, Strategy},
};

/// Input understood by a [`Session`], independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Reset,
    NewMaze,
    Solve(Strategy),
    Move(Direction),
    Other,
}

/// A maze being played, either stepped by a search on every tick or walked manually.
pub struct Session {
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    current: NodeId,
    /// Active search. Manual play keeps an A* search around to finish the job on arrival.
    search: Search,
    /// Source of every maze generated in this session
    rng: StdRng,
    width: u16,
    height: u16,
    /// Advance the search on every tick
    auto_solve: bool,
    /// A solve mode was picked; further mode keys are ignored until reset
    locked: bool,
    moves: usize,
}

impl Session {
    /// Start a session on a fresh `width` x `height` maze. The same seed replays the same mazes.
    pub fn new(width: u16, height: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        let mut rng = get_rng(seed);
        let maze = generate_with_rng(width, height, &mut rng)?;
        let search = Search::new(Strategy::AStar, maze.start(), maze.target(), &maze);
        Ok(Session {
            current: maze.start(),
            maze,
            search,
            rng,
            width,
            height,
            auto_solve: false,
            locked: false,
            moves: 0,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_auto_solving(&self) -> bool {
        self.auto_solve
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_solved(&self) -> bool {
        self.search.is_solved()
    }

    pub fn strategy(&self) -> Strategy {
        self.search.strategy()
    }

    /// Put the player back on the start and forget all progress. The maze layout is kept.
    pub fn reset(&mut self) {
        self.maze.reset_state();
        self.current = self.maze.start();
        self.start_search(Strategy::AStar);
        self.auto_solve = false;
        self.locked = false;
        self.moves = 0;
    }

    /// Replace the maze with a new one drawn from the session's random source.
    pub fn new_maze(&mut self) -> Result<(), MazeError> {
        self.maze = generate_with_rng(self.width, self.height, &mut self.rng)?;
        tracing::info!("[session] generated a new {}x{} maze", self.width, self.height);
        self.reset();
        Ok(())
    }

    fn start_search(&mut self, strategy: Strategy) {
        self.search = Search::new(strategy, self.maze.start(), self.maze.target(), &self.maze);
    }

    pub fn on_key(&mut self, key: Key) -> Result<(), MazeError> {
        match key {
            Key::Reset => self.reset(),
            Key::NewMaze => self.new_maze()?,
            Key::Solve(strategy) if !self.locked => {
                tracing::info!("[session] auto-solving with {}", strategy);
                self.start_search(strategy);
                self.locked = true;
                self.auto_solve = true;
            }
            Key::Move(_) if !self.locked => {
                tracing::info!("[session] manual solve started");
                self.start_search(Strategy::AStar);
                self.locked = true;
                self.auto_solve = false;
            }
            _ => {}
        }

        if let Key::Move(direction) = key {
            if self.locked && !self.auto_solve {
                let next = self.maze.get_next(self.current, direction);
                if next != self.current {
                    tracing::debug!("[session] moved {:?} to {}", direction, self.maze.coord(next));
                }
                self.current = next;
                self.moves += 1;
            }
        }
        Ok(())
    }

    /// Advance one timer tick.
    ///
    /// While auto-solving, the search takes one step and the player follows it.
    /// Reaching the target, by either means, finishes the search at once and highlights the
    /// solution.
    pub fn on_tick(&mut self) {
        if self.auto_solve {
            self.current = self.search.advance(&mut self.maze);
            self.maze[self.current].set_state(NodeState::Explored);
            self.moves += 1;
        }
        if self.current == self.maze.target() && !self.search.is_solved() {
            let found = self.search.force_finish(&mut self.maze);
            tracing::info!(
                "[session] target reached after {} moves, path found: {}",
                self.moves,
                found
            );
        }
        if self.current == self.maze.target() {
            let target = self.maze.target();
            self.maze[target].set_state(NodeState::Solution);
            self.auto_solve = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_to_target(session: &mut Session) {
        // Follow the unique solution path with manual moves
        let mut maze = session.maze().clone();
        let path = crate::solvers::solve(Strategy::BreadthFirst, &mut maze)
            .unwrap()
            .path;
        for pair in path.windows(2) {
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| maze[pair[0]].link(d) == Some(pair[1]))
                .unwrap();
            session.on_key(Key::Move(direction)).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new(6, 4, Some(1)).unwrap();
        assert_eq!(session.current(), session.maze().start());
        assert_eq!(session.moves(), 0);
        assert!(!session.is_locked());
        assert!(!session.is_auto_solving());
        assert_eq!(session.strategy(), Strategy::AStar);
    }

    #[test]
    fn test_tick_without_mode_does_nothing() {
        let mut session = Session::new(6, 4, Some(1)).unwrap();
        session.on_tick();
        assert_eq!(session.moves(), 0);
        assert_eq!(session.current(), session.maze().start());
    }

    #[test]
    fn test_solve_key_locks_and_auto_solves() {
        let mut session = Session::new(6, 4, Some(2)).unwrap();
        session.on_key(Key::Solve(Strategy::DepthFirst)).unwrap();
        assert!(session.is_locked());
        assert!(session.is_auto_solving());
        assert_eq!(session.strategy(), Strategy::DepthFirst);

        // Further mode keys are ignored while locked
        session.on_key(Key::Solve(Strategy::BreadthFirst)).unwrap();
        assert_eq!(session.strategy(), Strategy::DepthFirst);

        session.on_tick();
        assert_eq!(session.moves(), 1);
        assert_eq!(session.current(), session.maze().start());
        session.on_tick();
        assert_eq!(session.moves(), 2);
        assert_ne!(session.current(), session.maze().start());
    }

    #[test]
    fn test_auto_solve_finishes() {
        let mut session = Session::new(7, 5, Some(3)).unwrap();
        session.on_key(Key::Solve(Strategy::BreadthFirst)).unwrap();
        for _ in 0..session.maze().len() * 2 {
            session.on_tick();
            if !session.is_auto_solving() {
                break;
            }
        }
        assert!(session.is_solved());
        assert!(!session.is_auto_solving());
        assert_eq!(session.current(), session.maze().target());
        let target = session.maze().target();
        assert_eq!(session.maze()[target].state(), NodeState::Solution);
    }

    #[test]
    fn test_manual_moves() {
        let mut session = Session::new(5, 5, Some(4)).unwrap();
        let start = session.maze().start();
        let open = Direction::ALL
            .into_iter()
            .find(|&d| session.maze()[start].is_connected(d))
            .unwrap();
        session.on_key(Key::Move(open)).unwrap();
        assert!(session.is_locked());
        assert!(!session.is_auto_solving());
        assert_eq!(session.moves(), 1);
        assert_eq!(session.current(), session.maze().neighbor(start, open));

        // Auto-solve keys are ignored once manual play has started
        session.on_key(Key::Solve(Strategy::BreadthFirst)).unwrap();
        assert!(!session.is_auto_solving());
    }

    #[test]
    fn test_manual_arrival_force_finishes() {
        let mut session = Session::new(6, 6, Some(5)).unwrap();
        walk_to_target(&mut session);
        assert_eq!(session.current(), session.maze().target());
        assert!(!session.is_solved());

        session.on_tick();
        assert!(session.is_solved());
        let on_path = session
            .maze()
            .nodes()
            .iter()
            .filter(|n| n.state() == NodeState::Solution)
            .count();
        assert!(on_path >= 2);
        assert_eq!(
            session.maze()[session.maze().start()].state(),
            NodeState::Solution
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = Session::new(6, 4, Some(6)).unwrap();
        let tree = session.maze().tree().to_vec();
        session.on_key(Key::Solve(Strategy::AStar)).unwrap();
        (0..5).for_each(|_| session.on_tick());
        session.on_key(Key::Reset).unwrap();

        assert_eq!(session.moves(), 0);
        assert!(!session.is_locked());
        assert!(!session.is_auto_solving());
        assert_eq!(session.current(), session.maze().start());
        assert_eq!(session.maze().tree(), tree.as_slice());
        assert!(session.maze().nodes().iter().all(|n| !n.is_visited()));
    }

    #[test]
    fn test_new_maze_sequence_is_seeded() {
        let mut a = Session::new(8, 8, Some(7)).unwrap();
        let mut b = Session::new(8, 8, Some(7)).unwrap();
        let first = a.maze().tree().to_vec();
        a.on_key(Key::NewMaze).unwrap();
        b.on_key(Key::NewMaze).unwrap();
        assert_eq!(a.maze().tree(), b.maze().tree());
        assert_ne!(a.maze().tree(), first.as_slice());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut session = Session::new(4, 4, Some(8)).unwrap();
        session.on_key(Key::Other).unwrap();
        assert!(!session.is_locked());
        assert_eq!(session.moves(), 0);
    }
}
