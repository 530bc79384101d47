pub mod renderer;
pub mod session;

use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::{
    app::session::{Key, Session},
    error::AppError,
    maze::Direction,
    solvers::Strategy,
};

/// Interactive terminal front end. Everything runs on the calling thread.
pub struct App {
    /// How often the session is ticked while no key arrives
    tick: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(30),
        }
    }
}

impl App {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            // ignore any errors as we are already failing
            let _ = App::restore_terminal(&mut std::io::stdout());
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and check the maze still fits. Shows a resize prompt if it does not.
    fn check_size(stdout: &mut Stdout, session: &Session) -> std::io::Result<bool> {
        let needed = renderer::required_size(session.maze());
        let actual = terminal::size()?;
        if !has_room(needed, actual) {
            tracing::debug!("[app] terminal {:?} is smaller than {:?}", actual, needed);
            renderer::draw_too_small(stdout, needed, actual)?;
            return Ok(false);
        }
        stdout.queue(terminal::Clear(ClearType::All))?;
        Ok(true)
    }

    /// Main loop: wait up to one tick for a key, feed it to the session, tick when due, redraw.
    /// Returns when `Esc` is pressed.
    pub fn run(&self, stdout: &mut Stdout, session: &mut Session) -> Result<(), AppError> {
        tracing::info!("[app] started main loop, tick {:?}", self.tick);
        let mut fits = App::check_size(stdout, session)?;
        let mut last_tick = Instant::now();

        loop {
            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let Some(key) = map_key(key_event.code) else {
                            tracing::debug!("[app] Esc key pressed, exiting");
                            break;
                        };
                        // Keys are ignored until the maze fits on screen
                        if fits {
                            session.on_key(key)?;
                        }
                    }
                    Event::Resize(..) => fits = App::check_size(stdout, session)?,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick {
                if fits {
                    session.on_tick();
                }
                last_tick = Instant::now();
            }

            if fits {
                renderer::draw(stdout, session)?;
            }
        }
        tracing::info!("[app] exiting main loop after {} moves", session.moves());
        Ok(())
    }
}

/// Whether a terminal of `actual` columns and rows can hold `needed`.
fn has_room(needed: (u32, u32), actual: (u16, u16)) -> bool {
    u32::from(actual.0) >= needed.0 && u32::from(actual.1) >= needed.1
}

/// Translate a terminal key into a session key. `None` means quit.
fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Esc => return None,
        KeyCode::Char('r') => Key::Reset,
        KeyCode::Char('n') => Key::NewMaze,
        KeyCode::Char('b') => Key::Solve(Strategy::BreadthFirst),
        KeyCode::Char('d') => Key::Solve(Strategy::DepthFirst),
        KeyCode::Char('a') => Key::Solve(Strategy::AStar),
        KeyCode::Up => Key::Move(Direction::Up),
        KeyCode::Down => Key::Move(Direction::Down),
        KeyCode::Left => Key::Move(Direction::Left),
        KeyCode::Right => Key::Move(Direction::Right),
        _ => Key::Other,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('r'), Key::Reset)]
    #[case(KeyCode::Char('n'), Key::NewMaze)]
    #[case(KeyCode::Char('b'), Key::Solve(Strategy::BreadthFirst))]
    #[case(KeyCode::Char('d'), Key::Solve(Strategy::DepthFirst))]
    #[case(KeyCode::Char('a'), Key::Solve(Strategy::AStar))]
    #[case(KeyCode::Up, Key::Move(Direction::Up))]
    #[case(KeyCode::Left, Key::Move(Direction::Left))]
    #[case(KeyCode::Enter, Key::Other)]
    #[case(KeyCode::Char('x'), Key::Other)]
    fn test_map_key(#[case] code: KeyCode, #[case] expected: Key) {
        assert_eq!(map_key(code), Some(expected));
    }

    #[test]
    fn test_esc_quits() {
        assert_eq!(map_key(KeyCode::Esc), None);
    }

    #[test]
    fn test_has_room_counts_status_lines() {
        let session = Session::new(10, 5, Some(1)).unwrap();
        let needed = renderer::required_size(session.maze());
        assert!(has_room(needed, (42, 14)));
        assert!(!has_room(needed, (42, 13)));
        assert!(!has_room(needed, (41, 14)));
        assert!(!has_room((262_142, 6), (u16::MAX, 6)));
    }

    #[test]
    fn test_default_tick() {
        assert_eq!(App::default().tick, Duration::from_millis(30));
        assert_eq!(App::new(Duration::from_millis(5)).tick, Duration::from_millis(5));
    }
}
