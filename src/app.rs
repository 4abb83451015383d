use crate::command::Command;
use crate::world::{Direction, Tick, World};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives a [`World`]: ticks it at a fixed rate, redraws it after every
/// change, and lets the user nudge the snake or quit in between ticks
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::StdRng> {
    world: World<R>,
    tick_period: Duration,
    next_tick: Option<Instant>,
    /// Number of ticks in the current epoch
    ticks: u64,
    /// Number of epochs completed so far
    epochs: u64,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(world: World<R>, tick_period: Duration) -> App<R> {
        App {
            world,
            tick_period,
            next_tick: None,
            ticks: 0,
            epochs: 0,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self.world, frame.area()))?;
            self.process_input()?;
        }
        log::info!("Quitting after {} completed epochs", self.epochs);
        Ok(())
    }

    /// Wait for either the next tick or a terminal event, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        let period = self.tick_period;
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + period);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            self.next_tick = None;
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.ticks += 1;
        match self.world.tick() {
            Tick::Reset => {
                self.epochs += 1;
                log::info!("Epoch {} completed in {} ticks", self.epochs, self.ticks);
                self.ticks = 0;
            }
            Tick::Stalled => log::warn!("Snake is stuck on tick {}", self.ticks),
            Tick::Moved | Tick::Ate => (),
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        let direction = match cmd {
            Command::Quit => {
                self.quitting = true;
                return;
            }
            Command::Up => Direction::North,
            Command::Down => Direction::South,
            Command::Left => Direction::West,
            Command::Right => Direction::East,
        };
        if !self.world.steer(direction) {
            log::trace!(
                "Ignoring request to turn {direction:?} while heading {:?}",
                self.world.heading()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        let config = WorldConfig {
            width: 10,
            height: 5,
            snake_length: 4,
            food_count: 3,
        };
        let world = World::new(config, ChaCha12Rng::seed_from_u64(RNG_SEED));
        App::new(world, Duration::from_millis(100))
    }

    #[test]
    fn steer_with_keys() {
        let mut app = new_app();
        assert_eq!(app.world.heading(), Direction::East);
        app.handle_event(Event::Key(KeyCode::Up.into()));
        assert_eq!(app.world.heading(), Direction::North);
        app.handle_event(Event::Key(KeyCode::Char('j').into()));
        assert_eq!(app.world.heading(), Direction::North);
        app.handle_event(Event::Key(KeyCode::Char('a').into()));
        assert_eq!(app.world.heading(), Direction::West);
        assert!(!app.quitting);
    }

    #[test]
    fn last_key_wins() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyCode::Up.into()));
        app.handle_event(Event::Key(KeyCode::Right.into()));
        assert_eq!(app.world.heading(), Direction::East);
    }

    #[test]
    fn ignore_other_events() {
        let mut app = new_app();
        app.handle_event(Event::FocusLost);
        app.handle_event(Event::Key(KeyCode::Enter.into()));
        app.handle_event(Event::Resize(80, 24));
        assert_eq!(app.world.heading(), Direction::East);
        assert!(!app.quitting);
    }

    #[test]
    fn quit_with_q() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyCode::Char('q').into()));
        assert!(app.quitting);
    }

    #[test]
    fn quit_with_ctrl_c() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.quitting);
    }

    #[test]
    fn count_epochs() {
        let mut app = new_app();
        for _ in 0..10_000 {
            app.advance();
            if app.epochs == 2 {
                break;
            }
        }
        assert_eq!(app.epochs, 2);
        assert_eq!(app.ticks, 0);
    }
}
