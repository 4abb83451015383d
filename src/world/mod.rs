mod bounds;
mod direction;
mod navigator;
mod render;
mod snake;
pub(crate) use self::bounds::Bounds;
pub(crate) use self::direction::Direction;
use self::navigator::{choose_step, nearest};
use self::snake::Snake;
use crate::config::WorldConfig;
use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};
use ratatui::layout::Position;

/// The complete state of the simulation: a snake wandering a grid, eating its
/// way through a scattering of food and then heading back to where it
/// started.  Each round trip is an *epoch*; once the snake is back at its
/// starting cell, a fresh epoch begins with a new snake and new food.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct World<R = rand::rngs::StdRng> {
    rng: R,
    bounds: Bounds,
    snake_length: u16,
    food_count: usize,
    snake: Snake,
    /// Uneaten food, in the order in which it was placed.  Ties between
    /// equally distant food are broken by this order.
    foods: Vec<Position>,
    heading: Direction,
    /// Where the snake's head was at the start of the epoch
    start: Position,
    /// Whether all food has been eaten and the snake is returning to `start`
    returning: bool,
}

impl<R: Rng> World<R> {
    /// Create a world and start its first epoch.  `config` must have passed
    /// [`WorldConfig::validate()`].
    pub(crate) fn new(config: WorldConfig, mut rng: R) -> World<R> {
        let bounds = config.bounds();
        let start = random_start(&mut rng, bounds, config.snake_length);
        let mut world = World {
            rng,
            bounds,
            snake_length: config.snake_length,
            food_count: config.food_count,
            snake: Snake::stretched_west(start, config.snake_length),
            foods: Vec::new(),
            heading: Direction::East,
            start,
            returning: false,
        };
        world.spawn_foods();
        log_epoch_start(&world);
        world
    }

    /// Start a new epoch: place a new snake at a random location, facing
    /// east, and scatter a new batch of food.
    pub(crate) fn reset(&mut self) {
        self.start = random_start(&mut self.rng, self.bounds, self.snake_length);
        self.snake = Snake::stretched_west(self.start, self.snake_length);
        self.heading = Direction::East;
        self.returning = false;
        self.spawn_foods();
        log_epoch_start(self);
    }

    /// Replace all food with `food_count` distinct cells chosen uniformly at
    /// random from those not covered by the snake
    pub(crate) fn spawn_foods(&mut self) {
        let snake = &self.snake;
        self.foods = self
            .bounds
            .positions()
            .filter(|&p| !snake.contains(p))
            .choose_multiple(&mut self.rng, self.food_count);
        // `choose_multiple()` does not randomize the order of its results
        self.foods.shuffle(&mut self.rng);
    }

    /// Advance the simulation by one step.
    ///
    /// If all food has been eaten, the snake switches to returning mode
    /// before choosing its move.  The snake then takes one greedy step toward
    /// its target.  Arriving back at the start while returning begins a new
    /// epoch; otherwise, any food under the new head is eaten.
    pub(crate) fn tick(&mut self) -> Tick {
        if !self.returning && self.foods.is_empty() {
            log::debug!(
                "All food eaten; returning to ({}, {})",
                self.start.x,
                self.start.y
            );
            self.returning = true;
        }
        let head = self.snake.head();
        let Some(step) = choose_step(head, self.heading, self.target(), self.bounds) else {
            log::debug!("No move available from ({}, {})", head.x, head.y);
            return Tick::Stalled;
        };
        self.heading = step.heading;
        if self.returning && step.to == self.start {
            self.reset();
            return Tick::Reset;
        }
        self.snake.advance(step.to);
        if self.returning {
            return Tick::Moved;
        }
        match self.foods.iter().position(|&p| p == step.to) {
            Some(i) => {
                let _ = self.foods.remove(i);
                log::trace!(
                    "Ate food at ({}, {}); {} left",
                    step.to.x,
                    step.to.y,
                    self.foods.len()
                );
                Tick::Ate
            }
            None => Tick::Moved,
        }
    }
}

impl<R> World<R> {
    /// The cell the snake is currently making for: the start cell when
    /// returning (or when no food is left), otherwise the nearest food
    pub(crate) fn target(&self) -> Position {
        if self.returning {
            self.start
        } else {
            nearest(self.snake.head(), self.foods.iter().copied()).unwrap_or(self.start)
        }
    }

    /// Point the snake in `direction` ahead of the next tick, as long as that
    /// does not turn it straight around.  Returns `false` if the change was
    /// rejected.
    ///
    /// The next tick's move is still chosen by the navigator; the new heading
    /// only determines which way counts as "turning around".
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.heading.reverse() {
            false
        } else {
            self.heading = direction;
            true
        }
    }

    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn foods(&self) -> &[Position] {
        &self.foods
    }

    pub(crate) fn food_count(&self) -> usize {
        self.food_count
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn start(&self) -> Position {
        self.start
    }

    pub(crate) fn returning(&self) -> bool {
        self.returning
    }
}

/// What happened during a call to [`World::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved without eating anything
    Moved,

    /// The snake moved onto a food cell and ate it
    Ate,

    /// The snake made it back to its starting cell, and a new epoch has begun
    Reset,

    /// The snake had no legal move and stayed where it was
    Stalled,
}

/// Choose a starting cell for the snake's head such that the rest of the
/// snake fits to its left
fn random_start<R: Rng>(rng: &mut R, bounds: Bounds, snake_length: u16) -> Position {
    let x = rng.random_range(snake_length..bounds.width);
    let y = rng.random_range(0..bounds.height);
    Position::new(x, y)
}

fn log_epoch_start<R>(world: &World<R>) {
    log::info!(
        "New epoch: snake starts at ({}, {}) with {} food on the grid",
        world.start.x,
        world.start.y,
        world.foods.len()
    );
}
