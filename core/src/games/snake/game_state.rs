use rand::Rng;

use crate::log;
use super::food::place_food;
use super::settings::{GameConfig, FOOD_SCORE};
use super::types::{DeathReason, Direction, Point, WallCollisionMode};

/// One snapshot of a single-player game.
///
/// Every transition returns a fresh value; the previous snapshot is left untouched,
/// so a host may keep it around (for example to render interpolated frames).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Head first, tail last.
    pub snake: Vec<Point>,
    /// Direction applied on the next tick.
    pub direction: Direction,
    /// `None` once the snake covers every cell.
    pub food: Option<Point>,
    pub score: u32,
    /// Number of ticks that actually moved the snake.
    pub tick: u64,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let length = i32::try_from(config.effective_initial_length()).unwrap_or(i32::MAX);
        let head = Point::new(config.width() / 2, config.height() / 2);

        // Segments left of x = 0 are possible on narrow boards and are left as is.
        let snake: Vec<Point> = (0..length)
            .map(|i| Point::new(head.x - i, head.y))
            .collect();
        let food = place_food(config, &snake, rng);

        Self {
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            tick: 0,
            death_reason: None,
        }
    }

    /// Requests a new heading. A direct reversal is ignored.
    pub fn change_direction(&self, direction: Direction) -> Self {
        if direction.is_opposite(&self.direction) {
            return self.clone();
        }

        Self {
            direction,
            ..self.clone()
        }
    }

    /// Advances the game by one tick. Terminal states come back unchanged.
    pub fn step<R: Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R) -> Self {
        if self.is_game_over() {
            return self.clone();
        }

        let next_head = match self.calculate_next_head_position(config) {
            Ok(point) => point,
            Err(reason) => return self.terminated(reason),
        };

        let will_eat = self.food == Some(next_head);

        // The tail cell is vacated this tick unless the snake grows.
        let kept_body = if will_eat {
            &self.snake[..]
        } else {
            &self.snake[..self.snake.len().saturating_sub(1)]
        };

        if kept_body.contains(&next_head) {
            return self.terminated(DeathReason::SelfCollision);
        }

        let mut snake = Vec::with_capacity(kept_body.len() + 1);
        snake.push(next_head);
        snake.extend_from_slice(kept_body);

        let mut score = self.score;
        let mut food = self.food;
        if will_eat {
            score += FOOD_SCORE;
            food = place_food(config, &snake, rng);
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                score
            );
            if food.is_none() {
                log!("Board is full after {} segments", snake.len());
            }
        }

        Self {
            snake,
            direction: self.direction,
            food,
            score,
            tick: self.tick + 1,
            death_reason: None,
        }
    }

    fn calculate_next_head_position(&self, config: &GameConfig) -> Result<Point, DeathReason> {
        let candidate = self.head().translated(self.direction);

        match config.wall_collision_mode {
            WallCollisionMode::WrapAround => Ok(Point::new(
                candidate.x.rem_euclid(config.width()),
                candidate.y.rem_euclid(config.height()),
            )),
            WallCollisionMode::Death => {
                let inside = (0..config.width()).contains(&candidate.x)
                    && (0..config.height()).contains(&candidate.y);
                if inside {
                    Ok(candidate)
                } else {
                    Err(DeathReason::WallCollision)
                }
            }
        }
    }

    fn terminated(&self, reason: DeathReason) -> Self {
        log!(
            "Game over at tick {}: {:?}. Score: {}",
            self.tick,
            reason,
            self.score
        );
        Self {
            death_reason: Some(reason),
            ..self.clone()
        }
    }

    pub fn head(&self) -> Point {
        *self.snake.first().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.snake.last().expect("Snake body should never be empty")
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.death_reason.is_some()
    }

    pub fn is_board_full(&self) -> bool {
        self.food.is_none()
    }

    /// Food position in the `(-1, -1)` encoding used by older front ends.
    pub fn food_or_sentinel(&self) -> Point {
        self.food.unwrap_or(Point::SENTINEL)
    }
}
