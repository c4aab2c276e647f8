mod food;
mod game_state;
mod settings;
mod types;

pub use food::{free_cells, place_food};
pub use game_state::GameState;
pub use settings::{
    GameConfig, DEFAULT_INITIAL_LENGTH, FOOD_SCORE, MAX_INITIAL_LENGTH, MIN_INITIAL_LENGTH,
};
pub use types::{DeathReason, Direction, Point, WallCollisionMode};
