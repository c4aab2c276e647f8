use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::WallCollisionMode;

pub const MIN_INITIAL_LENGTH: u32 = 3;
pub const DEFAULT_INITIAL_LENGTH: u32 = 4;
pub const MAX_INITIAL_LENGTH: u32 = 10_000;
pub const FOOD_SCORE: u32 = 10;

const MAX_FIELD_SIZE: u32 = 1000;

/// Per-session board configuration. Never changes while a game is running.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub columns: u32,
    pub rows: u32,
    pub wall_collision_mode: WallCollisionMode,
    #[serde(default)]
    pub initial_length: Option<u32>,
}

impl GameConfig {
    pub fn new(columns: u32, rows: u32, wrap_edges: bool, initial_length: Option<u32>) -> Self {
        Self {
            columns,
            rows,
            wall_collision_mode: WallCollisionMode::from_wrap_edges(wrap_edges),
            initial_length,
        }
    }

    pub fn wrap_edges(&self) -> bool {
        self.wall_collision_mode.wraps()
    }

    /// Requested length clamped to `MIN_INITIAL_LENGTH..=MAX_INITIAL_LENGTH`.
    pub fn effective_initial_length(&self) -> usize {
        let length = self
            .initial_length
            .unwrap_or(DEFAULT_INITIAL_LENGTH)
            .clamp(MIN_INITIAL_LENGTH, MAX_INITIAL_LENGTH);
        usize::try_from(length).unwrap_or(MIN_INITIAL_LENGTH as usize)
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub(crate) fn width(&self) -> i32 {
        i32::try_from(self.columns).unwrap_or(i32::MAX)
    }

    pub(crate) fn height(&self) -> i32 {
        i32::try_from(self.rows).unwrap_or(i32::MAX)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.columns == 0 || self.rows == 0 {
            return Err("columns and rows must be greater than 0".to_string());
        }
        if self.columns > MAX_FIELD_SIZE || self.rows > MAX_FIELD_SIZE {
            return Err(format!(
                "field dimensions must not exceed {}x{}",
                MAX_FIELD_SIZE, MAX_FIELD_SIZE
            ));
        }
        if let Some(length) = self.initial_length
            && length > MAX_INITIAL_LENGTH
        {
            return Err(format!(
                "initial_length must not exceed {}, got {}",
                MAX_INITIAL_LENGTH, length
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
            wall_collision_mode: WallCollisionMode::Death,
            initial_length: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_initial_length_defaults_to_four() {
        let config = GameConfig::new(12, 12, false, None);
        assert_eq!(config.effective_initial_length(), 4);
    }

    #[test]
    fn test_initial_length_clamped_to_three() {
        for requested in [0, 1, 2, 3] {
            let config = GameConfig::new(12, 12, false, Some(requested));
            assert_eq!(config.effective_initial_length(), 3);
        }
        let config = GameConfig::new(12, 12, false, Some(7));
        assert_eq!(config.effective_initial_length(), 7);
    }

    #[test]
    fn test_huge_initial_length_saturates() {
        let config = GameConfig::new(12, 12, false, Some(u32::MAX));
        assert_eq!(config.effective_initial_length(), MAX_INITIAL_LENGTH as usize);
        let config = GameConfig::new(12, 12, false, Some(1 << 31));
        assert_eq!(config.effective_initial_length(), MAX_INITIAL_LENGTH as usize);
    }

    #[test]
    fn test_initial_length_over_limit_is_invalid() {
        let content = r#"
            columns: 12
            rows: 12
            wall_collision_mode: Death
            initial_length: 4294967295
        "#;
        let serializer = YamlConfigSerializer::new();
        let config: GameConfig = serializer.deserialize(content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.contains("initial_length"), "{}", err);

        let at_limit = GameConfig::new(12, 12, false, Some(MAX_INITIAL_LENGTH));
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_zero_sized_board_is_invalid() {
        assert!(GameConfig::new(0, 10, false, None).validate().is_err());
        assert!(GameConfig::new(10, 0, true, None).validate().is_err());
        assert!(GameConfig::new(1, 1, true, None).validate().is_ok());
        assert!(GameConfig::new(1001, 10, true, None).validate().is_err());
    }

    #[test]
    fn test_yaml_without_initial_length() {
        let content = r#"
            columns: 12
            rows: 8
            wall_collision_mode: WrapAround
        "#;
        let serializer = YamlConfigSerializer::new();
        let config: GameConfig = serializer.deserialize(content).unwrap();
        assert_eq!(config, GameConfig::new(12, 8, true, None));
    }
}
