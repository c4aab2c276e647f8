use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_core::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_core::GameConfig;

pub const CONFIG_FILE: &str = "snake_headless_config.yaml";

/// Suggested floor for the tick cadence (roughly 30 ticks per second).
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(33);

const MAX_TICKS_PER_SECOND: u32 = 120;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, HeadlessConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

pub fn tick_interval(ticks_per_second: u32) -> Duration {
    let millis = 1000 / u64::from(ticks_per_second.max(1));
    Duration::from_millis(millis).max(MIN_TICK_INTERVAL)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HeadlessConfig {
    pub game: GameConfig,
    pub ticks_per_second: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for HeadlessConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.ticks_per_second == 0 {
            return Err("ticks_per_second must be greater than 0".to_string());
        }
        if self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(format!(
                "ticks_per_second must not exceed {}",
                MAX_TICKS_PER_SECOND
            ));
        }
        Ok(())
    }
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            ticks_per_second: 8,
            seed: None,
        }
    }
}
