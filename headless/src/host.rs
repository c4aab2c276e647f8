use snake_core::{log, GameConfig, GameState, SessionRng};

use crate::input::HostCommand;

/// Owns the only live copy of the game state and serializes input against ticks.
pub struct HostSession {
    config: GameConfig,
    rng: SessionRng,
    state: GameState,
    paused: bool,
    games_started: u32,
}

impl HostSession {
    pub fn new(config: GameConfig, mut rng: SessionRng) -> Self {
        let state = GameState::new(&config, &mut rng);
        Self {
            config,
            rng,
            state,
            paused: false,
            games_started: 1,
        }
    }

    pub fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::Turn(direction) => {
                if !self.paused {
                    self.state = self.state.change_direction(direction);
                }
            }
            HostCommand::TogglePause => {
                if !self.state.is_game_over() {
                    self.paused = !self.paused;
                    log!("{}", if self.paused { "Paused" } else { "Resumed" });
                }
            }
            HostCommand::Restart => self.restart(),
            HostCommand::Idle => {}
        }
    }

    /// Runs one tick unless paused. Returns whether the snake moved.
    pub fn advance(&mut self) -> bool {
        if self.paused || self.state.is_game_over() {
            return false;
        }

        let previous_tick = self.state.tick;
        self.state = self.state.step(&self.config, &mut self.rng);
        self.state.tick > previous_tick
    }

    fn restart(&mut self) {
        self.state = GameState::new(&self.config, &mut self.rng);
        self.paused = false;
        self.games_started += 1;
        log!("Restarted, game #{}", self.games_started);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn summary(&self) -> String {
        let outcome = match (self.state.death_reason, self.state.is_board_full()) {
            (Some(reason), _) => format!("game over ({:?})", reason),
            (None, true) => "board full".to_string(),
            (None, false) => "still running".to_string(),
        };
        format!(
            "{}: score {}, length {}, ticks {}",
            outcome,
            self.state.score,
            self.state.length(),
            self.state.tick
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{DeathReason, Direction, Point};

    fn create_session() -> HostSession {
        HostSession::new(GameConfig::new(12, 12, false, Some(5)), SessionRng::new(42))
    }

    #[test]
    fn test_advance_moves_snake() {
        let mut session = create_session();
        let head = session.state().head();

        assert!(session.advance());
        assert_eq!(session.state().head(), Point::new(head.x + 1, head.y));
        assert_eq!(session.state().tick, 1);
    }

    #[test]
    fn test_pause_freezes_ticks_and_turns() {
        let mut session = create_session();
        session.apply(HostCommand::TogglePause);
        assert!(session.is_paused());

        session.apply(HostCommand::Turn(Direction::Up));
        assert!(!session.advance());
        assert_eq!(session.state().tick, 0);
        assert_eq!(session.state().direction, Direction::Right);

        session.apply(HostCommand::TogglePause);
        assert!(session.advance());
        assert_eq!(session.state().tick, 1);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut session = create_session();
        session.apply(HostCommand::Turn(Direction::Left));
        assert_eq!(session.state().direction, Direction::Right);
    }

    #[test]
    fn test_game_over_stops_advancing_until_restart() {
        let mut session = create_session();
        for _ in 0..20 {
            session.advance();
        }
        assert_eq!(session.state().death_reason, Some(DeathReason::WallCollision));
        assert_eq!(session.state().tick, 5);
        assert!(!session.advance());
        assert!(session.summary().starts_with("game over"));

        session.apply(HostCommand::TogglePause);
        assert!(!session.is_paused());

        session.apply(HostCommand::Restart);
        assert!(!session.state().is_game_over());
        assert_eq!(session.state().tick, 0);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().head(), Point::new(6, 6));
        assert_eq!(session.games_started(), 2);
    }

    #[test]
    fn test_restart_clears_pause() {
        let mut session = create_session();
        session.apply(HostCommand::TogglePause);
        session.apply(HostCommand::Restart);
        assert!(!session.is_paused());
        assert!(session.advance());
    }
}
