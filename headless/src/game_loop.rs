use std::time::Duration;

use snake_core::{log, GameState};
use tokio::time::{interval, MissedTickBehavior};

use crate::host::HostSession;
use crate::input::HostCommand;

/// Drives `session` at a fixed cadence, feeding one scripted command before each tick.
///
/// Stops when the game is over and the script is exhausted, after `max_ticks` timer
/// ticks, or on Ctrl+C.
pub async fn run_game_loop(
    mut session: HostSession,
    commands: Vec<HostCommand>,
    tick_interval: Duration,
    max_ticks: u64,
) -> GameState {
    let mut tick_interval_timer = interval(tick_interval);
    tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut commands = commands.into_iter().peekable();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    for _ in 0..max_ticks {
        tokio::select! {
            _ = tick_interval_timer.tick() => {}
            _ = &mut shutdown => {
                log!("Interrupted, stopping");
                break;
            }
        }

        if let Some(command) = commands.next() {
            session.apply(command);
        }

        if session.advance() {
            let state = session.state();
            log!(
                "Tick {}: head ({}, {}), score {}",
                state.tick,
                state.head().x,
                state.head().y,
                state.score
            );
        }

        let script_done = commands.peek().is_none();
        if script_done && (session.state().is_game_over() || session.is_paused()) {
            break;
        }
    }

    log!("Finished after {} game(s): {}", session.games_started(), session.summary());
    session.state().clone()
}
