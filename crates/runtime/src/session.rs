//! The session task: sole owner of the round controller.
//!
//! Two sources wake it: player commands arriving on an mpsc channel and a
//! fixed-period interval that advances the round clock. Both are handled in
//! the same task, so controller mutations never overlap.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::RoundController;
use crate::source::DeckSource;
use crate::types::{Phase, RoundEvent, TileId};

/// Inbound request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    TileClicked(TileId),
    StartRequested(String),
    ResetRequested,
    Shutdown,
}

/// Run until `Shutdown`, a closed command channel, or a closed event channel.
///
/// Before any command is applied the round clock is caught up to the present,
/// so timers due earlier fire first. The current leaderboard is published
/// once on entry. Returns the controller for inspection.
pub async fn run_session<S>(
    mut controller: RoundController,
    source: S,
    frame_ms: u32,
    mut cmd_rx: mpsc::Receiver<PlayerCommand>,
    event_tx: mpsc::UnboundedSender<RoundEvent>,
) -> anyhow::Result<RoundController>
where
    S: DeckSource,
{
    let mut clock = SessionClock::new();
    let mut interval = tokio::time::interval(Duration::from_millis(frame_ms.max(1) as u64));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    if event_tx
        .send(RoundEvent::LeaderboardChanged(controller.leaderboard().to_vec()))
        .is_err()
    {
        return Ok(controller);
    }
    tracing::debug!(frame_ms, "session started");

    loop {
        tokio::select! {
            biased;

            cmd = cmd_rx.recv() => {
                controller.advance(clock.elapsed_ms());
                match cmd {
                    None | Some(PlayerCommand::Shutdown) => break,
                    Some(cmd) => apply_command(&mut controller, &source, cmd),
                }
            }
            _ = interval.tick() => {
                controller.advance(clock.elapsed_ms());
            }
        }

        for event in controller.take_events() {
            if event_tx.send(event).is_err() {
                tracing::debug!("event receiver dropped, ending session");
                return Ok(controller);
            }
        }
    }

    tracing::debug!("session shut down");
    Ok(controller)
}

fn apply_command<S>(controller: &mut RoundController, source: &S, cmd: PlayerCommand)
where
    S: DeckSource + ?Sized,
{
    match cmd {
        PlayerCommand::TileClicked(id) => {
            controller.select_tile(id);
        }
        PlayerCommand::StartRequested(name) => {
            if controller.phase() == Phase::Active {
                return;
            }
            let pool = source.fetch_card_pool();
            if let Err(e) = controller.start_round(&name, &pool) {
                tracing::warn!(error = %e, "round not started");
            }
        }
        PlayerCommand::ResetRequested => {
            controller.reset();
        }
        PlayerCommand::Shutdown => {}
    }
}

/// Converts tokio time into whole elapsed milliseconds without drift.
struct SessionClock {
    last: Instant,
}

impl SessionClock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn elapsed_ms(&mut self) -> u32 {
        let ms = self.last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        // Carry the sub-millisecond remainder into the next reading.
        self.last += Duration::from_millis(ms as u64);
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticDeckSource;
    use crate::store::Leaderboard;

    #[tokio::test(start_paused = true)]
    async fn session_publishes_leaderboard_then_stops_on_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let controller = RoundController::new(Leaderboard::in_memory(), 1);

        let task = tokio::spawn(run_session(
            controller,
            StaticDeckSource::numbered(10),
            50,
            cmd_rx,
            event_tx,
        ));

        assert_eq!(
            event_rx.recv().await,
            Some(RoundEvent::LeaderboardChanged(Vec::new()))
        );
        cmd_tx.send(PlayerCommand::Shutdown).await.unwrap();
        let controller = task.await.unwrap().unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn start_with_small_pool_is_logged_not_started() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let controller = RoundController::new(Leaderboard::in_memory(), 1);

        let task = tokio::spawn(run_session(
            controller,
            StaticDeckSource::numbered(3),
            50,
            cmd_rx,
            event_tx,
        ));

        cmd_tx
            .send(PlayerCommand::StartRequested("ana".into()))
            .await
            .unwrap();
        cmd_tx.send(PlayerCommand::Shutdown).await.unwrap();
        let controller = task.await.unwrap().unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_command_sender_ends_session() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<PlayerCommand>(8);
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let controller = RoundController::new(Leaderboard::in_memory(), 1);
        let task = tokio::spawn(run_session(
            controller,
            StaticDeckSource::numbered(10),
            50,
            cmd_rx,
            event_tx,
        ));
        drop(cmd_tx);
        assert!(task.await.unwrap().is_ok());
    }
}
