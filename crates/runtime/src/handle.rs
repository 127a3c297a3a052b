//! Bridges the synchronous terminal loop with the async session task.

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SessionConfig;
use crate::core::{RoundController, SimpleRng};
use crate::session::{run_session, PlayerCommand};
use crate::source::{DeckSource, JsonFileDeckSource};
use crate::store::{FileStore, Leaderboard};
use crate::types::RoundEvent;

/// Running session instance.
pub struct SessionHandle {
    rt: Runtime,
    cmd_tx: mpsc::Sender<PlayerCommand>,
    event_rx: mpsc::UnboundedReceiver<RoundEvent>,
    task: JoinHandle<anyhow::Result<RoundController>>,
}

impl SessionHandle {
    /// Start a session with the file-backed leaderboard and deck source
    /// named by `config`.
    pub fn start(config: &SessionConfig) -> anyhow::Result<Self> {
        let leaderboard = Leaderboard::open(FileStore::new(&config.data_dir));
        let seed = config
            .seed
            .unwrap_or_else(|| SimpleRng::from_clock().next_u32());
        let source = JsonFileDeckSource::new(&config.deck_path);
        tracing::info!(
            seed,
            deck = %source.path().display(),
            scores = leaderboard.len(),
            "starting session"
        );
        let controller = RoundController::new(leaderboard, seed);
        Self::start_with(config, controller, source)
    }

    pub fn start_with<S>(
        config: &SessionConfig,
        controller: RoundController,
        source: S,
    ) -> anyhow::Result<Self>
    where
        S: DeckSource + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel(config.max_pending_commands.max(1));
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let rt = Runtime::new()?;
        let task = rt.spawn(run_session(
            controller,
            source,
            config.frame_ms,
            cmd_rx,
            event_tx,
        ));

        Ok(Self {
            rt,
            cmd_tx,
            event_rx,
            task,
        })
    }

    /// Queue a command. Returns false when the queue is full or the session ended.
    pub fn send(&self, cmd: PlayerCommand) -> bool {
        match self.cmd_tx.try_send(cmd) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "player command dropped");
                false
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<RoundEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Stop the session and wait for it to finish.
    pub fn shutdown(self) -> anyhow::Result<RoundController> {
        let Self {
            rt, cmd_tx, task, ..
        } = self;
        rt.block_on(async move {
            let _ = cmd_tx.send(PlayerCommand::Shutdown).await;
            Ok::<_, anyhow::Error>(task.await??)
        })
    }
}
