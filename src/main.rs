//! Terminal memory match runner (default binary).
//!
//! The round runs on a background session task; this loop only reads keys,
//! folds round events into a [`TableModel`] and redraws.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_match::input::{map_key, InputMode, KeyAction};
use memory_match::runtime::{init_logging, PlayerCommand, SessionConfig, SessionHandle};
use memory_match::term::{NameField, TableModel, TableView, TerminalRenderer};
use memory_match::types::{Phase, SoundCue};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let session = SessionHandle::start(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: SessionHandle, config: &SessionConfig) -> Result<()> {
    let view = TableView::default();
    let mut model = TableModel::new();
    let mut name = NameField::new();
    let frame = Duration::from_millis(config.frame_ms as u64);

    loop {
        while let Some(event) = session.try_recv() {
            model.apply(&event);
            name.apply(&event);
        }
        let cues = model.take_cues();
        if cues
            .iter()
            .any(|cue| matches!(cue, SoundCue::TimeLow | SoundCue::Win | SoundCue::Lose))
        {
            term.bell()?;
        }

        term.draw(view.render(&model, name.as_str()))?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mode = if model.round().phase == Phase::Idle {
                    InputMode::NameEntry
                } else {
                    InputMode::Board
                };
                let Some(action) = map_key(key, mode) else {
                    continue;
                };

                let cmd = match action {
                    KeyAction::Quit => break,
                    KeyAction::Type(c) => {
                        name.push(c);
                        None
                    }
                    KeyAction::Erase => {
                        name.erase();
                        None
                    }
                    KeyAction::SelectTile(id) => Some(PlayerCommand::TileClicked(id)),
                    KeyAction::Submit => match model.round().phase {
                        Phase::Idle => Some(PlayerCommand::StartRequested(name.submission())),
                        Phase::Won | Phase::Lost => Some(PlayerCommand::ResetRequested),
                        Phase::Active => None,
                    },
                };
                if let Some(cmd) = cmd {
                    session.send(cmd);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }

    let controller = session.shutdown()?;
    tracing::info!(
        generation = controller.generation(),
        scores = controller.leaderboard().len(),
        "session ended"
    );
    Ok(())
}
