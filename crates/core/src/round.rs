//! Round controller - owns one round's lifecycle.
//!
//! Phases move Idle → Active → Won | Lost → Idle. The controller is the only
//! writer of [`RoundState`] and of the tiles; observers follow along through
//! the [`RoundEvent`]s returned by [`RoundController::take_events`].
//!
//! Time is supplied by the caller: [`RoundController::advance`] moves the
//! controller's millisecond clock, firing the once-per-second countdown and
//! any due one-shot timers (mismatch revert, end-screen reset) in deadline
//! order. At an equal deadline the countdown runs first.

use arrayvec::ArrayVec;

use crate::deck::{build_deck, DeckError};
use crate::matching::{evaluate, Verdict};
use crate::rng::SimpleRng;
use crate::snapshot::RoundSnapshot;
use crate::store::Leaderboard;
use crate::timers::{Scheduled, TimerQueue, TimerTask};
use crate::types::*;

/// Timing and sizing rules for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub round_seconds: u32,
    pub deck_pairs: usize,
    pub time_low_at: u32,
    pub tick_ms: u32,
    pub mismatch_revert_ms: u32,
    pub end_screen_ms: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            deck_pairs: DECK_PAIRS,
            time_low_at: TIME_LOW_AT,
            tick_ms: TICK_MS,
            mismatch_revert_ms: MISMATCH_REVERT_MS,
            end_screen_ms: END_SCREEN_MS,
        }
    }
}

impl RoundRules {
    fn idle_state(&self) -> RoundState {
        RoundState::new(self.round_seconds, self.deck_pairs as u32)
    }
}

#[derive(Debug)]
pub struct RoundController {
    rules: RoundRules,
    state: RoundState,
    tiles: Vec<Tile>,
    selection: ArrayVec<TileId, 2>,
    leaderboard: Leaderboard,
    rng: SimpleRng,
    timers: TimerQueue,
    /// Controller clock, advanced only by `advance`.
    clock_ms: u64,
    /// Clock value of the next countdown step (meaningful while Active).
    next_tick_ms: u64,
    /// Incremented on every start and reset.
    generation: u32,
    player_name: String,
    time_low_signalled: bool,
    faces_shown: bool,
    events: Vec<RoundEvent>,
}

impl RoundController {
    pub fn new(leaderboard: Leaderboard, seed: u32) -> Self {
        Self::with_rules(RoundRules::default(), leaderboard, seed)
    }

    pub fn with_rules(rules: RoundRules, leaderboard: Leaderboard, seed: u32) -> Self {
        Self {
            rules,
            state: rules.idle_state(),
            tiles: Vec::new(),
            selection: ArrayVec::new(),
            leaderboard,
            rng: SimpleRng::new(seed),
            timers: TimerQueue::new(),
            clock_ms: 0,
            next_tick_ms: 0,
            generation: 0,
            player_name: String::new(),
            time_low_signalled: false,
            faces_shown: false,
            events: Vec::new(),
        }
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn faces_shown(&self) -> bool {
        self.faces_shown
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn leaderboard(&self) -> &[ScoreEntry] {
        self.leaderboard.entries()
    }

    /// Take all events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            tiles: self.tiles.clone(),
            selection: self.selection.to_vec(),
            generation: self.generation,
            player_name: self.player_name.clone(),
            faces_shown: self.faces_shown,
            clock_ms: self.clock_ms,
        }
    }

    /// Deal a new round for `player_name` from `pool`.
    ///
    /// From Won/Lost this first resets immediately (the manual override of the
    /// end-screen delay). Returns `Ok(false)` while a round is already active.
    pub fn start_round(
        &mut self,
        player_name: &str,
        pool: &[CardDescriptor],
    ) -> Result<bool, DeckError> {
        match self.state.phase {
            Phase::Active => {
                tracing::debug!("start ignored: round already active");
                return Ok(false);
            }
            Phase::Won | Phase::Lost => self.reset_round(),
            Phase::Idle => {}
        }

        let deck = build_deck(pool, self.rules.deck_pairs, &mut self.rng)?;

        self.generation = self.generation.wrapping_add(1);
        self.timers.retain_generation(self.generation);
        self.tiles = deck
            .into_iter()
            .enumerate()
            .map(|(i, card)| Tile::new(TileId(i as u16), card))
            .collect();
        self.selection.clear();
        self.player_name = player_name.trim().to_string();
        self.time_low_signalled = false;
        self.faces_shown = false;
        self.state = RoundState {
            phase: Phase::Active,
            ..self.rules.idle_state()
        };
        self.next_tick_ms = self.clock_ms + self.rules.tick_ms as u64;

        tracing::info!(
            generation = self.generation,
            player = %self.player_name,
            tiles = self.tiles.len(),
            "round started"
        );
        self.events.push(RoundEvent::TilesDealt(self.tiles.clone()));
        self.events.push(RoundEvent::RoundStateChanged(self.state));
        Ok(true)
    }

    /// Reveal a hidden tile; the second reveal is evaluated immediately.
    ///
    /// Returns false (and changes nothing) for unknown ids, tiles that are not
    /// hidden, a full selection or a round that is not active.
    pub fn select_tile(&mut self, id: TileId) -> bool {
        if self.state.phase != Phase::Active || self.selection.is_full() {
            return false;
        }
        let Some(tile) = self.tiles.get_mut(id.index()) else {
            return false;
        };
        if !tile.state.is_selectable() {
            return false;
        }

        tile.state = TileState::Revealed;
        self.selection.push(id);
        self.emit_tile(id, TileState::Revealed);
        self.events.push(RoundEvent::SoundCue(SoundCue::Flip));

        if self.selection.is_full() {
            self.resolve_selection();
        }
        true
    }

    fn resolve_selection(&mut self) {
        let (a, b) = (self.selection[0], self.selection[1]);
        self.selection.clear();
        self.events.push(RoundEvent::SelectionCleared);

        match evaluate(&self.tiles[a.index()], &self.tiles[b.index()]) {
            Verdict::Match => {
                for id in [a, b] {
                    self.tiles[id.index()].state = TileState::Matched;
                    self.emit_tile(id, TileState::Matched);
                }
                self.state.matched_pairs += 1;
                self.events.push(RoundEvent::SoundCue(SoundCue::Success));
                self.events.push(RoundEvent::RoundStateChanged(self.state));
                tracing::debug!(%a, %b, matched = self.state.matched_pairs, "pair matched");

                if self.state.matched_pairs >= self.state.required_pairs {
                    self.finish_won();
                }
            }
            Verdict::Mismatch => {
                let due = self.clock_ms + self.rules.mismatch_revert_ms as u64;
                self.timers.schedule(
                    due,
                    self.generation,
                    TimerTask::MismatchRevert { tiles: [a, b] },
                );
                tracing::debug!(%a, %b, due, "pair mismatched");
            }
        }
    }

    /// One countdown step. Returns false when no round is active.
    pub fn tick(&mut self) -> bool {
        if self.state.phase != Phase::Active {
            return false;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        self.events.push(RoundEvent::RoundStateChanged(self.state));

        if self.state.remaining_seconds == self.rules.time_low_at && !self.time_low_signalled {
            self.time_low_signalled = true;
            self.events.push(RoundEvent::SoundCue(SoundCue::TimeLow));
        }

        if self.state.remaining_seconds == 0 {
            self.finish_lost();
        }
        true
    }

    /// Abort the active round as lost.
    pub fn force_end(&mut self) -> bool {
        if self.state.phase != Phase::Active {
            return false;
        }
        self.finish_lost();
        true
    }

    /// Leave the end screen now instead of waiting for the timed reset.
    pub fn reset(&mut self) -> bool {
        if !self.state.phase.is_finished() {
            return false;
        }
        self.reset_round();
        true
    }

    /// Move the clock forward by `elapsed_ms`, firing whatever falls due.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let target = self.clock_ms + elapsed_ms as u64;

        loop {
            let tick_due = (self.state.phase == Phase::Active && self.next_tick_ms <= target)
                .then_some(self.next_tick_ms);
            let timer_due = self.timers.next_due().filter(|&due| due <= target);

            match (tick_due, timer_due) {
                (Some(t), Some(d)) if t <= d => self.run_tick_at(t),
                (Some(t), None) => self.run_tick_at(t),
                (_, Some(d)) => {
                    self.clock_ms = self.clock_ms.max(d);
                    if let Some(scheduled) = self.timers.pop_due(d) {
                        self.fire(scheduled);
                    }
                }
                (None, None) => break,
            }
        }

        self.clock_ms = target;
    }

    fn run_tick_at(&mut self, at_ms: u64) {
        self.clock_ms = self.clock_ms.max(at_ms);
        self.next_tick_ms = at_ms + self.rules.tick_ms as u64;
        self.tick();
    }

    fn fire(&mut self, scheduled: Scheduled) {
        if scheduled.generation != self.generation {
            tracing::debug!(
                task = ?scheduled.task,
                scheduled_in = scheduled.generation,
                current = self.generation,
                "stale timer ignored"
            );
            return;
        }

        match scheduled.task {
            TimerTask::MismatchRevert { tiles } => {
                if self.state.phase != Phase::Active {
                    return;
                }
                let mut reverted = false;
                for id in tiles {
                    let tile = &mut self.tiles[id.index()];
                    if tile.state == TileState::Revealed {
                        tile.state = TileState::Hidden;
                        self.emit_tile(id, TileState::Hidden);
                        reverted = true;
                    }
                }
                if reverted {
                    self.events.push(RoundEvent::SoundCue(SoundCue::Unflip));
                }
            }
            TimerTask::AutoReset => {
                if self.state.phase.is_finished() {
                    self.reset_round();
                }
            }
        }
    }

    fn finish_won(&mut self) {
        self.state.phase = Phase::Won;
        self.selection.clear();

        let elapsed = self.rules.round_seconds - self.state.remaining_seconds;
        let board = self
            .leaderboard
            .record(ScoreEntry::new(self.player_name.clone(), elapsed))
            .to_vec();
        tracing::info!(player = %self.player_name, elapsed, "round won");

        self.events.push(RoundEvent::RoundStateChanged(self.state));
        self.events.push(RoundEvent::SoundCue(SoundCue::Win));
        self.events.push(RoundEvent::LeaderboardChanged(board));
        self.schedule_auto_reset();
    }

    fn finish_lost(&mut self) {
        self.state.phase = Phase::Lost;
        self.selection.clear();
        self.faces_shown = true;
        tracing::info!(
            player = %self.player_name,
            matched = self.state.matched_pairs,
            "round lost"
        );

        self.events.push(RoundEvent::RoundStateChanged(self.state));
        self.events.push(RoundEvent::FacesShown);
        self.events.push(RoundEvent::SoundCue(SoundCue::Lose));
        self.schedule_auto_reset();
    }

    fn schedule_auto_reset(&mut self) {
        let due = self.clock_ms + self.rules.end_screen_ms as u64;
        self.timers
            .schedule(due, self.generation, TimerTask::AutoReset);
    }

    fn reset_round(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.tiles.clear();
        self.selection.clear();
        self.state = self.rules.idle_state();
        self.player_name.clear();
        self.time_low_signalled = false;
        self.faces_shown = false;
        tracing::debug!(generation = self.generation, "round reset");

        self.events.push(RoundEvent::TilesCleared);
        self.events.push(RoundEvent::RoundStateChanged(self.state));
    }

    fn emit_tile(&mut self, tile: TileId, state: TileState) {
        self.events
            .push(RoundEvent::TileStateChanged { tile, state });
    }
}
