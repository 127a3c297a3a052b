//! TableView: lays a [`TableModel`] out as styled text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::input::key_for_tile;
use crate::table::TableModel;
use crate::types::{format_clock, Phase, Tile, TileState};

/// Visual role of a run of text; the renderer picks colors per tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Title,
    Hidden,
    Revealed,
    Selected,
    Matched,
    Exposed,
    Alert,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            spans: vec![Span::new(text, tone)],
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

pub struct TableView {
    columns: usize,
    /// Characters of the card identity shown per tile.
    face_width: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            columns: 5,
            face_width: 8,
        }
    }
}

impl TableView {
    /// Render the whole screen. `name_input` is the start screen's text field.
    pub fn render(&self, model: &TableModel, name_input: &str) -> Vec<Line> {
        let mut lines = vec![Line::styled("MEMORY MATCH", Tone::Title), Line::blank()];

        match model.round().phase {
            Phase::Idle => self.render_start(&mut lines, name_input),
            phase => {
                self.render_status(&mut lines, model);
                lines.push(Line::blank());
                self.render_grid(&mut lines, model);
                lines.push(Line::blank());
                match phase {
                    Phase::Won => lines.push(Line::styled("You Win!", Tone::Title)),
                    Phase::Lost => lines.push(Line::styled("You Lose!", Tone::Alert)),
                    _ => {}
                }
                if phase.is_finished() {
                    lines.push(Line::styled("Enter: play again   Esc: quit", Tone::Dim));
                } else {
                    lines.push(Line::styled("a-t: flip a tile   Esc: quit", Tone::Dim));
                }
            }
        }

        lines.push(Line::blank());
        self.render_scores(&mut lines, model);
        lines
    }

    fn render_start(&self, lines: &mut Vec<Line>, name_input: &str) {
        lines.push(Line {
            spans: vec![
                Span::new("Name: ", Tone::Plain),
                Span::new(format!("{name_input}_"), Tone::Selected),
            ],
        });
        lines.push(Line::styled("Enter: start   Esc: quit", Tone::Dim));
    }

    fn render_status(&self, lines: &mut Vec<Line>, model: &TableModel) {
        let round = model.round();
        let timer_tone = if model.time_low() {
            Tone::Alert
        } else {
            Tone::Plain
        };
        lines.push(Line {
            spans: vec![
                Span::new(
                    format!("Timer: {}", format_clock(round.remaining_seconds)),
                    timer_tone,
                ),
                Span::new(
                    format!("   Pairs: {}/{}", round.matched_pairs, round.required_pairs),
                    Tone::Plain,
                ),
            ],
        });
    }

    fn render_grid(&self, lines: &mut Vec<Line>, model: &TableModel) {
        for row in model.tiles().chunks(self.columns) {
            let mut line = Line::default();
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    line.spans.push(Span::new(" ", Tone::Plain));
                }
                line.spans.push(self.tile_span(model, tile));
            }
            lines.push(line);
        }
    }

    fn tile_span(&self, model: &TableModel, tile: &Tile) -> Span {
        let label = key_for_tile(tile.id).unwrap_or('?');
        let face = if model.face_visible(tile) {
            fit(tile.identity(), self.face_width)
        } else {
            "?".repeat(self.face_width)
        };

        let tone = match tile.state {
            TileState::Matched => Tone::Matched,
            _ if model.is_highlighted(tile.id) => Tone::Selected,
            TileState::Revealed => Tone::Revealed,
            TileState::Hidden if model.faces_shown() => Tone::Exposed,
            TileState::Hidden => Tone::Hidden,
        };
        Span::new(format!("[{label} {face}]"), tone)
    }

    fn render_scores(&self, lines: &mut Vec<Line>, model: &TableModel) {
        lines.push(Line::styled("High scores", Tone::Title));
        if model.leaderboard().is_empty() {
            lines.push(Line::styled("(none yet)", Tone::Dim));
        }
        for (i, entry) in model.leaderboard().iter().enumerate() {
            lines.push(Line::plain(format!(
                "{}. {} {}",
                i + 1,
                entry.player_name,
                format_clock(entry.elapsed_seconds)
            )));
        }
    }
}

/// Truncate or pad `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CardDescriptor, RoundEvent, RoundState, ScoreEntry, Tile, TileId, TileState,
    };

    fn active_model() -> TableModel {
        let mut model = TableModel::new();
        let tiles: Vec<Tile> = (0..20)
            .map(|i| Tile::new(TileId(i), CardDescriptor::new(format!("meme{}", i / 2), "m.png")))
            .collect();
        model.apply(&RoundEvent::TilesDealt(tiles));
        model.apply(&RoundEvent::RoundStateChanged(RoundState {
            phase: Phase::Active,
            ..RoundState::default()
        }));
        model
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn start_screen_shows_name_field_and_empty_board() {
        let view = TableView::default();
        let out = texts(&view.render(&TableModel::new(), "ana"));
        assert!(out.contains(&"Name: ana_".to_string()));
        assert!(out.contains(&"(none yet)".to_string()));
    }

    #[test]
    fn active_screen_has_timer_and_four_rows() {
        let view = TableView::default();
        let out = texts(&view.render(&active_model(), ""));
        assert!(out.contains(&"Timer: 1:15   Pairs: 0/10".to_string()));

        let grid: Vec<&String> = out.iter().filter(|l| l.starts_with("[a ")).collect();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0], &"[a ????????] [b ????????] [c ????????] [d ????????] [e ????????]");
        assert_eq!(out.iter().filter(|l| l.starts_with('[')).count(), 4);
    }

    #[test]
    fn revealed_tile_shows_padded_identity() {
        let mut model = active_model();
        model.apply(&RoundEvent::TileStateChanged {
            tile: TileId(0),
            state: TileState::Revealed,
        });
        let view = TableView::default();
        let lines = view.render(&model, "");
        let row = lines.iter().find(|l| l.text().starts_with("[a ")).unwrap();
        assert_eq!(row.spans[0], Span::new("[a meme0   ]", Tone::Selected));
    }

    #[test]
    fn long_identity_is_truncated() {
        assert_eq!(fit("supercalifragilistic", 8), "supercal");
        assert_eq!(fit("ab", 4), "ab  ");
    }

    #[test]
    fn lost_screen_exposes_faces() {
        let mut model = active_model();
        model.apply(&RoundEvent::RoundStateChanged(RoundState {
            phase: Phase::Lost,
            remaining_seconds: 0,
            ..RoundState::default()
        }));
        model.apply(&RoundEvent::FacesShown);

        let lines = TableView::default().render(&model, "");
        let out = texts(&lines);
        assert!(out.contains(&"You Lose!".to_string()));
        let row = lines.iter().find(|l| l.text().starts_with("[a ")).unwrap();
        assert_eq!(row.spans[0].tone, Tone::Exposed);
        assert!(row.text().contains("meme0"));
    }

    #[test]
    fn scoreboard_lists_ranked_entries() {
        let mut model = TableModel::new();
        model.apply(&RoundEvent::LeaderboardChanged(vec![
            ScoreEntry::new("bo", 20),
            ScoreEntry::new("ana", 64),
        ]));
        let out = texts(&TableView::default().render(&model, ""));
        assert!(out.contains(&"1. bo 0:20".to_string()));
        assert!(out.contains(&"2. ana 1:04".to_string()));
    }
}
