//! Start-screen name field.

use crate::types::RoundEvent;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    text: String,
}

impl NameField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append `c`; ignored once the field is full.
    pub fn push(&mut self, c: char) {
        if self.text.chars().count() < MAX_NAME_LEN {
            self.text.push(c);
        }
    }

    pub fn erase(&mut self) {
        self.text.pop();
    }

    /// Name to start a round with.
    pub fn submission(&self) -> String {
        self.text.trim().to_string()
    }

    /// The field empties whenever the table is cleared for the next player.
    pub fn apply(&mut self, event: &RoundEvent) {
        if matches!(event, RoundEvent::TilesCleared) {
            self.text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Phase, RoundState};

    fn typed(s: &str) -> NameField {
        let mut field = NameField::new();
        s.chars().for_each(|c| field.push(c));
        field
    }

    #[test]
    fn typing_and_erasing() {
        let mut field = typed("ana!");
        field.erase();
        assert_eq!(field.as_str(), "ana");
    }

    #[test]
    fn length_is_capped() {
        let field = typed("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(field.as_str().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn submission_is_trimmed() {
        assert_eq!(typed("  bo ").submission(), "bo");
    }

    #[test]
    fn cleared_table_empties_field() {
        let mut field = typed("ana");
        field.apply(&RoundEvent::RoundStateChanged(RoundState {
            phase: Phase::Won,
            ..RoundState::default()
        }));
        assert_eq!(field.as_str(), "ana");

        field.apply(&RoundEvent::TilesCleared);
        assert_eq!(field.as_str(), "");
    }
}
