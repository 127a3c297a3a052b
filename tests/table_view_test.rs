//! Presentation model fed from a real controller's event stream.

use memory_match::core::RoundController;
use memory_match::source::{DeckSource, StaticDeckSource};
use memory_match::store::Leaderboard;
use memory_match::term::{NameField, TableModel, TableView, Tone};
use memory_match::types::{Phase, TileState};

fn fold(round: &mut RoundController, model: &mut TableModel) {
    fold_with_name(round, model, &mut NameField::new());
}

fn fold_with_name(round: &mut RoundController, model: &mut TableModel, name: &mut NameField) {
    for event in round.take_events() {
        model.apply(&event);
        name.apply(&event);
    }
}

#[test]
fn test_model_tracks_controller() {
    let mut round = RoundController::new(Leaderboard::in_memory(), 77);
    let mut model = TableModel::new();
    let pool = StaticDeckSource::numbered(10).fetch_card_pool();

    round.start_round("ana", &pool).unwrap();
    fold(&mut round, &mut model);
    assert_eq!(model.round().phase, Phase::Active);
    assert_eq!(model.tiles(), round.tiles());

    let first = round.tiles()[0].clone();
    let partner = round
        .tiles()
        .iter()
        .skip(1)
        .find(|t| t.identity() == first.identity())
        .map(|t| t.id)
        .unwrap();
    round.select_tile(first.id);
    round.select_tile(partner);
    round.advance(63_000);
    fold(&mut round, &mut model);

    assert_eq!(model.tiles(), round.tiles());
    assert_eq!(model.round(), &round.state());
    assert!(model.time_low());

    let lines = TableView::default().render(&model, "");
    let text: Vec<String> = lines.iter().map(|l| l.text()).collect();
    assert!(text.contains(&"Timer: 0:12   Pairs: 1/10".to_string()));
    let status = lines.iter().find(|l| l.text().starts_with("Timer")).unwrap();
    assert_eq!(status.spans[0].tone, Tone::Alert);

    let matched = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .filter(|s| s.tone == Tone::Matched)
        .count();
    assert_eq!(matched, 2);
}

#[test]
fn test_model_follows_loss_and_reset() {
    let mut round = RoundController::new(Leaderboard::in_memory(), 4);
    let mut model = TableModel::new();
    let mut name = NameField::new();
    "bo".chars().for_each(|c| name.push(c));
    let pool = StaticDeckSource::numbered(10).fetch_card_pool();

    round.start_round(&name.submission(), &pool).unwrap();
    round.advance(75_000);
    fold_with_name(&mut round, &mut model, &mut name);
    assert_eq!(name.as_str(), "bo");
    assert_eq!(model.round().phase, Phase::Lost);
    assert!(model.faces_shown());
    assert!(model
        .tiles()
        .iter()
        .all(|t| t.state == TileState::Hidden && model.face_visible(t)));

    round.advance(10_000);
    fold_with_name(&mut round, &mut model, &mut name);
    assert_eq!(model.round().phase, Phase::Idle);
    assert!(model.tiles().is_empty());
    assert_eq!(name.as_str(), "");
}
