//! Leaderboard persistence across process restarts (simulated by reopening).

use memory_match::store::{FileStore, KeyValueStore, Leaderboard, SCORES_KEY};
use memory_match::types::{ScoreEntry, LEADERBOARD_CAPACITY};

#[test]
fn test_scores_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut board = Leaderboard::open(FileStore::new(dir.path()));
        assert!(board.is_empty());
        board.record(ScoreEntry::new("ana", 30));
        board.record(ScoreEntry::new("bo", 18));
    }

    let board = Leaderboard::open(FileStore::new(dir.path()));
    assert_eq!(
        board.entries(),
        &[ScoreEntry::new("bo", 18), ScoreEntry::new("ana", 30)]
    );
}

#[test]
fn test_persisted_shape_is_name_and_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Leaderboard::open(FileStore::new(dir.path()));
    board.record(ScoreEntry::new("ana", 30));

    let raw = FileStore::new(dir.path()).get(SCORES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!([{ "name": "ana", "time": 30 }]));
}

#[test]
fn test_capacity_keeps_fastest() {
    let dir = tempfile::tempdir().unwrap();
    let mut board = Leaderboard::open(FileStore::new(dir.path()));
    for t in (1..=15).rev() {
        board.record(ScoreEntry::new(format!("p{t}"), t));
    }

    let board = Leaderboard::open(FileStore::new(dir.path()));
    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    let times: Vec<u32> = board.entries().iter().map(|e| e.elapsed_seconds).collect();
    assert_eq!(times, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::new(dir.path())
        .set(SCORES_KEY, "{not json")
        .unwrap();

    let board = Leaderboard::open(FileStore::new(dir.path()));
    assert!(board.is_empty());
}
