use memory_match::core::Session;
use memory_match::journal::Journal;
use memory_match::runner::Runner;
use memory_match::types::{Coord, GameAction, Phase};

fn events(runner: Runner<Vec<u8>>) -> Vec<serde_json::Value> {
    let bytes = runner.into_journal().into_inner().unwrap();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn names(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .map(|e| e["event"].as_str().unwrap().to_string())
        .collect()
}

fn pairs(session: &Session) -> Vec<(Coord, Coord)> {
    let mut by_face: Vec<Vec<Coord>> = vec![Vec::new(); 256];
    for (c, t) in session.board().tiles() {
        by_face[t.face().index()].push(c);
    }
    by_face
        .into_iter()
        .filter(|v| v.len() == 2)
        .map(|v| (v[0], v[1]))
        .collect()
}

fn runner(seed: u64) -> Runner<Vec<u8>> {
    Runner::new(
        Session::new(seed).unwrap(),
        Journal::from_writer(Vec::new()),
        16,
    )
}

#[test]
fn session_start_is_first_record() {
    let r = runner(42);
    let ev = events(r);
    assert_eq!(ev.len(), 1);
    assert_eq!(ev[0]["event"], "session_start");
    assert_eq!(ev[0]["seed"], 42);
    assert_eq!(ev[0]["tick_ms"], 16);
}

#[test]
fn countdown_and_selects_are_journaled() {
    let mut r = runner(1);
    r.apply(GameAction::Start, 0.0).unwrap();
    r.tick(1.0).unwrap();
    r.tick(3.0).unwrap();
    let (a, b) = pairs(r.session())[0];
    assert!(r.apply(GameAction::Select(a), 3.2).unwrap());
    assert!(r.apply(GameAction::Select(b), 3.3).unwrap());
    assert!(!r.apply(GameAction::Select(a), 3.4).unwrap());

    let ev = events(r);
    assert_eq!(
        names(&ev),
        vec!["session_start", "start", "countdown_done", "select", "select", "select"]
    );
    assert_eq!(ev[2]["ts_ms"], 3000);
    assert_eq!(ev[3]["outcome"], "first_pick");
    assert_eq!(ev[4]["outcome"], "matched");
    assert_eq!(ev[4]["score"], 10);
    assert_eq!(ev[5]["outcome"], "rejected");
}

#[test]
fn rollback_is_journaled() {
    let mut r = runner(3);
    r.apply(GameAction::Start, 0.0).unwrap();
    r.tick(3.0).unwrap();

    let a = Coord::new(0, 0);
    let face = r.session().board().cell_at(a).unwrap().face();
    let b = r
        .session()
        .board()
        .tiles()
        .find(|(_, t)| t.face() != face)
        .map(|(c, _)| c)
        .unwrap();
    r.apply(GameAction::Select(a), 3.0).unwrap();
    r.apply(GameAction::Select(b), 3.0).unwrap();
    let out = r.tick(4.1).unwrap();
    assert_eq!(out.rolled_back.len(), 2);

    let ev = events(r);
    let last = ev.last().unwrap();
    assert_eq!(last["event"], "rollback");
    assert_eq!(last["tiles"], 2);
}

#[test]
fn full_game_auto_advances_and_completes() {
    let mut r = runner(8);
    r.apply(GameAction::Start, 0.0).unwrap();
    r.tick(3.0).unwrap();

    let mut now = 3.0;
    for _ in 0..2 {
        for (a, b) in pairs(r.session()) {
            now += 0.5;
            r.apply(GameAction::Select(a), now).unwrap();
            r.apply(GameAction::Select(b), now).unwrap();
            r.tick(now).unwrap();
        }
        // Banner, then the runner moves on by itself.
        r.tick(now + 1.0).unwrap();
        now += 2.0;
        r.tick(now).unwrap();
    }
    assert_eq!(r.session().phase(), Phase::GameComplete);
    assert_eq!(r.session().score(), 320);

    // Enter on the final screen plays again.
    assert!(r.apply(GameAction::Start, now + 1.0).unwrap());

    let ev = events(r);
    let n = names(&ev);
    let pos = |name: &str| n.iter().position(|e| e == name).unwrap();
    assert!(pos("level_complete") < pos("level_start"));
    assert!(pos("level_start") < pos("game_complete"));
    assert_eq!(n.iter().filter(|e| *e == "level_complete").count(), 2);

    let level_start = &ev[pos("level_start")];
    assert_eq!(level_start["level"], 2);
    assert_eq!(level_start["grid_size"], 5);
    assert_eq!(level_start["pairs"], 12);

    let done = &ev[pos("game_complete")];
    assert_eq!(done["score"], 320);
    assert_eq!(done["high_score"], 320);

    assert_eq!(&n[n.len() - 2..], &["reset", "start"]);
}

#[test]
fn manual_advance_before_tick_still_journals_level_complete() {
    let mut r = runner(5);
    r.apply(GameAction::Start, 0.0).unwrap();
    r.tick(3.0).unwrap();

    let mut now = 3.0;
    for level in 1..=2u32 {
        let all = pairs(r.session());
        let last = all.len() - 1;
        for (i, (a, b)) in all.into_iter().enumerate() {
            now += 0.5;
            r.apply(GameAction::Select(a), now).unwrap();
            r.apply(GameAction::Select(b), now).unwrap();
            // No tick after the last pair: `n` arrives first.
            if i < last {
                r.tick(now).unwrap();
            }
        }
        assert_eq!(r.session().phase(), Phase::Playing);
        assert_eq!(r.session().level(), level);
        assert!(r.apply(GameAction::AdvanceLevel, now + 0.1).unwrap());
    }
    assert_eq!(r.session().phase(), Phase::GameComplete);

    let ev: Vec<serde_json::Value> = events(r)
        .into_iter()
        .filter(|e| e["event"] != "select")
        .collect();
    assert_eq!(
        names(&ev),
        vec![
            "session_start",
            "start",
            "countdown_done",
            "level_complete",
            "level_start",
            "level_complete",
            "game_complete",
        ]
    );
    assert_eq!(ev[3]["level"], 1);
    assert_eq!(ev[3]["score"], 80);
    assert_eq!(ev[5]["level"], 2);
    assert_eq!(ev[5]["score"], 320);
}
