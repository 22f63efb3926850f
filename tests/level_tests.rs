use memory_match::core::{
    required_pairs, Board, LevelController, MatchEngine, TileRng, LEVELS,
};
use memory_match::types::Coord;

/// Match every pair on the board through the engine.
fn clear(board: &mut Board, engine: &mut MatchEngine, rng: &mut TileRng, level: u32) {
    let mut by_face: Vec<Vec<Coord>> = vec![Vec::new(); 256];
    for (c, t) in board.tiles() {
        by_face[t.face().index()].push(c);
    }
    for coords in by_face.iter().filter(|v| v.len() == 2) {
        engine.select_tile(board, coords[0], 0.0, level, rng);
        engine.select_tile(board, coords[1], 0.0, level, rng);
    }
}

#[test]
fn required_pairs_by_grid() {
    assert_eq!(required_pairs(4, 0), 8);
    assert_eq!(required_pairs(5, 1), 12);
    assert_eq!(LEVELS.len(), 2);
}

#[test]
fn level_complete_after_all_pairs() {
    let mut lc = LevelController::new();
    let mut rng = TileRng::new(21);
    let mut board = lc.build_board(&mut rng).unwrap();
    let mut engine = MatchEngine::new();

    clear(&mut board, &mut engine, &mut rng, lc.level());
    assert_eq!(engine.matches_found(), 8);
    assert!(lc.is_level_complete(engine.matches_found()));

    assert_eq!(lc.advance(&mut engine, &mut board, &mut rng), Ok(true));
    assert_eq!(lc.level(), 2);
    assert_eq!(engine.matches_found(), 0);
    assert_eq!(engine.score(), 80);
    assert_eq!(board.grid_size(), 5);
    assert_eq!(board.pair_count(), 12);
    assert!(board.is_masked(Coord::new(2, 2)));
    assert!(board.tiles().all(|(_, t)| !t.revealed() && !t.matched()));
    assert!(engine.message().contains("12"));
}

#[test]
fn final_level_does_not_advance() {
    let mut lc = LevelController::new();
    let mut rng = TileRng::new(5);
    let mut board = lc.build_board(&mut rng).unwrap();
    let mut engine = MatchEngine::new();

    clear(&mut board, &mut engine, &mut rng, 1);
    lc.advance(&mut engine, &mut board, &mut rng).unwrap();
    clear(&mut board, &mut engine, &mut rng, 2);

    assert!(lc.is_final_level());
    assert!(lc.is_level_complete(engine.matches_found()));
    assert_eq!(lc.advance(&mut engine, &mut board, &mut rng), Ok(false));
    assert_eq!(lc.level(), 2);
    assert_eq!(engine.score(), 80 + 240);
}

#[test]
fn reset_returns_to_level_one() {
    let mut lc = LevelController::new();
    let mut rng = TileRng::new(8);
    let mut board = lc.build_board(&mut rng).unwrap();
    let mut engine = MatchEngine::new();

    clear(&mut board, &mut engine, &mut rng, 1);
    lc.advance(&mut engine, &mut board, &mut rng).unwrap();
    lc.reset(&mut engine, &mut board, &mut rng).unwrap();

    assert_eq!(lc.level(), 1);
    assert_eq!(board.grid_size(), 4);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.matches_found(), 0);
}
