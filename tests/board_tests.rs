use memory_match::core::{Board, BoardError, LevelParams, TileRng, DEFAULT_PALETTE_SIZE, LEVELS};
use memory_match::types::{Coord, FaceId};

fn face_counts(board: &Board) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for (_, tile) in board.tiles() {
        counts[tile.face().index()] += 1;
    }
    counts
}

#[test]
fn every_level_deals_exact_pairs() {
    for params in LEVELS.iter() {
        for seed in 0..50u64 {
            let board = Board::build(params, &mut TileRng::new(seed)).unwrap();
            let counts = face_counts(&board);

            assert!(counts.iter().all(|&c| c == 0 || c == 2), "seed {}", seed);
            let faces = counts.iter().filter(|&&c| c == 2).count();
            assert_eq!(faces, params.required_pairs());
            assert_eq!(board.pair_count(), params.required_pairs());
        }
    }
}

#[test]
fn fresh_board_is_face_down() {
    let board = Board::build(&LEVELS[0], &mut TileRng::new(3)).unwrap();
    for (_, tile) in board.tiles() {
        assert!(!tile.revealed());
        assert!(!tile.matched());
        assert!(!tile.is_flipping());
    }
}

#[test]
fn level_two_centre_is_masked() {
    let board = Board::build(&LEVELS[1], &mut TileRng::new(11)).unwrap();
    let centre = Coord::new(2, 2);

    assert_eq!(board.grid_size(), 5);
    assert!(board.cell_at(centre).is_none());
    assert!(board.is_masked(centre));
    assert_eq!(board.playable_cells(), 24);
    assert!(board.tiles().all(|(c, _)| c != centre));
}

#[test]
fn out_of_range_lookups_are_none() {
    let board = Board::build(&LEVELS[0], &mut TileRng::new(1)).unwrap();
    for c in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(4, 0),
        Coord::new(0, 4),
    ] {
        assert!(board.cell_at(c).is_none());
        assert!(!board.is_masked(c));
    }
}

#[test]
fn same_seed_same_board() {
    let a = Board::build(&LEVELS[1], &mut TileRng::new(99)).unwrap();
    let b = Board::build(&LEVELS[1], &mut TileRng::new(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seeds_change_the_deal() {
    let first = Board::build(&LEVELS[0], &mut TileRng::new(0)).unwrap();
    let differs = (1..20u64).any(|seed| {
        Board::build(&LEVELS[0], &mut TileRng::new(seed)).unwrap() != first
    });
    assert!(differs);
}

static OUTSIDE_MASK: [Coord; 1] = [Coord::new(4, 0)];

#[test]
fn invalid_params_are_rejected() {
    let mut rng = TileRng::new(1);

    let zero = LevelParams {
        grid_size: 0,
        mask: &[],
        palette_size: DEFAULT_PALETTE_SIZE,
    };
    assert_eq!(Board::build(&zero, &mut rng), Err(BoardError::GridSize(0)));

    let huge = LevelParams {
        grid_size: 6,
        mask: &[],
        palette_size: DEFAULT_PALETTE_SIZE,
    };
    assert_eq!(Board::build(&huge, &mut rng), Err(BoardError::GridSize(6)));

    let odd = LevelParams {
        grid_size: 3,
        mask: &[],
        palette_size: DEFAULT_PALETTE_SIZE,
    };
    assert_eq!(Board::build(&odd, &mut rng), Err(BoardError::OddCellCount(9)));

    let bad_mask = LevelParams {
        grid_size: 4,
        mask: &OUTSIDE_MASK,
        palette_size: DEFAULT_PALETTE_SIZE,
    };
    assert_eq!(
        Board::build(&bad_mask, &mut rng),
        Err(BoardError::MaskOutOfRange(Coord::new(4, 0)))
    );

    let small_palette = LevelParams {
        grid_size: 4,
        mask: &[],
        palette_size: 7,
    };
    assert_eq!(
        Board::build(&small_palette, &mut rng),
        Err(BoardError::PaletteTooSmall {
            needed: 8,
            available: 7
        })
    );
}

#[test]
fn board_errors_have_messages() {
    let msg = BoardError::PaletteTooSmall {
        needed: 8,
        available: 7,
    }
    .to_string();
    assert!(msg.contains('8'));
    assert!(msg.contains('7'));
}

#[test]
fn fixed_layout_board() {
    let faces = [Some(FaceId(0)), Some(FaceId(1)), Some(FaceId(1)), Some(FaceId(0))];
    let board = Board::from_faces(2, &faces).unwrap();
    assert_eq!(board.cell_at(Coord::new(1, 1)).unwrap().face(), FaceId(0));
    assert_eq!(board.pair_count(), 2);
}

#[test]
fn fixed_layout_must_cover_grid() {
    let faces = [Some(FaceId(0)), Some(FaceId(1)), Some(FaceId(2))];
    assert_eq!(
        Board::from_faces(2, &faces),
        Err(BoardError::LayoutLength {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn fixed_layout_rejects_odd_cells() {
    let faces = [Some(FaceId(0)), Some(FaceId(0)), Some(FaceId(1)), None];
    assert_eq!(
        Board::from_faces(2, &faces),
        Err(BoardError::OddCellCount(3))
    );
    assert_eq!(
        Board::from_faces(1, &[None]),
        Err(BoardError::OddCellCount(0))
    );
}

#[test]
fn fixed_layout_rejects_unpaired_faces() {
    let faces = [Some(FaceId(0)), Some(FaceId(0)), Some(FaceId(1)), Some(FaceId(2))];
    assert_eq!(
        Board::from_faces(2, &faces),
        Err(BoardError::Unpaired(FaceId(1)))
    );

    let faces = [Some(FaceId(4)); 4];
    let err = Board::from_faces(2, &faces).unwrap_err();
    assert_eq!(err, BoardError::Unpaired(FaceId(4)));
    assert!(err.to_string().contains("exactly twice"));
}

#[test]
fn fixed_layout_allows_paired_holes() {
    let faces = [Some(FaceId(3)), None, None, Some(FaceId(3))];
    let board = Board::from_faces(2, &faces).unwrap();
    assert!(board.is_masked(Coord::new(0, 1)));
    assert_eq!(board.pair_count(), 1);
}
