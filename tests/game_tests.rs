use seabattle::prelude::*;
use seabattle::{BoardError, RandomTargeting, Targeting, BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fleet laid out on rows 0, 2, 4, 6, 8 from column 0.
fn place_fleet_in_rows(session: &mut GameSession) {
    for i in 0..NUM_SHIPS {
        session
            .place_player_ship(i * 2, 0, Orientation::Horizontal)
            .unwrap();
    }
}

#[test]
fn test_new_session_is_in_placement() {
    let session = GameSession::with_seed(1);
    assert!(session.is_placement_phase());
    assert_eq!(session.current_player(), Side::Human);
    assert_eq!(session.remaining_ships(), NUM_SHIPS);
    assert_eq!(session.ship_lengths(), [5, 4, 3, 3, 2]);
    assert_eq!(session.next_ship().map(|s| s.length()), Some(5));
    assert!(!session.human().is_computer());
    assert!(session.computer().is_computer());
}

#[test]
fn test_from_rng_starts_fresh() {
    let session = GameSession::from_rng(SmallRng::seed_from_u64(9));
    assert_eq!(session.phase(), Phase::Placement);
    assert_eq!(session.winner(), None);
    assert_eq!(session.remaining_ships(), NUM_SHIPS);
    assert!(session.human().board().ships().is_empty());
    assert!(session.computer().board().ships().is_empty());
    assert!(session.computer().board().misses().is_empty());
}

#[test]
fn test_placement_advances_only_on_success() {
    let mut session = GameSession::with_seed(1);
    assert_eq!(
        session.place_player_ship(0, 6, Orientation::Horizontal),
        Err(GameError::Board(BoardError::ShipOutOfBounds))
    );
    assert_eq!(session.remaining_ships(), NUM_SHIPS);

    session.place_player_ship(0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(session.remaining_ships(), NUM_SHIPS - 1);

    assert_eq!(
        session.place_player_ship(0, 2, Orientation::Vertical),
        Err(GameError::Board(BoardError::ShipOverlaps))
    );
    assert_eq!(session.next_ship().map(|s| s.length()), Some(4));
}

#[test]
fn test_placement_fails_once_fleet_is_placed() {
    let mut session = GameSession::with_seed(1);
    place_fleet_in_rows(&mut session);
    assert_eq!(session.remaining_ships(), 0);
    assert_eq!(
        session.place_player_ship(9, 0, Orientation::Horizontal),
        Err(GameError::FleetComplete)
    );
}

#[test]
fn test_reset_placement() {
    let mut session = GameSession::with_seed(1);
    session.place_player_ship(0, 0, Orientation::Horizontal).unwrap();
    session.place_player_ship(2, 0, Orientation::Horizontal).unwrap();
    session.reset_placement().unwrap();
    assert!(session.is_placement_phase());
    assert_eq!(session.remaining_ships(), NUM_SHIPS);
    assert!(session.human().board().ships().is_empty());
    assert_eq!(session.human().board().occupied_cells(), 0);
}

#[test]
fn test_end_placement_requires_full_fleet() {
    let mut session = GameSession::with_seed(1);
    session.place_player_ship(0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(session.end_placement_phase(), Err(GameError::FleetIncomplete));
    assert!(session.is_placement_phase());
}

#[test]
fn test_end_placement_places_computer_fleet() {
    let mut session = GameSession::with_seed(5);
    place_fleet_in_rows(&mut session);
    session.end_placement_phase().unwrap();
    assert_eq!(session.phase(), Phase::InProgress);

    let board = session.computer().board();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);

    // no going back to placement
    assert_eq!(session.reset_placement(), Err(GameError::NotInPlacement));
    assert_eq!(session.end_placement_phase(), Err(GameError::NotInPlacement));
    assert_eq!(
        session.place_player_ship(9, 0, Orientation::Horizontal),
        Err(GameError::NotInPlacement)
    );
}

#[test]
fn test_play_turn_rejected_during_placement() {
    let mut session = GameSession::with_seed(1);
    let mut stats = Statistics::new();
    assert_eq!(
        session.play_turn(&mut stats, Some((0, 0))),
        Err(GameError::NotInProgress)
    );
    assert_eq!(stats.shots(), 0);
}

#[test]
fn test_turns_alternate() {
    let mut session = GameSession::with_seed(3);
    let mut stats = Statistics::new();
    place_fleet_in_rows(&mut session);
    session.end_placement_phase().unwrap();

    let human = session.play_turn(&mut stats, Some((0, 0))).unwrap();
    assert_eq!(human.shooter, Side::Human);
    assert_eq!(human.target, None);
    assert_eq!(stats.shots(), 1);
    assert_eq!(session.current_player(), Side::Computer);

    let computer = session.play_turn(&mut stats, Some((9, 9))).unwrap();
    assert_eq!(computer.shooter, Side::Computer);
    let (r, c) = computer.target.unwrap();
    let occupied = session
        .human()
        .board()
        .cell(r, c)
        .map(|cell| !cell.is_empty())
        .unwrap();
    assert_eq!(computer.hit, occupied);
    // computer shots are not counted
    assert_eq!(stats.shots(), 1);
    assert_eq!(session.current_player(), Side::Human);
}

#[test]
fn test_out_of_bounds_human_shot_keeps_turn() {
    let mut session = GameSession::with_seed(3);
    let mut stats = Statistics::new();
    place_fleet_in_rows(&mut session);
    session.end_placement_phase().unwrap();
    let n = BOARD_SIZE as usize;
    assert_eq!(
        session.play_turn(&mut stats, Some((n, 0))),
        Err(GameError::Board(BoardError::OutOfBounds { row: n, col: 0 }))
    );
    assert_eq!(
        session.play_turn(&mut stats, None),
        Err(GameError::MissingTarget)
    );
    assert_eq!(session.current_player(), Side::Human);
    assert_eq!(stats.shots(), 0);
}

#[test]
fn test_human_wins_by_sinking_everything() {
    let mut session = GameSession::with_seed(11);
    let mut stats = Statistics::new();
    session.auto_place_player_ships().unwrap();
    session.end_placement_phase().unwrap();

    let targets: Vec<(usize, usize)> = {
        let board = session.computer().board();
        (0..10)
            .flat_map(|r| (0..10).map(move |c| (r, c)))
            .filter(|&(r, c)| board.ship_at(r, c).is_some())
            .collect()
    };
    assert_eq!(targets.len(), TOTAL_SHIP_CELLS);

    let mut last = None;
    for (i, &t) in targets.iter().enumerate() {
        let outcome = session.play_turn(&mut stats, Some(t)).unwrap();
        assert!(outcome.hit);
        if outcome.game_over {
            assert_eq!(i, targets.len() - 1);
            last = Some(outcome);
            break;
        }
        let reply = session.play_turn(&mut stats, None).unwrap();
        assert!(!reply.game_over, "computer cannot sink 17 cells in 16 shots");
    }

    let outcome = last.expect("game should end on the last ship cell");
    assert_eq!(outcome.winner, Some(Side::Human));
    assert!(outcome.sunk);
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.winner(), Some(Side::Human));
    assert_eq!(stats.games_played(), 1);
    assert_eq!(stats.wins(), 1);
    assert_eq!(stats.report().hit_accuracy, "100.00");
    assert_eq!(
        session.play_turn(&mut stats, Some((0, 0))),
        Err(GameError::NotInProgress)
    );
}

#[test]
fn test_full_game_records_one_result() {
    let mut session = GameSession::with_seed(2024);
    let mut stats = Statistics::new();
    let mut rng = SmallRng::seed_from_u64(17);
    let mut shooter = RandomTargeting;

    place_fleet_in_rows(&mut session);
    session.end_placement_phase().unwrap();

    let mut turns = 0;
    let outcome = loop {
        let target = match session.current_player() {
            Side::Human => shooter.select_target(&mut rng, session.computer().board(), None),
            Side::Computer => None,
        };
        let outcome = session.play_turn(&mut stats, target).unwrap();
        turns += 1;
        assert!(turns < 10_000, "game did not terminate");
        if outcome.game_over {
            break outcome;
        }
    };

    assert!(matches!(outcome.winner, Some(Side::Human) | Some(Side::Computer)));
    assert_eq!(stats.games_played(), 1);
    assert_eq!(stats.wins() + stats.losses(), stats.games_played());
    let loser = outcome.winner.unwrap().opponent();
    assert!(session.player(loser).board().all_ships_sunk());
}

#[test]
fn test_initialize_game_keeps_statistics() {
    let mut session = GameSession::with_seed(8);
    let mut stats = Statistics::new();
    session.auto_place_player_ships().unwrap();
    session.end_placement_phase().unwrap();
    session.play_turn(&mut stats, Some((0, 0))).unwrap();

    session.initialize_game();
    assert!(session.is_placement_phase());
    assert_eq!(session.current_player(), Side::Human);
    assert!(session.human().board().ships().is_empty());
    assert!(session.computer().board().ships().is_empty());
    assert_eq!(stats.shots(), 1);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = GameSession::with_seed(42);
    let mut b = GameSession::with_seed(42);
    a.auto_place_player_ships().unwrap();
    b.auto_place_player_ships().unwrap();
    a.end_placement_phase().unwrap();
    b.end_placement_phase().unwrap();
    assert_eq!(a.human().board(), b.human().board());
    assert_eq!(a.computer().board(), b.computer().board());
}
