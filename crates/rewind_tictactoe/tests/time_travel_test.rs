//! Tests for history navigation through the public engine API.

use rewind_tictactoe::{
    Board, GameEngine, GameStatus, IgnoreReason, MoveOutcome, Player, Position, Square,
    rules::WINNING_LINES,
};

#[test]
fn test_fresh_engine() {
    let engine = GameEngine::new();

    assert!(engine.current_board().squares().iter().all(|s| s.is_empty()));
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.cursor(), 0);
}

#[test]
fn test_moves_alternate_players() {
    let mut engine = GameEngine::new();

    for (turn, cell) in [4, 0, 8, 2].into_iter().enumerate() {
        let mover = engine.current_player();
        let len = engine.history_len();

        assert!(engine.apply_move(cell).is_applied());

        let pos = Position::from_index(cell).unwrap();
        assert_eq!(engine.current_board().get(pos), Square::Occupied(mover));
        assert_eq!(engine.history_len(), len + 1);
        assert_eq!(engine.current_player(), mover.opponent());
        assert_eq!(engine.cursor(), turn + 1);
    }
}

#[test]
fn test_every_line_is_detected() {
    for line in WINNING_LINES {
        let mut squares = [Square::Empty; 9];
        for pos in line {
            squares[pos.to_index()] = Square::Occupied(Player::O);
        }
        assert_eq!(
            rewind_tictactoe::rules::check_winner(&Board::from_squares(squares)),
            Some(Player::O)
        );
    }
}

#[test]
fn test_o_wins_through_play() {
    // X: 0, 1, 8   O: 2, 4, 6 (anti-diagonal)
    let engine = GameEngine::replay(&[0, 2, 1, 4, 8, 6]);
    assert_eq!(engine.winner(), Some(Player::O));
    assert_eq!(engine.status(), GameStatus::Winner(Player::O));
}

#[test]
fn test_jump_then_branch() {
    let mut engine = GameEngine::replay(&[0, 1, 2]);
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.cursor(), 3);

    engine.jump_to(1);
    assert_eq!(
        engine.current_board(),
        &Board::new().with_mark(Position::TopLeft, Player::X)
    );
    assert_eq!(engine.current_player(), Player::O);

    engine.apply_move(4);
    assert_eq!(engine.history_len(), 3);
    assert_eq!(engine.cursor(), 2);
    assert_eq!(
        engine.current_board(),
        &Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
    );
}

#[test]
fn test_rejected_move_on_past_step_keeps_future() {
    let mut engine = GameEngine::replay(&[0, 1, 2]);
    engine.jump_to(2);

    let outcome = engine.apply_move(1);

    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::TopCenter))
    );
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_move_list_is_stable_as_history_grows() {
    let mut engine = GameEngine::new();
    let mut previous = engine.move_list();

    for cell in [0, 4, 8, 2, 6] {
        engine.apply_move(cell);
        let list = engine.move_list();

        assert_eq!(list.len(), engine.history_len());
        assert_eq!(list[0].label, "Go to game start");
        assert_eq!(&list[..previous.len()], previous.as_slice());
        previous = list;
    }
}

#[test]
fn test_last_move_recorded_per_entry() {
    let engine = GameEngine::replay(&[4, 0]);
    let moves: Vec<_> = engine.history().iter().map(|e| e.last_move()).collect();

    assert_eq!(moves[0], None);
    assert_eq!(moves[1].map(|m| m.position), Some(Position::Center));
    assert_eq!(moves[2].map(|m| m.player), Some(Player::O));
}

#[test]
fn test_engine_serializes_history_and_cursor() {
    let mut engine = GameEngine::replay(&[0, 4]);
    engine.jump_to(1);

    let json = serde_json::to_value(&engine).expect("serialize");
    assert_eq!(json["state"]["cursor"], 1);
    assert_eq!(json["state"]["history"].as_array().map(Vec::len), Some(3));

    let restored: GameEngine = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, engine);
}

#[test]
fn test_deserialize_rejects_broken_history() {
    let empty = serde_json::from_str::<GameEngine>(r#"{"state":{"history":[],"cursor":0}}"#);
    assert!(empty.is_err());

    let mut json = serde_json::to_value(GameEngine::new()).expect("serialize");
    json["state"]["cursor"] = 5.into();
    assert!(serde_json::from_value::<GameEngine>(json).is_err());

    // Step 2 also clears X's first mark.
    let mut json = serde_json::to_value(GameEngine::replay(&[0, 4])).expect("serialize");
    json["state"]["history"][2]["board"]["squares"][0] = "Empty".into();
    let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid game state"));
}
