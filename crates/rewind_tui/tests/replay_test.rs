//! Tests for the non-interactive replay path.

use rewind_tui::{ReplayError, parse_cells, render_replay, replay_cells};

fn args(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replay_to_win() {
    let cells = parse_cells(&args(&["0", "3", "1", "4", "top-right"])).expect("parse");
    let engine = replay_cells(&cells, None).expect("replay");
    let text = render_replay(&engine);

    assert!(text.starts_with("X|X|X\n"));
    assert!(text.contains("Winner: X"));
    assert!(text.ends_with("> Go to move #5\n"));
}

#[test]
fn test_replay_empty_game() {
    let engine = replay_cells(&[], Some(0)).expect("replay");
    assert_eq!(
        render_replay(&engine),
        "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player: X\n\n> Go to game start\n"
    );
}

#[test]
fn test_replay_errors_are_displayable() {
    let err = parse_cells(&args(&["corner"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown cell \"corner\" (use 0-8 or a label like \"center\")"
    );

    let err = replay_cells(&[0], Some(3)).unwrap_err();
    assert_eq!(err, ReplayError::StepOutOfRange { step: 3, len: 2 });
    assert_eq!(err.to_string(), "Step 3 out of range (history has 2 entries)");
}
