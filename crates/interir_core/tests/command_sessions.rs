//! End-to-end scripted sessions through the line-based command protocol.
//!
//! Each test feeds command lines to a `Session` and checks the collected
//! status text, the way a host (REPL, pipe, script runner) drives the core.

use interir_core::{Session, SessionError};

/// Execute a command, consume output, return it.
fn exec(session: &mut Session, line: &str) -> Vec<String> {
    session.exec(line).unwrap();
    session.take_output()
}

/// Execute a command expected to fail, returning the error.
fn exec_err(session: &mut Session, line: &str) -> SessionError {
    let err = session.exec(line).unwrap_err();
    assert!(
        session.take_output().is_empty(),
        "failed command must not emit output",
    );
    err
}

#[test]
fn den_scenario_renders_expected_grid() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");
    exec(&mut s, "select-room 0");
    exec(&mut s, "add-furniture chair 2 1");

    let output = exec(&mut s, "visualize");
    assert_eq!(
        output,
        vec![
            "visualization of Den:",
            "+----+",
            "|    |",
            "|  C |",
            "|    |",
            "+----+",
        ],
    );
}

#[test]
fn visualize_is_idempotent() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");
    exec(&mut s, "select-room 0");
    exec(&mut s, "add-furniture chair 2 1");

    let first = exec(&mut s, "visualize");
    let second = exec(&mut s, "visualize");
    assert_eq!(first, second);
}

#[test]
fn sample_layout_bedroom_has_no_furniture() {
    let mut s = Session::with_sample_layout();

    let output = exec(&mut s, "select-room 1");
    assert_eq!(output, vec!["selected room: Bedroom"]);
    assert_eq!(s.current_room().unwrap().name, "Bedroom");

    let output = exec(&mut s, "list-furniture");
    assert_eq!(output, vec!["no furniture in this room"]);
}

#[test]
fn sample_layout_lists_three_rooms() {
    let mut s = Session::with_sample_layout();
    let output = exec(&mut s, "list-rooms");
    assert_eq!(
        output,
        vec![
            "0: Living Room (20x15)",
            "1: Bedroom (15x12)",
            "2: Kitchen (12x10)",
        ],
    );
}

#[test]
fn sample_layout_living_room_furniture() {
    let mut s = Session::with_sample_layout();
    let output = exec(&mut s, "list-furniture");
    assert_eq!(
        output,
        vec![
            "furniture in Living Room:",
            "0: sofa at (5, 5)",
            "1: table at (10, 8)",
            "2: chair at (8, 8)",
        ],
    );
}

#[test]
fn furniture_commands_fail_without_selection() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");

    assert_eq!(
        exec_err(&mut s, "add-furniture chair 1 1"),
        SessionError::NoSelection,
    );
    assert_eq!(exec_err(&mut s, "list-furniture"), SessionError::NoSelection);
    assert_eq!(exec_err(&mut s, "visualize"), SessionError::NoSelection);
    assert!(s.get_room(0).unwrap().furniture.is_empty());
}

#[test]
fn boundary_placement_accepted_but_invisible() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");
    exec(&mut s, "select-room 0");

    // Placing exactly on the boundary edge succeeds...
    let output = exec(&mut s, "add-furniture lamp 4 3");
    assert_eq!(output, vec!["added lamp at (4, 3)"]);

    // ...but one past it is rejected.
    assert!(matches!(
        exec_err(&mut s, "add-furniture lamp 5 0"),
        SessionError::OutOfBounds { .. },
    ));

    // The boundary item is real yet never rendered.
    let output = exec(&mut s, "visualize");
    assert!(output.iter().all(|line| !line.contains('L')), "{:?}", output);
    assert_eq!(s.get_room(0).unwrap().furniture.len(), 1);
}

#[test]
fn failed_selection_leaves_previous_room_current() {
    let mut s = Session::new();
    exec(&mut s, "add-room A 6 6");
    exec(&mut s, "add-room B 6 6");
    exec(&mut s, "select-room 0");

    assert!(matches!(
        exec_err(&mut s, "select-room 7"),
        SessionError::OutOfRange { index: 7, .. },
    ));

    // Furniture still goes to room A.
    exec(&mut s, "add-furniture desk 1 1");
    assert_eq!(s.get_room(0).unwrap().furniture.len(), 1);
    assert!(s.get_room(1).unwrap().furniture.is_empty());
}

#[test]
fn unknown_command_reports_and_keeps_running() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");

    let err = exec_err(&mut s, "fly-to-moon");
    assert_eq!(err, SessionError::UnknownCommand("fly-to-moon".into()));
    assert_eq!(err.to_string(), "unknown command: fly-to-moon (type 'help' for a list)");

    assert!(s.is_running());
    assert_eq!(s.rooms().len(), 1);
    assert_eq!(exec(&mut s, "list-rooms"), vec!["0: Den (4x3)"]);
}

#[test]
fn exit_terminates_and_later_rooms_untouched() {
    let mut s = Session::new();
    exec(&mut s, "add-room Den 4 3");
    exec(&mut s, "exit");
    assert!(!s.is_running());
    // The data model is still readable after termination.
    assert_eq!(s.rooms().len(), 1);
}

#[test]
fn scripted_session_mixes_comments_and_commands() {
    let script = "\
# build a tiny studio
add-room Studio 6 4
select-room 0

add-furniture bed 1 1
add-furniture desk 4 2
list-furniture
";
    let mut s = Session::new();
    for line in script.lines() {
        s.exec(line).unwrap();
    }
    let output = s.take_output();
    assert_eq!(
        output,
        vec![
            "added room 0: Studio (6x4)",
            "selected room: Studio",
            "added bed at (1, 1)",
            "added desk at (4, 2)",
            "furniture in Studio:",
            "0: bed at (1, 1)",
            "1: desk at (4, 2)",
        ],
    );
}

#[test]
fn overlapping_furniture_first_insertion_wins() {
    let mut s = Session::new();
    exec(&mut s, "add-room Nook 3 2");
    exec(&mut s, "select-room 0");
    exec(&mut s, "add-furniture table 1 0");
    exec(&mut s, "add-furniture sofa 1 0");

    let output = exec(&mut s, "visualize");
    assert_eq!(
        output,
        vec!["visualization of Nook:", "+---+", "| T |", "|   |", "+---+"],
    );
}

#[test]
fn unknown_kind_renders_question_mark_through_commands() {
    let mut s = Session::new();
    exec(&mut s, "add-room Nook 3 1");
    exec(&mut s, "select-room 0");
    exec(&mut s, "add-furniture aquarium 0 0");

    let output = exec(&mut s, "visualize");
    assert_eq!(
        output,
        vec!["visualization of Nook:", "+---+", "|?  |", "+---+"],
    );
}

#[test]
fn symbol_lookup_ignores_case_through_commands() {
    let mut s = Session::new();
    exec(&mut s, "add-room Nook 3 1");
    exec(&mut s, "select-room 0");
    exec(&mut s, "add-furniture SOFA 2 0");

    let output = exec(&mut s, "visualize");
    assert_eq!(
        output,
        vec!["visualization of Nook:", "+---+", "|  S|", "+---+"],
    );
}
