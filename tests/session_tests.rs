use previous_edit::config::Config;
use previous_edit::history::{HistoryFacade, LocationRecord};
use previous_edit::host::{parse_script, HostEvent, SeekLog, Session};

fn moved(file_name: &str, position: usize, line: usize) -> HostEvent {
    HostEvent::CursorMoved {
        file_name: file_name.to_string(),
        position,
        line,
    }
}

fn session() -> Session<SeekLog> {
    Session::new(&Config::default(), SeekLog::default())
}

#[test]
fn test_cursor_moves_do_not_seek() {
    let mut session = session();
    session.dispatch(moved("a.rs", 10, 1));
    session.dispatch(moved("b.rs", 20, 2));

    assert!(session.navigator().seeks.is_empty());
    assert!(session.history().current().matches("b.rs", 20, 2));
}

#[test]
fn test_navigation_seeks_to_new_current() {
    let mut session = session();
    session.replay(vec![
        moved("a.rs", 10, 1),
        moved("b.rs", 20, 2),
        moved("c.rs", 30, 3),
        HostEvent::NavigateBackward,
        HostEvent::NavigateBackward,
        HostEvent::NavigateForward,
    ]);

    assert_eq!(
        session.navigator().seeks,
        vec![
            LocationRecord::new("b.rs", 20, 2),
            LocationRecord::new("a.rs", 10, 1),
            LocationRecord::new("b.rs", 20, 2),
        ]
    );
}

#[test]
fn test_navigation_without_history_does_nothing() {
    let mut session = session();
    session.dispatch(HostEvent::NavigateBackward);
    session.dispatch(moved("a.rs", 10, 1));
    session.dispatch(HostEvent::NavigateForward);
    session.dispatch(HostEvent::NavigateBackward);

    assert!(session.navigator().seeks.is_empty());
}

#[test]
fn test_edits_rewrite_history_without_seeking() {
    let mut session = session();
    session.replay(vec![
        moved("a.rs", 10, 1),
        moved("a.rs", 50, 4),
        HostEvent::TextEdited {
            file_name: "a.rs".to_string(),
            start_position: 0,
            chars_added: 5,
            lines_added: 1,
        },
        HostEvent::LinesRemoved {
            file_name: "a.rs".to_string(),
            start_position: 20,
            length: 10,
            lines_removed: 1,
        },
    ]);

    assert!(session.navigator().seeks.is_empty());
    assert!(session.history().current().matches("a.rs", 45, 4));

    session.dispatch(HostEvent::NavigateBackward);
    assert_eq!(
        session.into_navigator().seeks,
        vec![LocationRecord::new("a.rs", 15, 2)]
    );
}

#[test]
fn test_clear_on_workspace_switch() {
    let mut session = session();
    session.dispatch(moved("a.rs", 10, 1));
    session.dispatch(moved("b.rs", 10, 1));
    session.dispatch(HostEvent::Clear);

    assert!(session.history().current().is_empty());
    assert!(!session.history().can_backward());
}

#[test]
fn test_replay_parsed_script() {
    let script = "\
# open two files
move src/lib.rs 120 4
move src/main.rs 300 12
move src/main.rs 340 12
back
";
    let events = parse_script(script).unwrap();
    let mut session = Session::with_history(HistoryFacade::new(false), SeekLog::default());
    session.replay(events);

    assert!(session.history().current().matches("src/main.rs", 300, 12));
    assert_eq!(
        session.history().snapshot().picker_lines(),
        vec![
            "  lib.rs: Line 4: Position 120".to_string(),
            "> main.rs: Line 12: Position 300".to_string(),
            "  main.rs: Line 12: Position 340".to_string(),
        ]
    );
}

#[test]
fn test_edit_erasing_current_seeks_to_fallback() {
    let mut session = session();
    session.replay(vec![
        moved("f", 0, 1),
        moved("f", 100, 2),
        moved("f", 1000, 3),
        HostEvent::TextEdited {
            file_name: "f".to_string(),
            start_position: 101,
            chars_added: -999,
            lines_added: -1,
        },
    ]);

    assert!(session.history().current().matches("f", 100, 2));
    assert_eq!(
        session.navigator().seeks,
        vec![LocationRecord::new("f", 100, 2)]
    );
}
