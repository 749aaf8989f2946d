use naval::render::{self, FOG, HULL, REEF};
use naval::{Point, PlayerId, Session};

fn run(script: &str) -> (Session, Vec<String>) {
    let mut session = Session::new();
    let out = session.run(script.lines());
    (session, out)
}

const SMALL_BOARD: &str = "[state]\nBOARD_SIZE 3 4\nSET_FLEET A 0 0 1 0\nSET_FLEET B 0 0 0 0\n\
                           SHIP A 0 0 W 0 CRU 011\nREEF 2 3\n";

#[test]
fn plain_state_print() {
    let (_, out) = run(&format!("{}PRINT 0\n[state]", SMALL_BOARD));
    assert_eq!(
        out,
        vec!["x++ ", "    ", "   #", "PARTS REMAINING:: A : 2 B : 0"]
    );
}

#[test]
fn detailed_state_print_marks_segments() {
    let (_, out) = run(&format!("{}PRINT 1\n[state]", SMALL_BOARD));
    assert_eq!(
        out,
        vec![" 0123", "0x!% ", "1    ", "2   #", "PARTS REMAINING:: A : 2 B : 0"]
    );
}

#[test]
fn hit_sensor_shrinks_radar() {
    let (_, out) = run(&format!("{}[state]\n[playerA]\nPRINT 0\n", SMALL_BOARD));
    assert_eq!(out, vec!["x++?", " ???", "???#"]);
}

#[test]
fn reefs_are_never_fogged() {
    let (session, _) = run(&format!("{}[state]", SMALL_BOARD));
    let cells = render::player_cells(session.game(), PlayerId::B, naval::PrintMode::Plain);
    assert_eq!(cells[2][3], REEF);
    assert!(cells[0].iter().all(|&c| c == FOG));
}

const SPY_SETUP: &str = "[state]\nEXTENDED_SHIPS\nSET_FLEET A 1 0 0 0\nSET_FLEET B 0 0 0 1\n\
                         SHIP B 15 5 N 0 DES 11\n";

#[test]
fn spy_plane_reveals_surrounding_box() {
    let script = format!(
        "{}SHIP A 0 0 N 0 CAR 11111\n[state]\n[playerA]\nSPY 0 15 5\nPRINT 0\n",
        SPY_SETUP
    );
    let (session, out) = run(&script);
    assert_eq!(out.len(), 21);
    assert_eq!(out[0], "+     ????");
    assert_eq!(out[15], "???? + ???");
    assert_eq!(out[16], "???? + ???");
    assert_eq!(out[17], "??????????");

    let game = session.game();
    assert!(render::is_visible_to(game, PlayerId::A, Point::new(14, 4)));
    assert!(!render::is_visible_to(game, PlayerId::A, Point::new(17, 5)));
    assert!(!render::is_visible_to(game, PlayerId::B, Point::new(0, 0)));
    let cells = render::player_cells(game, PlayerId::A, naval::PrintMode::Plain);
    assert_eq!(cells[16][5], HULL);
}

#[test]
fn carrier_holds_limited_planes() {
    let spies = "SPY 0 15 5\n".repeat(6);
    let script = format!(
        "{}SHIP A 0 0 N 0 CAR 11111\n[state]\n[playerA]\n{}",
        SPY_SETUP, spies
    );
    let (_, out) = run(&script);
    assert_eq!(out, vec!["INVALID OPERATION \"SPY 0 15 5\": ALL PLANES SENT"]);
}

#[test]
fn spy_needs_working_placed_carrier() {
    let (_, out) = run(&format!("{}[state]\n[playerA]\nSPY 0 15 5\n", SPY_SETUP));
    assert_eq!(out, vec!["INVALID OPERATION \"SPY 0 15 5\": CARRIER IS NOT PLACED"]);

    let (_, out) = run(&format!(
        "{}SHIP A 0 0 N 0 CAR 10111\n[state]\n[playerA]\nSPY 0 15 5\n",
        SPY_SETUP
    ));
    assert_eq!(out, vec!["INVALID OPERATION \"SPY 0 15 5\": CANNOT SEND PLANE"]);

    let (_, out) = run(&format!(
        "{}SHIP A 0 0 N 0 CAR 11111\n[state]\n[playerA]\nSPY 1 15 5\n",
        SPY_SETUP
    ));
    assert_eq!(out, vec!["INVALID OPERATION \"SPY 1 15 5\": SHIP DOES NOT EXIST"]);
}

#[test]
fn planes_far_off_board_still_render() {
    let script = format!(
        "{}SHIP A 0 0 N 0 CAR 11111\n[state]\n[playerA]\nSPY 0 -2147483648 0\nSPY 0 2147483647 -2147483648\nPRINT 0\nPRINT 1\n",
        SPY_SETUP
    );
    let (_, out) = run(&script);
    assert_eq!(out.len(), 21 + 1 + 21);
    assert_eq!(out[0], "+     ????");
    assert!(!out.iter().any(|l| l.starts_with("INVALID OPERATION")));
}
