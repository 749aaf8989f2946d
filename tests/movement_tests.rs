use naval::{Direction, Game, Point, PlayerId, Session, Ship, ShipClass, CARRIER_MAX_MOVES};

const SETUP: &str = "[state]\nEXTENDED_SHIPS\nSET_FLEET A 1 0 1 0\nSET_FLEET B 0 0 0 1\nSHIP B 15 5 N 0 DES 11\n";

fn run(state: &str, turns: &str) -> (Session, Vec<String>) {
    let script = format!("{}{}[state]\n{}", SETUP, state, turns);
    let mut session = Session::new();
    let out = session.run(script.lines());
    (session, out)
}

fn ship(game: &Game, class: ShipClass) -> &Ship {
    game.player(PlayerId::A).ship(class, 0).unwrap()
}

#[test]
fn forward_advances_head_along_facing() {
    let (session, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\n",
    );
    assert!(out.is_empty());
    let cruiser = ship(session.game(), ShipClass::Cruiser);
    assert_eq!(cruiser.head, Point::new(4, 5));
    assert_eq!(cruiser.direction, Direction::N);
    assert_eq!(cruiser.times_moved, 1);
}

#[test]
fn turns_pivot_stern_onto_cell_ahead() {
    let (session, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU L\n",
    );
    assert!(out.is_empty());
    let cruiser = ship(session.game(), ShipClass::Cruiser);
    assert_eq!(cruiser.head, Point::new(4, 3));
    assert_eq!(cruiser.direction, Direction::W);
    assert_eq!(cruiser.stern(), Point::new(4, 5));

    let (session, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU R\n",
    );
    assert!(out.is_empty());
    let cruiser = ship(session.game(), ShipClass::Cruiser);
    assert_eq!(cruiser.head, Point::new(4, 7));
    assert_eq!(cruiser.direction, Direction::E);
    assert_eq!(cruiser.stern(), Point::new(4, 5));
}

#[test]
fn hit_engine_blocks_movement() {
    let (_, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 CRU 110\n",
        "[playerA]\nMOVE 0 CRU F\n",
    );
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CRU F\": SHIP CANNOT MOVE"]);
}

#[test]
fn hit_cannon_does_not_block_movement() {
    let (session, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 CRU 101\n",
        "[playerA]\nMOVE 0 CRU F\nSHOOT 0 CRU 3 5\n",
    );
    assert_eq!(
        out,
        vec!["INVALID OPERATION \"SHOOT 0 CRU 3 5\": SHIP CANNOT SHOOT"]
    );
    assert_eq!(ship(session.game(), ShipClass::Cruiser).head, Point::new(4, 5));
}

#[test]
fn move_budget_is_capped_per_class() {
    let (_, out) = run(
        "SHIP A 0 9 N 0 CAR 11111\nSHIP A 8 2 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\nMOVE 0 CRU F\nMOVE 0 CRU F\nMOVE 0 CRU F\n",
    );
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CRU F\": SHIP MOVED ALREADY"]);

    let moves = "MOVE 0 CAR F\n".repeat(CARRIER_MAX_MOVES as usize + 1);
    let (_, out) = run(
        "SHIP A 5 9 N 0 CAR 11111\nSHIP A 8 2 N 0 CRU 111\n",
        &format!("[playerA]\n{}", moves),
    );
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CAR F\": SHIP MOVED ALREADY"]);
}

#[test]
fn move_budget_resets_when_turn_closes() {
    let (session, out) = run(
        "SHIP A 0 9 N 0 CAR 11111\nSHIP A 9 2 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\nMOVE 0 CRU F\nMOVE 0 CRU F\n[playerA]\n",
    );
    assert!(out.is_empty());
    assert_eq!(ship(session.game(), ShipClass::Cruiser).times_moved, 0);

    let (session, out) = run(
        "SHIP A 0 9 N 0 CAR 11111\nSHIP A 9 2 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\nMOVE 0 CRU F\nMOVE 0 CRU F\n[playerA]\n[playerB]\n[playerB]\n[playerA]\nMOVE 0 CRU F\n",
    );
    assert!(out.is_empty());
    assert_eq!(ship(session.game(), ShipClass::Cruiser).head, Point::new(5, 2));
}

#[test]
fn leaving_board_is_rejected_and_ship_stays() {
    let (session, out) = run(
        "SHIP A 5 0 N 0 CAR 11111\nSHIP A 0 5 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\n",
    );
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CRU F\": SHIP WENT FROM BOARD"]);
    let cruiser = ship(session.game(), ShipClass::Cruiser);
    assert!(cruiser.placed);
    assert_eq!(cruiser.head, Point::new(0, 5));
    assert_eq!(cruiser.times_moved, 0);
}

#[test]
fn moving_onto_reef_is_rejected() {
    let (_, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 4 5 N 0 CRU 111\nREEF 3 5\n",
        "[playerA]\nMOVE 0 CRU F\n",
    );
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CRU F\": PLACING SHIP ON REEF"]);
}

#[test]
fn moving_next_to_other_ship_is_rejected() {
    let (_, out) = run(
        "SHIP A 0 0 N 0 CAR 11111\nSHIP A 6 1 N 0 CRU 111\n",
        "[playerA]\nMOVE 0 CRU F\n",
    );
    assert_eq!(
        out,
        vec!["INVALID OPERATION \"MOVE 0 CRU F\": PLACING SHIP TOO CLOSE TO OTHER SHIP"]
    );
}

#[test]
fn moving_unknown_or_unplaced_ship() {
    let (_, out) = run("SHIP A 0 0 N 0 CAR 11111\n", "[playerA]\nMOVE 1 CRU F\n");
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 1 CRU F\": SHIP DOES NOT EXIST"]);

    let (_, out) = run("SHIP A 0 0 N 0 CAR 11111\n", "[playerA]\nMOVE 0 CRU F\n");
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 CRU F\": SHIP NOT PLACED"]);
}

#[test]
fn destroyer_cannon_is_also_its_engine() {
    let state = "SET_FLEET A 1 0 0 1\nSHIP A 0 0 N 0 CAR 11111\nSHIP A 5 5 N 0 DES 10\n";
    let (_, out) = run(state, "[playerA]\nMOVE 0 DES F\n");
    assert_eq!(out, vec!["INVALID OPERATION \"MOVE 0 DES F\": SHIP CANNOT MOVE"]);

    let (_, out) = run(state, "[playerA]\nSHOOT 0 DES 7 5\n");
    assert_eq!(out, vec!["INVALID OPERATION \"SHOOT 0 DES 7 5\": SHIP CANNOT SHOOT"]);
}
