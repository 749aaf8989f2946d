//! `SAVE`: dump the game as a `[state]` group that replays to the same game.

use crate::game::Game;
use crate::player::PlayerId;
use crate::ship::ShipClass;

/// Protocol lines reproducing board size, turn order, zones, fleets,
/// placed ships with damage, reefs, rule set, automated seats and seed.
///
/// The seed is written incremented so a replay draws a fresh sequence.
pub fn snapshot(game: &Game) -> Vec<String> {
    let mut out = vec!["[state]".to_string()];
    out.push(format!("BOARD_SIZE {} {}", game.rows, game.cols));
    out.push(format!("NEXT_PLAYER {}", game.next_player));

    for id in PlayerId::ALL {
        let player = game.player(id);
        let area = player.init_area;
        out.push(format!(
            "INIT_POSITION {} {} {} {} {}",
            id, area.start.row, area.start.col, area.end.row, area.end.col
        ));
        let fleet = player.fleet();
        out.push(format!(
            "SET_FLEET {} {} {} {} {}",
            id,
            fleet[ShipClass::Carrier.index()],
            fleet[ShipClass::Battleship.index()],
            fleet[ShipClass::Cruiser.index()],
            fleet[ShipClass::Destroyer.index()]
        ));
        for ship in player.ships().filter(|s| s.placed) {
            out.push(format!(
                "SHIP {} {} {} {} {} {} {}",
                id,
                ship.head.row,
                ship.head.col,
                ship.direction,
                ship.id(),
                ship.class(),
                ship.damage.to_mask_string(ship.size())
            ));
        }
    }

    for reef in &game.reefs {
        out.push(format!("REEF {} {}", reef.row, reef.col));
    }
    if game.extended {
        out.push("EXTENDED_SHIPS".to_string());
    }
    for id in PlayerId::ALL {
        if game.player(id).automated {
            out.push(format!("SET_AI_PLAYER {}", id));
        }
    }
    if let Some(seed) = game.seed {
        out.push(format!("SRAND {}", seed.wrapping_add(1)));
    }
    out.push("[state]".to_string());
    out
}
