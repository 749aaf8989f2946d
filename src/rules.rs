//! Legality checks for placement, movement, shooting and spy planes.
//!
//! Every mutating function validates first and only touches the game once
//! all checks passed, so a rejected command leaves the state unchanged.

use crate::common::GameError;
use crate::config::MAX_SPY_PLANES;
use crate::game::Game;
use crate::geometry::{Direction, Point, Rect};
use crate::player::PlayerId;
use crate::ship::{HullDamage, MoveKind, Ship, ShipClass, ShipElement, ShipRef};

/// `true` when `ship` may fire at `target`. Carriers are not range limited.
pub fn within_cannon_range(ship: &Ship, target: Point) -> bool {
    ship.class() == ShipClass::Carrier || ship.cannon().in_range(target, ship.size() as i32)
}

/// Fails when any reef lies under the hull.
pub fn check_reefs(game: &Game, candidate: &Ship) -> Result<(), GameError> {
    let rect = candidate.rect();
    if game.reefs.iter().any(|&reef| rect.contains(reef)) {
        return Err(GameError::PlacingOnReef);
    }
    Ok(())
}

/// Fails when any other placed hull cell lies within one cell of the hull.
pub fn check_clearance(game: &Game, candidate: &Ship, this: ShipRef) -> Result<(), GameError> {
    let halo = candidate.rect().expanded(1);
    let crowded = game
        .elements()
        .iter()
        .any(|el| el.ship != this && halo.contains(el.pos));
    if crowded {
        return Err(GameError::TooCloseToOtherShip);
    }
    Ok(())
}

/// Full placement legality: inside `area`, clear of reefs, clear of ships.
pub fn check_placement(
    game: &Game,
    area: &Rect,
    candidate: &Ship,
    this: ShipRef,
) -> Result<(), GameError> {
    if !area.encloses(&candidate.rect()) {
        return Err(GameError::NotInStartingPosition);
    }
    check_reefs(game, candidate)?;
    check_clearance(game, candidate, this)
}

fn lookup(game: &Game, r: ShipRef) -> Result<&Ship, GameError> {
    game.ship(r).ok_or(GameError::NoSuchShip)
}

/// `PLACE_SHIP`: initial placement inside the owner's init zone.
pub fn place_ship(
    game: &mut Game,
    owner: PlayerId,
    class: ShipClass,
    id: usize,
    head: Point,
    direction: Direction,
) -> Result<(), GameError> {
    let this = ShipRef { owner, class, id };
    let ship = game.ship(this).ok_or(GameError::AllShipsOfClassSet)?;
    if ship.placed {
        return Err(GameError::ShipAlreadyPresent);
    }
    let mut candidate = ship.clone();
    candidate.head = head;
    candidate.direction = direction;
    let area = game.player(owner).init_area.normalized();
    check_placement(game, &area, &candidate, this)?;

    candidate.placed = true;
    if let Some(slot) = game.ship_mut(this) {
        *slot = candidate;
    }
    Ok(())
}

/// `SHIP`: restore a ship with its damage, anywhere outside reefs and
/// other ships.
pub fn restore_ship(
    game: &mut Game,
    this: ShipRef,
    head: Point,
    direction: Direction,
    damage: HullDamage,
) -> Result<(), GameError> {
    let ship = game.ship(this).ok_or(GameError::AllShipsOfClassSet)?;
    if ship.placed {
        return Err(GameError::ShipAlreadyPresent);
    }
    let mut candidate = ship.clone();
    candidate.head = head;
    candidate.direction = direction;
    check_reefs(game, &candidate)?;
    check_clearance(game, &candidate, this)?;

    candidate.placed = true;
    candidate.damage = damage;
    if let Some(slot) = game.ship_mut(this) {
        *slot = candidate;
    }
    Ok(())
}

/// `MOVE`: advance or turn a placed ship.
pub fn move_ship(game: &mut Game, this: ShipRef, kind: MoveKind) -> Result<(), GameError> {
    let ship = lookup(game, this)?;
    if !ship.placed {
        return Err(GameError::ShipNotPlaced);
    }
    if game.extended && ship.engine_destroyed() {
        return Err(GameError::ShipCannotMove);
    }
    if ship.times_moved >= this.class.max_moves() {
        return Err(GameError::ShipMovedAlready);
    }

    let (head, direction) = ship.moved(kind);
    let mut candidate = ship.clone();
    candidate.head = head;
    candidate.direction = direction;

    check_reefs(game, &candidate)?;
    if !game.board_rect().encloses(&candidate.rect()) {
        return Err(GameError::ShipWentFromBoard);
    }
    check_clearance(game, &candidate, this)?;

    candidate.times_moved += 1;
    if let Some(slot) = game.ship_mut(this) {
        *slot = candidate;
    }
    Ok(())
}

fn check_target(game: &Game, target: Point) -> Result<(), GameError> {
    if !game.all_ships_placed() {
        return Err(GameError::NotAllShipsPlaced);
    }
    if !game.in_bounds(target) {
        return Err(GameError::FieldDoesNotExist);
    }
    Ok(())
}

/// Classic `SHOOT`: one shot per player per round.
pub fn shoot_classic(
    game: &mut Game,
    shooter: PlayerId,
    target: Point,
) -> Result<Option<ShipElement>, GameError> {
    if game.player(shooter).has_shot {
        return Err(GameError::DoubleShooting);
    }
    check_target(game, target)?;

    let struck = game.strike(target);
    game.player_mut(shooter).has_shot = true;
    game.player_mut(shooter.other()).has_shot = false;
    Ok(struck)
}

/// Checks an extended shot by `this` without firing it.
pub fn check_extended_shot(game: &Game, this: ShipRef, target: Point) -> Result<(), GameError> {
    let ship = lookup(game, this)?;
    if !ship.placed {
        return Err(GameError::ShipNotPlaced);
    }
    if ship.cannon_destroyed() {
        return Err(GameError::ShipCannotShoot);
    }
    if ship.shots_this_turn >= ship.size() {
        return Err(GameError::TooManyShoots);
    }
    if !within_cannon_range(ship, target) {
        return Err(GameError::ShootingTooFar);
    }
    check_target(game, target)
}

/// Extended `SHOOT`: a specific ship fires, up to its size per turn.
pub fn shoot_extended(
    game: &mut Game,
    this: ShipRef,
    target: Point,
) -> Result<Option<ShipElement>, GameError> {
    check_extended_shot(game, this, target)?;
    let struck = game.strike(target);
    if let Some(ship) = game.ship_mut(this) {
        ship.shots_this_turn += 1;
    }
    Ok(struck)
}

/// `SPY`: launch a plane from a carrier over `target`.
pub fn launch_spy_plane(
    game: &mut Game,
    owner: PlayerId,
    id: usize,
    target: Point,
) -> Result<(), GameError> {
    let this = ShipRef {
        owner,
        class: ShipClass::Carrier,
        id,
    };
    let carrier = lookup(game, this)?;
    if !carrier.placed {
        return Err(GameError::CarrierNotPlaced);
    }
    if carrier.cannon_destroyed() {
        return Err(GameError::CannotSendPlane);
    }
    if carrier.spy_planes.len() >= MAX_SPY_PLANES {
        return Err(GameError::AllPlanesSent);
    }
    if let Some(carrier) = game.ship_mut(this) {
        carrier.spy_planes.push(target);
        carrier.shots_this_turn += 1;
    }
    Ok(())
}

/// `REEF`: add an obstacle on the board.
pub fn add_reef(game: &mut Game, at: Point) -> Result<(), GameError> {
    if !game.in_bounds(at) {
        return Err(GameError::ReefOffBoard);
    }
    game.reefs.push(at);
    Ok(())
}
