//! Automated player: produces one full turn of legal commands.
//!
//! The live game is never touched. The turn is searched on a cloned sandbox
//! through the same validators used for typed commands, and the result is
//! emitted as a replayable transcript: snapshot, placements, shots.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::common::GameError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::game::{Game, TurnGroup};
use crate::geometry::{Direction, Point};
use crate::player::PlayerId;
use crate::render;
use crate::rules;
use crate::ship::{Ship, ShipRef};
use crate::snapshot::snapshot;

/// One candidate initial placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipRef,
    pub head: Point,
    pub direction: Direction,
}

impl Placement {
    fn command(&self) -> String {
        format!(
            "PLACE_SHIP {} {} {} {} {}",
            self.head.row, self.head.col, self.direction, self.ship.id, self.ship.class
        )
    }
}

fn print_state() -> [String; 3] {
    ["[state]".to_string(), "PRINT 0".to_string(), "[state]".to_string()]
}

/// Play the turn of the player due next in `game`.
///
/// The random source is seeded from the game's `SRAND` seed, or from
/// `default_seed` when none was given, so the transcript is reproducible.
pub fn play_turn(game: &Game, default_seed: u64) -> Result<Vec<String>, GameError> {
    let mut sandbox = game.clone();
    let me = sandbox.next_player;
    let mut rng = SmallRng::seed_from_u64(sandbox.seed.unwrap_or(default_seed));

    let mut out = snapshot(&sandbox);
    out.extend(print_state());
    let marker = TurnGroup::Player(me).marker();
    out.push(marker.clone());

    out.extend(place_fleet(&mut sandbox, me, &mut rng)?);
    if sandbox.all_ships_placed() {
        let shots = if sandbox.extended {
            fire_extended(&mut sandbox, me, &mut rng)?
        } else {
            fire_classic(&mut sandbox, me, &mut rng)?
        };
        out.extend(shots);
    } else {
        debug!("opponent fleet incomplete, player {} holds fire", me);
    }

    out.push(marker);
    out.extend(print_state());
    info!("automated turn for player {} emitted {} lines", me, out.len());
    Ok(out)
}

/// Draw an unplaced ship, a facing and a head inside the init zone.
/// `None` once the fleet is complete.
pub fn draw_placement<R: Rng + ?Sized>(
    game: &Game,
    me: PlayerId,
    rng: &mut R,
) -> Option<Placement> {
    let player = game.player(me);
    let ship = *player.unplaced().choose(rng)?;
    let direction = *Direction::ALL.choose(rng)?;
    let area = player.init_area.normalized();
    let head = Point::new(
        rng.random_range(area.start.row..=area.end.row),
        rng.random_range(area.start.col..=area.end.col),
    );
    Some(Placement {
        ship,
        head,
        direction,
    })
}

/// Place every remaining ship of `me` by reject-and-retry.
pub fn place_fleet<R: Rng + ?Sized>(
    game: &mut Game,
    me: PlayerId,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    let mut out = Vec::new();
    let mut attempts = 0;
    while let Some(p) = draw_placement(game, me, rng) {
        attempts += 1;
        if attempts > MAX_PLACEMENT_ATTEMPTS {
            return Err(GameError::AutomatedTurnStalled);
        }
        if rules::place_ship(game, me, p.ship.class, p.ship.id, p.head, p.direction).is_ok() {
            debug!("placed {:?} after {} draws", p.ship, attempts);
            out.push(p.command());
            attempts = 0;
        }
    }
    Ok(out)
}

/// Unhit enemy hull cells `me` can currently see.
fn visible_targets(game: &Game, me: PlayerId) -> Vec<Point> {
    game.player(me.other())
        .elements()
        .into_iter()
        .filter(|el| game.in_bounds(el.pos) && !game.is_hit(el))
        .filter(|el| render::is_visible_to(game, me, el.pos))
        .map(|el| el.pos)
        .collect()
}

/// Board cells not covered by `me`'s own hull that satisfy `keep`.
fn open_cells(game: &Game, me: PlayerId, keep: impl Fn(Point) -> bool) -> Vec<Point> {
    let own: Vec<Point> = game.player(me).elements().iter().map(|el| el.pos).collect();
    (0..game.rows)
        .flat_map(|row| (0..game.cols).map(move |col| Point::new(row, col)))
        .filter(|p| !own.contains(p) && keep(*p))
        .collect()
}

/// Classic rules: a single shot, at a visible enemy cell when there is one.
fn fire_classic<R: Rng + ?Sized>(
    game: &mut Game,
    me: PlayerId,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    if game.player(me).has_shot {
        debug!("player {} already fired this round", me);
        return Ok(Vec::new());
    }
    let target = match visible_targets(game, me).choose(rng) {
        Some(&p) => p,
        None => *open_cells(game, me, |_| true)
            .choose(rng)
            .ok_or(GameError::AutomatedTurnStalled)?,
    };
    rules::shoot_classic(game, me, target)?;
    Ok(vec![format!("SHOOT {} {}", target.row, target.col)])
}

/// Extended rules: every ship with a working cannon fires up to its size.
fn fire_extended<R: Rng + ?Sized>(
    game: &mut Game,
    me: PlayerId,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    let player = game.player(me);
    let gunners: Vec<ShipRef> = player
        .ships()
        .filter(|s| s.placed && !s.cannon_destroyed())
        .map(|s| player.ship_ref(s))
        .collect();

    let mut out = Vec::new();
    for this in gunners {
        loop {
            let ship: Ship = match game.ship(this) {
                Some(s) if s.shots_this_turn < s.size() => s.clone(),
                _ => break,
            };
            let in_range = |p: Point| rules::within_cannon_range(&ship, p);
            let mut targets = visible_targets(game, me);
            targets.retain(|p| in_range(*p));
            let target = match targets.choose(rng) {
                Some(&p) => p,
                None => match open_cells(game, me, in_range).choose(rng) {
                    Some(&p) => p,
                    None => break,
                },
            };
            rules::shoot_extended(game, this, target)?;
            out.push(format!(
                "SHOOT {} {} {} {}",
                this.id, this.class, target.row, target.col
            ));
        }
    }
    Ok(out)
}
