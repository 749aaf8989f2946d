//! Ship definitions: classes, hull damage, derived hull elements.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{CARRIER_MAX_MOVES, SHIP_MAX_MOVES};
use crate::geometry::{Direction, Point, Rect};
use crate::player::PlayerId;

/// Longest hull of any class.
pub const MAX_SHIP_SIZE: usize = 5;

/// Class of ship: fixes its length and movement budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Destroyer,
}

impl ShipClass {
    pub const ALL: [ShipClass; 4] = [
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
    ];

    /// Position in per-class tables.
    pub const fn index(self) -> usize {
        match self {
            ShipClass::Carrier => 0,
            ShipClass::Battleship => 1,
            ShipClass::Cruiser => 2,
            ShipClass::Destroyer => 3,
        }
    }

    /// Hull length.
    pub const fn size(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Protocol token (`CAR`, `BAT`, `CRU`, `DES`).
    pub const fn token(self) -> &'static str {
        match self {
            ShipClass::Carrier => "CAR",
            ShipClass::Battleship => "BAT",
            ShipClass::Cruiser => "CRU",
            ShipClass::Destroyer => "DES",
        }
    }

    pub const fn max_moves(self) -> u8 {
        match self {
            ShipClass::Carrier => CARRIER_MAX_MOVES,
            _ => SHIP_MAX_MOVES,
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ShipClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipClass::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or(GameError::InvalidArguments)
    }
}

/// Hull damage as a bitmask: bit `i` set means segment `i` is hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HullDamage {
    bits: u8,
}

impl HullDamage {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn is_hit(&self, offset: usize) -> bool {
        offset < MAX_SHIP_SIZE && self.bits & (1 << offset) != 0
    }

    /// Mark segment `offset` hit. Offsets beyond the longest hull are ignored.
    pub fn hit(&mut self, offset: usize) {
        if offset < MAX_SHIP_SIZE {
            self.bits |= 1 << offset;
        }
    }

    /// Number of segments hit.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn raw(&self) -> u8 {
        self.bits
    }

    /// Parse the snapshot form: one character per segment, `1` intact and
    /// `0` hit. The string must cover exactly `size` segments.
    pub fn from_mask_str(mask: &str, size: usize) -> Result<Self, GameError> {
        if mask.len() != size || size > MAX_SHIP_SIZE {
            return Err(GameError::InvalidArguments);
        }
        let mut damage = Self::new();
        for (offset, ch) in mask.chars().enumerate() {
            match ch {
                '1' => {}
                '0' => damage.hit(offset),
                _ => return Err(GameError::InvalidArguments),
            }
        }
        Ok(damage)
    }

    /// Snapshot form, inverse of [`HullDamage::from_mask_str`].
    pub fn to_mask_string(&self, size: usize) -> String {
        (0..size)
            .map(|offset| if self.is_hit(offset) { '0' } else { '1' })
            .collect()
    }
}

/// Stable handle to a ship: owner, class and per-class ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipRef {
    pub owner: PlayerId,
    pub class: ShipClass,
    pub id: usize,
}

/// One occupied cell of a placed ship, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipElement {
    pub pos: Point,
    /// Distance from the head, 0 is the sensor.
    pub offset: usize,
    pub ship: ShipRef,
}

/// How a ship changes position in one `MOVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Forward,
    Left,
    Right,
}

impl FromStr for MoveKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(MoveKind::Forward),
            "L" => Ok(MoveKind::Left),
            "R" => Ok(MoveKind::Right),
            _ => Err(GameError::InvalidArguments),
        }
    }
}

/// A single ship of a player's fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    id: usize,
    pub head: Point,
    pub direction: Direction,
    pub placed: bool,
    pub damage: HullDamage,
    pub times_moved: u8,
    pub shots_this_turn: usize,
    pub spy_planes: Vec<Point>,
}

impl Ship {
    /// Fresh, unplaced ship.
    pub fn new(class: ShipClass, id: usize) -> Self {
        Self {
            class,
            id,
            head: Point::new(-1, -1),
            direction: Direction::N,
            placed: false,
            damage: HullDamage::new(),
            times_moved: 0,
            shots_this_turn: 0,
            spy_planes: Vec::new(),
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    /// Cell of segment `offset` counted from the head.
    pub fn segment(&self, offset: usize) -> Point {
        let (dr, dc) = self.direction.stern_step();
        let k = offset as i32;
        self.head.offset(dr * k, dc * k)
    }

    /// All hull cells with their offsets, head first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        (0..self.size()).map(move |offset| (offset, self.segment(offset)))
    }

    pub fn stern(&self) -> Point {
        self.segment(self.size() - 1)
    }

    /// Cannon cell, used as the origin of firing range.
    pub fn cannon(&self) -> Point {
        self.segment(1)
    }

    /// Area covered by the hull.
    pub fn rect(&self) -> Rect {
        Rect::spanning(self.head, self.stern())
    }

    pub fn sensor_destroyed(&self) -> bool {
        self.damage.is_hit(0)
    }

    pub fn cannon_destroyed(&self) -> bool {
        self.damage.is_hit(1)
    }

    pub fn engine_destroyed(&self) -> bool {
        self.damage.is_hit(self.size() - 1)
    }

    /// Squared radar radius around the head. A hit sensor shrinks it to 1.
    pub fn radar_range_sq(&self) -> i64 {
        if self.sensor_destroyed() {
            1
        } else {
            let s = self.size() as i64;
            s * s
        }
    }

    /// Undamaged hull segments.
    pub fn intact_segments(&self) -> usize {
        self.size() - self.damage.count()
    }

    /// Head and facing after one move, without validating it.
    ///
    /// Turning pivots so that the stern lands on the cell just ahead of the
    /// old head.
    pub fn moved(&self, kind: MoveKind) -> (Point, Direction) {
        let (dr, dc) = self.direction.stern_step();
        let ahead = self.head.offset(-dr, -dc);
        let arm = self.size() as i32 - 1;
        match kind {
            MoveKind::Forward => (ahead, self.direction),
            MoveKind::Left => (ahead.offset(arm * dc, -arm * dr), self.direction.left()),
            MoveKind::Right => (ahead.offset(arm * dc, arm * dr), self.direction.right()),
        }
    }

    /// Clear the per-turn counters.
    pub fn reset_turn(&mut self) {
        self.times_moved = 0;
        self.shots_this_turn = 0;
    }
}
