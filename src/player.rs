//! Players and their fleets.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{CLASS_COUNT, DEFAULT_FLEET};
use crate::geometry::Rect;
use crate::ship::{Ship, ShipClass, ShipElement, ShipRef};

/// One of the two fixed seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            PlayerId::A => 'A',
            PlayerId::B => 'B',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(PlayerId::A),
            "B" => Ok(PlayerId::B),
            _ => Err(GameError::InvalidArguments),
        }
    }
}

/// A player's fleet, init zone and control flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    ships: [Vec<Ship>; CLASS_COUNT],
    pub init_area: Rect,
    pub automated: bool,
    /// Classic mode: fired since the opponent last fired.
    pub has_shot: bool,
}

impl Player {
    /// Player with the default fleet.
    pub fn new(id: PlayerId, init_area: Rect) -> Self {
        let mut player = Self {
            id,
            ships: Default::default(),
            init_area,
            automated: false,
            has_shot: false,
        };
        player.set_fleet(DEFAULT_FLEET);
        player
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Recreate every ship from per-class counts. Placement and damage of
    /// the previous fleet are discarded.
    pub fn set_fleet(&mut self, counts: [usize; CLASS_COUNT]) {
        for class in ShipClass::ALL {
            self.ships[class.index()] = (0..counts[class.index()])
                .map(|id| Ship::new(class, id))
                .collect();
        }
    }

    /// Ships per class.
    pub fn fleet(&self) -> [usize; CLASS_COUNT] {
        core::array::from_fn(|i| self.ships[i].len())
    }

    pub fn ship(&self, class: ShipClass, id: usize) -> Option<&Ship> {
        self.ships[class.index()].get(id)
    }

    pub fn ship_mut(&mut self, class: ShipClass, id: usize) -> Option<&mut Ship> {
        self.ships[class.index()].get_mut(id)
    }

    /// Every ship, class by class, ordinal order within a class.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ships_mut(&mut self) -> impl Iterator<Item = &mut Ship> {
        self.ships.iter_mut().flatten()
    }

    pub fn ship_ref(&self, ship: &Ship) -> ShipRef {
        ShipRef {
            owner: self.id,
            class: ship.class(),
            id: ship.id(),
        }
    }

    /// Hull cells of every placed ship.
    pub fn elements(&self) -> Vec<ShipElement> {
        self.ships()
            .filter(|s| s.placed)
            .flat_map(|ship| {
                let r = self.ship_ref(ship);
                ship.segments().map(move |(offset, pos)| ShipElement {
                    pos,
                    offset,
                    ship: r,
                })
            })
            .collect()
    }

    /// Ships still waiting for placement.
    pub fn unplaced(&self) -> Vec<ShipRef> {
        self.ships()
            .filter(|s| !s.placed)
            .map(|s| self.ship_ref(s))
            .collect()
    }

    pub fn all_placed(&self) -> bool {
        self.ships().all(|s| s.placed)
    }

    /// Undamaged hull segments over all placed ships.
    pub fn remaining_parts(&self) -> usize {
        self.ships()
            .filter(|s| s.placed)
            .map(Ship::intact_segments)
            .sum()
    }

    /// Clear movement and firing counters at the end of this player's turn.
    pub fn reset_turn(&mut self) {
        self.ships_mut().for_each(Ship::reset_turn);
    }
}
