//! The authoritative game aggregate.

use crate::config::{
    DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS, DEFAULT_INIT_AREA_A, DEFAULT_INIT_AREA_B,
};
use crate::geometry::{Point, Rect};
use crate::player::{Player, PlayerId};
use crate::ship::{Ship, ShipElement, ShipRef};

/// Group currently bracketing the command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnGroup {
    State,
    Player(PlayerId),
}

impl TurnGroup {
    /// Resolve a marker name (`state`, `playerA`, `playerB`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "state" => Some(TurnGroup::State),
            "playerA" => Some(TurnGroup::Player(PlayerId::A)),
            "playerB" => Some(TurnGroup::Player(PlayerId::B)),
            _ => None,
        }
    }

    pub fn marker(&self) -> String {
        match self {
            TurnGroup::State => "[state]".to_string(),
            TurnGroup::Player(p) => format!("[player{}]", p),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    /// Stopped by a rejected command or protocol violation.
    Aborted,
    /// The automated player took its turn, which ends the run.
    Handed,
}

/// Two players, the board and everything the protocol can configure.
///
/// Cloning yields a fully independent copy, which is what the automated
/// player uses as its sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: [Player; 2],
    pub rows: i32,
    pub cols: i32,
    pub reefs: Vec<Point>,
    pub extended: bool,
    pub next_player: PlayerId,
    pub open_group: Option<TurnGroup>,
    pub status: GameStatus,
    pub seed: Option<u64>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(PlayerId::A, DEFAULT_INIT_AREA_A),
                Player::new(PlayerId::B, DEFAULT_INIT_AREA_B),
            ],
            rows: DEFAULT_BOARD_ROWS,
            cols: DEFAULT_BOARD_COLS,
            reefs: Vec::new(),
            extended: false,
            next_player: PlayerId::A,
            open_group: None,
            status: GameStatus::InProgress,
            seed: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn ship(&self, r: ShipRef) -> Option<&Ship> {
        self.player(r.owner).ship(r.class, r.id)
    }

    pub fn ship_mut(&mut self, r: ShipRef) -> Option<&mut Ship> {
        self.player_mut(r.owner).ship_mut(r.class, r.id)
    }

    pub fn is_terminated(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Whole board as a rectangle.
    pub fn board_rect(&self) -> Rect {
        Rect::new(Point::new(0, 0), Point::new(self.rows - 1, self.cols - 1))
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        self.board_rect().contains(p)
    }

    /// Hull cells of both fleets, player A first.
    pub fn elements(&self) -> Vec<ShipElement> {
        PlayerId::ALL
            .into_iter()
            .flat_map(|id| self.player(id).elements())
            .collect()
    }

    /// First hull cell found at `p`.
    pub fn element_at(&self, p: Point) -> Option<ShipElement> {
        self.elements().into_iter().find(|el| el.pos == p)
    }

    pub fn is_hit(&self, el: &ShipElement) -> bool {
        self.ship(el.ship)
            .map(|s| s.damage.is_hit(el.offset))
            .unwrap_or(false)
    }

    /// Both fleets completely on the board.
    pub fn all_ships_placed(&self) -> bool {
        self.players.iter().all(Player::all_placed)
    }

    /// Apply a shot at `target`, returning the struck element if any.
    pub fn strike(&mut self, target: Point) -> Option<ShipElement> {
        let el = self.element_at(target)?;
        if let Some(ship) = self.ship_mut(el.ship) {
            ship.damage.hit(el.offset);
        }
        Some(el)
    }
}

/// End-of-run summary, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub status: &'static str,
    pub winner: Option<char>,
    pub parts_remaining: [usize; 2],
    pub extended: bool,
    pub reefs: usize,
}

impl Game {
    pub fn summary(&self) -> GameSummary {
        let (status, winner) = match self.status {
            GameStatus::InProgress => ("in_progress", None),
            GameStatus::Won(p) => ("won", Some(p.letter())),
            GameStatus::Aborted => ("aborted", None),
            GameStatus::Handed => ("automated_turn", None),
        };
        GameSummary {
            status,
            winner,
            parts_remaining: PlayerId::ALL.map(|id| self.player(id).remaining_parts()),
            extended: self.extended,
            reefs: self.reefs.len(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
