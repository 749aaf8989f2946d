use crate::geometry::{Point, Rect};

/// Number of ship classes (Carrier, Battleship, Cruiser, Destroyer).
pub const CLASS_COUNT: usize = 4;

/// Ships per class handed to each player until `SET_FLEET` says otherwise.
pub const DEFAULT_FLEET: [usize; CLASS_COUNT] = [1, 2, 3, 4];

/// Largest ship count `SET_FLEET` accepts for one class.
pub const MAX_SHIPS_PER_CLASS: usize = 10;

/// Largest row or column count `BOARD_SIZE` accepts.
pub const MAX_BOARD_DIM: i32 = 1_000;

pub const DEFAULT_BOARD_ROWS: i32 = 21;
pub const DEFAULT_BOARD_COLS: i32 = 10;

pub const DEFAULT_INIT_AREA_A: Rect = Rect::new(Point::new(0, 0), Point::new(9, 9));
pub const DEFAULT_INIT_AREA_B: Rect = Rect::new(Point::new(11, 0), Point::new(20, 9));

/// Moves per turn for a carrier.
pub const CARRIER_MAX_MOVES: u8 = 2;
/// Moves per turn for every other class.
pub const SHIP_MAX_MOVES: u8 = 3;

/// Spy planes a carrier can have aloft.
pub const MAX_SPY_PLANES: usize = 5;

/// Upper bound on reject-and-retry draws while placing one ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Seed used by the automated player when the stream never sent `SRAND`.
pub const DEFAULT_SEED: u64 = 0;
