//! Common types for the engine: rule/protocol errors and rejections.

use core::fmt;

/// Errors returned by command handlers and the group state machine.
///
/// `Display` yields the reason string written after a rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship ordinal is beyond the player's fleet count for that class.
    AllShipsOfClassSet,
    /// Ship is already on the board.
    ShipAlreadyPresent,
    /// Ship does not fit the player's init zone.
    NotInStartingPosition,
    /// Ship hull covers a reef.
    PlacingOnReef,
    /// Ship hull touches another ship (8-neighbourhood).
    TooCloseToOtherShip,
    /// Reef coordinates are off the board.
    ReefOffBoard,
    /// Classic mode: the player already fired this round.
    DoubleShooting,
    /// Firing before both fleets are fully placed.
    NotAllShipsPlaced,
    /// Target cell is off the board.
    FieldDoesNotExist,
    /// Engine segment is destroyed.
    ShipCannotMove,
    /// Movement budget used up this turn.
    ShipMovedAlready,
    /// Move would leave the board.
    ShipWentFromBoard,
    /// Cannon segment is destroyed.
    ShipCannotShoot,
    /// Ship used all its shots this turn.
    TooManyShoots,
    /// Target is outside cannon range.
    ShootingTooFar,
    /// Spy plane requested from a carrier that is not on the board.
    CarrierNotPlaced,
    /// Carrier cannon is destroyed so no plane can take off.
    CannotSendPlane,
    /// Every plane of the carrier is already aloft.
    AllPlanesSent,
    /// Ship ordinal does not exist in the fleet.
    NoSuchShip,
    /// Ship exists but has not been placed.
    ShipNotPlaced,
    /// Turn marker for the wrong player, or nested/mismatched group.
    OtherPlayerExpected,
    /// Marker names a group the protocol does not know.
    UnknownGroup,
    /// Missing or malformed command argument.
    InvalidArguments,
    /// Randomised search gave up without finding a legal decision.
    AutomatedTurnStalled,
}

impl GameError {
    /// Protocol reason string.
    pub const fn reason(&self) -> &'static str {
        match self {
            GameError::AllShipsOfClassSet => "ALL SHIPS OF THE CLASS ALREADY SET",
            GameError::ShipAlreadyPresent => "SHIP ALREADY PRESENT",
            GameError::NotInStartingPosition => "NOT IN STARTING POSITION",
            GameError::PlacingOnReef => "PLACING SHIP ON REEF",
            GameError::TooCloseToOtherShip => "PLACING SHIP TOO CLOSE TO OTHER SHIP",
            GameError::ReefOffBoard => "REEF IS NOT PLACED ON BOARD",
            GameError::DoubleShooting => "NO DOUBLE SHOOTING!",
            GameError::NotAllShipsPlaced => "NOT ALL SHIPS PLACED",
            GameError::FieldDoesNotExist => "FIELD DOES NOT EXIST",
            GameError::ShipCannotMove => "SHIP CANNOT MOVE",
            GameError::ShipMovedAlready => "SHIP MOVED ALREADY",
            GameError::ShipWentFromBoard => "SHIP WENT FROM BOARD",
            GameError::ShipCannotShoot => "SHIP CANNOT SHOOT",
            GameError::TooManyShoots => "TOO MANY SHOOTS",
            GameError::ShootingTooFar => "SHOOTING TOO FAR",
            GameError::CarrierNotPlaced => "CARRIER IS NOT PLACED",
            GameError::CannotSendPlane => "CANNOT SEND PLANE",
            GameError::AllPlanesSent => "ALL PLANES SENT",
            GameError::NoSuchShip => "SHIP DOES NOT EXIST",
            GameError::ShipNotPlaced => "SHIP NOT PLACED",
            GameError::OtherPlayerExpected => "THE OTHER PLAYER EXPECTED",
            GameError::UnknownGroup => "UNKNOWN GROUP",
            GameError::InvalidArguments => "INVALID ARGUMENTS",
            GameError::AutomatedTurnStalled => "AUTOMATED TURN STALLED",
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for GameError {}

/// A failed input line together with the reason it was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub echo: String,
    pub reason: GameError,
}

impl Rejection {
    pub fn new(echo: impl Into<String>, reason: GameError) -> Self {
        Self {
            echo: echo.into(),
            reason,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INVALID OPERATION \"{}\": {}", self.echo, self.reason)
    }
}

impl std::error::Error for Rejection {}
