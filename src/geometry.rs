//! Board geometry: points, inclusive rectangles, compass directions.
//!
//! Rows grow downwards and columns grow to the right. Nothing here knows
//! about ships or players.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;

/// A board cell addressed by (row, column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by a row/column delta, clamping at the `i32` limits.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Squared euclidean distance to `other`, saturating at `i64::MAX`.
    pub fn dist_sq(self, other: Point) -> i64 {
        let dr = i64::from(self.row) - i64::from(other.row);
        let dc = i64::from(self.col) - i64::from(other.col);
        dr.saturating_mul(dr).saturating_add(dc.saturating_mul(dc))
    }

    /// `true` when `other` lies within a circle of radius `range` (inclusive).
    pub fn in_range(self, other: Point, range: i32) -> bool {
        let r = i64::from(range);
        self.dist_sq(other) <= r * r
    }

    /// Chebyshev distance to `other`.
    pub fn chebyshev(self, other: Point) -> i64 {
        let dr = i64::from(self.row) - i64::from(other.row);
        let dc = i64::from(self.col) - i64::from(other.col);
        dr.abs().max(dc.abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Inclusive rectangle between two corners.
///
/// Corners are stored as given; `start` is not forced to be the low corner.
/// A rectangle whose start lies past its end contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub start: Point,
    pub end: Point,
}

impl Rect {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Smallest rectangle covering both points, low corner first.
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::new(
            Point::new(a.row.min(b.row), a.col.min(b.col)),
            Point::new(a.row.max(b.row), a.col.max(b.col)),
        )
    }

    /// Same area with the corners reordered low-to-high.
    pub fn normalized(self) -> Self {
        Self::spanning(self.start, self.end)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= self.start.row
            && p.row <= self.end.row
            && p.col >= self.start.col
            && p.col <= self.end.col
    }

    /// `true` when both corners of `other` lie inside `self`.
    pub fn encloses(&self, other: &Rect) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Grow by `by` cells on every side.
    pub fn expanded(self, by: i32) -> Self {
        Self::new(self.start.offset(-by, -by), self.end.offset(by, by))
    }
}

/// Compass facing of a ship. The hull trails behind the head, away from
/// the facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::N, Direction::W, Direction::S, Direction::E];

    /// Step from one hull segment to the next one towards the stern.
    pub const fn stern_step(self) -> (i32, i32) {
        match self {
            Direction::N => (1, 0),
            Direction::S => (-1, 0),
            Direction::E => (0, -1),
            Direction::W => (0, 1),
        }
    }

    pub const fn left(self) -> Self {
        match self {
            Direction::N => Direction::W,
            Direction::W => Direction::S,
            Direction::S => Direction::E,
            Direction::E => Direction::N,
        }
    }

    pub const fn right(self) -> Self {
        match self {
            Direction::N => Direction::E,
            Direction::E => Direction::S,
            Direction::S => Direction::W,
            Direction::W => Direction::N,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Direction::N => 'N',
            Direction::S => 'S',
            Direction::E => 'E',
            Direction::W => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::N),
            "S" => Ok(Direction::S),
            "E" => Ok(Direction::E),
            "W" => Ok(Direction::W),
            _ => Err(GameError::InvalidArguments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.left().right(), d);
            assert_eq!(d.right().right().right().right(), d);
        }
    }

    #[test]
    fn range_is_inclusive() {
        let a = Point::new(0, 0);
        assert!(a.in_range(Point::new(3, 4), 5));
        assert!(!a.in_range(Point::new(3, 5), 5));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let low = Point::new(i32::MIN, i32::MIN);
        let high = Point::new(i32::MAX, i32::MAX);
        assert_eq!(low.dist_sq(high), i64::MAX);
        assert!(!low.in_range(high, 5));
        assert_eq!(low.chebyshev(high), i64::from(i32::MAX) - i64::from(i32::MIN));
        assert_eq!(high.offset(1, -1), Point::new(i32::MAX, i32::MAX - 1));
        assert_eq!(low.offset(-1, 0), low);
        let r = Rect::new(low, high).expanded(1);
        assert_eq!(r, Rect::new(low, high));
    }

    #[test]
    fn inverted_rect_is_empty() {
        let r = Rect::new(Point::new(5, 5), Point::new(0, 0));
        assert!(!r.contains(Point::new(2, 2)));
        assert!(r.normalized().contains(Point::new(2, 2)));
    }
}
