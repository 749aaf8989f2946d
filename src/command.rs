//! Tokenized protocol lines.
//!
//! A line is either a group marker `[name]` or a command `NAME arg1 arg2 ...`.
//! Arguments are kept as strings and converted on demand by the typed
//! accessors, which report `INVALID ARGUMENTS` on anything malformed.

use core::str::FromStr;

use crate::common::GameError;
use crate::geometry::{Direction, Point};
use crate::player::PlayerId;
use crate::ship::{MoveKind, ShipClass};

/// One input line after tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `[name]`; `raw` is the trimmed line as received.
    Marker { name: String, raw: String },
    Command(Command),
    Blank,
}

impl Line {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }
        if let Some(rest) = trimmed.strip_prefix('[') {
            let name = rest.split(']').next().unwrap_or_default();
            return Line::Marker {
                name: name.to_string(),
                raw: trimmed.to_string(),
            };
        }
        let mut tokens = trimmed.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        Line::Command(Command {
            name,
            args: tokens.collect(),
        })
    }
}

/// A command name with its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command as echoed in error lines.
    pub fn echo(&self) -> String {
        core::iter::once(self.name.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn arg(&self, i: usize) -> Result<&str, GameError> {
        self.args
            .get(i)
            .map(String::as_str)
            .ok_or(GameError::InvalidArguments)
    }

    /// Parse argument `i` with its `FromStr` impl.
    pub fn parse_arg<T: FromStr>(&self, i: usize) -> Result<T, GameError> {
        self.arg(i)?
            .parse()
            .map_err(|_| GameError::InvalidArguments)
    }

    pub fn int(&self, i: usize) -> Result<i32, GameError> {
        self.parse_arg(i)
    }

    pub fn count(&self, i: usize) -> Result<usize, GameError> {
        self.parse_arg(i)
    }

    /// Arguments `i` and `i + 1` as (row, column).
    pub fn point(&self, i: usize) -> Result<Point, GameError> {
        Ok(Point::new(self.int(i)?, self.int(i + 1)?))
    }

    pub fn player(&self, i: usize) -> Result<PlayerId, GameError> {
        self.parse_arg(i)
    }

    pub fn class(&self, i: usize) -> Result<ShipClass, GameError> {
        self.parse_arg(i)
    }

    pub fn direction(&self, i: usize) -> Result<Direction, GameError> {
        self.parse_arg(i)
    }

    pub fn move_kind(&self, i: usize) -> Result<MoveKind, GameError> {
        self.parse_arg(i)
    }

    pub fn print_mode(&self, i: usize) -> Result<PrintMode, GameError> {
        match self.arg(i)? {
            "0" => Ok(PrintMode::Plain),
            "1" => Ok(PrintMode::Detailed),
            _ => Err(GameError::InvalidArguments),
        }
    }
}

/// Board print style selected by `PRINT <0|1>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Bare grid, every hull cell `+`.
    Plain,
    /// Numbered grid, sensor/cannon/engine cells told apart.
    Detailed,
}
