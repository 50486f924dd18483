//! The robot's command vocabulary and its textual grammar.

use crate::pose::{Orientation, Pose};
use serde::{Deserialize, Serialize};

/// A single robot command, parsed from its textual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot at a pose (`PLACE x,y,ORIENTATION`). The board discards
    /// the command when the target cell is off the grid.
    Place(Pose),
    /// Advance one cell in the facing direction (`MOVE`).
    Move,
    /// Turn 90° counterclockwise in place (`LEFT`).
    Left,
    /// Turn 90° clockwise in place (`RIGHT`).
    Right,
    /// Write the current pose to the board's report sink (`REPORT`).
    Report,
}

impl Command {
    /// Parses one whitespace-delimited command line.
    ///
    /// The first token is the verb. `PLACE` additionally takes its
    /// `x,y,ORIENTATION` payload as the second token; the bare verbs ignore
    /// any trailing tokens. Unknown verbs and malformed `PLACE` payloads
    /// parse to `None`; commands are dropped one at a time, never raised as
    /// errors.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        match tokens.next()? {
            "PLACE" => Self::parse_place(tokens.next()?),
            "MOVE" => Some(Self::Move),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "REPORT" => Some(Self::Report),
            _ => None,
        }
    }

    /// Parses a `PLACE` payload: exactly three comma-separated fields, with
    /// `x` and `y` as base-10 integers and a canonical orientation name.
    ///
    /// Coordinates may be negative; whether they land on the board is the
    /// board's bounds check, not the grammar's.
    fn parse_place(payload: &str) -> Option<Self> {
        let mut fields = payload.split(',');
        let (x, y, orientation) = (fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        Some(Self::Place(Pose::new(
            x.parse().ok()?,
            y.parse().ok()?,
            Orientation::from_token(orientation)?,
        )))
    }
}
