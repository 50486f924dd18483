//! Board state machine that drives a robot over a bounded grid.
//!
//! The entry point is [`RobotBoard`]. Construct it with [`RobotBoard::new`]
//! (or [`RobotBoard::with_sink`] to capture `REPORT` output), then feed it
//! command text via [`RobotBoard::execute`] or loosely-typed scripts via
//! [`RobotBoard::execute_json`], and read the pose back with
//! [`RobotBoard::report`].

use crate::command::Command;
use crate::pose::{GridBounds, Pose};
use serde_json::Value;
use std::io::{self, Write};
use thiserror::Error;

/// Error raised when a JSON script value has the wrong shape entirely.
///
/// This is the only condition [`RobotBoard::execute_json`] surfaces. Every
/// content-level problem (unknown verb, malformed payload, off-grid target)
/// is dropped one command at a time instead, with the rest of the script
/// still running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The script was neither a command string nor an array of command
    /// strings.
    #[error("script must be a command string or an array of command strings, found {found}")]
    InvalidInputKind {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// A single robot confined to a bounded grid, driven by textual commands.
///
/// The board owns the grid bounds (fixed for its lifetime) and the robot's
/// pose. The robot starts off-board: `MOVE`, `LEFT`, `RIGHT`, and `REPORT`
/// are inert until the first `PLACE` lands on the grid. Every transition is
/// validated before it is committed, so a placed robot can never be observed
/// at an off-grid cell.
///
/// `REPORT` commands write one `x,y,ORIENTATION` line to the board's sink
/// (standard output by default). The board is single-owner state; share one
/// per agent, never across threads without external locking.
#[derive(Debug)]
pub struct RobotBoard<W: Write = io::Stdout> {
    bounds: GridBounds,
    pose: Option<Pose>,
    sink: W,
}

impl RobotBoard {
    /// Creates a `width` × `height` board reporting to standard output.
    ///
    /// Both dimensions are expected to be positive (caller precondition, not
    /// validated). Valid cells span `0..width` on X and `0..height` on Y.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_sink(GridBounds::new(width, height), io::stdout())
    }
}

impl Default for RobotBoard {
    /// The classic 5×5 tabletop, reporting to standard output.
    fn default() -> Self {
        Self::with_sink(GridBounds::default(), io::stdout())
    }
}

impl<W: Write> RobotBoard<W> {
    /// Creates a board that writes `REPORT` lines to `sink` instead of
    /// standard output. Tests typically pass a `Vec<u8>` and read it back
    /// with [`into_sink`](Self::into_sink).
    pub fn with_sink(bounds: GridBounds, sink: W) -> Self {
        Self {
            bounds,
            pose: None,
            sink,
        }
    }

    /// The grid bounds this board was constructed with.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// The current pose, or `None` while the robot has never been placed.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Renders the current pose as `x,y,ORIENTATION`, or `None` while the
    /// robot has never been placed.
    ///
    /// Pure read: unlike the `REPORT` command this writes nothing to the
    /// sink.
    pub fn report(&self) -> Option<String> {
        self.pose.map(|pose| pose.to_string())
    }

    /// Runs every line of a script in order.
    ///
    /// Lines that fail to parse are dropped individually; a dropped line
    /// never aborts the rest of the script.
    pub fn execute<I, S>(&mut self, script: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in script {
            self.execute_line(line.as_ref());
        }
    }

    /// Runs a single command line, dropping it silently if it fails to
    /// parse.
    pub fn execute_line(&mut self, line: &str) {
        if let Some(command) = Command::parse(line) {
            self.apply(command);
        }
    }

    /// Runs a script supplied as loosely-typed JSON, as found in scenario
    /// files where a step may be one command or many.
    ///
    /// Accepts `null` (no effect, no error), a single command string, or an
    /// array of command strings. Any other shape, including an array with a
    /// non-string element, fails with [`ScriptError::InvalidInputKind`]
    /// *before* any command is applied, so a rejected script leaves the
    /// board untouched.
    pub fn execute_json(&mut self, script: &Value) -> Result<(), ScriptError> {
        match script {
            Value::Null => Ok(()),
            Value::String(line) => {
                self.execute_line(line);
                Ok(())
            }
            Value::Array(items) => {
                let mut lines = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(line) => lines.push(line.as_str()),
                        other => {
                            return Err(ScriptError::InvalidInputKind {
                                found: json_kind(other),
                            });
                        }
                    }
                }
                self.execute(lines);
                Ok(())
            }
            other => Err(ScriptError::InvalidInputKind {
                found: json_kind(other),
            }),
        }
    }

    /// Applies one parsed command to the board.
    ///
    /// # Placement
    ///
    /// `Place` commits its pose only when the target cell is on the grid;
    /// an off-grid `PLACE` is discarded whole, with no partial mutation.
    /// Re-placing an already placed robot is allowed.
    ///
    /// # Motion
    ///
    /// `Move` computes the candidate cell one step ahead of the current
    /// heading and commits it only when it is still on the grid; at a wall
    /// the command is a no-op. `Left` and `Right` rotate in place through
    /// the fixed cycle NORTH→WEST→SOUTH→EAST (counterclockwise) and its
    /// reverse; position is untouched, so once placed they always succeed.
    /// All three are inert while the robot is unplaced.
    ///
    /// # Report
    ///
    /// `Report` writes the pose line to the sink while placed and is silent
    /// otherwise. A failed sink write drops the line; the command stream
    /// keeps going.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Place(pose) => {
                if self.bounds.contains(pose.position) {
                    self.pose = Some(pose);
                }
            }
            Command::Move => {
                if let Some(pose) = self.pose {
                    let next = pose.stepped();
                    if self.bounds.contains(next.position) {
                        self.pose = Some(next);
                    }
                }
            }
            Command::Left => {
                if let Some(pose) = &mut self.pose {
                    *pose = pose.turned_left();
                }
            }
            Command::Right => {
                if let Some(pose) = &mut self.pose {
                    *pose = pose.turned_right();
                }
            }
            Command::Report => {
                if let Some(pose) = self.pose {
                    let _ = writeln!(self.sink, "{pose}");
                }
            }
        }
    }

    /// Consumes the board and returns the report sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
