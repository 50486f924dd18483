//! # tabletop-robot
//!
//! An engine-agnostic simulation crate for the classic tabletop robot: a
//! single agent on a bounded 2-D grid, driven by a stream of textual commands
//! (`PLACE`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! It decouples the *command stream* (whatever produces the text: a console,
//! a file, a scripted scenario) from the *state machine* (the [`RobotBoard`]),
//! producing pose reports that can be consumed by CLIs, test harnesses, or
//! larger simulations.

pub mod board;
pub mod command;
pub mod pose;

pub use board::*;
pub use command::*;
pub use pose::*;
