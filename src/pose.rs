//! Robot pose state and grid geometry.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compass heading on the tabletop.
///
/// The robot always faces one of the four cardinal directions; headings are
/// discrete and there is no in-between state while turning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Every orientation, in no particular order.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Parses a canonical orientation token (`"NORTH"`, `"SOUTH"`, `"EAST"`,
    /// `"WEST"`). Tokens are case-sensitive; anything else yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NORTH" => Some(Self::North),
            "SOUTH" => Some(Self::South),
            "EAST" => Some(Self::East),
            "WEST" => Some(Self::West),
            _ => None,
        }
    }

    /// The canonical name used in command text and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
        }
    }

    /// Unit step vector for one forward move while facing `self`.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }

    /// The heading after a 90° counterclockwise turn.
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a 90° clockwise turn. Inverse of
    /// [`turned_left`](Self::turned_left).
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full pose of a placed robot: grid cell plus heading.
///
/// A pose by itself is just a value; whether it is *valid* depends on the
/// [`GridBounds`] of the board it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Grid cell the robot occupies.
    pub position: IVec2,

    /// Direction the robot is facing.
    pub orientation: Orientation,
}

impl Pose {
    /// Creates a pose from raw coordinates and a heading.
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    /// The pose one forward step ahead. The result may lie outside any given
    /// board; callers bounds-check before committing it.
    pub fn stepped(self) -> Self {
        Self {
            position: self.position + self.orientation.step(),
            ..self
        }
    }

    /// The same cell, turned 90° counterclockwise.
    pub fn turned_left(self) -> Self {
        Self {
            orientation: self.orientation.turned_left(),
            ..self
        }
    }

    /// The same cell, turned 90° clockwise.
    pub fn turned_right(self) -> Self {
        Self {
            orientation: self.orientation.turned_right(),
            ..self
        }
    }
}

impl fmt::Display for Pose {
    /// Renders the report form `x,y,ORIENTATION`, e.g. `1,2,EAST`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.position.x, self.position.y, self.orientation
        )
    }
}

/// The fixed extent of the tabletop, set once at board construction.
///
/// Valid positions span the half-open ranges `0..width` on X and `0..height`
/// on Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    extent: IVec2,
}

impl GridBounds {
    /// Creates bounds for a `width` × `height` grid.
    ///
    /// Both dimensions are expected to be positive; non-positive values are
    /// not rejected but leave no cell for the robot to stand on.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            extent: IVec2::new(width, height),
        }
    }

    /// Number of columns (valid X range is `0..width`).
    pub fn width(self) -> i32 {
        self.extent.x
    }

    /// Number of rows (valid Y range is `0..height`).
    pub fn height(self) -> i32 {
        self.extent.y
    }

    /// Whether `position` lies on the grid.
    pub fn contains(self, position: IVec2) -> bool {
        (0..self.extent.x).contains(&position.x) && (0..self.extent.y).contains(&position.y)
    }
}

impl Default for GridBounds {
    /// The classic 5×5 tabletop.
    fn default() -> Self {
        Self::new(5, 5)
    }
}
