//! Turtle state and frame operations for botanical interpretation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rotates `v` about the (normalized) `axis` by `angle_deg` degrees using
/// Rodrigues' rotation formula.
///
/// The formula preserves vector length, and applied identically to two
/// orthogonal vectors it preserves their mutual orthogonality up to
/// floating-point drift. No re-orthonormalization is performed anywhere in
/// the crate; accumulated error over very deep strings is an accepted
/// limitation.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle_deg: f32) -> Vec3 {
    let angle = angle_deg.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();
    let k = axis.normalize();

    v * cos_a + k.cross(v) * sin_a + k * k.dot(v) * (1.0 - cos_a)
}

/// The state of the drawing turtle.
///
/// Orientation is an orthonormal frame of three vectors (heading, left, up)
/// rather than a quaternion, following the H/L/U formalism of Prusinkiewicz &
/// Lindenmayer. `heading` is the forward movement axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the cursor.
    pub position: Vec3,

    /// H vector: direction of movement.
    pub heading: Vec3,

    /// L vector: perpendicular, pointing to the turtle's left.
    pub left: Vec3,

    /// U vector: perpendicular, pointing up from the turtle's back.
    pub up: Vec3,

    /// Current branch radius; the start radius of the next drawn segment.
    pub width: f32,

    /// Current draw color (RGB in `[0, 1]`).
    pub color: Vec3,

    /// Branching nesting depth. Incremented on push; bookkeeping only.
    pub depth: u32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::Y,
            left: Vec3::NEG_X,
            up: Vec3::Z,
            width: 0.02,
            color: Vec3::new(0.45, 0.30, 0.15),
            depth: 0,
        }
    }
}

impl TurtleState {
    /// Rotates the heading and left vectors about `axis` (yaw / turn-around).
    ///
    /// The axis is the turtle's own `up` in 3D mode and the fixed world +Z in
    /// 2D mode, which is why it is a parameter here rather than read from the
    /// frame.
    pub fn yaw(&mut self, axis: Vec3, angle_deg: f32) {
        self.heading = rotate_about_axis(self.heading, axis, angle_deg);
        self.left = rotate_about_axis(self.left, axis, angle_deg);
    }

    /// Rotates the heading and up vectors about the current left axis.
    pub fn pitch(&mut self, angle_deg: f32) {
        self.heading = rotate_about_axis(self.heading, self.left, angle_deg);
        self.up = rotate_about_axis(self.up, self.left, angle_deg);
    }

    /// Rotates the left and up vectors about the current heading axis.
    pub fn roll(&mut self, angle_deg: f32) {
        self.left = rotate_about_axis(self.left, self.heading, angle_deg);
        self.up = rotate_about_axis(self.up, self.heading, angle_deg);
    }
}

/// Operations decoded from L-System symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Advance and emit a branch segment (`F`, `G`, `A`, `B`).
    Draw,
    /// Advance without drawing (`f`).
    Move,
    /// Rotate about the yaw axis (`+`/`-`). Payload is the sign.
    Yaw(f32),
    /// Rotate about the left axis (`&`/`^`). 3D mode only.
    Pitch(f32),
    /// Rotate about the heading axis (`\` / `/`). 3D mode only.
    Roll(f32),
    /// Turn 180 degrees about the yaw axis (`|`).
    TurnAround,
    /// Save the full turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
    /// Place a leaf decal at the current position (`L`/`l`).
    Leaf,
    /// Place a flower decal at the current position (`K`/`k`).
    Flower,
    /// Multiply the current width by the decay factor (`!`).
    ShrinkWidth,
    /// Shift the current color toward green (`'`).
    ShiftColor,
    /// No-op: symbol has no graphical meaning (grammar non-terminals).
    Ignore,
}

impl TurtleOp {
    /// Decodes a single L-System symbol into its operation.
    ///
    /// Unrecognized symbols map to [`TurtleOp::Ignore`]: non-terminal
    /// placeholder symbols are expected in rewritten strings and carry no
    /// graphical meaning.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' | 'G' | 'A' | 'B' => Self::Draw,
            'f' => Self::Move,
            '+' => Self::Yaw(1.0),
            '-' => Self::Yaw(-1.0),
            '&' => Self::Pitch(1.0),
            '^' => Self::Pitch(-1.0),
            '\\' => Self::Roll(1.0),
            '/' => Self::Roll(-1.0),
            '|' => Self::TurnAround,
            '[' => Self::Push,
            ']' => Self::Pop,
            'L' | 'l' => Self::Leaf,
            'K' | 'k' => Self::Flower,
            '!' => Self::ShrinkWidth,
            '\'' => Self::ShiftColor,
            _ => Self::Ignore,
        }
    }
}
