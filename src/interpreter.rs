//! Interpreter that converts an L-System symbol string into a [`PlantGeometry`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::interpret`] with the
//! expanded string and a rotation angle. The generated geometry is retained
//! (and inspectable through the statistics accessors) until the next
//! `interpret` call rebuilds it from scratch.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::{decal_orientation, Branch, Decoration, DecorationKind, PlantGeometry};
use crate::turtle::{TurtleOp, TurtleState};

/// Yaw axis in 2D mode: all rotation happens in the XY plane.
const PLANAR_YAW_AXIS: Vec3 = Vec3::Z;

/// How the consumer intends to draw branches.
///
/// A presentation choice carried through to the renderer; interpretation
/// itself is identical in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Plain line segments (fast, works everywhere).
    #[default]
    Lines,
    /// Instanced tapered cylinders (realistic 3D branches).
    Cylinders,
}

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Distance advanced per draw/move command.
    pub step_size: f32,

    /// Branch radius at the root of the plant.
    pub initial_width: f32,

    /// Multiplicative shrink factor applied at each push and each `!`.
    pub width_decay: f32,

    /// Scale factor for leaf decals. Flowers use 1.5x this value.
    pub leaf_size: f32,

    /// Color for branch segments.
    pub branch_color: Vec3,

    /// Color for leaf decals.
    pub leaf_color: Vec3,

    /// Color for flower decals.
    pub flower_color: Vec3,

    /// When false, yaw rotates about the fixed world +Z axis and pitch/roll
    /// are disabled, constraining the plant to a plane.
    pub three_d: bool,

    /// Presentation hint for the rendering layer.
    pub render_mode: RenderMode,
}

impl TurtleConfig {
    pub const DEFAULT: Self = Self {
        step_size: 0.08,
        initial_width: 0.02,
        width_decay: 0.7,
        leaf_size: 0.08,
        branch_color: Vec3::new(0.4, 0.25, 0.1),
        leaf_color: Vec3::new(0.15, 0.55, 0.15),
        flower_color: Vec3::new(1.0, 0.45, 0.7),
        three_d: false,
        render_mode: RenderMode::Lines,
    };
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Interprets L-System output to build plant geometry.
///
/// This is a straight-line, single-pass state machine: each symbol is
/// processed exactly once in string order, with side effects limited to
/// current-state mutation and geometry appends. Branching uses an explicit
/// stack of state snapshots; `]` with an empty stack is a no-op, so
/// unbalanced grammars still render something.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
    state: TurtleState,
    stack: Vec<TurtleState>,
    geometry: PlantGeometry,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Mutable access to the configuration. Takes effect on the next
    /// [`interpret`](Self::interpret) call.
    pub fn config_mut(&mut self) -> &mut TurtleConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: TurtleConfig) {
        self.config = config;
    }

    /// Interprets `symbols` and returns the resulting geometry.
    ///
    /// Resets the turtle to the canonical frame (origin, heading +Y, left
    /// −X, up +Z) with the configured initial width and branch color, clears
    /// the stack and any previous geometry, then processes every symbol to
    /// completion. `angle_deg` is the rotation increment for all yaw, pitch,
    /// and roll commands, normally taken from [`LSystem::angle`].
    ///
    /// [`LSystem::angle`]: crate::grammar::LSystem::angle
    pub fn interpret(&mut self, symbols: &str, angle_deg: f32) -> &PlantGeometry {
        self.state = TurtleState {
            width: self.config.initial_width,
            color: self.config.branch_color,
            ..Default::default()
        };
        self.stack.clear();
        self.geometry.clear();

        for symbol in symbols.chars() {
            self.process(TurtleOp::from_symbol(symbol), angle_deg);
        }

        log::info!(
            "interpreted {} symbols: {} branches, {} decorations",
            symbols.len(),
            self.geometry.branch_count(),
            self.geometry.decoration_count()
        );

        &self.geometry
    }

    /// The geometry from the most recent [`interpret`](Self::interpret) run.
    pub fn geometry(&self) -> &PlantGeometry {
        &self.geometry
    }

    pub fn branch_count(&self) -> usize {
        self.geometry.branch_count()
    }

    pub fn decoration_count(&self) -> usize {
        self.geometry.decoration_count()
    }

    fn yaw_axis(&self) -> Vec3 {
        if self.config.three_d {
            self.state.up
        } else {
            PLANAR_YAW_AXIS
        }
    }

    fn process(&mut self, op: TurtleOp, angle_deg: f32) {
        match op {
            TurtleOp::Draw => {
                let end = self.state.position + self.state.heading * self.config.step_size;
                self.geometry.add_branch(Branch {
                    start: self.state.position,
                    end,
                    radius_start: self.state.width,
                    radius_end: self.state.width * self.config.width_decay,
                    color: self.state.color,
                });
                self.state.position = end;
            }

            TurtleOp::Move => {
                self.state.position += self.state.heading * self.config.step_size;
            }

            TurtleOp::Yaw(sign) => {
                let axis = self.yaw_axis();
                self.state.yaw(axis, angle_deg * sign);
            }

            TurtleOp::Pitch(sign) => {
                // Pitch is undefined without a third free axis.
                if self.config.three_d {
                    self.state.pitch(angle_deg * sign);
                }
            }

            TurtleOp::Roll(sign) => {
                if self.config.three_d {
                    self.state.roll(angle_deg * sign);
                }
            }

            TurtleOp::TurnAround => {
                let axis = self.yaw_axis();
                self.state.yaw(axis, 180.0);
            }

            TurtleOp::Push => {
                self.stack.push(self.state.clone());
                self.state.depth += 1;
                self.state.width *= self.config.width_decay;
            }

            TurtleOp::Pop => {
                if let Some(saved) = self.stack.pop() {
                    self.state = saved;
                }
            }

            TurtleOp::Leaf => {
                self.geometry.add_decoration(Decoration {
                    position: self.state.position,
                    orientation: decal_orientation(self.state.heading, self.state.up),
                    color: self.config.leaf_color,
                    size: self.config.leaf_size,
                    kind: DecorationKind::Leaf,
                });
            }

            TurtleOp::Flower => {
                self.geometry.add_decoration(Decoration {
                    position: self.state.position,
                    orientation: decal_orientation(self.state.heading, self.state.up),
                    color: self.config.flower_color,
                    size: self.config.leaf_size * 1.5,
                    kind: DecorationKind::Flower,
                });
            }

            TurtleOp::ShrinkWidth => {
                self.state.width *= self.config.width_decay;
            }

            TurtleOp::ShiftColor => {
                // Gradient effect along a branch chain: toward green.
                self.state.color.y = (self.state.color.y + 0.05).min(1.0);
                self.state.color.x = (self.state.color.x - 0.02).max(0.0);
            }

            TurtleOp::Ignore => {}
        }
    }
}
