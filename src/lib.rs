//! # arbor
//!
//! A sovereign generation crate for botanical and fractal structures that
//! translates L-System grammars into engine-agnostic plant geometry.
//!
//! It decouples the *Genotype* (L-System string) from the *Phenotype*
//! (rendered plant), producing a [`PlantGeometry`] structure of tapered
//! branch segments and oriented leaf/flower decals that can be ingested by
//! any renderer (wgpu, OpenGL, offline mesh export).
//!
//! The pipeline is two stages, consumed in sequence:
//!
//! 1. [`LSystem`] stores an axiom, production rules, and a rotation angle,
//!    and expands the axiom for N generations via parallel rewriting.
//! 2. [`TurtleInterpreter`] walks the expanded string with a 3D cursor and
//!    an explicit branching stack, accumulating geometry.
//!
//! ```
//! use arbor::{LSystem, TurtleConfig, TurtleInterpreter};
//!
//! let mut grammar = LSystem::new();
//! grammar.set_axiom("F");
//! grammar.add_rule('F', "F[+F][-F]F");
//! grammar.set_angle(25.0);
//! grammar.generate(3);
//!
//! let mut turtle = TurtleInterpreter::new(TurtleConfig::default());
//! let geometry = turtle.interpret(grammar.string(), grammar.angle());
//! assert!(geometry.branch_count() > 0);
//! ```

pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod preset;
pub mod turtle;

pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use preset::*;
pub use turtle::*;
