//! Built-in grammar and style presets.
//!
//! A read-only table of named plants and fractals. Loading a preset is a
//! pure function from table entry to a fresh `(LSystem, TurtleConfig)` pair;
//! instances share no state with the table or with each other.

use crate::grammar::LSystem;
use crate::interpreter::{RenderMode, TurtleConfig};

/// One entry of the preset table.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    /// Rotation increment in degrees.
    pub angle: f32,
    /// Recommended generation count for a good-looking result.
    pub generations: u32,
    pub three_d: bool,
    pub render_mode: RenderMode,
    pub step_size: f32,
    pub width_decay: f32,
}

impl Preset {
    /// Builds a fresh grammar and interpreter configuration for this preset.
    pub fn instantiate(&self) -> (LSystem, TurtleConfig) {
        let mut grammar = LSystem::new();
        grammar.set_axiom(self.axiom);
        grammar.set_angle(self.angle);
        for &(symbol, replacement) in self.rules {
            grammar.add_rule(symbol, replacement);
        }

        let config = TurtleConfig {
            three_d: self.three_d,
            render_mode: self.render_mode,
            step_size: self.step_size,
            width_decay: self.width_decay,
            ..TurtleConfig::DEFAULT
        };

        (grammar, config)
    }
}

/// The built-in presets, 2D fractals first, then 3D plants.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Fractal plant",
        axiom: "X",
        rules: &[('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")],
        angle: 22.5,
        generations: 6,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.03,
        width_decay: 0.7,
    },
    Preset {
        name: "Binary tree",
        axiom: "X",
        rules: &[('X', "F[+X]F[-X]+X"), ('F', "FF")],
        angle: 20.0,
        generations: 7,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.02,
        width_decay: 0.75,
    },
    Preset {
        name: "Koch snowflake",
        axiom: "F--F--F",
        rules: &[('F', "F+F--F+F")],
        angle: 60.0,
        generations: 4,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.05,
        width_decay: 1.0,
    },
    Preset {
        name: "Sierpinski triangle",
        axiom: "F-G-G",
        rules: &[('F', "F-G+F+G-F"), ('G', "GG")],
        angle: 120.0,
        generations: 6,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.02,
        width_decay: 1.0,
    },
    Preset {
        name: "Dragon curve",
        axiom: "F",
        rules: &[('F', "F+G"), ('G', "F-G")],
        angle: 90.0,
        generations: 12,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.02,
        width_decay: 1.0,
    },
    Preset {
        name: "Hilbert curve",
        axiom: "X",
        rules: &[('X', "-YF+XFX+FY-"), ('Y', "+XF-YFY-FX+")],
        angle: 90.0,
        generations: 6,
        three_d: false,
        render_mode: RenderMode::Lines,
        step_size: 0.03,
        width_decay: 1.0,
    },
    Preset {
        name: "Bush",
        axiom: "A",
        rules: &[
            ('A', "[&FL!A]/////'[&FL!A]///////'[&FL!A]"),
            ('F', "S/////F"),
            ('S', "FL"),
        ],
        angle: 22.5,
        generations: 7,
        three_d: true,
        render_mode: RenderMode::Cylinders,
        step_size: 0.12,
        width_decay: 0.85,
    },
    Preset {
        name: "Flowering plant",
        axiom: "P",
        rules: &[
            ('P', "I+[P+K]--//[--L]I[++L]-[PK]++PK"),
            ('I', "FS[//&&L][//^^L]FS"),
            ('S', "SFS"),
        ],
        angle: 18.0,
        generations: 5,
        three_d: true,
        render_mode: RenderMode::Cylinders,
        step_size: 0.08,
        width_decay: 0.8,
    },
];
