//! D0L-system grammar storage and parallel rewriting.
//!
//! An L-System consists of an axiom (the initial string), a set of
//! production rules (symbol → replacement), and a grammar-level rotation
//! angle consumed by the interpreter. [`LSystem::generate`] applies the
//! rules in parallel: every symbol of the current generation is replaced
//! simultaneously, using only the rules as they stood at the start of the
//! pass. Symbols with no rule are constants and pass through unchanged.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation count above which UI collaborators should warn the user.
///
/// Output length grows exponentially when any replacement is longer than one
/// symbol; `generate` itself never caps or detects this.
pub const GENERATION_WARN_THRESHOLD: u32 = 7;

/// Error loading a rule file from disk.
///
/// The only hard failure in the crate. On error the grammar is left
/// untouched; unparseable *lines* inside a readable file are skipped, not
/// reported.
#[derive(Error, Debug)]
pub enum RuleFileError {
    #[error("rule file error: {0}")]
    Io(#[from] std::io::Error),
}

/// A deterministic, context-free rewriting system (D0L-system).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LSystem {
    axiom: String,
    rules: HashMap<char, String>,
    current: String,
    angle: f32,
    generation: u32,
}

impl LSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the axiom, resetting the current string to it and the
    /// generation counter to 0.
    pub fn set_axiom(&mut self, axiom: &str) {
        self.axiom = axiom.to_string();
        self.current = self.axiom.clone();
        self.generation = 0;
    }

    /// Inserts or overwrites the production rule for `symbol`.
    ///
    /// No validation is performed on the replacement: it may be empty
    /// (symbol deletion) or contain `symbol` itself (recursive growth).
    pub fn add_rule(&mut self, symbol: char, replacement: &str) {
        self.rules.insert(symbol, replacement.to_string());
    }

    /// Empties the rule mapping. Axiom and current string are unaffected.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Sets the rotation increment in degrees. No semantic validation;
    /// negative or >360 values pass through.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Expands the axiom by applying the rules `generations` times.
    ///
    /// Always restarts from the axiom, so the result is deterministic and
    /// idempotent for identical axiom/rules/count. Each pass scans the
    /// current string left to right, appending the replacement for ruled
    /// symbols and the symbol itself otherwise.
    pub fn generate(&mut self, generations: u32) {
        self.current = self.axiom.clone();
        self.generation = 0;

        for _ in 0..generations {
            let mut next = String::with_capacity(self.current.len());
            for symbol in self.current.chars() {
                match self.rules.get(&symbol) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(symbol),
                }
            }
            self.current = next;
            self.generation += 1;
        }

        log::debug!(
            "generation {} complete: {} symbols",
            self.generation,
            self.current.len()
        );
    }

    /// Restores the current string to the axiom and the generation counter
    /// to 0, independent of the rule set.
    pub fn reset(&mut self) {
        self.current = self.axiom.clone();
        self.generation = 0;
    }

    pub fn string(&self) -> &str {
        &self.current
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Loads axiom, angle, and rules from a file.
    ///
    /// On read failure the grammar is left unchanged and the error is
    /// returned. See [`load_rules_str`](Self::load_rules_str) for the
    /// format.
    pub fn load_rules<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RuleFileError> {
        let text = fs::read_to_string(path)?;
        self.load_rules_str(&text);
        Ok(())
    }

    /// Rebuilds the grammar from rule text. Existing rules are cleared
    /// first; the generation counter ends at 0.
    ///
    /// Format, one entry per line:
    ///
    /// ```text
    /// axiom: <string>
    /// angle: <float>
    /// <symbol>-><replacement>
    /// ```
    ///
    /// Leading whitespace is trimmed and blank lines skipped. A line is a
    /// rule if it contains `->` past its first character; the first
    /// character is the symbol and everything after the *first* `->` is the
    /// replacement, verbatim. Lines that parse as none of the three forms
    /// are skipped.
    pub fn load_rules_str(&mut self, text: &str) {
        self.rules.clear();

        for raw in text.lines() {
            let line = raw.trim_start();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("axiom:") {
                self.axiom = rest.trim_start().to_string();
                self.current = self.axiom.clone();
                log::info!("axiom loaded: {}", self.axiom);
            } else if let Some(rest) = line.strip_prefix("angle:") {
                match rest.trim().parse::<f32>() {
                    Ok(value) => {
                        self.angle = value;
                        log::info!("angle loaded: {value} degrees");
                    }
                    Err(_) => log::warn!("skipping unparseable angle line: {line:?}"),
                }
            } else if let Some(arrow) = line.find("->") {
                if arrow > 0 {
                    if let Some(symbol) = line.chars().next() {
                        let replacement = &line[arrow + 2..];
                        log::info!("rule loaded: {symbol} -> {replacement}");
                        self.rules.insert(symbol, replacement.to_string());
                    }
                }
            }
        }

        self.generation = 0;
    }
}
