// Configuration type definitions

use serde::Deserialize;

/// Terminal cell geometry overrides
///
/// Unset values are detected from the terminal when it reports its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct TerminalConfig {
    #[serde(default)]
    pub cell_width_px: Option<u16>,
    #[serde(default)]
    pub cell_height_px: Option<u16>,
}

/// Spring parameters for the coin flip
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_stiffness() -> f64 {
    200.0
}

fn default_damping() -> f64 {
    20.0
}

fn default_mass() -> f64 {
    1.0
}

impl AnimationConfig {
    /// Reject parameters the spring cannot settle with
    pub fn validate(&self) -> Result<(), String> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(format!("animation.stiffness must be positive, got {}", self.stiffness));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(format!("animation.damping must not be negative, got {}", self.damping));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(format!("animation.mass must be positive, got {}", self.mass));
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
