//! Damped spring driving a coin's rotation

use std::time::Duration;

use crate::config::AnimationConfig;

/// Rotation (degrees) with the front face toward the viewer
pub const FRONT_ANGLE: f64 = 0.0;
/// Rotation (degrees) with the back face toward the viewer
pub const BACK_ANGLE: f64 = 180.0;

const SUBSTEP_SECS: f64 = 0.001;
/// Longest frame gap simulated at once; longer stalls are clamped
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DISTANCE: f64 = 0.5;
const REST_VELOCITY: f64 = 0.5;

/// Y-axis rotation of one coin, springing toward 0 or 180 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipSpring {
    angle: f64,
    velocity: f64,
    target: f64,
}

impl Default for FlipSpring {
    fn default() -> Self {
        Self {
            angle: FRONT_ANGLE,
            velocity: 0.0,
            target: FRONT_ANGLE,
        }
    }
}

impl FlipSpring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_flipped(&self) -> bool {
        self.target == BACK_ANGLE
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.target = if flipped { BACK_ANGLE } else { FRONT_ANGLE };
    }

    pub fn is_at_rest(&self) -> bool {
        (self.angle - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `elapsed`
    ///
    /// Returns true while the coin is still moving.
    pub fn step(&mut self, params: &AnimationConfig, elapsed: Duration) -> bool {
        if self.is_at_rest() {
            self.angle = self.target;
            self.velocity = 0.0;
            return false;
        }

        let mass = params.mass.max(f64::EPSILON);
        let mut remaining = elapsed.as_secs_f64().min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let force =
                -params.stiffness * (self.angle - self.target) - params.damping * self.velocity;
            self.velocity += force / mass * h;
            self.angle += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.angle = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}
