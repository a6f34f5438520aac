//! The per-step particle record.

use std::fmt;

/// Position and velocity of the particle at simulated time `t`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleState {
    pub t:  f64,
    pub x:  f64,
    pub y:  f64,
    pub vx: f64,
    pub vy: f64,
}

impl ParticleState {
    /// At rest at the origin, `t = 0`.  Every run starts here.
    pub const ORIGIN: ParticleState = ParticleState { t: 0.0, x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 };

    /// Column names in emission order.
    pub const COLUMNS: [&'static str; 5] = ["t", "x", "y", "vx", "vy"];

    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.t, self.x, self.y, self.vx, self.vy)
    }

    /// Values in [`COLUMNS`](Self::COLUMNS) order.
    #[inline]
    pub fn as_array(&self) -> [f64; 5] {
        [self.t, self.x, self.y, self.vx, self.vy]
    }

    /// Squared distance from the origin, `x² + y²`.
    #[inline]
    pub fn displacement_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Squared speed, `vx² + vy²`.
    #[inline]
    pub fn speed_sq(&self) -> f64 {
        self.vx * self.vx + self.vy * self.vy
    }
}

impl fmt::Display for ParticleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:.4} r=({:.6}, {:.6}) v=({:.6}, {:.6})",
            self.t, self.x, self.y, self.vx, self.vy
        )
    }
}
