//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by camera flights and layout transitions.
//! The CSS-style curves (`ease-in`, `ease-out`, `ease-in-out`) are cubic
//! béziers with fixed endpoints at (0, 0) and (1, 1).

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// CSS `ease-in`: cubic-bezier(0.42, 0, 1, 1).
    #[serde(alias = "easeIn")]
    EaseIn,
    /// CSS `ease-out`: cubic-bezier(0, 0, 0.58, 1).
    #[serde(alias = "easeOut")]
    EaseOut,
    /// CSS `ease-in-out`: cubic-bezier(0.42, 0, 0.58, 1).
    #[serde(alias = "easeInOut")]
    EaseInOut,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for camera and layout moves.
    pub const DEFAULT: EasingFunction = EasingFunction::EaseInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to 1
    /// exactly.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            EasingFunction::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            EasingFunction::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for EasingFunction {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "ease-in" | "easeIn" => Ok(Self::EaseIn),
            "ease-out" | "easeOut" => Ok(Self::EaseOut),
            "ease-in-out" | "easeInOut" => Ok(Self::EaseInOut),
            "quadratic-in" => Ok(Self::QuadraticIn),
            "quadratic-out" => Ok(Self::QuadraticOut),
            "sqrt-out" => Ok(Self::SqrtOut),
            "cubic-hermite" => Ok(Self::CubicHermite { c1: 0.33, c2: 1.0 }),
            other => Err(NavError::UnknownEasing(other.to_owned())),
        }
    }
}

/// One coordinate of a cubic bézier with endpoints 0 and 1.
#[inline]
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * s * p1 + 3.0 * oms * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * p1 + 6.0 * oms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluate a CSS `cubic-bezier(x1, y1, x2, y2)` timing curve at `x`.
///
/// Solves `bx(s) = x` with Newton steps, falling back to bisection when the
/// slope flattens out.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_coord(y1, y2, s)
}
