//! Molar cross-section geometry.

use ndarray::Array1;

use crate::config::AnimationConfig;

/// Fixed sample grid and the curves derived from it.
#[derive(Debug, Clone)]
pub struct ToothProfile {
    /// Horizontal sample positions, increasing.
    pub x: Array1<f64>,
    /// Healthy crown surface.
    pub base: Array1<f64>,
    /// Dentin surface, a fixed depth below the crown.
    pub dentin: Array1<f64>,
    /// Floor of the dentin fill.
    pub root_y: f64,
}

impl ToothProfile {
    /// Build the profile for the given constants.
    pub fn new(config: &AnimationConfig) -> Self {
        let x = Array1::linspace(-config.half_width, config.half_width, config.samples);
        let base = x.mapv(crown_height);
        let dentin = &base - config.enamel_depth;
        Self {
            x,
            base,
            dentin,
            root_y: config.root_y,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the profile has no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Crown height at `x`: a cosine cusp pattern on a parabolic dome.
pub fn crown_height(x: f64) -> f64 {
    1.5 - 0.5 * (2.0 * x).cos() - 0.2 * x * x
}

/// Piecewise-linear interpolation of `(xs, ys)` at `x`.
///
/// `xs` must be increasing. Outside the grid the nearest end value is returned.
pub fn interp(x: f64, xs: &Array1<f64>, ys: &Array1<f64>) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index whose sample is strictly right of x.
    let hi = xs
        .as_slice()
        .map(|s| s[..n].partition_point(|&v| v <= x))
        .unwrap_or_else(|| xs.iter().take(n).position(|&v| v > x).unwrap_or(n - 1));
    let lo = hi - 1;
    let span = xs[hi] - xs[lo];
    if span == 0.0 {
        return ys[lo];
    }
    let t = (x - xs[lo]) / span;
    ys[lo] + t * (ys[hi] - ys[lo])
}
