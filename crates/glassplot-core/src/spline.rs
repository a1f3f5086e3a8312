//! Cubic spline interpolation for measured glass data.
//!
//! Catalogs tabulate internal transmittance at a handful of wavelengths.
//! A natural cubic spline gives a smooth curve through those samples that
//! can be queried at any plotting wavelength.

use crate::error::{GlassError, Result};

/// A natural cubic spline interpolator for real-valued data.
///
/// Given $n \ge 2$ data points $(x_i, y_i)$, constructs piecewise cubic
/// polynomials with continuous first and second derivatives and zero second
/// derivative at both end knots. Outside $[x_0, x_{n-1}]$ the spline continues
/// as a straight line with the end slope.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Sorted x values (knots).
    xs: Vec<f64>,
    /// Corresponding y values.
    ys: Vec<f64>,
    /// Second derivatives at each knot (computed during construction).
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Construct a natural cubic spline from data points.
    ///
    /// # Arguments
    /// * `xs` - Strictly increasing x values.
    /// * `ys` - Corresponding y values (same length as `xs`).
    ///
    /// # Errors
    /// [`GlassError::LengthMismatch`] if the lengths differ,
    /// [`GlassError::InsufficientData`] for fewer than 2 points and
    /// [`GlassError::NonMonotonic`] if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GlassError::LengthMismatch {
                expected: xs.len(),
                found: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(GlassError::InsufficientData(format!(
                "cubic spline needs at least 2 points, got {}",
                xs.len()
            )));
        }
        if let Some(i) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
            return Err(GlassError::NonMonotonic { index: i });
        }

        let n = xs.len();
        let mut y2s = vec![0.0; n];
        let mut u = vec![0.0; n - 1];

        // Forward sweep (tridiagonal system for natural spline)
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2s[i - 1] + 2.0;
            y2s[i] = (sig - 1.0) / p;
            u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        // Back substitution
        for k in (0..n - 2).rev() {
            y2s[k + 1] = y2s[k + 1] * y2s[k + 2] + u[k + 1];
        }

        Ok(Self { xs, ys, y2s })
    }

    /// Evaluate the spline at a given x value.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();

        if x < self.xs[0] {
            return self.ys[0] + self.start_slope() * (x - self.xs[0]);
        }
        if x > self.xs[n - 1] {
            return self.ys[n - 1] + self.end_slope() * (x - self.xs[n - 1]);
        }

        // Binary search for the enclosing interval
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.y2s[lo] + (b * b * b - b) * self.y2s[hi]) * h * h / 6.0
    }

    /// Evaluate at each x, preserving order.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    fn start_slope(&self) -> f64 {
        let h = self.xs[1] - self.xs[0];
        (self.ys[1] - self.ys[0]) / h - h * (2.0 * self.y2s[0] + self.y2s[1]) / 6.0
    }

    fn end_slope(&self) -> f64 {
        let n = self.xs.len();
        let h = self.xs[n - 1] - self.xs[n - 2];
        (self.ys[n - 1] - self.ys[n - 2]) / h + h * (self.y2s[n - 2] + 2.0 * self.y2s[n - 1]) / 6.0
    }
}
