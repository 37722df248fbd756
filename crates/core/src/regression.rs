//! Second-order polynomial regression used for statistical mass estimates.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Quadratic `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluate with Horner's scheme.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Least-squares fit through `(xs[i], ys[i])`.
    ///
    /// Abscissae are scaled by `x_scale` before forming the normal equations; the returned
    /// coefficients are in unscaled units. Returns `None` when fewer than three points are given,
    /// the slices differ in length, or the points do not determine a unique parabola.
    pub fn fit(xs: &[f64], ys: &[f64], x_scale: f64) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < 3 || x_scale <= 0.0 {
            return None;
        }

        // Unknowns ordered as [c, b, a].
        let mut normal = Matrix3::<f64>::zeros();
        let mut rhs = Vector3::<f64>::zeros();
        for (&x, &y) in xs.iter().zip(ys) {
            let u = x / x_scale;
            let row = Vector3::new(1.0, u, u * u);
            normal += row * row.transpose();
            rhs += row * y;
        }

        let singular = normal.singular_values();
        if singular.min() <= 1e-12 * singular.max() {
            return None;
        }
        let coeffs = normal.lu().solve(&rhs)?;

        Some(Self {
            a: coeffs[2] / (x_scale * x_scale),
            b: coeffs[1] / x_scale,
            c: coeffs[0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_exact_parabola() {
        let truth = Quadratic::new(2.0e-6, -0.05, 1200.0);
        let xs = [4_000.0, 9_000.0, 17_000.0, 26_000.0, 41_000.0];
        let ys: Vec<f64> = xs.iter().map(|&x| truth.eval(x)).collect();
        let fit = Quadratic::fit(&xs, &ys, 1_000.0).expect("fit");
        assert!((fit.a - truth.a).abs() < 1e-12);
        assert!((fit.b - truth.b).abs() < 1e-7);
        assert!((fit.c - truth.c).abs() < 1e-3);
    }

    #[test]
    fn fit_rejects_degenerate_input() {
        assert!(Quadratic::fit(&[1.0, 2.0], &[1.0, 2.0], 1.0).is_none());
        assert!(Quadratic::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1.0).is_none());
        assert!(Quadratic::fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], 1.0).is_none());
    }

    #[test]
    fn eval_matches_expanded_form() {
        let q = Quadratic::new(-2.5e-6, 0.138, 353.0);
        let x = 30_000.0;
        let expanded = q.a * x * x + q.b * x + q.c;
        assert!((q.eval(x) - expanded).abs() < 1e-9);
    }
}
