//! Natural cubic spline interpolation.
//!
//! Fit once per smile construction, evaluated many times. The natural
//! boundary condition (zero second derivative at both end knots) matches the
//! smile's flat-extrapolation policy: the curve leaves the outermost knots
//! with no curvature.

use anyhow::{anyhow, Result};

/// Piecewise-cubic interpolant through a set of strictly increasing knots
/// with zero second derivative at both boundary knots.
///
/// Pure value type: `fit` validates and precomputes the second derivatives,
/// `eval` is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative of the interpolant at each knot
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fit a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// Requires at least two knots and strictly increasing, finite `xs`.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(anyhow!(
                "knot count mismatch: {} abscissae vs {} ordinates",
                xs.len(),
                ys.len()
            ));
        }
        if xs.len() < 2 {
            return Err(anyhow!("spline requires at least 2 knots, got {}", xs.len()));
        }
        for window in xs.windows(2) {
            if !(window[1] > window[0]) {
                return Err(anyhow!(
                    "spline knots must be strictly increasing, got {} then {}",
                    window[0],
                    window[1]
                ));
            }
        }

        let n = xs.len();
        let mut m = vec![0.0; n];

        // Natural boundary fixes m[0] = m[n-1] = 0; the interior second
        // derivatives solve a tridiagonal system (Thomas algorithm).
        if n > 2 {
            let p = n - 2;
            let mut sub = vec![0.0; p];
            let mut diag = vec![0.0; p];
            let mut sup = vec![0.0; p];
            let mut rhs = vec![0.0; p];

            for j in 0..p {
                let i = j + 1;
                let h0 = xs[i] - xs[i - 1];
                let h1 = xs[i + 1] - xs[i];
                sub[j] = h0;
                diag[j] = 2.0 * (h0 + h1);
                sup[j] = h1;
                rhs[j] = 6.0 * ((ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0);
            }

            // Forward elimination
            for j in 1..p {
                let w = sub[j] / diag[j - 1];
                diag[j] -= w * sup[j - 1];
                rhs[j] -= w * rhs[j - 1];
            }

            // Back substitution
            m[p] = rhs[p - 1] / diag[p - 1];
            for j in (0..p - 1).rev() {
                m[j + 1] = (rhs[j] - sup[j] * m[j + 2]) / diag[j];
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// Outside the knot range this continues the boundary segment's cubic;
    /// callers that want a different extrapolation policy must clamp first.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let i = match self.xs.partition_point(|&knot| knot <= x) {
            0 => 0,
            idx => (idx - 1).min(n - 2),
        };

        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;

        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / 6.0
    }

    /// Second derivatives at the knots (zero at both ends by construction).
    pub fn second_derivatives(&self) -> &[f64] {
        &self.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_through_knots() {
        let xs = [0.9, 0.95, 1.0, 1.07, 1.14];
        let ys = [0.12, 0.105, 0.10, 0.108, 0.121];
        let spline = NaturalCubicSpline::fit(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert!(
                (spline.eval(x) - y).abs() < 1e-12,
                "spline should pass through knot ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn reproduces_linear_data_exactly() {
        let xs = [1.0, 2.0, 3.5, 4.0, 6.0];
        let ys: Vec<f64> = xs.iter().map(|x| 0.3 * x + 1.0).collect();
        let spline = NaturalCubicSpline::fit(&xs, &ys).unwrap();

        // A linear function has zero second derivative everywhere, so the
        // natural spline must reproduce it exactly between knots too.
        for m in spline.second_derivatives() {
            assert!(m.abs() < 1e-12, "second derivative should vanish, got {}", m);
        }
        for x in [1.3, 2.7, 3.9, 5.5] {
            assert!((spline.eval(x) - (0.3 * x + 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn natural_boundary_condition_holds() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 0.0, 1.0];
        let spline = NaturalCubicSpline::fit(&xs, &ys).unwrap();
        let m = spline.second_derivatives();
        assert_eq!(m[0], 0.0);
        assert_eq!(m[m.len() - 1], 0.0);
    }

    #[test]
    fn rejects_bad_knots() {
        assert!(NaturalCubicSpline::fit(&[1.0], &[0.1]).is_err());
        assert!(NaturalCubicSpline::fit(&[1.0, 1.0], &[0.1, 0.2]).is_err());
        assert!(NaturalCubicSpline::fit(&[2.0, 1.0], &[0.1, 0.2]).is_err());
        assert!(NaturalCubicSpline::fit(&[1.0, 2.0], &[0.1]).is_err());
    }

    #[test]
    fn two_knots_degrade_to_linear() {
        let spline = NaturalCubicSpline::fit(&[1.0, 3.0], &[0.1, 0.3]).unwrap();
        assert!((spline.eval(2.0) - 0.2).abs() < 1e-12);
    }
}
