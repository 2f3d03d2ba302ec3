//! Garman-Kohlhagen vanilla FX option pricer.
//!
//! Prices European options on the forward, with the foreign money-market
//! rate implied from the quoted forward via `F = S * exp((rd - rf) * T)` so
//! the forward is reproduced exactly by construction. Also owns the two
//! delta-to-strike inversions: the closed-form fixed-vol one used during
//! smile construction, and the smile-consistent bracketed root search used
//! to resolve delta-quoted contract strikes.

use roots::find_root_brent;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::smile::VolatilitySurface;

/// Side of a single vanilla leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OptionKind {
    Call,
    Put,
}

/// Why a delta-to-strike inversion produced no strike.
///
/// Callers must handle the invalid-input and no-solution paths separately:
/// the former is a rejected request, the latter means no strike solves the
/// requested delta under the given smile.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StrikeSolveError {
    /// The requested delta magnitude is outside (0, 1).
    #[error("delta magnitude {0} is outside (0, 1)")]
    DeltaOutOfRange(f64),
    /// The closed-form inversion's N(d1) argument left (0, 1): the delta is
    /// unreachable at this volatility.
    #[error("delta {delta} is unreachable at volatility {vol}")]
    Unreachable { delta: f64, vol: f64 },
    /// The residual has no sign change over the strike bracket.
    #[error("no sign change for delta {delta} in strike bracket [{lo}, {hi}]")]
    NoBracket { delta: f64, lo: f64, hi: f64 },
}

/// Standard normal CDF via the error function.
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

/// Market state for one currency pair and maturity. Immutable value object;
/// create a fresh instance per pricing request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxOptionPricer {
    spot: f64,
    rd: f64,
    forward: f64,
    t: f64,
    /// Foreign rate implied from the forward
    rf: f64,
}

impl FxOptionPricer {
    /// Build a pricer from spot, domestic rate, outright forward and time to
    /// maturity (year fraction). The foreign rate is derived as
    /// `rf = rd - ln(F/S)/T` when `T`, `S` and `F` are all positive, and
    /// falls back to zero otherwise (expired or degenerate market state).
    pub fn new(spot: f64, domestic_rate: f64, forward: f64, time_to_maturity: f64) -> Self {
        let rf = if time_to_maturity > 0.0 && spot > 0.0 && forward > 0.0 {
            domestic_rate - (forward / spot).ln() / time_to_maturity
        } else {
            0.0
        };
        Self {
            spot,
            rd: domestic_rate,
            forward,
            t: time_to_maturity,
            rf,
        }
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn domestic_rate(&self) -> f64 {
        self.rd
    }

    /// Foreign rate implied from the forward.
    pub fn foreign_rate(&self) -> f64 {
        self.rf
    }

    pub fn forward(&self) -> f64 {
        self.forward
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.t
    }

    /// Forward-measure moneyness term `(ln(F/K) + 0.5 σ² T) / (σ √T)`.
    ///
    /// Returns 0 when `T <= 0` or `σ <= 0`; the degenerate value keeps the
    /// pricing formulas finite but is not a tradable quantity.
    pub fn d1(&self, strike: f64, sigma: f64) -> f64 {
        if self.t <= 0.0 || sigma <= 0.0 {
            return 0.0;
        }
        ((self.forward / strike).ln() + 0.5 * sigma * sigma * self.t) / (sigma * self.t.sqrt())
    }

    /// `d1 - σ √T`, with the same degenerate guard as [`d1`](Self::d1).
    pub fn d2(&self, strike: f64, sigma: f64) -> f64 {
        if self.t <= 0.0 || sigma <= 0.0 {
            return 0.0;
        }
        self.d1(strike, sigma) - sigma * self.t.sqrt()
    }

    /// Garman-Kohlhagen value of one unit of foreign notional.
    ///
    /// Call: `e^{-rd T} (F N(d1) - K N(d2))`; put by the complementary CDF.
    pub fn price(&self, sigma: f64, strike: f64, kind: OptionKind) -> f64 {
        let d1 = self.d1(strike, sigma);
        let d2 = self.d2(strike, sigma);
        let df = (-self.rd * self.t).exp();

        match kind {
            OptionKind::Call => df * (self.forward * norm_cdf(d1) - strike * norm_cdf(d2)),
            OptionKind::Put => df * (strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1)),
        }
    }

    /// Black vega `S e^{-rf T} √T N'(d1)`, per unit volatility. Zero at or
    /// past expiry.
    pub fn vega(&self, strike: f64, sigma: f64) -> f64 {
        if self.t <= 0.0 {
            return 0.0;
        }
        let d1 = self.d1(strike, sigma);
        let df_rf = (-self.rf * self.t).exp();
        self.spot * df_rf * self.t.sqrt() * std_normal().pdf(d1)
    }

    /// Spot delta: `e^{-rf T} N(d1)` for calls, `e^{-rf T} (N(d1) - 1)` for
    /// puts (negative by convention).
    pub fn delta(&self, strike: f64, sigma: f64, kind: OptionKind) -> f64 {
        let d1 = self.d1(strike, sigma);
        let df_rf = (-self.rf * self.t).exp();

        match kind {
            OptionKind::Call => df_rf * std_normal().cdf(d1),
            OptionKind::Put => df_rf * (std_normal().cdf(d1) - 1.0),
        }
    }

    /// Closed-form strike for a target delta magnitude at a fixed volatility
    /// (no smile feedback): invert N(d1) from the delta formula, then invert
    /// d1 for the strike. This is the market convention for turning delta
    /// quotes into smile knots.
    pub fn strike_for_delta(
        &self,
        delta: f64,
        sigma: f64,
        kind: OptionKind,
    ) -> Result<f64, StrikeSolveError> {
        if delta <= 0.0 || delta >= 1.0 {
            return Err(StrikeSolveError::DeltaOutOfRange(delta));
        }

        let df_rf = (-self.rf * self.t).exp();
        let target = match kind {
            OptionKind::Call => delta / df_rf,
            OptionKind::Put => -delta / df_rf + 1.0,
        };
        if target <= 0.0 || target >= 1.0 {
            return Err(StrikeSolveError::Unreachable { delta, vol: sigma });
        }

        let d1 = std_normal().inverse_cdf(target);
        let vol_term = sigma * self.t.sqrt();
        let log_fk = vol_term * d1 - 0.5 * sigma * sigma * self.t;
        Ok(self.forward / log_fk.exp())
    }

    /// Smile-consistent strike for a target delta magnitude: finds `K` with
    /// `delta(K, surface.vol(K), kind)` equal to the signed target (negative
    /// for puts) by Brent's method over
    /// `K ∈ [bracket_lo_mult·F, bracket_hi_mult·F]`.
    ///
    /// Returns [`StrikeSolveError::NoBracket`] when the residual has no sign
    /// change in the bracket; callers must surface that as "no strike solves
    /// this delta under this smile", never substitute a placeholder.
    pub fn solve_strike_for_delta(
        &self,
        target_delta: f64,
        kind: OptionKind,
        surface: &VolatilitySurface,
        config: &EngineConfig,
    ) -> Result<f64, StrikeSolveError> {
        if target_delta <= 0.0 || target_delta >= 1.0 {
            return Err(StrikeSolveError::DeltaOutOfRange(target_delta));
        }
        let signed_target = match kind {
            OptionKind::Call => target_delta,
            OptionKind::Put => -target_delta,
        };

        let objective = |k: f64| -> f64 {
            if k <= 1e-6 {
                // Guard value pushes the solver away from the origin
                return 999.0;
            }
            let vol = surface.vol(k);
            self.delta(k, vol, kind) - signed_target
        };

        let lo = self.forward * config.bracket_lo_mult;
        let hi = self.forward * config.bracket_hi_mult;
        let mut convergency = config.solver_tol;

        find_root_brent(lo, hi, &objective, &mut convergency).map_err(|_| {
            StrikeSolveError::NoBracket {
                delta: target_delta,
                lo,
                hi,
            }
        })
    }
}
