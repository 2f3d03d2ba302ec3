//! Volatility smile construction from standard FX market quotes.
//!
//! Decomposes the five quotes (ATM, 25d/10d risk reversal and strangle) into
//! five (strike, vol) knots using the pricer's closed-form delta inversion,
//! then interpolates with a natural cubic spline. Lookups outside the
//! outermost knots extrapolate flat.

pub mod spline;
pub mod types;

pub use spline::NaturalCubicSpline;
pub use types::{FxSmileQuotes, QuoteKind};

use std::cmp::Ordering;

use anyhow::{Context, Result};

use crate::pricer::{FxOptionPricer, OptionKind};

/// Display labels for the five smile knots in ascending-strike order, using
/// the call-delta convention for the wings (10d put = 90d call).
pub const KNOT_LABELS: [&str; 5] = ["10 Delta", "25 Delta", "ATM", "75 Delta", "90 Delta"];

/// A single-maturity volatility smile built from five market quotes.
///
/// Immutable after construction; cheap to clone and safe to share across
/// threads, which the sensitivity engine relies on when it rebuilds bumped
/// copies.
#[derive(Debug, Clone)]
pub struct VolatilitySurface {
    quotes: FxSmileQuotes,
    /// Knot strikes, sorted ascending
    strikes: Vec<f64>,
    /// Knot volatilities, aligned with `strikes`
    vols: Vec<f64>,
    /// Strike of the ATM point (50-delta call approximation), for reporting
    atm_strike: f64,
    spline: NaturalCubicSpline,
}

impl VolatilitySurface {
    /// Build the smile against `pricer`'s market state.
    ///
    /// Wing volatilities come from the quote algebra
    /// `vol(call) = atm + st + rr/2`, `vol(put) = atm + st - rr/2`; each
    /// point's strike is derived from its own volatility via the fixed-vol
    /// delta inversion. The ATM strike uses a 50-delta call inversion as a
    /// delta-neutral approximation.
    ///
    /// Fails when any delta inversion is unreachable or when the implied
    /// strikes collapse onto each other (pathological quote combinations).
    pub fn construct_smile(quotes: FxSmileQuotes, pricer: &FxOptionPricer) -> Result<Self> {
        let vol_25_call = quotes.atm + quotes.st_25 + 0.5 * quotes.rr_25;
        let vol_25_put = quotes.atm + quotes.st_25 - 0.5 * quotes.rr_25;
        let vol_10_call = quotes.atm + quotes.st_10 + 0.5 * quotes.rr_10;
        let vol_10_put = quotes.atm + quotes.st_10 - 0.5 * quotes.rr_10;

        let k_atm = pricer
            .strike_for_delta(0.50, quotes.atm, OptionKind::Call)
            .context("ATM strike inversion failed")?;
        let k_25_c = pricer
            .strike_for_delta(0.25, vol_25_call, OptionKind::Call)
            .context("25-delta call strike inversion failed")?;
        let k_25_p = pricer
            .strike_for_delta(0.25, vol_25_put, OptionKind::Put)
            .context("25-delta put strike inversion failed")?;
        let k_10_c = pricer
            .strike_for_delta(0.10, vol_10_call, OptionKind::Call)
            .context("10-delta call strike inversion failed")?;
        let k_10_p = pricer
            .strike_for_delta(0.10, vol_10_put, OptionKind::Put)
            .context("10-delta put strike inversion failed")?;

        // Put strikes sit below the ATM and call strikes above for sane
        // quotes, but delta-implied strikes are not guaranteed monotone, so
        // sort defensively before fitting.
        let mut points = vec![
            (k_10_p, vol_10_put),
            (k_25_p, vol_25_put),
            (k_atm, quotes.atm),
            (k_25_c, vol_25_call),
            (k_10_c, vol_10_call),
        ];
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let strikes: Vec<f64> = points.iter().map(|p| p.0).collect();
        let vols: Vec<f64> = points.iter().map(|p| p.1).collect();

        let spline = NaturalCubicSpline::fit(&strikes, &vols)
            .context("smile spline fit failed on the derived knots")?;

        Ok(Self {
            quotes,
            strikes,
            vols,
            atm_strike: k_atm,
            spline,
        })
    }

    /// Volatility at `strike`: spline evaluation inside the knot range, the
    /// boundary knot's volatility unchanged outside it (flat extrapolation
    /// is deliberate, not a spline artifact).
    pub fn vol(&self, strike: f64) -> f64 {
        let last = self.strikes.len() - 1;
        if strike < self.strikes[0] {
            return self.vols[0];
        }
        if strike > self.strikes[last] {
            return self.vols[last];
        }
        self.spline.eval(strike)
    }

    /// The market quotes this smile was built from.
    pub fn quotes(&self) -> &FxSmileQuotes {
        &self.quotes
    }

    /// Knot strikes, ascending.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Knot volatilities, aligned with [`strikes`](Self::strikes).
    pub fn vols(&self) -> &[f64] {
        &self.vols
    }

    /// Strike of the ATM point (diagnostic).
    pub fn atm_strike(&self) -> f64 {
        self.atm_strike
    }
}
