//! Structure-level pricing orchestration.
//!
//! Resolves contract strikes (absolute or delta-quoted), prices single legs
//! and two-legged structures (strangle, risk reversal) off the smile, and
//! assembles the full reporting payload: price, reported volatility, vega,
//! quote sensitivities and the sampled smile/payoff curves that chart
//! consumers render.

use anyhow::{anyhow, bail, Result};

use crate::config::EngineConfig;
use crate::pricer::{FxOptionPricer, OptionKind};
use crate::risk::{model_sensitivities, position_price, position_vega, Leg, ModelSensitivities};
use crate::smile::{FxSmileQuotes, VolatilitySurface, KNOT_LABELS};

/// Option structure being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StructureKind {
    Call,
    Put,
    /// Long put at the low strike plus long call at the high strike
    Strangle,
    /// Long call at the high strike minus short put at the low strike
    RiskReversal,
}

/// How the contract's strike is quoted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StrikeSpec {
    /// Absolute strike price. For two-legged structures this is the
    /// put-side (low) strike; the call side comes from `second_strike`.
    Price(f64),
    /// Target delta magnitude in (0, 1), resolved against the smile. For
    /// two-legged structures the same magnitude is solved once per side.
    Delta(f64),
}

/// One complete pricing request: market state, smile quotes, contract spec.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    pub spot: f64,
    pub domestic_rate: f64,
    pub forward: f64,
    pub time_to_maturity: f64,
    pub quotes: FxSmileQuotes,
    pub structure: StructureKind,
    pub strike: StrikeSpec,
    /// Call-side strike for two-legged structures quoted by price. Falls
    /// back to the put-side strike when absent.
    pub second_strike: Option<f64>,
}

/// Sampled smile for charting: a dense curve plus the five knots with their
/// display labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileCurve {
    pub strikes: Vec<f64>,
    pub vols: Vec<f64>,
    pub knot_strikes: Vec<f64>,
    pub knot_vols: Vec<f64>,
    pub knot_labels: Vec<String>,
}

/// Terminal payoff of the priced structure sampled against spot at maturity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffCurve {
    pub spots: Vec<f64>,
    pub payoffs: Vec<f64>,
}

/// Everything a presentation layer needs to render one priced structure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingOutput {
    pub price: f64,
    /// Smile volatility at the resolved strike; for two-legged structures
    /// the arithmetic mean of the leg volatilities (a display
    /// simplification, not a model quantity)
    pub volatility: f64,
    pub forward: f64,
    /// Resolved strike (put-side/low strike for two-legged structures)
    pub strike: f64,
    /// Call-side/high strike for two-legged structures
    pub second_strike: Option<f64>,
    /// Strike of the smile's ATM point (diagnostic)
    pub atm_strike: f64,
    /// Black vega at the priced strike/vol; leg sum for strangles, leg
    /// difference for risk reversals
    pub vega: f64,
    pub sensitivities: ModelSensitivities,
    pub smile: SmileCurve,
    pub payoff: PayoffCurve,
}

fn validate_delta(delta: f64) -> Result<f64> {
    if delta <= 0.0 || delta >= 1.0 {
        bail!("delta must be between 0 and 1, got {delta}");
    }
    Ok(delta)
}

/// Price one structure end to end: build the pricer and surface, resolve
/// strikes, price the legs, and assemble the reporting payload.
///
/// Strike resolution failures (unsolvable delta under this smile) surface as
/// errors; the engine never proceeds with a placeholder strike.
pub fn price_structure(request: &PricingRequest, config: &EngineConfig) -> Result<PricingOutput> {
    let pricer = FxOptionPricer::new(
        request.spot,
        request.domestic_rate,
        request.forward,
        request.time_to_maturity,
    );
    let surface = VolatilitySurface::construct_smile(request.quotes, &pricer)?;

    let (legs, strike, second_strike, volatility) = match request.structure {
        StructureKind::Call | StructureKind::Put => {
            let kind = if request.structure == StructureKind::Call {
                OptionKind::Call
            } else {
                OptionKind::Put
            };
            let strike = match request.strike {
                StrikeSpec::Price(k) => k,
                StrikeSpec::Delta(d) => {
                    let d = validate_delta(d)?;
                    pricer
                        .solve_strike_for_delta(d, kind, &surface, config)
                        .map_err(|e| anyhow!("could not solve strike for delta: {e}"))?
                }
            };
            let vol = surface.vol(strike);
            (vec![Leg::long(kind, strike)], strike, None, vol)
        }
        StructureKind::Strangle | StructureKind::RiskReversal => {
            let (k_low, k_high) = match request.strike {
                StrikeSpec::Delta(d) => {
                    // Symmetric structure: one solve per side at the same
                    // delta magnitude.
                    let d = validate_delta(d)?;
                    let k_put = pricer
                        .solve_strike_for_delta(d, OptionKind::Put, &surface, config)
                        .map_err(|e| anyhow!("could not solve put-side strike: {e}"))?;
                    let k_call = pricer
                        .solve_strike_for_delta(d, OptionKind::Call, &surface, config)
                        .map_err(|e| anyhow!("could not solve call-side strike: {e}"))?;
                    (k_put, k_call)
                }
                StrikeSpec::Price(k) => (k, request.second_strike.unwrap_or(k)),
            };

            let put_weight = if request.structure == StructureKind::Strangle {
                1.0
            } else {
                -1.0
            };
            let legs = vec![
                Leg {
                    kind: OptionKind::Put,
                    strike: k_low,
                    weight: put_weight,
                },
                Leg::long(OptionKind::Call, k_high),
            ];
            let mean_vol = 0.5 * (surface.vol(k_low) + surface.vol(k_high));
            (legs, k_low, Some(k_high), mean_vol)
        }
    };

    let price = position_price(&pricer, &legs, &surface);
    let vega = position_vega(&pricer, &legs, &surface);
    let sensitivities = model_sensitivities(&pricer, &legs, &surface, config)?;

    let smile = sample_smile_curve(&surface, config);
    let payoff = sample_payoff_curve(
        request.structure,
        strike,
        second_strike.unwrap_or(strike),
        &smile.strikes,
    );

    Ok(PricingOutput {
        price,
        volatility,
        forward: pricer.forward(),
        strike,
        second_strike,
        atm_strike: surface.atm_strike(),
        vega,
        sensitivities,
        smile,
        payoff,
    })
}

/// Sample the smile over `[curve_lo_mult * min_knot, curve_hi_mult * max_knot]`.
fn sample_smile_curve(surface: &VolatilitySurface, config: &EngineConfig) -> SmileCurve {
    let knots = surface.strikes();
    let min_k = knots[0] * config.curve_lo_mult;
    let max_k = knots[knots.len() - 1] * config.curve_hi_mult;
    let samples = config.curve_samples.max(2);

    let mut strikes = Vec::with_capacity(samples);
    let mut vols = Vec::with_capacity(samples);
    for i in 0..samples {
        let k = min_k + (max_k - min_k) * i as f64 / (samples - 1) as f64;
        strikes.push(k);
        vols.push(surface.vol(k));
    }

    SmileCurve {
        strikes,
        vols,
        knot_strikes: knots.to_vec(),
        knot_vols: surface.vols().to_vec(),
        knot_labels: KNOT_LABELS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Terminal payoff of the structure at each sampled spot level. The strike
/// grid doubles as the spot grid, matching the smile curve's range.
fn sample_payoff_curve(
    structure: StructureKind,
    k_low: f64,
    k_high: f64,
    spots: &[f64],
) -> PayoffCurve {
    let payoffs = spots
        .iter()
        .map(|&s| match structure {
            StructureKind::Call => (s - k_low).max(0.0),
            StructureKind::Put => (k_low - s).max(0.0),
            StructureKind::Strangle => (k_low - s).max(0.0) + (s - k_high).max(0.0),
            StructureKind::RiskReversal => (s - k_high).max(0.0) - (k_low - s).max(0.0),
        })
        .collect();

    PayoffCurve {
        spots: spots.to_vec(),
        payoffs,
    }
}
