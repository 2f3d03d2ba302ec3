//! Engine tuning knobs shared by the strike solver, the sensitivity engine
//! and the chart sampling. Defaults reproduce the standard behaviour; all
//! fields can be overridden individually from TOML when the `serde` feature
//! is enabled.

/// Main configuration struct for the pricing engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EngineConfig {
    /// Convergence tolerance for the bracketed strike solver
    #[cfg_attr(feature = "serde", serde(default = "default_solver_tol"))]
    pub solver_tol: f64,

    /// Lower strike bracket as a multiple of the forward
    #[cfg_attr(feature = "serde", serde(default = "default_bracket_lo_mult"))]
    pub bracket_lo_mult: f64,

    /// Upper strike bracket as a multiple of the forward
    #[cfg_attr(feature = "serde", serde(default = "default_bracket_hi_mult"))]
    pub bracket_hi_mult: f64,

    /// Quote bump size for finite-difference sensitivities (1e-4 = one
    /// basis point of volatility)
    #[cfg_attr(feature = "serde", serde(default = "default_quote_bump"))]
    pub quote_bump: f64,

    /// Number of samples on the reported smile and payoff curves
    #[cfg_attr(feature = "serde", serde(default = "default_curve_samples"))]
    pub curve_samples: usize,

    /// Curve range start as a multiple of the lowest smile knot
    #[cfg_attr(feature = "serde", serde(default = "default_curve_lo_mult"))]
    pub curve_lo_mult: f64,

    /// Curve range end as a multiple of the highest smile knot
    #[cfg_attr(feature = "serde", serde(default = "default_curve_hi_mult"))]
    pub curve_hi_mult: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver_tol: default_solver_tol(),
            bracket_lo_mult: default_bracket_lo_mult(),
            bracket_hi_mult: default_bracket_hi_mult(),
            quote_bump: default_quote_bump(),
            curve_samples: default_curve_samples(),
            curve_lo_mult: default_curve_lo_mult(),
            curve_hi_mult: default_curve_hi_mult(),
        }
    }
}

#[cfg(feature = "serde")]
impl EngineConfig {
    /// Parse a configuration from a TOML document. Missing fields fall back
    /// to their defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

fn default_solver_tol() -> f64 {
    1e-10
}

fn default_bracket_lo_mult() -> f64 {
    0.1
}

fn default_bracket_hi_mult() -> f64 {
    5.0
}

fn default_quote_bump() -> f64 {
    1e-4
}

fn default_curve_samples() -> usize {
    50
}

fn default_curve_lo_mult() -> f64 {
    0.8
}

fn default_curve_hi_mult() -> f64 {
    1.2
}
