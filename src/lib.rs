//! # FxSmile-Lib: FX Option Pricing and Volatility Smile Construction
//!
//! `fxsmile-lib` prices vanilla and compound foreign-exchange option
//! structures (call, put, strangle, risk reversal) under the
//! Garman-Kohlhagen model, builds a single-maturity volatility smile from
//! the five standard FX market quotes, and reports price sensitivities to
//! each quote.
//!
//! ## Core Features
//!
//! - **Garman-Kohlhagen pricer**: price, spot delta and Black vega on the
//!   forward, with the foreign rate implied from the quoted forward
//! - **Five-quote smile**: ATM / 25d RR / 25d ST / 10d RR / 10d ST
//!   decomposed into strike-vol knots and interpolated with a natural cubic
//!   spline (flat extrapolation beyond the wings)
//! - **Delta-to-strike inversion**: closed-form at fixed vol, and
//!   smile-consistent via bracketed root search
//! - **Quote sensitivities**: one-sided finite differences with a full
//!   surface rebuild per bumped quote
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fxsmile_lib::{
//!     price_structure, EngineConfig, FxSmileQuotes, PricingRequest, StrikeSpec, StructureKind,
//! };
//!
//! let request = PricingRequest {
//!     spot: 1.10,
//!     domestic_rate: 0.03,
//!     forward: 1.112,
//!     time_to_maturity: 0.5,
//!     quotes: FxSmileQuotes {
//!         atm: 0.085,
//!         rr_25: -0.012,
//!         st_25: 0.0025,
//!         rr_10: -0.020,
//!         st_10: 0.0080,
//!     },
//!     structure: StructureKind::Call,
//!     strike: StrikeSpec::Delta(0.25),
//!     second_strike: None,
//! };
//!
//! let output = price_structure(&request, &EngineConfig::default())?;
//! println!("price {:.6} @ vol {:.4}", output.price, output.volatility);
//! println!("atm quote sensitivity: {:.4}", output.sensitivities.atm);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Design Notes
//!
//! The engine is fully synchronous and free of shared mutable state: pricer
//! and surface are immutable value objects created fresh per request, so
//! concurrent requests need no locking as long as instances are not shared
//! across call boundaries. The engine never logs; it returns values or
//! explicit errors and leaves rendering to its callers.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod pricer;
pub mod risk;
pub mod smile;
pub mod structures;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Engine configuration
pub use config::EngineConfig;

// Pricer and strike inversion
pub use pricer::{FxOptionPricer, OptionKind, StrikeSolveError};

// Smile construction and interpolation
pub use smile::{FxSmileQuotes, NaturalCubicSpline, QuoteKind, VolatilitySurface, KNOT_LABELS};

// Sensitivity engine
pub use risk::{model_sensitivities, position_price, position_vega, Leg, ModelSensitivities};

// Structure-level pricing
pub use structures::{
    price_structure, PayoffCurve, PricingOutput, PricingRequest, SmileCurve, StrikeSpec,
    StructureKind,
};
