use fxsmile_lib::{FxOptionPricer, FxSmileQuotes, VolatilitySurface};

fn build_surface(pricer: &FxOptionPricer, quotes: FxSmileQuotes) -> VolatilitySurface {
    VolatilitySurface::construct_smile(quotes, pricer).expect("smile construction failed")
}

/// With zero risk reversals and strangles every lookup returns the ATM vol,
/// including flat extrapolation beyond both wings.
#[test]
fn test_flat_quotes_give_flat_smile() {
    let pricer = FxOptionPricer::new(1.0, 0.0, 1.0, 1.0);
    let surface = build_surface(&pricer, FxSmileQuotes::flat(0.10));

    for strike in [0.5, 0.85, 0.95, 1.0, 1.05, 1.10, 1.5, 3.0] {
        let vol = surface.vol(strike);
        assert!(
            (vol - 0.10).abs() < 1e-9,
            "flat smile should return 10% at strike {}, got {}",
            strike,
            vol
        );
    }
}

/// Positive risk reversal lifts the call wing over the put wing: any strike
/// on the call side carries more vol than any strike on the put side.
#[test]
fn test_positive_rr_skews_call_side_up() {
    let pricer = FxOptionPricer::new(1.0, 0.0, 1.0, 1.0);
    let quotes = FxSmileQuotes {
        atm: 0.10,
        rr_25: 0.02,
        st_25: 0.0,
        rr_10: 0.02,
        st_10: 0.0,
    };
    let surface = build_surface(&pricer, quotes);

    let vol_low = surface.vol(0.90);
    let vol_high = surface.vol(1.10);
    assert!(
        vol_high > vol_low,
        "call-side vol {} should exceed put-side vol {}",
        vol_high,
        vol_low
    );
}

/// Positive strangle lifts both wings over the ATM level.
#[test]
fn test_positive_strangle_lifts_both_wings() {
    let pricer = FxOptionPricer::new(1.0, 0.0, 1.0, 1.0);
    let quotes = FxSmileQuotes {
        atm: 0.10,
        rr_25: 0.0,
        st_25: 0.005,
        rr_10: 0.0,
        st_10: 0.012,
    };
    let surface = build_surface(&pricer, quotes);

    let atm_vol = surface.vol(surface.atm_strike());
    let strikes = surface.strikes();
    let wing_put = surface.vol(strikes[0]);
    let wing_call = surface.vol(strikes[strikes.len() - 1]);

    assert!((atm_vol - 0.10).abs() < 1e-9);
    assert!((wing_put - 0.112).abs() < 1e-9, "10d put wing, got {}", wing_put);
    assert!((wing_call - 0.112).abs() < 1e-9, "10d call wing, got {}", wing_call);
}

/// Quote decomposition: vol(25d call) = atm + st + rr/2, vol(25d put) =
/// atm + st - rr/2, and the same algebra at 10 delta.
#[test]
fn test_wing_vol_decomposition() {
    let pricer = FxOptionPricer::new(100.0, 0.0, 100.0, 1.0);
    let quotes = FxSmileQuotes {
        atm: 0.10,
        rr_25: 0.02,
        st_25: 0.0,
        rr_10: 0.0,
        st_10: 0.0,
    };
    let surface = build_surface(&pricer, quotes);

    // Knots are sorted ascending: [10d put, 25d put, ATM, 25d call, 10d call]
    let vols = surface.vols();
    assert_eq!(vols.len(), 5);
    assert!((vols[1] - 0.09).abs() < 1e-12, "25d put vol, got {}", vols[1]);
    assert!((vols[2] - 0.10).abs() < 1e-12, "ATM vol, got {}", vols[2]);
    assert!((vols[3] - 0.11).abs() < 1e-12, "25d call vol, got {}", vols[3]);
}

/// The ATM strike comes from a 50-delta call inversion:
/// K = F * exp(0.5 * sigma^2 * T).
#[test]
fn test_atm_strike_fifty_delta_approximation() {
    let pricer = FxOptionPricer::new(100.0, 0.0, 100.0, 1.0);
    let surface = build_surface(&pricer, FxSmileQuotes::flat(0.10));

    let expected = 100.0 * (0.5 * 0.1_f64 * 0.1).exp();
    assert!(
        (surface.atm_strike() - expected).abs() < 1e-9,
        "ATM strike should be ~{}, got {}",
        expected,
        surface.atm_strike()
    );
}

/// Knot strikes are strictly increasing after the defensive sort, with put
/// wings below the ATM strike and call wings above.
#[test]
fn test_knots_sorted_and_ordered() {
    let pricer = FxOptionPricer::new(1.10, 0.03, 1.112, 0.5);
    let quotes = FxSmileQuotes {
        atm: 0.085,
        rr_25: -0.012,
        st_25: 0.0025,
        rr_10: -0.020,
        st_10: 0.0080,
    };
    let surface = build_surface(&pricer, quotes);

    let strikes = surface.strikes();
    assert_eq!(strikes.len(), 5);
    for window in strikes.windows(2) {
        assert!(
            window[1] > window[0],
            "knot strikes must be strictly increasing: {:?}",
            strikes
        );
    }
    assert!(strikes[0] < surface.atm_strike());
    assert!(strikes[4] > surface.atm_strike());
}

/// The spline interpolates the knots exactly; lookups at knot strikes
/// return the knot vols.
#[test]
fn test_lookup_reproduces_knots() {
    let pricer = FxOptionPricer::new(1.10, 0.03, 1.112, 0.5);
    let quotes = FxSmileQuotes {
        atm: 0.085,
        rr_25: -0.012,
        st_25: 0.0025,
        rr_10: -0.020,
        st_10: 0.0080,
    };
    let surface = build_surface(&pricer, quotes);

    for (strike, vol) in surface.strikes().iter().zip(surface.vols().iter()) {
        let looked_up = surface.vol(*strike);
        assert!(
            (looked_up - vol).abs() < 1e-12,
            "lookup at knot {} should return {}, got {}",
            strike,
            vol,
            looked_up
        );
    }
}

/// Extrapolation beyond the outermost knots is flat: the boundary knot's
/// vol is returned unchanged however far out the strike is.
#[test]
fn test_flat_extrapolation_beyond_wings() {
    let pricer = FxOptionPricer::new(1.0, 0.0, 1.0, 1.0);
    let quotes = FxSmileQuotes {
        atm: 0.10,
        rr_25: 0.02,
        st_25: 0.005,
        rr_10: 0.035,
        st_10: 0.015,
    };
    let surface = build_surface(&pricer, quotes);

    let strikes = surface.strikes();
    let vols = surface.vols();
    let (lo, hi) = (strikes[0], strikes[strikes.len() - 1]);

    for far_low in [lo * 0.9, lo * 0.5, lo * 0.01] {
        assert_eq!(surface.vol(far_low), vols[0]);
    }
    for far_high in [hi * 1.1, hi * 2.0, hi * 100.0] {
        assert_eq!(surface.vol(far_high), vols[vols.len() - 1]);
    }
}

/// Quotes are carried on the surface for the sensitivity engine to bump.
#[test]
fn test_quotes_round_trip() {
    let pricer = FxOptionPricer::new(1.0, 0.0, 1.0, 1.0);
    let quotes = FxSmileQuotes {
        atm: 0.10,
        rr_25: 0.01,
        st_25: 0.002,
        rr_10: 0.015,
        st_10: 0.005,
    };
    let surface = build_surface(&pricer, quotes);
    assert_eq!(surface.quotes(), &quotes);
}
