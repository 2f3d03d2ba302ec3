// Example: plot_smile.rs
// Builds a five-quote FX smile and produces an SVG comparing the market
// knots with the interpolated spline curve.
//
// Usage:
//     cargo run --example plot_smile
//
// The output image will be written to fx_smile.svg in the working directory.

use std::error::Error;

use plotters::prelude::*;
use fxsmile_lib::{
    price_structure, EngineConfig, FxSmileQuotes, PricingRequest, StrikeSpec, StructureKind,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Put-skewed smile with fat wings, 6 months out
    let request = PricingRequest {
        spot: 1.1000,
        domestic_rate: 0.03,
        forward: 1.1120,
        time_to_maturity: 0.5,
        quotes: FxSmileQuotes {
            atm: 0.085,
            rr_25: -0.012,
            st_25: 0.0025,
            rr_10: -0.020,
            st_10: 0.0080,
        },
        structure: StructureKind::Call,
        strike: StrikeSpec::Delta(0.25),
        second_strike: None,
    };

    let mut config = EngineConfig::default();
    config.curve_samples = 200;

    let output = price_structure(&request, &config)?;
    let smile = &output.smile;

    // Print the knot table before plotting
    println!("Smile knots:");
    for ((label, strike), vol) in smile
        .knot_labels
        .iter()
        .zip(smile.knot_strikes.iter())
        .zip(smile.knot_vols.iter())
    {
        println!("  {:<10} K = {:.4}  vol = {:.2}%", label, strike, vol * 100.0);
    }

    let curve: Vec<(f64, f64)> = smile
        .strikes
        .iter()
        .zip(smile.vols.iter())
        .map(|(&k, &v)| (k, v * 100.0))
        .collect();
    let knots: Vec<(f64, f64)> = smile
        .knot_strikes
        .iter()
        .zip(smile.knot_vols.iter())
        .map(|(&k, &v)| (k, v * 100.0))
        .collect();

    let min_strike = curve.first().map(|p| p.0).unwrap_or(0.0);
    let max_strike = curve.last().map(|p| p.0).unwrap_or(1.0);

    let min_vol = curve.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_vol = curve.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    // Add 5% padding to the range for better visualization
    let vol_range = max_vol - min_vol;
    let padding = vol_range * 0.05;
    let y_min = (min_vol - padding).max(0.0);
    let y_max = max_vol + padding;

    let root = SVGBackend::new("fx_smile.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "FX Volatility Smile | F={:.4}, t={:.2}y",
                output.forward, request.time_to_maturity
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_strike..max_strike, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Strike")
        .y_desc("Implied Vol (%)")
        .draw()?;

    // Interpolated spline curve
    chart
        .draw_series(vec![PathElement::new(curve, RED)])?
        .label("spline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED));

    // Market knots
    chart
        .draw_series(knots.iter().map(|pt| Circle::new(*pt, 4, BLUE.filled())))?
        .label("quotes")
        .legend(|(x, y)| Circle::new((x + 8, y), 4, BLUE.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    println!("Chart saved to fx_smile.svg");
    Ok(())
}
