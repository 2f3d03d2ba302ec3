// demos/price_demo.rs

//! Demonstration of structure pricing on a five-quote FX smile
//!
//! This example shows how to:
//! 1. Describe the market state and smile quotes
//! 2. Price a delta-quoted risk reversal end to end
//! 3. Read the resolved strikes, vega and quote sensitivities
//! 4. Compare against a single 25-delta call on the same smile

use anyhow::Result;
use fxsmile_lib::{
    price_structure, EngineConfig, FxSmileQuotes, PricingRequest, StrikeSpec, StructureKind,
};

fn main() -> Result<()> {
    println!("FX Structure Pricing Demo");
    println!("=========================");

    // EURUSD-style market: mildly put-skewed smile, 6 months out
    let quotes = FxSmileQuotes {
        atm: 0.085,
        rr_25: -0.012,
        st_25: 0.0025,
        rr_10: -0.020,
        st_10: 0.0080,
    };

    let request = PricingRequest {
        spot: 1.1000,
        domestic_rate: 0.03,
        forward: 1.1120,
        time_to_maturity: 0.5,
        quotes,
        structure: StructureKind::RiskReversal,
        strike: StrikeSpec::Delta(0.25),
        second_strike: None,
    };

    let config = EngineConfig::default();

    println!("Spot: {:.4}", request.spot);
    println!("Forward: {:.4}", request.forward);
    println!("Maturity: {:.2} years", request.time_to_maturity);
    println!(
        "Quotes: ATM {:.2}% | 25d RR {:.2}% ST {:.2}% | 10d RR {:.2}% ST {:.2}%",
        quotes.atm * 100.0,
        quotes.rr_25 * 100.0,
        quotes.st_25 * 100.0,
        quotes.rr_10 * 100.0,
        quotes.st_10 * 100.0
    );

    println!("\nStep 1: Pricing a 25-delta risk reversal...");
    let rr = price_structure(&request, &config)?;

    println!("  Put strike (short):  {:.4}", rr.strike);
    println!(
        "  Call strike (long):  {:.4}",
        rr.second_strike.unwrap_or(rr.strike)
    );
    println!("  ATM strike:          {:.4}", rr.atm_strike);
    println!("  Price:               {:.6}", rr.price);
    println!("  Mean leg vol:        {:.2}%", rr.volatility * 100.0);
    println!("  Vega:                {:.6}", rr.vega);

    println!("\nStep 2: Quote sensitivities (price change per 1bp bump):");
    println!("{:<8} {:<14}", "Quote", "Sensitivity");
    println!("{}", "-".repeat(24));
    for (quote, value) in rr.sensitivities.by_quote() {
        println!("{:<8} {:<14.6}", quote.name(), value);
    }

    println!("\nStep 3: Pricing a single 25-delta call on the same smile...");
    let call_request = PricingRequest {
        structure: StructureKind::Call,
        ..request.clone()
    };
    let call = price_structure(&call_request, &config)?;

    println!("  Strike: {:.4}", call.strike);
    println!("  Vol:    {:.2}%", call.volatility * 100.0);
    println!("  Price:  {:.6}", call.price);
    println!("  Vega:   {:.6}", call.vega);

    println!("\nSmile knots:");
    for ((label, strike), vol) in call
        .smile
        .knot_labels
        .iter()
        .zip(call.smile.knot_strikes.iter())
        .zip(call.smile.knot_vols.iter())
    {
        println!("  {:<10} K = {:.4}  vol = {:.2}%", label, strike, vol * 100.0);
    }

    Ok(())
}
