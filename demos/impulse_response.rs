//! Prints the impulse response and magnitude response of one filter design.
//!
//! Usage: cargo run --example impulse_response -- [type] [cutoff] [q] [gain_db]
//!
//! Defaults to a 0.1 cutoff Butterworth low-pass.

use biquad_filter::{Biquad, FilterParams, FilterType};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let filter_type: FilterType = args.first().map_or(Ok(FilterType::LowPass), |s| s.parse())?;
    let cutoff: f64 = args.get(1).map_or(Ok(0.1), |s| s.parse())?;
    let q: f64 = args.get(2).map_or(Ok(0.707), |s| s.parse())?;
    let gain: f64 = args.get(3).map_or(Ok(0.0), |s| s.parse())?;

    let mut filter = Biquad::try_from_params(FilterParams::new(filter_type, cutoff, q, gain))?;
    let c = filter.coefficients();

    println!("{} (cutoff: {}, Q: {}, gain: {} dB)\n", filter_type, cutoff, q, gain);
    println!(
        "Coefficients: a0={:.6} a1={:.6} a2={:.6} b1={:.6} b2={:.6}",
        c.a0, c.a1, c.a2, c.b1, c.b2
    );
    println!("Stable: {}\n", c.is_stable());

    println!("Impulse response:");
    for n in 0..16 {
        let input = if n == 0 { 1.0 } else { 0.0 };
        println!("  h[{:2}] = {:+.6}", n, filter.process(input));
    }

    println!("\nMagnitude response:");
    for i in 0..=10 {
        let frequency = 0.049 * i as f64 + 0.001;
        println!("  f={:.3}  {:+8.2} dB", frequency, c.magnitude_db_at(frequency));
    }

    Ok(())
}
