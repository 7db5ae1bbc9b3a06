use biquad_filter::{Biquad, BiquadFilter, Coefficients, FilterParams, FilterType, Signal, Sine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Runs `input` through `filter` for `settle` samples, then returns the RMS
/// of input and output over the next `window` samples.
fn steady_state_rms(filter: &mut Biquad, input: &mut Sine, settle: usize, window: usize) -> (f64, f64) {
    for _ in 0..settle {
        filter.process(input.next_sample());
    }

    let (mut in_sq, mut out_sq) = (0.0, 0.0);
    for _ in 0..window {
        let x = input.next_sample();
        let y = filter.process(x);
        in_sq += x * x;
        out_sq += y * y;
    }
    (
        (in_sq / window as f64).sqrt(),
        (out_sq / window as f64).sqrt(),
    )
}

fn settle_dc(filter: &mut Biquad, samples: usize) -> f64 {
    let mut output = 0.0;
    for _ in 0..samples {
        output = filter.process(1.0);
    }
    output
}

#[test]
fn test_lowpass_impulse_regression() {
    let mut filter = Biquad::with_params(FilterType::LowPass, 0.1, 0.707, 0.0);
    let c = filter.coefficients();
    assert!((c.a0 - 0.0675).abs() < 1e-4);

    let expected = [
        0.06745228281719011,
        0.21199779116098524,
        0.281910695783777,
        0.23470439486338512,
        0.15189512679775002,
        0.07673382405255404,
    ];

    let first = filter.process(1.0);
    assert_eq!(first, c.a0);

    let mut response = vec![first];
    response.extend((1..expected.len()).map(|_| filter.process(0.0)));

    for (n, (&actual, &wanted)) in response.iter().zip(expected.iter()).enumerate() {
        assert!(
            (actual - wanted).abs() < 1e-12,
            "sample {}: expected {}, got {}",
            n,
            wanted,
            actual
        );
    }
}

#[test]
fn test_default_filter_is_silent_on_silence() {
    let mut filter = Biquad::new();
    let mut buffer = vec![0.0; 48_000];
    filter.process_buffer(&mut buffer);
    assert!(buffer.iter().all(|&y| y == 0.0));
}

#[test]
fn test_lowpass_unity_dc_gain() {
    let mut rng = StdRng::seed_from_u64(0xb10ad);
    for _ in 0..25 {
        let cutoff = rng.gen_range(0.01..0.45);
        let q = rng.gen_range(0.5..4.0);

        let mut filter = Biquad::with_params(FilterType::LowPass, cutoff, q, 0.0);
        let output = settle_dc(&mut filter, 20_000);
        assert!(
            (output - 1.0).abs() < 1e-6,
            "cutoff={} q={}: DC output {}",
            cutoff,
            q,
            output
        );
    }
}

#[test]
fn test_one_pole_dc_gains() {
    for cutoff in [0.01, 0.1, 0.3, 0.45] {
        for kind in [FilterType::LowPassOnePole, FilterType::LowPassOnePoleOneZero] {
            let mut filter = Biquad::with_params(kind, cutoff, 0.707, 0.0);
            assert!((settle_dc(&mut filter, 5_000) - 1.0).abs() < 1e-9);
        }
        for kind in [FilterType::HighPassOnePole, FilterType::HighPassOnePoleOneZero] {
            let mut filter = Biquad::with_params(kind, cutoff, 0.707, 0.0);
            assert!(settle_dc(&mut filter, 5_000).abs() < 1e-9);
        }
    }
}

#[test]
fn test_highpass_blocks_dc() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let cutoff = rng.gen_range(0.01..0.45);
        let q = rng.gen_range(0.5..4.0);

        let mut filter = Biquad::with_params(FilterType::HighPass, cutoff, q, 0.0);
        let output = settle_dc(&mut filter, 20_000);
        assert!(
            output.abs() < 1e-6,
            "cutoff={} q={}: DC output {}",
            cutoff,
            q,
            output
        );
    }
}

#[test]
fn test_allpass_preserves_rms() {
    let mut rng = StdRng::seed_from_u64(42);
    // Whole numbers of periods fit in the 2000-sample window
    let probes = [0.01, 0.05, 0.125, 0.2, 0.25];

    for _ in 0..10 {
        let cutoff = rng.gen_range(0.02..0.45);
        let q = rng.gen_range(0.5..4.0);

        for frequency in probes {
            let mut filter = Biquad::with_params(FilterType::AllPass, cutoff, q, 0.0);
            let (rms_in, rms_out) =
                steady_state_rms(&mut filter, &mut Sine::new(frequency), 20_000, 2_000);
            assert!(
                (rms_out / rms_in - 1.0).abs() < 1e-6,
                "cutoff={} q={} f={}: gain {}",
                cutoff,
                q,
                frequency,
                rms_out / rms_in
            );
        }
    }
}

#[test]
fn test_peak_boost_and_cut_are_reciprocal_at_center() {
    let center = 0.05;
    for gain_db in [3.0, 6.0, 12.0, 18.0] {
        let v = 10f64.powf(gain_db / 20.0);

        let mut boost = Biquad::with_params(FilterType::Peak, center, 1.5, gain_db);
        let (rms_in, rms_out) = steady_state_rms(&mut boost, &mut Sine::new(center), 5_000, 2_000);
        assert!((rms_out / rms_in - v).abs() < 1e-6 * v);

        let mut cut = Biquad::with_params(FilterType::Peak, center, 1.5, -gain_db);
        let (rms_in, rms_out) = steady_state_rms(&mut cut, &mut Sine::new(center), 5_000, 2_000);
        assert!((rms_out / rms_in - 1.0 / v).abs() < 1e-6 / v);
    }
}

#[test]
fn test_reconfiguration_keeps_delay_energy() {
    let mut running = Biquad::with_params(FilterType::LowPass, 0.05, 0.707, 0.0);
    for _ in 0..10 {
        running.process(1.0);
    }
    let state = running.state();

    running.configure(FilterType::HighPass, 0.2, 0.707, 0.0);
    assert_eq!(running.state(), state);

    // The carried-over registers make the first output differ from a fresh unit
    let mut fresh = Biquad::with_params(FilterType::HighPass, 0.2, 0.707, 0.0);
    assert_ne!(running.process(0.0), fresh.process(0.0));

    running.reset();
    fresh.reset();
    assert_eq!(running.process(1.0), fresh.process(1.0));
}

#[test]
fn test_every_family_is_stable_over_usable_range() {
    let mut rng = StdRng::seed_from_u64(2024);

    for kind in FilterType::ALL {
        for _ in 0..20 {
            let cutoff = rng.gen_range(0.01..0.45);
            let q = rng.gen_range(0.5..4.0);
            let gain = rng.gen_range(-24.0..24.0);

            let coefficients = Coefficients::derive(kind, cutoff, q, gain);
            assert!(
                coefficients.is_stable(),
                "{} unstable at cutoff={} q={} gain={}",
                kind,
                cutoff,
                q,
                gain
            );

            let mut filter = Biquad::with_params(kind, cutoff, q, gain);
            for _ in 0..2_000 {
                let y = filter.process(rng.gen_range(-1.0..1.0));
                assert!(y.is_finite() && y.abs() < 1_000.0, "{} output {}", kind, y);
            }
        }
    }
}

#[test]
fn test_cascade_of_independent_units() {
    // Two identical sections in series square the magnitude response
    let single = Coefficients::derive(FilterType::LowPass, 0.05, 0.707, 0.0);
    let inner = BiquadFilter::lowpass(Sine::new(0.25), 0.05, 0.707);
    let mut cascade = BiquadFilter::lowpass(inner, 0.05, 0.707);

    let mut buffer = vec![0.0; 5_400];
    cascade.process(&mut buffer);

    // 400 samples is a whole number of periods; the input RMS there is 1/sqrt(2)
    let tail = &buffer[5_000..];
    let rms = (tail.iter().map(|y| y * y).sum::<f64>() / tail.len() as f64).sqrt();
    let gain = rms * 2f64.sqrt();

    let expected = single.magnitude_at(0.25).powi(2);
    assert!(
        (gain - expected).abs() < 1e-6 * expected,
        "expected {}, got {}",
        expected,
        gain
    );
}

#[test]
fn test_validated_configuration_from_names() -> anyhow::Result<()> {
    let kind: FilterType = "lowshelf".parse()?;
    let params = FilterParams::from_hz(kind, 200.0, 48_000.0, 0.707, -6.0);
    let mut filter = Biquad::try_from_params(params)?;

    let v = 10f64.powf(-6.0 / 20.0);
    assert!((settle_dc(&mut filter, 20_000) - v).abs() < 1e-6);

    filter.try_configure(FilterParams::new("peak".parse()?, 0.1, 2.0, 3.0))?;
    assert_eq!(filter.filter_type(), FilterType::Peak);

    assert!(filter.try_configure(FilterParams::new(kind, 0.1, -1.0, 0.0)).is_err());
    assert!("shelf".parse::<FilterType>().is_err());
    Ok(())
}
