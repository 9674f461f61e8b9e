//! Properties of the gated clock that must hold for every enable pattern.

use rand::rngs::StdRng;
use rand::SeedableRng;

use clockgate_sim::pattern::generate_enable;
use clockgate_sim::synth::ungated_clock;
use clockgate_sim::toggles::{count_toggles, stream_toggles};
use clockgate_sim::{
    simulate, PowerSaving, Report, SimConfig, Signal, Simulation, Toggles, Waveforms,
};

fn run(levels: &[u8]) -> (Waveforms, Report) {
    let w = Waveforms::synthesize(Signal::from_levels(levels), false);
    let t = Toggles::measure(&w, false).unwrap();
    (w, Report::new(t))
}

/// Every enable pattern of length `n`, as levels.
fn all_patterns(n: usize) -> impl Iterator<Item = Vec<u8>> {
    (0u32..1 << n).map(move |bits| (0..n).map(|i| u8::from(bits & (1 << i) != 0)).collect())
}

#[test]
fn all_enabled() {
    let (w, r) = run(&[1, 1, 1, 1]);
    assert_eq!(w.ungated().levels(), vec![1, 0, 1, 0]);
    assert_eq!(w.gated().levels(), vec![1, 0, 1, 0]);
    assert_eq!(r.toggles, Toggles { without: 3, with: 3 });
    assert_eq!(r.saving.to_string(), "0.00%");
}

#[test]
fn all_disabled() {
    let (w, r) = run(&[0, 0, 0, 0]);
    assert_eq!(w.gated().levels(), vec![0, 0, 0, 0]);
    assert_eq!(r.toggles.with, 0);
    assert_eq!(r.saving.to_string(), "100.00%");
}

#[test]
fn every_other_enabled() {
    // Enabled exactly where the clock is high: nothing is gated away.
    let (w, r) = run(&[1, 0, 1, 0]);
    assert_eq!(w.ungated().levels(), vec![1, 0, 1, 0]);
    assert_eq!(w.gated().levels(), vec![1, 0, 1, 0]);
    assert_eq!(r.toggles, Toggles { without: 3, with: 3 });
    assert_eq!(r.saving.to_string(), "0.00%");
}

#[test]
fn first_cycle_enabled() {
    let (w, r) = run(&[1, 0, 0, 0]);
    assert_eq!(w.gated().levels(), vec![1, 0, 0, 0]);
    assert_eq!(r.toggles, Toggles { without: 3, with: 1 });
    let p = r.saving.percent().unwrap();
    assert!((p - 66.666_666).abs() < 1e-3, "{p}");
    assert_eq!(r.saving.to_string(), "66.67%");
}

#[test]
fn constant_signals_never_toggle() {
    for n in 0..12 {
        assert_eq!(count_toggles(&Signal::from_levels(&vec![0; n])), 0);
        assert_eq!(count_toggles(&Signal::from_levels(&vec![1; n])), 0);
    }
}

#[test]
fn alternating_signals_toggle_every_cycle() {
    for n in 2..40 {
        assert_eq!(count_toggles(&ungated_clock(n)), n - 1);
        let inverted: Signal = ungated_clock(n).samples().iter().map(|s| !s).collect();
        assert_eq!(count_toggles(&inverted), n - 1);
    }
}

#[test]
fn gating_never_adds_toggles_exhaustive() {
    for enable in all_patterns(10) {
        let (w, r) = run(&enable);
        assert!(r.toggles.with <= r.toggles.without, "{}", w.enable());
        assert!(r.toggles.without <= w.cycles() - 1);
    }
}

#[test]
fn gating_never_adds_toggles_random() {
    for seed in 0..500u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 2 + (seed as usize % 60);
        let enable = generate_enable(n, &mut rng, false);
        let w = Waveforms::synthesize(enable, false);
        assert_eq!(w.enable().len(), n);
        assert_eq!(w.ungated().len(), n);
        assert_eq!(w.gated().len(), n);
        let with = count_toggles(w.gated());
        let without = count_toggles(w.ungated());
        assert!(with <= without, "seed {seed}: {}", w.enable());
        assert_eq!(with, stream_toggles(w.gated(), false));
    }
}

#[test]
fn gated_follows_enable() {
    for enable in all_patterns(8) {
        let (w, _) = run(&enable);
        for ((&en, &clk), &g) in w
            .enable()
            .samples()
            .iter()
            .zip(w.ungated().samples())
            .zip(w.gated().samples())
        {
            assert!(!g || clk, "gated may only be high where the clock is");
            if !en {
                assert!(!g, "gated must be low while disabled");
            } else {
                assert_eq!(g, clk);
            }
        }
    }
}

#[test]
fn single_cycle_saving_is_undefined() {
    let config = SimConfig {
        cycles: 1,
        seed: Some(5),
        trace: false,
    };
    let sim = Simulation::run(&config).unwrap();
    assert_eq!(sim.report.toggles, Toggles { without: 0, with: 0 });
    assert_eq!(sim.report.saving, PowerSaving::Undefined);
    assert!(sim
        .report
        .to_string()
        .ends_with("Power saved: undefined (ungated clock never toggled)\n"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SimConfig {
        seed: Some(0xC0FFEE),
        ..SimConfig::default()
    };
    let a = Simulation::run(&config).unwrap();
    let b = Simulation::run(&config).unwrap();
    assert_eq!(a.seed, 0xC0FFEE);
    assert_eq!(a.waveforms, b.waveforms);
    assert_eq!(a.report, b.report);
    assert_eq!(a.waveforms.cycles(), 20);
}

#[test]
fn zero_cycles_is_a_config_error() {
    let config = SimConfig {
        cycles: 0,
        ..SimConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(simulate(&config, &mut rng).is_err());
}
