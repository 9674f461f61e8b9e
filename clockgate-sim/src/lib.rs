//! Low power clock gating simulation.
//!
//! A run goes through the following steps, in exactly that order:
//!
//! 1. Pattern generation
//!     by `pattern::generate_enable`
//!
//!     (one independent uniform draw per cycle from the supplied generator)
//!
//! 2. Signal synthesis
//!     by `synth::Waveforms::synthesize`
//!
//!     (a free-running clock and a clock gated by the enable pattern,
//!     stepped in lockstep)
//!
//! 3. Toggle counting
//!     by `toggles::Toggles::measure`
//!
//!     (each count is computed twice, by a reduction over the sequence and
//!     by a streaming counter, and the two must agree)
//!
//! 4. Reporting
//!     by `report::Report`
//!
//! [`simulate`] performs all of them for a given generator, and
//! [`Simulation::run`] additionally takes care of seeding.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    variant_size_differences,
    clippy::allow_attributes_without_reason,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::missing_docs_in_private_items,
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unwrap_used,
    clippy::use_debug
)]

pub mod config;
pub mod pattern;
pub mod report;
pub mod signal;
pub mod synth;
pub mod toggles;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clockgate_err::Result;

pub use config::{SimConfig, DEFAULT_CYCLES};
pub use report::{PowerSaving, Report};
pub use signal::Signal;
pub use synth::Waveforms;
pub use toggles::Toggles;

/// Simulate one run drawing the enable pattern from `rng`.
///
/// # Errors
/// If the configuration is invalid or the toggle counters disagree.
pub fn simulate<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<(Waveforms, Report)> {
    config.validate()?;
    let enable = pattern::generate_enable(config.cycles, rng, config.trace);
    let waveforms = Waveforms::synthesize(enable, config.trace);
    let toggles = Toggles::measure(&waveforms, config.trace)?;
    let report = Report::new(toggles);
    tracing::info!(
        cycles = waveforms.cycles(),
        without = toggles.without,
        with = toggles.with,
        saving = %report.saving,
        "simulation finished"
    );
    Ok((waveforms, report))
}

/// Result of a seeded run.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed that reproduces this run.
    pub seed: u64,
    /// Signals of the run.
    pub waveforms: Waveforms,
    /// Counts and saving.
    pub report: Report,
}

impl Simulation {
    /// Seed a `StdRng` from the configuration (or from entropy) and simulate.
    ///
    /// # Errors
    /// See [`simulate`].
    pub fn run(config: &SimConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        tracing::info!(
            seed,
            explicit = config.seed.is_some(),
            "seeding enable pattern"
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let (waveforms, report) = simulate(config, &mut rng)?;
        Ok(Self {
            seed,
            waveforms,
            report,
        })
    }
}
