//! Switching activity of the two clocks.

use clockgate_err::{self as err, Result};
use clockgate_sem::lit;
use clockgate_sem::traits::Step;
use clockgate_std::toggle_counter;

use crate::signal::Signal;
use crate::synth::Waveforms;

/// Number of value changes between consecutive samples.
///
/// Signals of fewer than two samples have no adjacent pair and never toggle.
#[must_use]
pub fn count_toggles(signal: &Signal) -> usize {
    let s = signal.samples();
    s.iter().zip(s.iter().skip(1)).filter(|(a, b)| a != b).count()
}

/// Same as [`count_toggles`], computed cycle by cycle by a `toggle_counter`.
#[must_use]
pub fn stream_toggles(signal: &Signal, trace: bool) -> usize {
    let mut node = toggle_counter::new(trace);
    signal
        .samples()
        .iter()
        .map(|&x| node.step(lit!(x)))
        .last()
        .and_then(|n| n.defined())
        .unwrap_or(0)
}

/// Toggle counts of both clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    /// Toggles of the clock without gating.
    pub without: usize,
    /// Toggles of the clock with gating.
    pub with: usize,
}

impl Toggles {
    /// Count the toggles of both clocks, checking the reduction against the
    /// streaming counter.
    ///
    /// # Errors
    /// If the two computations disagree.
    pub fn measure(waveforms: &Waveforms, trace: bool) -> Result<Self> {
        let without = checked("ungated clock toggles", waveforms.ungated(), trace)?;
        let with = checked("gated clock toggles", waveforms.gated(), trace)?;
        Ok(Self { without, with })
    }
}

/// Toggles of `signal`, agreed upon by both counters.
fn checked(what: &str, signal: &Signal, trace: bool) -> Result<usize> {
    let reduced = count_toggles(signal);
    let streamed = stream_toggles(signal, trace);
    if streamed != reduced {
        return Err(err::inconsistent(what, streamed, reduced));
    }
    Ok(reduced)
}
