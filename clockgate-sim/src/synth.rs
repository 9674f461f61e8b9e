//! Derivation of the ungated and gated clocks.

use clockgate_sem::lit;
use clockgate_sem::traits::Step;
use clockgate_std::{alternating_clock, gate};

use crate::signal::Signal;

/// Free-running clock over `cycles` cycles: high exactly on even cycles.
#[must_use]
pub fn ungated_clock(cycles: usize) -> Signal {
    (0..cycles).map(|i| i % 2 == 0).collect()
}

/// The three aligned signals of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveforms {
    /// Random enable pattern.
    enable: Signal,
    /// Clock without gating.
    ungated: Signal,
    /// Clock with gating.
    gated: Signal,
}

impl Waveforms {
    /// Run the clock and the gate in lockstep over every cycle of `enable`.
    #[must_use]
    pub fn synthesize(enable: Signal, trace: bool) -> Self {
        let mut clk = alternating_clock::new(trace);
        let mut clk_gate = gate::new(trace);
        let (ungated, gated): (Vec<bool>, Vec<bool>) = enable
            .samples()
            .iter()
            .map(|&en| {
                let c = clk.step(());
                let g = clk_gate.step((c, lit!(en)));
                (c.truth(), g.truth())
            })
            .unzip();
        Self {
            enable,
            ungated: ungated.into_iter().collect(),
            gated: gated.into_iter().collect(),
        }
    }

    /// Number of simulated cycles.
    #[must_use]
    pub fn cycles(&self) -> usize {
        self.enable.len()
    }

    /// Enable pattern.
    #[must_use]
    pub fn enable(&self) -> &Signal {
        &self.enable
    }

    /// Clock without gating.
    #[must_use]
    pub fn ungated(&self) -> &Signal {
        &self.ungated
    }

    /// Clock with gating.
    #[must_use]
    pub fn gated(&self) -> &Signal {
        &self.gated
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn free_running_clock() {
        assert_eq!(ungated_clock(5).levels(), vec![1, 0, 1, 0, 1]);
        assert!(ungated_clock(0).is_empty());
    }

    #[test]
    fn lockstep_matches_closed_form() {
        let w = Waveforms::synthesize(Signal::from_levels(&[1, 1, 0, 0, 1, 0, 1]), false);
        assert_eq!(w.ungated(), &ungated_clock(7));
        assert_eq!(w.gated().levels(), vec![1, 0, 0, 0, 1, 0, 1]);
        assert_eq!(w.cycles(), 7);
    }
}
