//! Run parameters.

use clockgate_err::{self as err, Result};

/// Number of simulated cycles when nothing else is requested.
pub const DEFAULT_CYCLES: usize = 20;

/// Everything that a run depends on besides its random draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of clock cycles.
    pub cycles: usize,
    /// Seed of the enable pattern generator, drawn from entropy if absent.
    pub seed: Option<u64>,
    /// Trace every node at every cycle.
    pub trace: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            seed: None,
            trace: false,
        }
    }
}

impl SimConfig {
    /// Reject settings that cannot produce a meaningful run.
    ///
    /// # Errors
    /// If there are no cycles to simulate.
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(err::config("cycles must be at least 1"));
        }
        Ok(())
    }
}
