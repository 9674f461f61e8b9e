//! Switching activity.

use clockgate_sem::macros::*;
use clockgate_sem::registers::Pre;
use clockgate_sem::traits::Step;

/// Running count of the value changes of its input.
///
/// ```ml
/// node toggle_counter(x : bool) returns (n : count);
/// let n = 0 -> pre n + (if x <> pre x then 1 else 0); tel;
/// ```
/// The output at cycle `k` is the number of toggles among the first `k + 1`
/// samples, so after the last sample it is the toggle count of the whole
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct toggle_counter {
    /// Internal clock.
    __clock: usize,
    /// Print each step.
    __trace: bool,
    /// Previous input.
    x: Pre<bool>,
    /// Previous output.
    n: Pre<usize>,
}

impl toggle_counter {
    /// Fresh counter, optionally tracing each step.
    pub fn new(trace: bool) -> Self {
        Self {
            __trace: trace,
            ..Self::default()
        }
    }
}

impl Step for toggle_counter {
    type Input = bool;
    type Output = usize;
    fn step(&mut self, x: ty!(bool)) -> ty!(count) {
        let toggled = ifx!((x ^ pre!(self; x)) then { lit!(1) } else { lit!(0) });
        let n = later!(self <~ 0; lit!(0), pre!(self; n) + toggled);
        node_trace!(self, "#{} (x={}) => toggle_counter(n={})", self.__clock, x, n);
        update!(self, x);
        update!(self, n);
        tick!(self);
        n
    }
}
