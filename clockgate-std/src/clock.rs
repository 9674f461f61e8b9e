//! Clock sources and clock gates.

use clockgate_sem::macros::*;
use clockgate_sem::registers::Pre;
use clockgate_sem::traits::Step;

/// Free-running clock: high on even cycles, low on odd cycles.
///
/// ```ml
/// node alternating_clock() returns (clk : bool);
/// let clk = true -> not pre clk; tel;
/// ```
#[derive(Debug, Clone, Default)]
pub struct alternating_clock {
    /// Internal clock.
    __clock: usize,
    /// Print each step.
    __trace: bool,
    /// Previous output.
    clk: Pre<bool>,
}

impl alternating_clock {
    /// Fresh clock, optionally tracing each step.
    pub fn new(trace: bool) -> Self {
        Self {
            __trace: trace,
            ..Self::default()
        }
    }
}

impl Step for alternating_clock {
    type Input = ();
    type Output = bool;
    fn step(&mut self, _: ty!()) -> ty!(bool) {
        let clk = later!(self <~ 0; lit!(true), !pre!(self; clk));
        update!(self, clk);
        node_trace!(self, "#{} () => alternating_clock(clk={})", self.__clock, clk);
        tick!(self);
        clk
    }
}

/// Clock gate: lets the clock through while enabled, holds it low otherwise.
///
/// ```ml
/// node gate(clk, en : bool) returns (gclk : bool);
/// let gclk = if en then clk else false; tel;
/// ```
#[derive(Debug, Clone, Default)]
pub struct gate {
    /// Internal clock.
    __clock: usize,
    /// Print each step.
    __trace: bool,
}

impl gate {
    /// Fresh gate, optionally tracing each step.
    pub fn new(trace: bool) -> Self {
        Self {
            __trace: trace,
            ..Self::default()
        }
    }
}

impl Step for gate {
    type Input = (bool, bool);
    type Output = bool;
    fn step(&mut self, (clk, en): ty!(bool, bool)) -> ty!(bool) {
        let gclk = ifx!((en) then { clk } else { lit!(false) });
        node_trace!(self, "#{} (clk={}, en={}) => gate(gclk={})", self.__clock, clk, en, gclk);
        tick!(self);
        gclk
    }
}
