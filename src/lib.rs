//! Low power clock gating simulation.
//!
//! This crate gathers the members of the suite:
//! - [`err`]: the error type shared by all of them,
//! - [`sem`]: semantics of clocked streams and the macros to write nodes,
//! - [`nodes`]: random enables, clocks, gates and toggle counters,
//! - [`sim`]: the simulation pipeline and its report,
//! - [`plot`]: the figures and where they are presented,
//!
//! and [`logging`], the subscriber setup of the `clockgate` binary.

pub mod logging;

pub use clockgate_err as err;
pub use clockgate_plot as plot;
pub use clockgate_sem as sem;
pub use clockgate_sim as sim;
pub use clockgate_std as nodes;
