//! Figures of a clock gating run.
//!
//! [`render`] builds the two figures of a run and hands them, bar chart
//! first, to a [`RenderSink`]. Sinks decide what presenting means:
//! [`SvgSink`] draws them with `plotters`, [`Recorder`] only keeps them.

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

pub mod draw;
pub mod figure;
pub mod sink;

use clockgate_err::Result;
use clockgate_sim::{Report, Waveforms};

pub use figure::{mid_step_path, toggle_chart, waveform_panels, Figure};
pub use sink::{Recorder, RenderSink, SvgSink};

// Only used by integration tests.
#[cfg(test)]
use tempfile as _;

/// Present the toggle bar chart, then the waveform panels.
///
/// # Errors
/// The first failure of `sink`.
pub fn render<S: RenderSink + ?Sized>(
    sink: &mut S,
    waveforms: &Waveforms,
    report: &Report,
) -> Result<()> {
    sink.present(&Figure::Toggles(toggle_chart(report)))?;
    sink.present(&Figure::Waveforms(waveform_panels(waveforms)))
}
