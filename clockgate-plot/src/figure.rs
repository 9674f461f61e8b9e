//! Backend independent descriptions of the figures.
//!
//! Figures are plain data so that they can be inspected without drawing
//! anything, see `sink::Recorder`.

use plotters::style::{RGBColor, BLUE, GREEN, RED};

use clockgate_sim::{Report, Waveforms};

/// One bar of a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    /// Tick label under the bar.
    pub label: String,
    /// Height, also printed above the bar.
    pub value: usize,
    /// Fill color.
    pub color: RGBColor,
}

/// Comparison of toggle counts.
#[derive(Debug, Clone)]
pub struct BarChart {
    /// Caption.
    pub title: String,
    /// Vertical axis description.
    pub y_desc: String,
    /// Bars, left to right.
    pub bars: Vec<Bar>,
}

/// One signal against cycle index.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Caption.
    pub title: String,
    /// Vertical axis description.
    pub y_desc: String,
    /// Horizontal axis description, only on the bottom panel.
    pub x_desc: Option<String>,
    /// Samples as `0`/`1`.
    pub levels: Vec<u8>,
    /// Line color.
    pub color: RGBColor,
}

/// Vertically stacked panels sharing the cycle axis.
#[derive(Debug, Clone)]
pub struct StepPanels {
    /// Panels, top to bottom.
    pub panels: Vec<Panel>,
}

/// Anything a `RenderSink` can present.
#[derive(Debug, Clone)]
pub enum Figure {
    /// Toggle counts with and without gating.
    Toggles(BarChart),
    /// Enable, ungated and gated waveforms.
    Waveforms(StepPanels),
}

impl Figure {
    /// Short name, also used as file stem.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggles(_) => "toggles",
            Self::Waveforms(_) => "waveforms",
        }
    }

    /// Size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::Toggles(_) => (800, 400),
            Self::Waveforms(_) => (1000, 500),
        }
    }
}

/// Bar chart of the toggle counts of `report`.
#[must_use]
pub fn toggle_chart(report: &Report) -> BarChart {
    BarChart {
        title: "Low Power Clock Gating Simulation".into(),
        y_desc: "Clock Toggles (Power Consumption)".into(),
        bars: vec![
            Bar {
                label: "Without Gating".into(),
                value: report.toggles.without,
                color: RED,
            },
            Bar {
                label: "With Gating".into(),
                value: report.toggles.with,
                color: GREEN,
            },
        ],
    }
}

/// Timing diagram of the three signals of `waveforms`.
#[must_use]
pub fn waveform_panels(waveforms: &Waveforms) -> StepPanels {
    let panel = |title: &str, y_desc: &str, levels: Vec<u8>, color: RGBColor| Panel {
        title: title.into(),
        y_desc: y_desc.into(),
        x_desc: None,
        levels,
        color,
    };
    StepPanels {
        panels: vec![
            panel(
                "Enable Signal (Random Activity)",
                "Enable",
                waveforms.enable().levels(),
                BLUE,
            ),
            panel(
                "Clock Signal Without Gating",
                "Amplitude",
                waveforms.ungated().levels(),
                RED,
            ),
            Panel {
                x_desc: Some("Clock Cycles".into()),
                ..panel(
                    "Clock Signal With Gating (Low Power Mode)",
                    "Amplitude",
                    waveforms.gated().levels(),
                    GREEN,
                )
            },
        ],
    }
}

/// Polyline of a step plot whose transitions sit halfway between samples.
///
/// Sample `i` is held over `[i - 0.5, i + 0.5]`, clipped to the first and
/// last sample, and consecutive samples are joined by a vertical segment.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "cycle indices are small")]
pub fn mid_step_path(levels: &[u8]) -> Vec<(f64, f64)> {
    let mut path = Vec::with_capacity(2 * levels.len());
    let mut prev = None;
    for (i, &l) in levels.iter().enumerate() {
        let (x, y) = (i as f64, f64::from(l));
        match prev {
            None => path.push((x, y)),
            Some(p) => {
                path.push((x - 0.5, p));
                path.push((x - 0.5, y));
            }
        }
        prev = Some(y);
    }
    if let Some(y) = prev {
        path.push(((levels.len() - 1) as f64, y));
    }
    path
}
