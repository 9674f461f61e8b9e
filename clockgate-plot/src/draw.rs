//! Drawing of figures on any `plotters` backend.

use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::figure::{mid_step_path, BarChart, Figure, StepPanels};

/// Outcome of drawing on backend `DB`.
pub type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Draw `figure` on the whole of `root` and flush it to the backend.
///
/// # Errors
/// Whatever the backend reports.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, figure: &Figure) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    match figure {
        Figure::Toggles(chart) => draw_bar_chart(root, chart)?,
        Figure::Waveforms(panels) => draw_step_panels(root, panels)?,
    }
    root.present()
}

/// Bars with their value printed half a unit above them.
#[allow(clippy::cast_precision_loss, reason = "toggle counts are small")]
#[allow(clippy::cast_possible_truncation, reason = "two bars")]
fn draw_bar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
) -> DrawResult<DB> {
    let highest = chart.bars.iter().map(|b| b.value).max().unwrap_or(0) as f64;
    let n = chart.bars.len() as u32;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..(highest + 1.5))?;

    let tick = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(i) => chart
            .bars
            .get(*i as usize)
            .map(|b| b.label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };
    ctx.configure_mesh()
        .disable_x_mesh()
        .light_line_style(BLACK.mix(0.1))
        .bold_line_style(BLACK.mix(0.3))
        .y_desc(&chart.y_desc)
        .x_label_formatter(&tick)
        .draw()?;

    ctx.draw_series(chart.bars.iter().zip(0u32..).map(|(bar, i)| {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value as f64),
            ],
            bar.color.filled(),
        );
        rect.set_margin(0, 0, 40, 40);
        rect
    }))?;

    let label =
        TextStyle::from(("sans-serif", 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().zip(0u32..).map(|(bar, i)| {
        Text::new(
            bar.value.to_string(),
            (SegmentValue::CenterOf(i), bar.value as f64 + 0.5),
            label.clone(),
        )
    }))?;
    Ok(())
}

/// One row per panel, each a mid step plot against cycle index.
#[allow(clippy::cast_precision_loss, reason = "cycle indices are small")]
fn draw_step_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    stack: &StepPanels,
) -> DrawResult<DB> {
    let rows = root.split_evenly((stack.panels.len().max(1), 1));
    for (area, panel) in rows.iter().zip(&stack.panels) {
        let last = panel.levels.len().saturating_sub(1) as f64;
        let mut ctx = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 16))
            .margin(8)
            .x_label_area_size(if panel.x_desc.is_some() { 35 } else { 20 })
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(last + 0.5), -0.1f64..1.1f64)?;

        let mut mesh = ctx.configure_mesh();
        mesh.y_desc(&panel.y_desc).y_labels(3);
        if let Some(x_desc) = &panel.x_desc {
            mesh.x_desc(x_desc);
        }
        mesh.draw()?;

        ctx.draw_series(LineSeries::new(mid_step_path(&panel.levels), &panel.color))?;
    }
    Ok(())
}
