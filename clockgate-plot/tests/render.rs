use clockgate_plot::figure::Figure;
use clockgate_plot::{render, Recorder, SvgSink};
use clockgate_sim::{Report, Signal, Toggles, Waveforms};

fn sample_run() -> (Waveforms, Report) {
    let w = Waveforms::synthesize(Signal::from_levels(&[1, 0, 1, 0, 0, 1]), false);
    let t = Toggles::measure(&w, false).unwrap();
    (w, Report::new(t))
}

#[test]
fn bar_chart_comes_first() {
    let (w, r) = sample_run();
    let mut rec = Recorder::default();
    render(&mut rec, &w, &r).unwrap();
    let names: Vec<_> = rec.figures.iter().map(Figure::name).collect();
    assert_eq!(names, vec!["toggles", "waveforms"]);
}

#[test]
fn bar_chart_contents() {
    let (w, r) = sample_run();
    let mut rec = Recorder::default();
    render(&mut rec, &w, &r).unwrap();
    let Some(Figure::Toggles(chart)) = rec.figures.first() else {
        panic!("first figure is not the bar chart");
    };
    assert_eq!(chart.title, "Low Power Clock Gating Simulation");
    let bars: Vec<_> = chart
        .bars
        .iter()
        .map(|b| (b.label.as_str(), b.value))
        .collect();
    assert_eq!(
        bars,
        vec![("Without Gating", r.toggles.without), ("With Gating", r.toggles.with)]
    );
}

#[test]
fn panels_contents() {
    let (w, r) = sample_run();
    let mut rec = Recorder::default();
    render(&mut rec, &w, &r).unwrap();
    let Some(Figure::Waveforms(stack)) = rec.figures.get(1) else {
        panic!("second figure is not the waveform stack");
    };
    let titles: Vec<_> = stack.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Enable Signal (Random Activity)",
            "Clock Signal Without Gating",
            "Clock Signal With Gating (Low Power Mode)",
        ]
    );
    let levels: Vec<_> = stack.panels.iter().map(|p| p.levels.clone()).collect();
    assert_eq!(
        levels,
        vec![
            w.enable().levels(),
            w.ungated().levels(),
            w.gated().levels(),
        ]
    );
    let x_descs: Vec<_> = stack.panels.iter().map(|p| p.x_desc.is_some()).collect();
    assert_eq!(x_descs, vec![false, false, true]);
}

#[test]
fn svg_sink_writes_both_figures() {
    let (w, r) = sample_run();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plots");
    let mut sink = SvgSink::new(&out).unwrap();
    render(&mut sink, &w, &r).unwrap();
    for name in ["toggles.svg", "waveforms.svg"] {
        let svg = std::fs::read_to_string(out.join(name)).unwrap();
        assert!(svg.contains("<svg"), "{name} is not an svg document");
    }
}

#[test]
fn svg_sink_needs_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("occupied");
    std::fs::write(&file, "not a directory").unwrap();
    assert!(SvgSink::new(&file).is_err());
}
