//! `clockgate`: simulate a free-running and a gated clock, print their
//! toggle counts and the power saved, and draw the figures.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use clockgate::err::Result;
use clockgate::logging;
use clockgate::plot::{self, Recorder, RenderSink, SvgSink};
use clockgate::sim::{SimConfig, Simulation, DEFAULT_CYCLES};

#[derive(Parser, Debug)]
#[command(name = "clockgate")]
#[command(about = "Low power clock gating simulation")]
#[command(version)]
struct Cli {
    /// Number of simulated clock cycles
    #[arg(short = 'n', long, default_value_t = DEFAULT_CYCLES)]
    cycles: usize,

    /// Seed of the enable pattern (drawn from entropy if absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory receiving the SVG figures
    #[arg(short, long, default_value = "plots")]
    out_dir: PathBuf,

    /// Build the figures without writing them
    #[arg(long)]
    no_plot: bool,

    /// Trace every node at every cycle
    #[arg(long)]
    trace: bool,
}

impl Cli {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            cycles: self.cycles,
            seed: self.seed,
            trace: self.trace,
        }
    }

    /// Sink receiving the figures: SVG files, or memory under `--no-plot`.
    fn sink(&self) -> Result<Box<dyn RenderSink>> {
        if self.no_plot {
            tracing::info!("figures kept in memory");
            Ok(Box::<Recorder>::default())
        } else {
            Ok(Box::new(SvgSink::new(&self.out_dir)?))
        }
    }
}

fn run<W: Write, S: RenderSink + ?Sized>(cli: &Cli, out: W, sink: &mut S) -> Result<()> {
    let sim = Simulation::run(&cli.sim_config())?;
    sim.report.write_to(out)?;
    plot::render(sink, &sim.waveforms, &sim.report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.trace);
    let outcome = cli
        .sink()
        .and_then(|mut sink| run(&cli, std::io::stdout().lock(), &mut *sink));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            let mut chain = e.chain().into_iter();
            if let Some(head) = chain.next() {
                eprintln!("error: {head}");
            }
            for cause in chain {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}
