//! Subscriber setup.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Target of the per-cycle events emitted by nodes.
pub const NODE_TARGET: &str = "clockgate::node";

/// Filter from `RUST_LOG` (default `info`), with node events forced to
/// `trace` when `trace` is set.
#[must_use]
pub fn filter(trace: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !trace {
        return filter;
    }
    match format!("{NODE_TARGET}=trace").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber, writing to stderr so that stdout only
/// carries the report.
pub fn init(trace: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    if let Err(e) = Registry::default().with(filter(trace)).with(fmt_layer).try_init() {
        eprintln!("failed to initialise tracing subscriber: {e}");
    }
}
