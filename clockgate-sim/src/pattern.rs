//! Enable pattern generation.

use rand::Rng;

use clockgate_sem::traits::Step;
use clockgate_std::random_enable;

use crate::signal::Signal;

/// Draw `cycles` independent, uniformly distributed enable flags from `rng`.
pub fn generate_enable<R: Rng + ?Sized>(cycles: usize, rng: &mut R, trace: bool) -> Signal {
    let mut node = random_enable::new(rng, trace);
    let enable: Signal = (0..cycles).map(|_| node.step(()).truth()).collect();
    tracing::debug!(%enable, "generated enable pattern");
    enable
}
