//! Random primitives.

use rand::Rng;

use clockgate_sem::macros::*;
use clockgate_sem::traits::Step;

/// Node that returns a random `bool` uniformly, one independent draw per
/// cycle.
///
/// The generator is supplied by the caller, so a seeded generator makes
/// the whole stream reproducible.
#[derive(Debug, Clone)]
pub struct random_enable<R> {
    /// Internal clock.
    __clock: usize,
    /// Print each step.
    __trace: bool,
    /// Source of the draws.
    rng: R,
}

impl<R: Rng> random_enable<R> {
    /// Draw from `rng`.
    pub fn new(rng: R, trace: bool) -> Self {
        Self {
            __clock: 0,
            __trace: trace,
            rng,
        }
    }
}

impl<R: Rng> Step for random_enable<R> {
    type Input = ();
    type Output = bool;
    fn step(&mut self, _: ty!()) -> ty!(bool) {
        let en = lit!(self.rng.gen::<bool>());
        node_trace!(self, "#{} () => random_enable(en={})", self.__clock, en);
        tick!(self);
        en
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clockgate_sem::traits::Trusted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draws(seed: u64, n: usize) -> Vec<Option<bool>> {
        let mut node = random_enable::new(StdRng::seed_from_u64(seed), false);
        (0..n).map(|_| node.step(()).trusted()).collect()
    }

    #[test]
    fn always_defined() {
        assert!(draws(7, 100).iter().all(Option::is_some));
    }

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(draws(0xC0FFEE, 64), draws(0xC0FFEE, 64));
    }

    #[test]
    fn both_values_occur() {
        let seen = draws(1, 200);
        assert!(seen.contains(&Some(true)));
        assert!(seen.contains(&Some(false)));
    }
}
