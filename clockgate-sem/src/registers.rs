//! Stateful expressions

use std::fmt;

use crate::nillable::{Nil, Nillable};

/// A device that remembers the value a stream had at the previous cycle.
///
/// Reading it before anything was stored yields `Nil`, which is exactly
/// the semantics of `pre x` at the first instant.
#[derive(Debug, Clone, Copy)]
pub struct Pre<T> {
    /// Sample of the previous cycle.
    last: Nillable<T>,
}

impl<T> Default for Pre<T> {
    fn default() -> Self {
        Self { last: Nil }
    }
}

impl<T: Copy> Pre<T> {
    /// The value stored during the previous cycle.
    pub fn get(&self) -> Nillable<T> {
        self.last
    }

    /// Store the value of the current cycle, forgetting the previous one.
    pub fn set(&mut self, t: Nillable<T>) {
        self.last = t;
    }
}

impl<T: fmt::Display> fmt::Display for Pre<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.last)
    }
}
