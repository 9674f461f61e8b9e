//! Sampled binary signals.

use std::fmt;

/// An immutable sequence of binary samples, one per clock cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signal {
    /// `true` is a high level.
    samples: Vec<bool>,
}

impl Signal {
    /// Build from `0`/`1` levels. Any nonzero level is high.
    #[must_use]
    pub fn from_levels(levels: &[u8]) -> Self {
        levels.iter().map(|&l| l != 0).collect()
    }

    /// Number of cycles covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no cycle is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in cycle order.
    #[must_use]
    pub fn samples(&self) -> &[bool] {
        &self.samples
    }

    /// Samples as `0`/`1` levels.
    #[must_use]
    pub fn levels(&self) -> Vec<u8> {
        self.samples.iter().map(|&s| u8::from(s)).collect()
    }
}

impl FromIterator<bool> for Signal {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// `[1, 0, 1, 0]`
impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, l) in self.levels().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{l}")?;
        }
        write!(f, "]")
    }
}
