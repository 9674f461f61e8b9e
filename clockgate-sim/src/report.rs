//! Summary of a run.

use std::fmt;
use std::io::Write;

use clockgate_err::{self as err, Result};

use crate::toggles::Toggles;

/// Relative reduction of switching activity obtained by gating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerSaving {
    /// Percentage of the ungated toggles that gating removed.
    Saved(f64),
    /// The ungated clock never toggled, so there is nothing to compare to.
    Undefined,
}

impl PowerSaving {
    /// `100 * (without - with) / without`, `Undefined` when `without` is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "toggle counts are far below 2^52")]
    pub fn between(toggles: Toggles) -> Self {
        if toggles.without == 0 {
            return Self::Undefined;
        }
        let without = toggles.without as f64;
        let with = toggles.with as f64;
        Self::Saved(100.0 * (without - with) / without)
    }

    /// The percentage, if defined.
    #[must_use]
    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Saved(p) => Some(p),
            Self::Undefined => None,
        }
    }
}

/// `66.67%`
impl fmt::Display for PowerSaving {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Saved(p) => write!(f, "{p:.2}%"),
            Self::Undefined => write!(f, "undefined (ungated clock never toggled)"),
        }
    }
}

/// Toggle counts and the saving derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Toggles of both clocks.
    pub toggles: Toggles,
    /// Derived saving.
    pub saving: PowerSaving,
}

impl Report {
    /// Derive the saving from the counts.
    #[must_use]
    pub fn new(toggles: Toggles) -> Self {
        Self {
            toggles,
            saving: PowerSaving::between(toggles),
        }
    }

    /// Emit the three report lines.
    ///
    /// # Errors
    /// If `out` rejects the write.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "{self}")
            .and_then(|()| out.flush())
            .map_err(|e| err::io("report", e))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Clock without gating toggled: {} times",
            self.toggles.without
        )?;
        writeln!(f, "Clock with gating toggled: {} times", self.toggles.with)?;
        writeln!(f, "Power saved: {}", self.saving)
    }
}
