//! Error message generation.
//!
//! Each kind of failure is one variant of [`Error`], and each variant has a
//! constructor function here whose arguments fill in the blanks of the
//! message through their [`Display`] impls.

use std::fmt::Display;

/// Shorthand for results of the clockgate suite.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Anything that went wrong during a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The run was configured with values it cannot honor.
    #[error("invalid configuration: {what}")]
    Config {
        /// Which setting, and why it was rejected.
        what: String,
    },
    /// A figure could not be drawn or written out.
    #[error("failed to render figure `{figure}`: {cause}")]
    Render {
        /// Name of the figure.
        figure: String,
        /// Message of the drawing backend.
        cause: String,
    },
    /// Writing to the outside world failed.
    #[error("failed to write {target}")]
    Io {
        /// What was being written.
        target: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Two computations of the same quantity disagree.
    #[error("inconsistent {what}: streaming gave {streamed}, reduction gave {reduced}")]
    Inconsistent {
        /// The quantity being computed.
        what: String,
        /// Result of the cycle-by-cycle node.
        streamed: usize,
        /// Result of the reduction over the whole sequence.
        reduced: usize,
    },
}

impl Error {
    /// The message of this error followed by the messages of all its sources,
    /// outermost first.
    #[must_use]
    pub fn chain(&self) -> Vec<String> {
        let mut msgs = vec![self.to_string()];
        let mut cur = std::error::Error::source(self);
        while let Some(e) = cur {
            msgs.push(e.to_string());
            cur = std::error::Error::source(e);
        }
        msgs
    }
}

/// Rejected configuration value.
pub fn config(what: impl Display) -> Error {
    Error::Config {
        what: what.to_string(),
    }
}

/// Failure of the drawing backend while producing `figure`.
pub fn render(figure: impl Display, cause: impl Display) -> Error {
    Error::Render {
        figure: figure.to_string(),
        cause: cause.to_string(),
    }
}

/// Failure to write `target`.
pub fn io(target: impl Display, source: std::io::Error) -> Error {
    Error::Io {
        target: target.to_string(),
        source,
    }
}

/// Disagreement between the streaming and the reduced computation of `what`.
pub fn inconsistent(what: impl Display, streamed: usize, reduced: usize) -> Error {
    Error::Inconsistent {
        what: what.to_string(),
        streamed,
        reduced,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_fill_blanks() {
        assert_eq!(
            config("cycles must be at least 1").to_string(),
            "invalid configuration: cycles must be at least 1"
        );
        assert_eq!(
            render("toggles", "font missing").to_string(),
            "failed to render figure `toggles`: font missing"
        );
        assert_eq!(
            inconsistent("gated toggles", 3, 2).to_string(),
            "inconsistent gated toggles: streaming gave 3, reduction gave 2"
        );
    }

    #[test]
    fn chain_includes_source() {
        let e = io(
            "report",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        assert_eq!(e.chain(), vec!["failed to write report", "pipe closed"]);
    }
}
