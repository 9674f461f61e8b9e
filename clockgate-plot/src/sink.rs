//! Where figures end up.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use clockgate_err::{self as err, Result};

use crate::draw::draw;
use crate::figure::Figure;

/// Capability to present figures, on screen, on disk or elsewhere.
pub trait RenderSink {
    /// Present one figure. Failures are fatal to the run.
    ///
    /// # Errors
    /// If the figure could not be presented.
    fn present(&mut self, figure: &Figure) -> Result<()>;
}

/// Writes each figure as `<dir>/<name>.svg`.
#[derive(Debug, Clone)]
pub struct SvgSink {
    /// Output directory.
    dir: PathBuf,
}

impl SvgSink {
    /// Write into `dir`, creating it if needed.
    ///
    /// # Errors
    /// If the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| err::io(format!("directory {}", dir.display()), e))?;
        Ok(Self { dir })
    }

    /// Path that `figure` is written to.
    #[must_use]
    pub fn path_of(&self, figure: &Figure) -> PathBuf {
        self.dir.join(format!("{}.svg", figure.name()))
    }
}

impl RenderSink for SvgSink {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        let path = self.path_of(figure);
        let root = SVGBackend::new(&path, figure.size()).into_drawing_area();
        draw(&root, figure).map_err(|e| err::render(figure.name(), e))?;
        tracing::info!(figure = figure.name(), path = %path.display(), "figure written");
        Ok(())
    }
}

/// Keeps the figures in memory, in presentation order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Everything presented so far.
    pub figures: Vec<Figure>,
}

impl RenderSink for Recorder {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        tracing::debug!(figure = figure.name(), "figure recorded");
        self.figures.push(figure.clone());
        Ok(())
    }
}
