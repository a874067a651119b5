// src/presenter.rs

//! Output sinks for query results
//!
//! A `Presenter` owns rendering only. The terminal and file sinks share one
//! implementation over `std::io::Write`.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

/// Text shown when an operation returned zero lines
pub const NO_RESULTS: &str = "(no results)";

/// Displays a sequence of text lines somewhere a user can read them
pub trait Presenter {
    fn render(&mut self, lines: &[String]) -> Result<()>;
}

/// Presenter writing one line per entry to any writer
pub struct WriterPresenter<W: Write> {
    writer: W,
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterPresenter<Stdout> {
    /// Render to the terminal
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterPresenter<BufWriter<File>> {
    /// Render into a file, replacing its contents
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    fn render(&mut self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            writeln!(self.writer, "{}", NO_RESULTS)?;
        }
        for line in lines {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Presenter that keeps every rendered batch, for tests and embedding hosts
#[derive(Debug, Default)]
pub struct CollectingPresenter {
    pub rendered: Vec<Vec<String>>,
}

impl Presenter for CollectingPresenter {
    fn render(&mut self, lines: &[String]) -> Result<()> {
        self.rendered.push(lines.to_vec());
        Ok(())
    }
}
