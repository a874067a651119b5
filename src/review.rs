// src/review.rs

//! One review action: parse a line, run one operation, render the result

use crate::error::Result;
use crate::log::LineParser;
use crate::operations::Operation;
use crate::packages::{PackageIdentity, QueryRunner};
use crate::presenter::Presenter;
use tracing::info;

/// Ties the parser, a query runner and a presenter together
pub struct Reviewer<R: QueryRunner> {
    parser: LineParser,
    runner: R,
}

/// What a review did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub identity: PackageIdentity,
    pub specifier: String,
    pub lines: usize,
}

impl<R: QueryRunner> Reviewer<R> {
    pub fn new(parser: LineParser, runner: R) -> Self {
        Self { parser, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Review `line` with `operation` and hand the output to `presenter`
    ///
    /// A malformed line fails before any query is issued.
    pub fn review<P: Presenter + ?Sized>(
        &self,
        line: &str,
        operation: Operation,
        presenter: &mut P,
    ) -> Result<ReviewOutcome> {
        let identity = self.parser.parse(line)?;
        let specifier = operation.specifier(&identity);
        info!("{} {}", operation, specifier);

        let lines = operation.run(&identity, &self.runner)?;
        presenter.render(&lines)?;

        Ok(ReviewOutcome {
            identity,
            specifier,
            lines: lines.len(),
        })
    }
}
