use std::io::{self, BufWriter};

use anyhow::Context;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::isbn::{filter, Outcome, Tally};
use crate::{FailureExt, ToolshedError};

impl Command for cli::Isbn {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let tally = match self.isbns.is_empty() {
            true => {
                let out = BufWriter::new(io::stdout().lock());
                filter(io::stdin().lock(), out)
                    .context("cannot filter standard input")
                    .or_soft()?
            }
            false => {
                let mut tally = Tally::default();
                for isbn in self.isbns.iter() {
                    let outcome = Outcome::of(isbn.as_bytes());
                    match outcome {
                        Outcome::Passed => eprintln!("checksum passed: {isbn}"),
                        Outcome::Failed(c) => eprintln!("checksum failed: {isbn} (should be {c})"),
                        Outcome::Malformed => eprintln!("malformed ISBN: {isbn}"),
                    }
                    tally.record(outcome);
                }
                tally
            }
        };

        eprintln!("{tally}");
        Ok(Status::check(tally.all_passed()))
    }
}
