use std::io::{self, BufWriter};

use anyhow::Context;
use log::debug;
use toolshed_util::file::fopen_r;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::eol::{convert, EolStyle};
use crate::{FailureExt, ToolshedError};

impl cli::Eol {
    /// The style selected by a flag, else the configured one
    fn style(&self, config: &Toolshed) -> EolStyle {
        match (self.unix, self.mac, self.dos) {
            (true, _, _) => EolStyle::Unix,
            (_, true, _) => EolStyle::Mac,
            (_, _, true) => EolStyle::Dos,
            _ => config.eol.style,
        }
    }
}

impl Command for cli::Eol {
    fn run(self, config: &Toolshed) -> Result<Status, ToolshedError> {
        let style = self.style(config);
        debug!("converting line ends to {style:?}");

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        if self.files.is_empty() {
            convert(io::stdin().lock(), &mut out, style)
                .context("cannot convert standard input")
                .or_soft()?;
            return Ok(Status::Success);
        }

        for path in self.files.iter() {
            let file = fopen_r(path)
                .with_context(|| format!("cannot open {path:?}"))
                .or_soft()?;
            let written = convert(file, &mut out, style)
                .with_context(|| format!("cannot convert {path:?}"))
                .or_soft()?;
            debug!("{path:?}: {written} bytes written");
        }

        Ok(Status::Success)
    }
}
