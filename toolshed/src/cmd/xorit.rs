use std::io::{self, BufWriter, Read};

use anyhow::{anyhow, Context};
use log::debug;
use toolshed_util::file::fopen_r;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::xor::{xor_stream, Xor};
use crate::{FailureExt, ToolshedError};

/// Key used when neither a key string nor a key file is given
const DEFAULT_KEY: &[u8] = &[0xff];

impl cli::Xorit {
    fn key(&self) -> Result<Vec<u8>, ToolshedError> {
        if let Some(key) = &self.key {
            return Ok(key.as_bytes().to_vec());
        }
        let Some(path) = &self.key_file else {
            return Ok(DEFAULT_KEY.to_vec());
        };

        let mut key = Vec::new();
        fopen_r(path)
            .and_then(|mut f| f.read_to_end(&mut key))
            .with_context(|| format!("cannot read key file {path:?}"))
            .or_soft()?;
        Ok(key)
    }
}

impl Command for cli::Xorit {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let key = self.key()?;
        let mut xor = Xor::new(&key)
            .ok_or_else(|| ToolshedError::Hard(anyhow!("the key must be at least one byte long")))?;
        debug!("xoring with a key of {} bytes", key.len());

        let out = BufWriter::new(io::stdout().lock());
        let counts = xor_stream(io::stdin().lock(), out, &mut xor)
            .context("cannot xor standard input")
            .or_soft()?;

        if self.verbose {
            eprintln!(
                "key length {}, {} bytes read, {} bytes written",
                key.len(),
                counts.read,
                counts.written
            );
        }
        Ok(Status::Success)
    }
}
