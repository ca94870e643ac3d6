use anyhow::anyhow;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config;
use crate::{FailureExt, ToolshedError};

impl Command for cli::GenConfig {
    fn run(self, _: &config::Toolshed) -> Result<Status, ToolshedError> {
        if !self.force && self.config_file.exists() {
            return Err(ToolshedError::Hard(anyhow!(
                "config file {:?} already exists",
                self.config_file
            )));
        }

        config::Toolshed::example_config()
            .store(&self.config_file)
            .or_hard()?;
        log::info!("wrote example configuration to {:?}", self.config_file);
        Ok(Status::Success)
    }
}
