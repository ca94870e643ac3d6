use log::debug;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::pwd::{generate, DEFAULT_PATTERN};
use crate::{FailureExt, ToolshedError};

/// Environment variable with the default pattern
pub const PATTERN_VAR: &str = "MKPWDSPEC";

const USAGE: &str = "Usage: toolshed mkpwd [-N NUM] [-D] [-s LETTER=CHARS]... [PATTERN]";

impl cli::Mkpwd {
    /// Command line, then environment, then config file, then built-in
    fn pattern(&self, config: &Toolshed) -> String {
        self.pattern
            .clone()
            .or_else(|| std::env::var(PATTERN_VAR).ok())
            .or_else(|| config.mkpwd.pattern.clone())
            .unwrap_or_else(|| DEFAULT_PATTERN.to_owned())
    }
}

impl Command for cli::Mkpwd {
    fn run(self, config: &Toolshed) -> Result<Status, ToolshedError> {
        let mut alphabets = config.mkpwd.alphabets().or_hard()?;
        for def in self.alphabets.iter() {
            alphabets
                .set_from_str(def)
                .map_err(|e| ToolshedError::usage(e.to_string(), USAGE))?;
        }

        if self.debug {
            for (name, chars) in alphabets.iter() {
                eprintln!("{name}: {chars}");
            }
        }

        let pattern = self.pattern(config);
        let count = self.count.or(config.mkpwd.count).unwrap_or(1);
        debug!("generating {count} passwords from {pattern:?}");

        let mut rng = rand::thread_rng();
        for _ in 0..count {
            println!("{}", generate(&alphabets, &pattern, &mut rng));
        }

        Ok(Status::Success)
    }
}
