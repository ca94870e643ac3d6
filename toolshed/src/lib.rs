//! A box of small command line tools.
//!
//! Every tool is a subcommand of the `toolshed` binary; the [cli] module
//! parses the command line and [cmd] contains one runner per tool. The
//! actual work happens in the tool modules below, which know nothing about
//! the command line so they can be tested on their own.
//!
//! The codec behind `toolshed ieee754` lives in the `toolshed-binary64`
//! crate.

use thiserror::Error;
use toolshed_util::status::Status;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod describe;
pub mod eol;
pub mod ipinfo;
pub mod isbn;
pub mod legi;
pub mod pwd;
pub mod uxtime;
pub mod xor;

/// Why a command could not do its job
///
/// Each variant maps to an exit status, see [ToolshedError::status].
#[derive(Error, Debug)]
pub enum ToolshedError {
    /// The command line made no sense; the usage text is shown along with
    /// the message
    #[error("{message}\n{usage}")]
    Usage {
        message: String,
        usage: &'static str,
    },

    /// Temporary failure such as an unreadable file; exit status 111
    #[error("{0:#}")]
    Soft(anyhow::Error),

    /// Permanent failure; exit status 127
    #[error("{0:#}")]
    Hard(anyhow::Error),

    /// The command already told the user what went wrong
    #[error("exit status {}", .0.code())]
    Silent(Status),
}

impl ToolshedError {
    pub fn usage(message: impl Into<String>, usage: &'static str) -> Self {
        ToolshedError::Usage {
            message: message.into(),
            usage,
        }
    }

    /// Exit status to report for this error
    pub fn status(&self) -> Status {
        match self {
            ToolshedError::Usage { .. } | ToolshedError::Hard(_) => Status::FailHard,
            ToolshedError::Soft(_) => Status::FailSoft,
            ToolshedError::Silent(status) => *status,
        }
    }

    /// Whether the error still needs to be printed
    pub fn is_silent(&self) -> bool {
        matches!(self, ToolshedError::Silent(_))
    }
}

/// Turn any error into a [ToolshedError] of the desired severity
///
/// ```
/// use toolshed::{FailureExt, ToolshedError};
/// use toolshed_util::status::Status;
///
/// let res: Result<(), std::io::Error> = Err(std::io::ErrorKind::NotFound.into());
/// assert_eq!(res.or_soft().unwrap_err().status(), Status::FailSoft);
/// ```
pub trait FailureExt<T> {
    /// Failure that may go away when trying again later
    fn or_soft(self) -> Result<T, ToolshedError>;
    /// Failure that will not go away by itself
    fn or_hard(self) -> Result<T, ToolshedError>;
}

impl<T, E: Into<anyhow::Error>> FailureExt<T> for Result<T, E> {
    fn or_soft(self) -> Result<T, ToolshedError> {
        self.map_err(|e| ToolshedError::Soft(e.into()))
    }

    fn or_hard(self) -> Result<T, ToolshedError> {
        self.map_err(|e| ToolshedError::Hard(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_show_the_usage() {
        let err = ToolshedError::usage("too many arguments", "Usage: legi NUMBER");
        assert_eq!(err.to_string(), "too many arguments\nUsage: legi NUMBER");
        assert_eq!(err.status(), Status::FailHard);
        assert!(!err.is_silent());
    }

    #[test]
    fn anyhow_chains_are_flattened() {
        let err: Result<(), _> = Err(anyhow::anyhow!("inner")).map_err(|e| e.context("outer"));
        let err = err.or_hard().unwrap_err();
        assert_eq!(err.to_string(), "outer: inner");
        assert_eq!(err.status(), Status::FailHard);
    }

    #[test]
    fn silent_errors_keep_their_status() {
        let err = ToolshedError::Silent(Status::Rejected);
        assert!(err.is_silent());
        assert_eq!(err.status(), Status::Rejected);
    }
}
