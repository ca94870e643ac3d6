use toolshed_util::status::Status;

use crate::config::Toolshed;
use crate::ToolshedError;

pub mod eol;
pub mod genconfig;
pub mod ieee754;
pub mod ipinfo;
pub mod isbn;
pub mod legi;
pub mod mklock;
pub mod mkpwd;
pub mod signals;
pub mod uxtime;
pub mod xorit;

/// A runnable tool, implemented by the argument structs in [crate::cli]
pub trait Command {
    fn run(self, config: &Toolshed) -> Result<Status, ToolshedError>;
}
