//! Helpers shared by the toolshed commands
//!
//! Nothing in here knows about any particular tool; these are the chores
//! every small command line program has to do.

pub mod file;
pub mod fmt;
pub mod scan;
pub mod status;
