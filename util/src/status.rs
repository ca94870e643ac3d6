//! Process exit statuses shared by all commands

use std::process::ExitCode;

/// Outcome of a command, as reported to the calling shell
///
/// ```
/// use toolshed_util::status::Status;
///
/// assert_eq!(Status::Success.code(), 0);
/// assert_eq!(Status::Rejected.code(), 1);
/// assert_eq!(Status::FailSoft.code(), 111);
/// assert_eq!(Status::FailHard.code(), 127);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Everything went fine
    #[default]
    Success,
    /// The command ran, but (some of) its input did not pass a check
    Rejected,
    /// Temporary failure; trying again later may succeed
    FailSoft,
    /// Permanent failure, e.g. a usage error
    FailHard,
}

impl Status {
    /// Numeric exit code
    pub const fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Rejected => 1,
            Status::FailSoft => 111,
            Status::FailHard => 127,
        }
    }

    /// [Status::Success] if `ok`, else [Status::Rejected]
    pub const fn check(ok: bool) -> Self {
        match ok {
            true => Status::Success,
            false => Status::Rejected,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}
