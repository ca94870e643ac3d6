//! Contains the code used to parse command line parameters for toolshed.
//!
//! [CliArgs::run] is called by the main function after the logger is set up;
//! it loads the configuration and hands over to the runner of the selected
//! tool in [crate::cmd].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use toolshed_util::status::Status;

use crate::cmd::Command;
use crate::config;
use crate::{FailureExt, ToolshedError};

/// Command line arguments to the toolshed binary.
///
/// Used for parsing with [clap].
#[derive(Parser, Debug)]
#[command(author, version, about, long_about, arg_required_else_help = true)]
pub struct CliArgs {
    /// Lowest log level to show
    #[arg(long = "log-level", value_name = "LOG_LEVEL", group = "log-level")]
    log_level: Option<log::LevelFilter>,

    /// Show verbose log output – sets log level to "info"
    #[arg(short, long, group = "log-level")]
    verbose: bool,

    /// Show less log output – sets log level to "warn"
    #[arg(short, long, group = "log-level")]
    quiet: bool,

    /// Read defaults from this TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The subcommand to be invoked
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Generate man pages for the CLI
    ///
    /// This option is used to generate man pages for toolshed in the specified
    /// directory and exit.
    #[clap(long, value_name = "out_dir")]
    pub generate_manpage: Option<PathBuf>,

    /// Generate completion file for a shell
    ///
    /// This option is used to generate completion files for the specified shell
    #[clap(long, value_name = "shell")]
    pub print_completions: Option<clap_complete::Shell>,
}

impl CliArgs {
    /// returns the log level filter set by CLI args
    /// returns `None` if the user did not specify any log level filter via CLI
    ///
    /// NOTE: the clap feature of ["argument groups"](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_3/index.html#argument-relations)
    /// ensures that the user can not specify more than one of the possible log level arguments.
    /// Note the `#[arg("group")]` in the [`CliArgs`] struct.
    pub fn get_log_level(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            return Some(log::LevelFilter::Info);
        }
        if self.quiet {
            return Some(log::LevelFilter::Warn);
        }
        if let Some(level_filter) = self.log_level {
            return Some(level_filter);
        }
        None
    }

    /// Load the configuration file named with `--config`, if any
    pub fn load_config(&self) -> anyhow::Result<config::Toolshed> {
        let Some(path) = &self.config else {
            return Ok(config::Toolshed::default());
        };
        let config = config::Toolshed::load(path)?;
        config.validate()?;
        log::debug!("loaded configuration from {path:?}");
        Ok(config)
    }

    /// Run the selected tool
    ///
    /// Without a subcommand there is nothing to do; clap already printed the
    /// help text if no arguments were given at all.
    pub fn run(self) -> Result<Status, ToolshedError> {
        let config = self.load_config().or_hard()?;

        match self.command {
            Some(CliCommand::Ieee754(cmd)) => cmd.run(&config),
            Some(CliCommand::Eol(cmd)) => cmd.run(&config),
            Some(CliCommand::Ipinfo(cmd)) => cmd.run(&config),
            Some(CliCommand::Isbn(cmd)) => cmd.run(&config),
            Some(CliCommand::Legi(cmd)) => cmd.run(&config),
            Some(CliCommand::Mklock(cmd)) => cmd.run(&config),
            Some(CliCommand::Mkpwd(cmd)) => cmd.run(&config),
            Some(CliCommand::Errno(cmd)) => cmd.run(&config),
            Some(CliCommand::Signo(cmd)) => cmd.run(&config),
            Some(CliCommand::Uxtime(cmd)) => cmd.run(&config),
            Some(CliCommand::Xorit(cmd)) => cmd.run(&config),
            Some(CliCommand::GenConfig(cmd)) => cmd.run(&config),
            None => Ok(Status::Success),
        }
    }
}

/// represents a command specified via CLI
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Make and split IEEE 754 double precision numbers
    ///
    /// With one argument, the real number is split into an integer mantissa
    /// and a binary exponent such that real = mantissa * 2 ^ exponent. With
    /// two arguments, mantissa and exponent are combined into the nearest
    /// double (rounding toward zero).
    Ieee754(Ieee754),

    /// Convert line ends
    ///
    /// LF, CR, CR LF and LF CR all count as one line end. The converted
    /// files are written to standard output, one after the other.
    Eol(Eol),

    /// Show information about an IPv4 subnet
    ///
    /// Prints netmask, hostmask, network and broadcast address of the subnet
    /// in dotted and binary form.
    Ipinfo(Ipinfo),

    /// Verify ISBN check digits
    ///
    /// Without arguments, every line of standard input is checked and
    /// printed with a tag: "OK", "!!" for malformed numbers, or "!" followed
    /// by the correct check digit.
    Isbn(Isbn),

    /// Compute or verify the check digit of an ETH Zurich student number
    Legi(Legi),

    /// Create a lock file
    ///
    /// Fails if the lock file already exists. The remaining arguments are
    /// written to the file, e.g. the PID of the lock holder.
    Mklock(Mklock),

    /// Generate random passwords
    ///
    /// The pattern consists of literal characters and of <n><letter> groups,
    /// each standing for n random characters from the alphabet named by the
    /// letter. Predefined alphabets: a (letters), b (lowercase letters),
    /// c (uppercase letters), d (digits) and z (letters and digits without
    /// easily confused ones). The pattern defaults to $MKPWDSPEC, the config
    /// file, or "8z".
    Mkpwd(Mkpwd),

    /// Describe an errno value
    Errno(Errno),

    /// Describe a signal number
    Signo(Signo),

    /// Show a Unix time stamp as local date and time
    Uxtime(Uxtime),

    /// XOR standard input with a repeating key
    ///
    /// The key is the given string, the contents of the key file, or a
    /// single 0xFF byte, in that order of preference.
    Xorit(Xorit),

    /// Generate a demo config file for toolshed
    ///
    /// The generated config file contains all options.
    GenConfig(GenConfig),
}

#[derive(Args, Debug)]
pub struct Ieee754 {
    /// Print the equation instead of just the result
    #[arg(short, long)]
    pub equation: bool,

    /// REAL, or MANTISSA EXPONENT
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

#[derive(Args, Debug)]
pub struct Eol {
    /// Unix line ends (LF)
    #[arg(short, long, group = "style")]
    pub unix: bool,

    /// Classic Mac OS line ends (CR)
    #[arg(short, long, group = "style")]
    pub mac: bool,

    /// DOS line ends (CR LF)
    #[arg(short, long, group = "style")]
    pub dos: bool,

    /// Files to convert; standard input if none
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct Ipinfo {
    /// IPv4 address, optionally with prefix length (10.0.0.1/8)
    pub address: String,

    /// Netmask (255.255.255.0) or hostmask (0.0.0.255)
    pub mask: Option<String>,
}

#[derive(Args, Debug)]
pub struct Isbn {
    /// ISBNs to check; standard input if none
    pub isbns: Vec<String>,
}

#[derive(Args, Debug)]
pub struct Legi {
    /// Seven digits to compute the check digit for, or eight to verify
    #[arg(value_name = "NN-NNN-NNN")]
    pub number: String,
}

#[derive(Args, Debug)]
pub struct Mklock {
    /// Do not complain if the lock is already held
    #[arg(short, long)]
    pub quiet: bool,

    pub lockfile: PathBuf,

    /// Written to the lock file, separated by blanks
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub stuff: Vec<String>,
}

#[derive(Args, Debug)]
pub struct Mkpwd {
    /// Number of passwords to generate
    #[arg(short = 'N', long = "count", value_name = "NUM")]
    pub count: Option<usize>,

    /// List the alphabets on standard error
    #[arg(short = 'D', long = "debug")]
    pub debug: bool,

    /// Define an alphabet, e.g. h=0123456789abcdef
    #[arg(short = 's', long = "alphabet", value_name = "LETTER=CHARS")]
    pub alphabets: Vec<String>,

    pub pattern: Option<String>,
}

#[derive(Args, Debug)]
pub struct Errno {
    #[arg(allow_negative_numbers = true)]
    pub code: String,
}

#[derive(Args, Debug)]
pub struct Signo {
    #[arg(allow_negative_numbers = true)]
    pub number: String,
}

#[derive(Args, Debug)]
pub struct Uxtime {
    /// Seconds since 1970-01-01 00:00:00 UTC; now if not given
    #[arg(allow_negative_numbers = true)]
    pub time: Option<String>,
}

#[derive(Args, Debug)]
pub struct Xorit {
    /// Report the number of bytes processed on standard error
    #[arg(short, long)]
    pub verbose: bool,

    /// Read the key from this file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// The key
    pub key: Option<String>,
}

#[derive(Args, Debug)]
pub struct GenConfig {
    pub config_file: PathBuf,

    /// Forcefully overwrite existing config file
    #[clap(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn log_level_flags() {
        let cli = CliArgs::parse_from(["toolshed", "-v", "legi", "1234567"]);
        assert_eq!(cli.get_log_level(), Some(log::LevelFilter::Info));
        let cli = CliArgs::parse_from(["toolshed", "--log-level", "debug", "legi", "1"]);
        assert_eq!(cli.get_log_level(), Some(log::LevelFilter::Debug));
        let cli = CliArgs::parse_from(["toolshed", "legi", "1"]);
        assert_eq!(cli.get_log_level(), None);
        assert!(CliArgs::try_parse_from(["toolshed", "-v", "-q", "legi", "1"]).is_err());
    }

    #[test]
    fn negative_numbers_are_arguments() {
        let cli = CliArgs::parse_from(["toolshed", "ieee754", "-13", "-2"]);
        let Some(CliCommand::Ieee754(cmd)) = cli.command else {
            panic!("expected the ieee754 subcommand");
        };
        assert_eq!(cmd.numbers, ["-13", "-2"]);
        assert!(!cmd.equation);

        let cli = CliArgs::parse_from(["toolshed", "ieee754", "-e", "-3.25"]);
        let Some(CliCommand::Ieee754(cmd)) = cli.command else {
            panic!("expected the ieee754 subcommand");
        };
        assert_eq!(cmd.numbers, ["-3.25"]);
        assert!(cmd.equation);
    }

    #[test]
    fn mklock_passes_everything_after_the_lockfile() {
        let cli = CliArgs::parse_from(["toolshed", "mklock", "-q", "/tmp/l", "pid", "-x"]);
        let Some(CliCommand::Mklock(cmd)) = cli.command else {
            panic!("expected the mklock subcommand");
        };
        assert!(cmd.quiet);
        assert_eq!(cmd.stuff, ["pid", "-x"]);
    }

    #[test]
    fn eol_styles_exclude_each_other() {
        assert!(CliArgs::try_parse_from(["toolshed", "eol", "-u", "-d"]).is_err());
    }
}
