use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use toolshed::cli::CliArgs;
use toolshed_util::status::Status;

pub fn main() -> ExitCode {
    let cli = match CliArgs::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests end up here too
            let _ = err.print();
            return match err.use_stderr() {
                true => Status::FailHard.into(),
                false => Status::Success.into(),
            };
        }
    };

    if let Some(shell) = cli.print_completions {
        let mut cli = CliArgs::command();
        clap_complete::generate(shell, &mut cli, "toolshed", &mut std::io::stdout());
        return Status::Success.into();
    }

    if let Some(out_dir) = &cli.generate_manpage {
        return match clap_mangen::generate_to(CliArgs::command(), out_dir) {
            Ok(()) => Status::Success.into(),
            Err(e) => {
                eprintln!("toolshed: cannot generate man pages in {out_dir:?}: {e}");
                Status::FailSoft.into()
            }
        };
    }

    env_logger::Builder::new()
        .filter_level(cli.get_log_level().unwrap_or(log::LevelFilter::Warn))
        .init();

    match cli.run() {
        Ok(status) => status.into(),
        Err(err) => {
            if !err.is_silent() {
                eprintln!("toolshed: {err}");
            }
            err.status().into()
        }
    }
}
