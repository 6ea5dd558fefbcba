mod cli;
mod config;
mod document;
mod error;
mod jobs;
mod trim;

use cli::{Cli, Commands};
use config::Config;
use jobs::Job;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return ExitCode::from(cli::parse_exit_code(&e));
        }
    };

    init_logger(&cli);
    let cfg = Config::load();

    let result = match (cli.command, cli.input_file) {
        (Some(Commands::Info), _) => {
            print_info(&cfg);
            Ok(())
        }
        (Some(Commands::Init { global }), _) => create_config(global),
        (Some(Commands::Batch { dir }), _) => run_job(&jobs::batch::BatchJob::new(dir), &cfg),
        (None, Some(input_file)) => run_job(
            &jobs::trim::TrimJob::new(input_file, cli.top_trim, cli.bottom_trim, cli.output, &cfg),
            &cfg,
        ),
        (None, None) => unreachable!("parse_args requires an input file or subcommand"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run_job(job: &dyn Job, cfg: &Config) -> error::Result<()> {
    let outcome = job.run()?;
    println!("{}", outcome.summary());
    if cfg.show_footer {
        println!("{}", jobs::footer(&outcome));
    }
    Ok(())
}

/// Printed regardless of log level.
fn failure_message(e: &error::AppError) -> String {
    format!("[frametrim] {e}")
}

fn init_logger(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("FRAMETRIM_LOG")
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_info(cfg: &Config) {
    println!("[frametrim info]");
    println!("  version: {}", env!("CARGO_PKG_VERSION"));
    match config::global_config_path() {
        Some(path) => println!("  global config: {}", path.display()),
        None => println!("  global config: (no config directory)"),
    }
    println!("  project config: {}", config::PROJECT_CONFIG);
    println!("  top_lines: {}", cfg.top_lines);
    println!("  bottom_lines: {}", cfg.bottom_lines);
    println!("  output_suffix: {}", cfg.output_suffix);
    println!("  show_footer: {}", cfg.show_footer);
}

fn create_config(global: bool) -> error::Result<()> {
    let path = if global {
        config::global_config_path().ok_or(error::AppError::NoConfigDir)?
    } else {
        std::path::PathBuf::from(config::PROJECT_CONFIG)
    };

    if Config::write_default(&path)? {
        println!("[frametrim] created {}", path.display());
    } else {
        println!("[frametrim] config already exists: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, DocumentError};

    #[test]
    fn test_failure_message_is_tagged() {
        let e = AppError::Document(DocumentError::MissingFrames);
        assert_eq!(
            failure_message(&e),
            "[frametrim] invalid animation document: missing `frames` key"
        );
    }

    #[test]
    fn test_failed_job_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        let job = jobs::trim::TrimJob::new(
            dir.path().join("missing.json"),
            None,
            None,
            None,
            &Config::default(),
        );
        let err = run_job(&job, &Config::default()).unwrap_err();
        assert!(failure_message(&err).starts_with("[frametrim] could not read `"));
    }
}
