use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "frametrim",
    version,
    about = "Trim leading and trailing lines from every frame of a JSON ASCII animation",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// JSON file with a `frames` array of strings; writes <name>_trimmed.json next to it
    pub input_file: Option<PathBuf>,

    /// Lines to drop from the top of each frame (default: 25)
    pub top_trim: Option<usize>,

    /// Lines to drop from the bottom of each frame (default: 20)
    pub bottom_trim: Option<usize>,

    /// Write here instead of <name>_trimmed.json
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the final summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trim animation_2.json into animation_3.json (top 25, bottom 20)
    Batch {
        /// Directory holding animation_2.json (default: .)
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show current config
    Info,

    /// Generate a default .frametrim.toml config file
    Init {
        /// Generate in ~/.config/frametrim/ instead of current directory
        #[arg(long)]
        global: bool,
    },
}

/// Parse the command line. Either an input file or a subcommand is required.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if cli.command.is_none() && cli.input_file.is_none() {
        return Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "the following required arguments were not provided:\n  <INPUT_FILE>",
        ));
    }
    Ok(cli)
}

/// Process exit status for a parse failure: 0 for `--help` / `--version`, 1 otherwise.
pub fn parse_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() { 1 } else { 0 }
}
