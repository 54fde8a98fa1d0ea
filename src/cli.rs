//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{ErrorPolicy, TruncateConfig, DEFAULT_MARKER, DEFAULT_SUFFIX};
use crate::core::render::{OutputFormat, RenderConfig};

/// stubtrim - strip the server half of generated gRPC stubs.
#[derive(Parser, Debug)]
#[command(name = "stubtrim")]
#[command(
    author,
    version,
    about,
    long_about = r#"stubtrim lists one directory (non-recursively), selects the files whose
name ends with SUFFIX and cuts each of them at the first occurrence of MARKER.
Everything from the marker onward is discarded and the file is rewritten in place.

There is no backup: the removed text is gone after the run.

One result item per candidate file is printed to stdout (default: jsonl), and a
one-line summary is printed to stderr.

Examples:
    stubtrim
    stubtrim --dir gen/pb
    stubtrim --dir gen --suffix .pb.ts --marker "// server"
    stubtrim --keep-going --format md
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(
        long,
        default_value = ".",
        value_name = "PATH",
        long_help = "Directory to scan (defaults to the current directory).\n\n\
Only entries directly inside it are considered; subdirectories are not visited.\n\
Report paths are relative to this directory."
    )]
    pub dir: PathBuf,

    /// File name suffix selecting candidate files.
    #[arg(
        long,
        default_value = DEFAULT_SUFFIX,
        value_name = "STRING",
        long_help = "File name suffix selecting candidate files.\n\n\
Matching is a plain, case-sensitive `ends_with` on the file name."
    )]
    pub suffix: String,

    /// Literal marker at which files are cut.
    #[arg(
        long,
        default_value = DEFAULT_MARKER,
        value_name = "STRING",
        long_help = "Literal marker at which files are cut.\n\n\
The marker is not a regex. Only its first occurrence matters; the marker itself\n\
and everything after it are removed. Files without the marker are left unchanged."
    )]
    pub marker: String,

    /// Continue with the remaining files when one fails.
    #[arg(
        long,
        long_help = "Continue with the remaining files when one cannot be read, decoded or\n\
written. Failures are reported as error items and the exit code is still non-zero.\n\n\
By default the run stops at the first failure."
    )]
    pub keep_going: bool,

    /// Report format (jsonl/json/md).
    #[arg(long, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no report, no summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Build the truncation settings from parsed arguments
    pub fn truncate_config(&self) -> TruncateConfig {
        let error_policy = if self.keep_going {
            ErrorPolicy::KeepGoing
        } else {
            ErrorPolicy::Abort
        };
        TruncateConfig::new(&self.dir)
            .with_suffix(&self.suffix)
            .with_marker(&self.marker)
            .with_error_policy(error_policy)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let config = cli.truncate_config();
    crate::backends::truncate::run_truncate(&config, render_config, cli.quiet)
}
