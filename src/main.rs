mod backup;
mod compose;
mod date;
mod media;
mod metadata;
mod pipeline;
mod planner;
mod report;
mod runlog;
mod scan;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "exif-rename", version, about = "Batch-rename photos in a directory using their embedded date taken")]
struct Cli {
    /// Directory containing the photos to rename
    #[arg(short, long)]
    directory: PathBuf,

    /// Log every decision but touch nothing on disk
    #[arg(long)]
    dry_run: bool,

    /// Copy each file into a timestamped backup directory before renaming it
    #[arg(long)]
    backup: bool,

    /// Fall back to the file's modification time when no date taken is present
    #[arg(long)]
    fallback_mdate: bool,

    /// Suppress per-file console output (the log file still gets every line)
    #[arg(short, long)]
    quiet: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

// Exit codes: 0 success (a declined confirmation is a success), 1
// runtime failure, 2 unusable --directory (clap uses 2 for usage
// errors as well).
fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.directory.is_dir() {
        eprintln!("error: {} is not a directory", cli.directory.display());
        return ExitCode::from(2);
    }

    let config = pipeline::RunConfig {
        directory: cli.directory,
        dry_run: cli.dry_run,
        backup: cli.backup,
        fallback_mdate: cli.fallback_mdate,
        quiet: cli.quiet,
        assume_yes: cli.yes,
    };

    match pipeline::run(&config, &metadata::ExifReader, &mut pipeline::StdinConfirm) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
