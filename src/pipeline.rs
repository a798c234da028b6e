use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::bail;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

use crate::backup::BackupDir;
use crate::metadata::MetadataReader;
use crate::planner::{self, DateSource, Decision, RenamePlan};
use crate::report::{self, RunCounters};
use crate::runlog::RunLog;
use crate::scan;

pub struct RunConfig {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub backup: bool,
    pub fallback_mdate: bool,
    pub quiet: bool,
    pub assume_yes: bool,
}

/// Yes/no gate between preview and apply. Injected so tests can answer
/// without a terminal.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Reads y/yes from stdin; anything else (including EOF) is a no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// One full run: scan the directory into plans, gate on confirmation
/// unless bypassed, replay the same plans as side effects, report.
///
/// Per-file backup or rename failures are logged and skip that file
/// only; the batch never aborts mid-apply.
pub fn run(
    config: &RunConfig,
    reader: &dyn MetadataReader,
    confirm: &mut dyn Confirm,
) -> anyhow::Result<RunCounters> {
    if !config.directory.is_dir() {
        bail!("{} is not a directory", config.directory.display());
    }

    let run_started = Local::now().naive_local();
    let mut log = RunLog::open(&config.directory, config.quiet)?;
    log.event(&format!(
        "run started in {} (dry_run={}, backup={}, fallback_mdate={})",
        config.directory.display(),
        config.dry_run,
        config.backup,
        config.fallback_mdate
    ))?;

    // Scan phase: one snapshot, one plan per file, nothing mutated.
    let entries = scan::list_candidate_files(&config.directory)?;
    let pb = progress_bar(entries.len(), config.quiet);
    let mut plans = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw = reader.date_taken(&entry.path());
        plans.push(planner::plan(entry, raw.as_deref(), config.fallback_mdate));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut counters = RunCounters {
        scanned: plans.len(),
        ..RunCounters::default()
    };
    counters.skipped = plans
        .iter()
        .filter(|p| !matches!(p.decision, Decision::Rename { .. }))
        .count();
    let to_rename = counters.scanned - counters.skipped;

    // Backup path is fixed at run start; the directory itself appears
    // only when the first copy lands.
    let mut backup_dir = config
        .backup
        .then(|| BackupDir::new(&config.directory, &run_started));

    if !config.dry_run && !config.assume_yes {
        println!(
            "{} files scanned: {} to rename, {} to skip",
            counters.scanned, to_rename, counters.skipped
        );
        if let Some(b) = &backup_dir {
            println!("originals will be copied to {}", b.path().display());
        }
        if !confirm.confirm("proceed with rename? [y/N] ") {
            log.event("declined: no changes made")?;
            emit_summary(&mut log, &counters, None)?;
            return Ok(counters);
        }
        log.event("confirmed")?;
    }

    for plan in &plans {
        apply_plan(plan, config, &mut backup_dir, &mut counters, &mut log)?;
    }

    let backup_path = backup_dir
        .as_ref()
        .filter(|b| b.was_created())
        .map(|b| b.path().to_path_buf());
    emit_summary(&mut log, &counters, backup_path)?;
    Ok(counters)
}

/// Replay one plan as side effects. Backup, when enabled, completes and
/// is logged strictly before the rename of the same file; a backup
/// failure leaves the file untouched under its old name.
fn apply_plan(
    plan: &RenamePlan,
    config: &RunConfig,
    backup_dir: &mut Option<BackupDir>,
    counters: &mut RunCounters,
    log: &mut RunLog,
) -> anyhow::Result<()> {
    let name = &plan.entry.name;

    let (new_name, source) = match &plan.decision {
        Decision::SkipNoMetadata => {
            return log.event(&format!("skip (no date taken): {name}"));
        }
        Decision::SkipUnparseable { raw } => {
            return log.event(&format!("skip (unparseable date {raw:?}): {name}"));
        }
        Decision::Rename { new_name, source } => (new_name, source),
    };

    let tag = match source {
        DateSource::Metadata => "date taken",
        DateSource::ModifiedTime => "mtime",
    };

    if config.dry_run {
        if backup_dir.is_some() {
            counters.backed_up += 1;
            log.event(&format!("[dry-run] would back up {name}"))?;
        }
        counters.renamed += 1;
        return log.event(&format!("[dry-run] {name} -> {new_name} ({tag})"));
    }

    let src = plan.entry.path();
    if let Some(backup) = backup_dir {
        match backup.copy_in(&src) {
            Ok(copy) => {
                counters.backed_up += 1;
                log.event(&format!("backed up {name} -> {}", copy.display()))?;
            }
            Err(e) => {
                return log.event(&format!("backup failed for {name}: {e:#}, file left untouched"));
            }
        }
    }

    let dest = plan.entry.dir.join(new_name);
    if new_name != name && dest.exists() {
        return log.event(&format!("rename failed for {name}: target {new_name} already exists"));
    }
    match fs::rename(&src, &dest) {
        Ok(()) => {
            counters.renamed += 1;
            log.event(&format!("renamed {name} -> {new_name} ({tag})"))
        }
        Err(e) => log.event(&format!("rename failed for {name}: {e}")),
    }
}

fn emit_summary(
    log: &mut RunLog,
    counters: &RunCounters,
    backup_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    for line in report::render(counters, backup_dir.as_deref()) {
        log.summary(&line)?;
    }
    Ok(())
}

fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} reading dates")
            .unwrap(),
    );
    pb
}
