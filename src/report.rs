use std::path::Path;

/// Counters accumulated over one run. Scanned and skipped fill during
/// the scan phase, renamed and backed-up during apply.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunCounters {
    pub scanned: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub backed_up: usize,
}

/// Render the final summary block. Pure formatting, no decisions.
pub fn render(counters: &RunCounters, backup_dir: Option<&Path>) -> Vec<String> {
    let mut lines = vec![
        "---- summary ----".to_string(),
        format!("scanned:   {}", counters.scanned),
        format!("renamed:   {}", counters.renamed),
        format!("skipped:   {}", counters.skipped),
        format!("backed up: {}", counters.backed_up),
    ];
    if let Some(dir) = backup_dir {
        lines.push(format!("backups in {}", dir.display()));
    }
    lines
}
