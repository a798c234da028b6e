use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Local;

/// Deterministic log file name inside the target directory; `.log` is
/// outside the scanned extension set, so the log never becomes a
/// rename candidate itself.
pub const LOG_FILE: &str = "rename-by-date.log";

/// Append-only run log in the target directory. Every event goes to the
/// file; console echo of per-file events honors quiet mode, the summary
/// is always echoed.
pub struct RunLog {
    file: File,
    quiet: bool,
}

impl RunLog {
    pub fn open(dir: &Path, quiet: bool) -> anyhow::Result<Self> {
        let path = dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("opening log {}", path.display()))?;
        Ok(Self { file, quiet })
    }

    /// Per-file event line.
    pub fn event(&mut self, line: &str) -> anyhow::Result<()> {
        self.write(line)?;
        if !self.quiet {
            println!("{line}");
        }
        Ok(())
    }

    /// Summary line, echoed even in quiet mode.
    pub fn summary(&mut self, line: &str) -> anyhow::Result<()> {
        self.write(line)?;
        println!("{line}");
        Ok(())
    }

    fn write(&mut self, line: &str) -> anyhow::Result<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.file, "{stamp} {line}").context("writing log line")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn appends_across_reopens() {
        let temp = tempdir().expect("tempdir");
        {
            let mut log = RunLog::open(temp.path(), true).expect("open");
            log.event("first run").expect("event");
        }
        {
            let mut log = RunLog::open(temp.path(), true).expect("reopen");
            log.event("second run").expect("event");
        }

        let text = fs::read_to_string(temp.path().join(LOG_FILE)).expect("read");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first run"));
        assert!(lines[1].ends_with("second run"));
    }
}
