//! Day-stamped dual-sink run log.
//!
//! Every entry goes to stdout and is appended to `sync_YYYYMMDD.log` (local
//! calendar date) in the logs directory. The file is opened, appended, and
//! closed per write, so a crash mid-run loses at most the line in flight.
//! Same-day files are always appended, never truncated, across runs. No
//! cross-process lock is taken.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;

/// Severity marker on a primary log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Info,
    Success,
    Failure,
}

pub struct Logbook {
    file_path: PathBuf,
}

impl Logbook {
    /// Create the logs directory if needed and bind to today's log file.
    pub fn new(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let file_name = format!("sync_{}.log", Local::now().format("%Y%m%d"));
        Ok(Self {
            file_path: dir.join(file_name),
        })
    }

    /// The day file this logbook appends to.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn info(&self, msg: &str) {
        self.entry(Mark::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.entry(Mark::Success, msg);
    }

    pub fn failure(&self, msg: &str) {
        self.entry(Mark::Failure, msg);
    }

    /// Nested continuation lines under the previous entry, order preserved:
    /// `├─` for the first line, `└─` for the rest. Each line is stamped
    /// like a primary entry.
    pub fn detail(&self, lines: &[String]) {
        for (i, line) in lines.iter().enumerate() {
            let glyph = if i == 0 { "├─" } else { "└─" };
            let nested = format!("  {glyph} {line}");
            self.emit(&nested, &nested);
        }
    }

    fn entry(&self, mark: Mark, msg: &str) {
        let plain_mark = match mark {
            Mark::Info => "",
            Mark::Success => "✓ ",
            Mark::Failure => "✗ ",
        };
        let console_mark = match mark {
            Mark::Info => String::new(),
            Mark::Success => format!("{} ", "✓".green().bold()),
            Mark::Failure => format!("{} ", "✗".red().bold()),
        };
        self.emit(&format!("{console_mark}{msg}"), &format!("{plain_mark}{msg}"));
    }

    fn emit(&self, console: &str, plain: &str) {
        let ts = Local::now().format("%m-%d %H:%M:%S");
        println!("[{ts}] {console}");
        self.append(&format!("[{ts}] {plain}"));
    }

    fn append(&self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(err) = result {
            eprintln!(
                "warning: could not append to {}: {err}",
                self.file_path.display()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_is_named_by_calendar_day() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(dir.path()).expect("logbook");
        let expected = format!("sync_{}.log", Local::now().format("%Y%m%d"));
        assert_eq!(log.path().file_name().unwrap().to_str().unwrap(), expected);
    }

    #[test]
    fn entries_carry_timestamp_and_marker() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(dir.path()).expect("logbook");
        log.success("- alpha committed and pushed");
        log.failure("- beta pull failed");
        log.info("loaded scan root");

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].contains("✓ - alpha committed and pushed"));
        assert!(lines[1].contains("✗ - beta pull failed"));
        assert!(lines[2].ends_with("loaded scan root"));
    }

    #[test]
    fn detail_lines_are_nested_in_order() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(dir.path()).expect("logbook");
        log.detail(&[
            "error: failed to push".to_owned(),
            "hint: pull first".to_owned(),
            "hint: see docs".to_owned(),
        ]);

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].ends_with("  ├─ error: failed to push"));
        assert!(lines[1].ends_with("  └─ hint: pull first"));
        assert!(lines[2].ends_with("  └─ hint: see docs"));
    }

    #[test]
    fn detail_lines_carry_a_timestamp_like_primary_entries() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(dir.path()).expect("logbook");
        log.failure("- beta pull failed");
        log.detail(&["error: cannot rebase".to_owned(), "hint: stash first".to_owned()]);

        let contents = fs::read_to_string(log.path()).unwrap();
        for line in contents.lines() {
            assert!(
                line.starts_with('[') && line.chars().nth(15) == Some(']'),
                "every log line must carry a timestamp, got: {line:?}"
            );
        }
    }

    #[test]
    fn same_day_file_accumulates_across_logbooks() {
        let dir = TempDir::new().unwrap();

        let first = Logbook::new(dir.path()).expect("first run");
        first.info("run one");
        drop(first);

        let second = Logbook::new(dir.path()).expect("second run");
        second.info("run two");

        let contents = fs::read_to_string(second.path()).unwrap();
        assert!(contents.contains("run one"));
        assert!(contents.contains("run two"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn file_stays_plain_text_without_ansi_codes() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(dir.path()).expect("logbook");
        log.success("done");
        log.failure("broke");

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(!contents.contains('\u{1b}'), "file sink must stay plain");
    }
}
