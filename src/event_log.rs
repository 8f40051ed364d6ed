//! Optional JSON-lines event log.
//!
//! One JSON object per line, tagged by `"type"`. The log is best-effort: the
//! first open or write failure prints a warning to stderr and disables it for
//! the rest of the session.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::GameConfig;
use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        width: u8,
        height: u8,
        seed: u32,
        fall_ms: u32,
        shapes: &'static str,
    },
    Lock {
        piece: &'static str,
        lines_cleared: u32,
        points: u32,
        score: u32,
        game_over: bool,
    },
}

impl LogRecord {
    pub fn session_start(config: &GameConfig) -> Self {
        LogRecord::SessionStart {
            width: config.width,
            height: config.height,
            seed: config.seed,
            fall_ms: config.fall_ms,
            shapes: config.shapes.as_str(),
        }
    }

    pub fn lock(ev: &LockEvent) -> Self {
        LogRecord::Lock {
            piece: ev.kind.as_str(),
            lines_cleared: ev.lines_cleared,
            points: ev.points,
            score: ev.score,
            game_over: ev.game_over,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventLog {
    file: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                file: Some(BufWriter::new(f)),
                buf: Vec::with_capacity(256),
            },
            Err(e) => {
                eprintln!(
                    "[blockfall] event log disabled: cannot open {}: {}",
                    path.display(),
                    e
                );
                Self::disabled()
            }
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        match &config.log_path {
            Some(path) => Self::open(path),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, record) {
            eprintln!("[blockfall] event log disabled: {}", e);
            self.file = None;
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = file.write_all(&self.buf).and_then(|_| file.flush()) {
            eprintln!("[blockfall] event log disabled: write failed: {}", e);
            self.file = None;
        }
    }

    pub fn record_lock(&mut self, ev: &LockEvent) {
        self.record(&LogRecord::lock(ev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("blockfall-{}-{}.jsonl", name, std::process::id()))
    }

    #[test]
    fn test_records_are_one_json_object_per_line() {
        let path = temp_path("unit");
        let _ = std::fs::remove_file(&path);

        let mut log = EventLog::open(&path);
        assert!(log.is_enabled());
        log.record(&LogRecord::session_start(&GameConfig::default()));
        log.record_lock(&LockEvent {
            kind: PieceKind::I,
            lines_cleared: 4,
            points: 800,
            score: 900,
            game_over: false,
        });
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "session_start");
        assert_eq!(lines[0]["shapes"], "precomputed");
        assert_eq!(lines[1]["type"], "lock");
        assert_eq!(lines[1]["piece"], "i");
        assert_eq!(lines[1]["points"], 800);
        assert_eq!(lines[1]["score"], 900);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unopenable_path_disables_log() {
        let dir = std::env::temp_dir();
        let mut log = EventLog::open(&dir);
        assert!(!log.is_enabled());
        log.record(&LogRecord::session_start(&GameConfig::default()));
    }

    #[test]
    fn test_disabled_without_path() {
        let log = EventLog::from_config(&GameConfig::default());
        assert!(!log.is_enabled());
    }
}
