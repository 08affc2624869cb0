//! JSON-lines event log.
//!
//! One object per line: `{"ts":..,"game":"snake","event":"high_score","score":12}`.
//! Disabled when no path is configured. A write failure stops logging for the
//! rest of the session; the error is kept for the caller.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{LockEvent, SnakeOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    Started,
    Locked {
        lines_cleared: u32,
        score_delta: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<&'static str>,
    },
    HighScore {
        score: u32,
    },
    StoreError {
        message: String,
    },
}

impl LogEvent {
    pub fn locked(ev: &LockEvent) -> Self {
        LogEvent::Locked {
            lines_cleared: ev.lines_cleared,
            score_delta: ev.clear_score + ev.drop_score,
            level: ev.level,
        }
    }

    pub fn snake_over(score: u32, outcome: Option<SnakeOutcome>) -> Self {
        LogEvent::GameOver {
            score,
            reason: outcome.map(|o| o.as_str()),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    ts: u64,
    game: &'a str,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct EventLog {
    game: &'static str,
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
    written: u64,
    error: Option<anyhow::Error>,
}

impl EventLog {
    /// Logging turned off.
    pub fn disabled(game: &'static str) -> Self {
        Self {
            game,
            out: None,
            buf: Vec::new(),
            written: 0,
            error: None,
        }
    }

    /// Append to `path`, or a disabled log for `None`.
    pub fn open(game: &'static str, path: Option<&Path>) -> Result<Self> {
        let mut log = Self::disabled(game);
        if let Some(path) = path {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening event log {}", path.display()))?;
            log.out = Some(BufWriter::new(file));
            log.buf.reserve(256);
        }
        Ok(log)
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Records written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn record(&mut self, event: &LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let record = Record {
            ts: now_ms(),
            game: self.game,
            event,
        };
        let result = serde_json::to_writer(&mut self.buf, &record)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                out.flush()?;
                Ok(())
            });

        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                self.out = None;
                self.error = Some(e.context("writing event log"));
            }
        }
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;
    use serde_json::Value;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let mut log = EventLog::open("tetris", None).unwrap();
        assert!(!log.is_enabled());
        log.record(&LogEvent::Started);
        assert_eq!(log.written(), 0);
    }

    #[test]
    fn records_are_json_lines() {
        let path = scratch_dir("event_log").join("events.jsonl");
        let mut log = EventLog::open("snake", Some(&path)).unwrap();
        log.record(&LogEvent::Started);
        log.record(&LogEvent::HighScore { score: 4 });
        log.record(&LogEvent::snake_over(4, Some(SnakeOutcome::WallCollision)));
        assert_eq!(log.written(), 3);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["event"], "started");
        assert_eq!(lines[0]["game"], "snake");
        assert!(lines[0]["ts"].as_u64().is_some());
        assert_eq!(lines[1]["event"], "high_score");
        assert_eq!(lines[1]["score"], 4);
        assert_eq!(lines[2]["event"], "game_over");
        assert_eq!(lines[2]["reason"], "wall");
    }

    #[test]
    fn lock_event_sums_score_parts() {
        let ev = LockEvent {
            lines_cleared: 2,
            clear_score: 300,
            drop_score: 36,
            level: 1,
            leveled_up: false,
            game_over: false,
        };
        assert_eq!(
            LogEvent::locked(&ev),
            LogEvent::Locked {
                lines_cleared: 2,
                score_delta: 336,
                level: 1
            }
        );
    }

    #[test]
    fn appends_across_sessions() {
        let path = scratch_dir("event_log_append").join("events.jsonl");
        for _ in 0..2 {
            let mut log = EventLog::open("tetris", Some(&path)).unwrap();
            log.record(&LogEvent::Started);
        }
        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let dir = scratch_dir("event_log_bad");
        assert!(EventLog::open("tetris", Some(&dir)).is_err());
    }
}
