//! Flat-file adapter for the history ledger.
//!
//! One comma-separated line per session, append order. The only mutation
//! ever applied is closing an open session: the first matching line gets
//! its exit time and fee set, and the whole file is rewritten atomically.
//! (The historical in-place rewrite corrupted the following line whenever
//! the amended line grew, since the exit time goes from `0` to ten digits.)

use crate::errors::AppResult;
use crate::models::history::{OwnerHistory, PlateHistory};
use crate::models::session::Session;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub struct HistoryLedger {
    path: PathBuf,
}

impl HistoryLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Every session in append order. A missing file reads as no history.
    pub fn load_all(&self) -> AppResult<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut sessions = Vec::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            sessions.push(Session::parse_line(line)?);
        }
        Ok(sessions)
    }

    /// Append a new (open) session record at the end of the ledger.
    pub fn append(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", session.to_line())?;
        Ok(())
    }

    /// Close the first open session (in append order) whose plate matches
    /// case-insensitively. Returns whether a match was found; when none is,
    /// the ledger is left untouched.
    pub fn close_open_session(&self, plate: &str, exit_time: i64, fee: f64) -> AppResult<bool> {
        let mut sessions = self.load_all()?;

        let Some(target) = sessions
            .iter_mut()
            .find(|s| s.is_open() && s.plate.eq_ignore_ascii_case(plate))
        else {
            return Ok(false);
        };
        target.close(exit_time, fee);

        let mut out = String::new();
        for s in &sessions {
            out.push_str(&s.to_line());
            out.push('\n');
        }
        super::atomic_write(&self.path, &out)?;
        Ok(true)
    }

    /// All sessions for an owner name: total count plus the distinct plates
    /// used, in first-seen order.
    pub fn query_by_owner(&self, name: &str) -> AppResult<OwnerHistory> {
        let mut history = OwnerHistory::default();
        for session in self.load_all()? {
            if !session.owner_name.eq_ignore_ascii_case(name) {
                continue;
            }
            history.total_entries += 1;
            if !history
                .plates
                .iter()
                .any(|p| p.eq_ignore_ascii_case(&session.plate))
            {
                history.plates.push(session.plate.clone());
            }
        }
        Ok(history)
    }

    /// All sessions for a plate: total count plus the distinct owner names,
    /// in first-seen order.
    pub fn query_by_plate(&self, plate: &str) -> AppResult<PlateHistory> {
        let mut history = PlateHistory::default();
        for session in self.load_all()? {
            if !session.plate.eq_ignore_ascii_case(plate) {
                continue;
            }
            history.total_entries += 1;
            if !history
                .owners
                .iter()
                .any(|n| n.eq_ignore_ascii_case(&session.owner_name))
            {
                history.owners.push(session.owner_name.clone());
            }
        }
        Ok(history)
    }
}
