use crate::db::db::Db;
use crate::libs::schedule::ActivityKind;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::BTreeSet;

const SCHEMA_COMPLETIONS: &str = "CREATE TABLE IF NOT EXISTS completions (
    id INTEGER NOT NULL PRIMARY KEY,
    uid TEXT NOT NULL,
    date DATE NOT NULL,
    kind TEXT NOT NULL,
    UNIQUE(uid, date, kind)
);";
const INSERT_COMPLETION: &str = "INSERT OR IGNORE INTO completions (uid, date, kind) VALUES (?1, ?2, ?3)";
const DELETE_COMPLETION: &str = "DELETE FROM completions WHERE uid = ?1 AND date = ?2 AND kind = ?3";
const SELECT_COMPLETIONS: &str = "SELECT kind FROM completions WHERE uid = ?1 AND date = ?2";

/// Scheduled activities a user has marked as done, per day.
pub struct Completions {
    conn: Connection,
}

impl Completions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_COMPLETIONS, [])?;
        Ok(Completions { conn: db.conn })
    }

    /// Marks an activity done. Marking twice is a no-op.
    pub fn mark(&self, uid: &str, date: NaiveDate, kind: ActivityKind) -> Result<()> {
        self.conn.execute(INSERT_COMPLETION, params![uid, date, kind.key()])?;
        Ok(())
    }

    /// Returns `true` if a mark was removed.
    pub fn unmark(&self, uid: &str, date: NaiveDate, kind: ActivityKind) -> Result<bool> {
        Ok(self.conn.execute(DELETE_COMPLETION, params![uid, date, kind.key()])? > 0)
    }

    pub fn fetch(&self, uid: &str, date: NaiveDate) -> Result<BTreeSet<ActivityKind>> {
        let mut stmt = self.conn.prepare(SELECT_COMPLETIONS)?;
        let keys = stmt.query_map(params![uid, date], |row| row.get::<_, String>(0))?.collect::<rusqlite::Result<Vec<_>>>()?;
        // Unknown keys are ignored rather than failing the whole day.
        Ok(keys.iter().filter_map(|key| key.parse::<ActivityKind>().ok()).collect())
    }
}
