use crate::db::db::Db;
use crate::libs::log_entry::{LogDetails, LogEntry, LogFilter, LogKind};
use crate::libs::time_of_day::TimeOfDay;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::str::FromStr;

const SCHEMA_LOGS: &str = "CREATE TABLE IF NOT EXISTS logs (
    id INTEGER NOT NULL PRIMARY KEY,
    uid TEXT NOT NULL,
    date DATE NOT NULL,
    time TEXT NOT NULL,
    kind TEXT NOT NULL,
    note TEXT,
    meal_type TEXT,
    meal_composition TEXT,
    calories INTEGER,
    workout_type TEXT,
    duration INTEGER,
    sleep_quality TEXT,
    timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
/// Detail columns added after the first release, with their SQL types.
const DETAIL_COLUMNS: [(&str, &str); 6] = [
    ("meal_type", "TEXT"),
    ("meal_composition", "TEXT"),
    ("calories", "INTEGER"),
    ("workout_type", "TEXT"),
    ("duration", "INTEGER"),
    ("sleep_quality", "TEXT"),
];
const INDEX_LOGS: &str = "CREATE INDEX IF NOT EXISTS idx_logs_uid_date ON logs(uid, date)";
const INSERT_LOG: &str = "INSERT INTO logs (uid, date, time, kind, note, meal_type, meal_composition, calories, workout_type, duration, sleep_quality, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_LOGS: &str = "SELECT id, date, time, kind, note, timestamp, meal_type, meal_composition, calories, workout_type, duration, sleep_quality FROM logs WHERE uid = ?1";
const WHERE_DATE: &str = "AND date = ?2";
const ORDER_BY: &str = "ORDER BY date, time, id";
const DELETE_LOG: &str = "DELETE FROM logs WHERE uid = ?1 AND id = ?2";

pub struct Logs {
    conn: Connection,
}

fn text_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, message.into())
}

fn parse_label<T: FromStr<Err = String>>(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<T>> {
    row.get::<_, Option<String>>(index)?
        .map(|label| label.parse::<T>().map_err(|e| text_error(index, e)))
        .transpose()
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    let time: String = row.get(2)?;
    let kind: String = row.get(3)?;
    Ok(LogEntry {
        id: row.get(0)?,
        date: row.get::<_, NaiveDate>(1)?,
        time: TimeOfDay::parse(&time).map_err(|e| text_error(2, e.to_string()))?,
        kind: kind.parse::<LogKind>().map_err(|e| text_error(3, e))?,
        note: row.get(4)?,
        timestamp: row.get::<_, Option<NaiveDateTime>>(5)?,
        details: LogDetails {
            meal_type: parse_label(row, 6)?,
            meal_composition: parse_label(row, 7)?,
            calories: row.get(8)?,
            workout_type: parse_label(row, 9)?,
            duration: row.get(10)?,
            sleep_quality: parse_label(row, 11)?,
        },
    })
}

/// Brings a logs table created by an older release up to the current columns.
fn add_missing_columns(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(logs)")?;
    let existing = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    for (name, sql_type) in DETAIL_COLUMNS {
        if !existing.iter().any(|c| c == name) {
            conn.execute(&format!("ALTER TABLE logs ADD COLUMN {} {}", name, sql_type), [])?;
        }
    }
    Ok(())
}

impl Logs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_LOGS, [])?;
        db.conn.execute(INDEX_LOGS, [])?;
        add_missing_columns(&db.conn)?;
        Ok(Logs { conn: db.conn })
    }

    /// Stores an entry and returns its id.
    pub fn insert(&self, uid: &str, entry: &LogEntry) -> Result<i64> {
        let details = &entry.details;
        self.conn.execute(
            INSERT_LOG,
            params![
                uid,
                entry.date,
                entry.time.to_string(),
                entry.kind.to_string(),
                entry.note,
                details.meal_type.map(|v| v.label()),
                details.meal_composition.map(|v| v.label()),
                details.calories,
                details.workout_type.map(|v| v.label()),
                details.duration,
                details.sleep_quality.map(|v| v.label()),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch(&self, uid: &str, filter: LogFilter) -> Result<Vec<LogEntry>> {
        let entries = match filter {
            LogFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_LOGS, ORDER_BY))?;
                let rows = stmt.query_map(params![uid], row_to_entry)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            LogFilter::ByDate(date) => {
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_LOGS, WHERE_DATE, ORDER_BY))?;
                let rows = stmt.query_map(params![uid, date], row_to_entry)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(entries)
    }

    /// Returns the number of deleted entries, 0 or 1.
    pub fn delete(&self, uid: &str, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_LOG, params![uid, id])?)
    }
}
