//! User documents keyed by an opaque user id.
//!
//! The document is stored as JSON text so it keeps the camelCase shape of
//! [`UserProfile`]; only the key and the update time are real columns.

use crate::db::db::Db;
use crate::libs::profile::UserProfile;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_PROFILES: &str = "CREATE TABLE IF NOT EXISTS profiles (
    uid TEXT NOT NULL PRIMARY KEY,
    document TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const UPSERT_PROFILE: &str = "INSERT INTO profiles (uid, document, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(uid) DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at";
const SELECT_PROFILE: &str = "SELECT document FROM profiles WHERE uid = ?1";
const DELETE_PROFILE: &str = "DELETE FROM profiles WHERE uid = ?1";

pub struct Profiles {
    conn: Connection,
}

impl Profiles {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_PROFILES, [])?;
        Ok(Profiles { conn: db.conn })
    }

    /// Inserts or replaces the document for `uid`.
    pub fn save(&self, uid: &str, profile: &UserProfile) -> Result<()> {
        let document = serde_json::to_string(profile)?;
        self.conn.execute(UPSERT_PROFILE, params![uid, document])?;
        tracing::debug!(uid, "profile saved");
        Ok(())
    }

    pub fn fetch(&self, uid: &str) -> Result<Option<UserProfile>> {
        let document: Option<String> = self.conn.query_row(SELECT_PROFILE, [uid], |row| row.get(0)).optional()?;
        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    /// Returns the number of deleted documents, 0 or 1.
    pub fn delete(&self, uid: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_PROFILE, [uid])?)
    }
}
