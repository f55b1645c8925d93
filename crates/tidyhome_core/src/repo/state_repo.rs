//! Key-value record repository and SQLite implementation.
//!
//! # Responsibility
//! - Store the task collection and the routine collection under fixed keys.
//! - Validate decoded tasks before handing them to the store.
//!
//! # Invariants
//! - An absent record is reported as `Ok(None)`, never as an empty list.
//! - Decoded task lists satisfy `Task::validate()` and have unique ids.

use crate::db::DbError;
use crate::model::routine::Routine;
use crate::model::task::Task;
use crate::store::find_duplicate_id;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record key holding the JSON task array.
pub const TASKS_RECORD_KEY: &str = "tidyhome.tasks";
/// Record key holding the JSON routine array.
pub const ROUTINES_RECORD_KEY: &str = "tidyhome.routines";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored record cannot be decoded or violates task invariants.
    MalformedRecord { key: &'static str, message: String },
    Encode(serde_json::Error),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MalformedRecord { key, message } => {
                write!(f, "malformed persisted record `{key}`: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode record: {err}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::MalformedRecord { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage contract for the task store.
pub trait StateRepository {
    /// Returns `None` when no task record has ever been written.
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>>;
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
    /// Returns `None` when no routine record has ever been written.
    fn load_routines(&self) -> RepoResult<Option<Vec<Routine>>>;
    fn save_routines(&self, routines: &[Routine]) -> RepoResult<()>;
}

/// SQLite-backed record repository over the `kv_records` table.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when migrations have not been applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_records'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable("kv_records"));
        }
        Ok(Self { conn })
    }

    fn read_record<T: DeserializeOwned>(&self, key: &'static str) -> RepoResult<Option<T>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|err| RepoError::MalformedRecord {
                    key,
                    message: err.to_string(),
                }),
            None => Ok(None),
        }
    }

    fn write_record<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) -> RepoResult<()> {
        let text = serde_json::to_string(value).map_err(RepoError::Encode)?;
        self.conn.execute(
            "INSERT INTO kv_records (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, text],
        )?;
        Ok(())
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>> {
        let Some(tasks) = self.read_record::<Vec<Task>>(TASKS_RECORD_KEY)? else {
            return Ok(None);
        };
        check_tasks(&tasks)?;
        Ok(Some(tasks))
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        self.write_record(TASKS_RECORD_KEY, tasks)
    }

    fn load_routines(&self) -> RepoResult<Option<Vec<Routine>>> {
        self.read_record(ROUTINES_RECORD_KEY)
    }

    fn save_routines(&self, routines: &[Routine]) -> RepoResult<()> {
        self.write_record(ROUTINES_RECORD_KEY, routines)
    }
}

fn check_tasks(tasks: &[Task]) -> RepoResult<()> {
    for task in tasks {
        task.validate().map_err(|err| RepoError::MalformedRecord {
            key: TASKS_RECORD_KEY,
            message: err.to_string(),
        })?;
    }
    if let Some(id) = find_duplicate_id(tasks) {
        return Err(RepoError::MalformedRecord {
            key: TASKS_RECORD_KEY,
            message: format!("duplicate task id `{id}`"),
        });
    }
    Ok(())
}
