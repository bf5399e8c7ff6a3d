//! SQLite-backed task store.
//!
//! Models the store as a keyed table per bucket: `id INTEGER PRIMARY KEY
//! AUTOINCREMENT` hands out stable ids that survive deletes, and the value
//! column holds the canonical todo.txt line. Every trait call is a single
//! implicit transaction, so concurrent invocations from other processes
//! see either the old or the new row, never a partial write.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::Storage;
use crate::error::{Result, TodzError};
use crate::model::Task;

pub struct SqliteStore {
    conn: Connection,
    bucket: String,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// bucket's table exists.
    pub fn open(path: &Path, bucket: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, bucket)
    }

    /// Private in-memory database, handy for tests.
    pub fn open_in_memory(bucket: &str) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, bucket)
    }

    fn with_connection(conn: Connection, bucket: &str) -> Result<Self> {
        validate_bucket(bucket)?;
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{bucket}\" (
                     id INTEGER PRIMARY KEY AUTOINCREMENT,
                     line TEXT NOT NULL
                 )"
            ),
            [],
        )?;

        Ok(Self {
            conn,
            bucket: bucket.to_string(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// Bucket names become SQL identifiers, so they cannot be bound as
/// parameters; restrict them instead.
fn validate_bucket(bucket: &str) -> Result<()> {
    let ok = !bucket.is_empty()
        && !bucket.starts_with(|c: char| c.is_ascii_digit())
        && bucket
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(TodzError::InvalidArgument(format!(
            "bucket name '{bucket}' (use letters, digits and underscores)"
        )))
    }
}

impl Storage for SqliteStore {
    fn create(&mut self, task: &mut Task) -> Result<()> {
        self.conn.execute(
            &format!("INSERT INTO \"{}\" (line) VALUES (?1)", self.bucket),
            params![task.to_string()],
        )?;
        task.id = self.conn.last_insert_rowid() as u64;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, line FROM \"{}\" ORDER BY id",
            self.bucket
        ))?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let line: String = row.get(1)?;
            Ok((id, line))
        })?;

        let mut tasks = Vec::new();
        for row in rows {
            let (id, line) = row?;
            let mut task = Task::parse(&line);
            task.id = id as u64;
            tasks.push(task);
        }

        Ok(tasks)
    }

    fn get(&self, id: u64) -> Result<Task> {
        let line: Option<String> = self
            .conn
            .query_row(
                &format!("SELECT line FROM \"{}\" WHERE id = ?1", self.bucket),
                params![id as i64],
                |row| row.get(0),
            )
            .optional()?;

        match line {
            Some(line) => {
                let mut task = Task::parse(&line);
                task.id = id;
                Ok(task)
            }
            None => Err(TodzError::TaskNotFound(id)),
        }
    }

    fn update(&mut self, id: u64, task: &Task) -> Result<()> {
        let changed = self.conn.execute(
            &format!("UPDATE \"{}\" SET line = ?2 WHERE id = ?1", self.bucket),
            params![id as i64, task.to_string()],
        )?;

        if changed == 0 {
            return Err(TodzError::TaskNotFound(id));
        }
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM \"{}\" WHERE id = ?1", self.bucket),
            params![id as i64],
        )?;

        if changed == 0 {
            return Err(TodzError::TaskNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_validation() {
        assert!(validate_bucket("todos").is_ok());
        assert!(validate_bucket("work_2024").is_ok());
        assert!(validate_bucket("").is_err());
        assert!(validate_bucket("1todos").is_err());
        assert!(validate_bucket("to-dos").is_err());
        assert!(validate_bucket("t; DROP TABLE x").is_err());
    }

    #[test]
    fn test_create_then_get() {
        let mut store = SqliteStore::open_in_memory("todos").unwrap();
        let mut task = Task::parse("(A) 2020-04-28 write store tests +todz");
        store.create(&mut task).unwrap();

        assert_eq!(task.id, 1);
        let loaded = store.get(1).unwrap();
        assert_eq!(loaded, task);
    }

    #[test]
    fn test_ids_survive_deletes() {
        let mut store = SqliteStore::open_in_memory("todos").unwrap();
        for line in ["one", "two", "three"] {
            let mut task = Task::parse(line);
            store.create(&mut task).unwrap();
        }

        store.delete(3).unwrap();

        let mut task = Task::parse("four");
        store.create(&mut task).unwrap();
        // AUTOINCREMENT never reuses a deleted id
        assert_eq!(task.id, 4);
    }

    #[test]
    fn test_buckets_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todz.db");

        let mut work = SqliteStore::open(&path, "work").unwrap();
        let mut home = SqliteStore::open(&path, "home").unwrap();

        let mut task = Task::parse("ship release");
        work.create(&mut task).unwrap();
        let mut task = Task::parse("mow lawn");
        home.create(&mut task).unwrap();

        assert_eq!(work.list().unwrap().len(), 1);
        assert_eq!(home.list().unwrap().len(), 1);
        assert_eq!(work.list().unwrap()[0].description, "ship release");
    }

    #[test]
    fn test_not_found_errors() {
        let mut store = SqliteStore::open_in_memory("todos").unwrap();
        let task = Task::parse("ghost");

        assert!(matches!(store.get(9), Err(TodzError::TaskNotFound(9))));
        assert!(matches!(
            store.update(9, &task),
            Err(TodzError::TaskNotFound(9))
        ));
        assert!(matches!(store.delete(9), Err(TodzError::TaskNotFound(9))));
    }
}
