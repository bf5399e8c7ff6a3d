use std::collections::BTreeMap;

use super::Storage;
use crate::error::{Result, TodzError};
use crate::model::Task;

/// In-memory store for testing.
///
/// Holds serialized lines rather than `Task` values so the encode/decode
/// round trip is exercised on every access, exactly as the production
/// store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lines: BTreeMap<u64, String>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn create(&mut self, task: &mut Task) -> Result<()> {
        self.next_id += 1;
        task.id = self.next_id;
        self.lines.insert(task.id, task.to_string());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(self
            .lines
            .iter()
            .map(|(id, line)| {
                let mut task = Task::parse(line);
                task.id = *id;
                task
            })
            .collect())
    }

    fn get(&self, id: u64) -> Result<Task> {
        let line = self.lines.get(&id).ok_or(TodzError::TaskNotFound(id))?;
        let mut task = Task::parse(line);
        task.id = id;
        Ok(task)
    }

    fn update(&mut self, id: u64, task: &Task) -> Result<()> {
        if !self.lines.contains_key(&id) {
            return Err(TodzError::TaskNotFound(id));
        }
        self.lines.insert(id, task.to_string());
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        self.lines
            .remove(&id)
            .map(|_| ())
            .ok_or(TodzError::TaskNotFound(id))
    }
}
