//! Task manager: every mutation the CLI exposes.
//!
//! Each operation follows the same shape: load the current task from
//! storage by id (failing with `TaskNotFound`), mutate an in-memory copy,
//! persist once. Nothing is partially written; the first error wins.
//!
//! Mutations that add a tag or attribute keep the description text and the
//! derived collections in sync by appending the rendered marker, since the
//! serializer emits the description verbatim. `prepend` and `append` splice
//! raw text without re-extracting markers from it; that asymmetry versus
//! `update`/`replace` is intentional and pinned by a test below.

use crate::date::NullDate;
use crate::error::Result;
use crate::model::Task;
use crate::priority::decode_priority;
use crate::store::Storage;

/// Which completion states `list` retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Active tasks only.
    #[default]
    Pending,
    /// Active and complete.
    All,
    /// Complete tasks only.
    Done,
}

/// Filtering criteria for a listing. Empty strings mean "no filter";
/// non-empty ones are exact membership matches.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub project: String,
    pub context: String,
    pub attribute: String,
}

/// Construction options for [`TaskManager`].
#[derive(Debug, Clone, Default)]
pub struct ManagerOptions {
    /// Reserved: rate for due-date-based re-prioritization. Accepted and
    /// stored but no operation consumes it yet.
    pub due_prioritization_rate: u32,
}

/// Orchestrates task CRUD against a pluggable [`Storage`] backend.
pub struct TaskManager<S: Storage> {
    storage: S,
    #[allow(dead_code)]
    due_prioritization_rate: u32,
}

impl<S: Storage> TaskManager<S> {
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, ManagerOptions::default())
    }

    pub fn with_options(storage: S, options: ManagerOptions) -> Self {
        Self {
            storage,
            due_prioritization_rate: options.due_prioritization_rate,
        }
    }

    /// Loads all tasks and retains those matching `filter`, in storage
    /// order. Sorting is the caller's concern.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let items = self.storage.list()?;

        Ok(items
            .into_iter()
            .filter(|task| {
                match filter.status {
                    StatusFilter::Pending if task.complete => return false,
                    StatusFilter::Done if !task.complete => return false,
                    _ => {}
                }

                if !filter.project.is_empty() && !task.has_project(&filter.project) {
                    return false;
                }
                if !filter.context.is_empty() && !task.has_context(&filter.context) {
                    return false;
                }
                if !filter.attribute.is_empty() && !task.has_attribute(&filter.attribute) {
                    return false;
                }

                true
            })
            .collect())
    }

    /// Parses `line` into a new task and persists it. Returns the assigned id.
    pub fn add(&mut self, line: &str) -> Result<u64> {
        let mut task = Task::parse(line);
        self.storage.create(&mut task)?;
        Ok(task.id)
    }

    /// Re-parses `line` and merges its description, priority, projects and
    /// contexts onto the stored task. Completion state and prefix dates are
    /// kept; attributes follow the new description.
    pub fn update(&mut self, id: u64, line: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        let parsed = Task::parse(line);

        task.description = parsed.description;
        task.priority = parsed.priority;
        task.projects = parsed.projects;
        task.contexts = parsed.contexts;

        self.storage.update(id, &task)
    }

    /// Re-parses `line` and replaces every field of the stored task with
    /// the parsed values. Strict superset of [`update`](Self::update).
    pub fn replace(&mut self, id: u64, line: &str) -> Result<()> {
        let mut task = Task::parse(line);
        // Make sure the id still exists before overwriting
        self.storage.get(id)?;
        task.id = id;

        self.storage.update(id, &task)
    }

    /// Splices `text` before the description with a single space. Markers
    /// in `text` are not re-extracted.
    pub fn prepend(&mut self, id: u64, text: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.description = format!("{} {}", text, task.description);
        self.storage.update(id, &task)
    }

    /// Splices `text` after the description with a single space. Markers
    /// in `text` are not re-extracted.
    pub fn append(&mut self, id: u64, text: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.description = format!("{} {}", task.description, text);
        self.storage.update(id, &task)
    }

    /// Overwrites the priority with the decoded rank of `letters`. Invalid
    /// letters decode to 0, silently deprioritizing.
    pub fn prioritize(&mut self, id: u64, letters: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.priority = decode_priority(letters);
        self.storage.update(id, &task)
    }

    pub fn deprioritize(&mut self, id: u64) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.priority = 0;
        self.storage.update(id, &task)
    }

    /// Adds a project tag, appending `+name` to the description on first
    /// insertion. Idempotent; repeats still persist the unchanged task.
    pub fn add_project(&mut self, id: u64, project: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        if task.projects.insert(project.to_string()) {
            task.description = format!("{} +{}", task.description, project);
        }
        self.storage.update(id, &task)
    }

    /// Adds a context tag, appending `@name` to the description on first
    /// insertion. Idempotent; repeats still persist the unchanged task.
    pub fn add_context(&mut self, id: u64, context: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;
        if task.contexts.insert(context.to_string()) {
            task.description = format!("{} @{}", task.description, context);
        }
        self.storage.update(id, &task)
    }

    /// Records a `key:value` attribute and appends the raw input to the
    /// description. Input without a colon is silently ignored, though the
    /// (no-op) persist still happens.
    pub fn add_attribute(&mut self, id: u64, attribute: &str) -> Result<()> {
        let mut task = self.storage.get(id)?;

        if let Some((key, value)) = attribute.split_once(':') {
            task.attributes
                .insert(key.to_string(), value.to_string());
            task.description = format!("{} {}", task.description, attribute);
        }

        self.storage.update(id, &task)
    }

    /// Marks the task done, stamps today as the completion date and clears
    /// the priority.
    pub fn complete(&mut self, id: u64) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.complete = true;
        task.completion_date = NullDate::today();
        task.priority = 0;
        self.storage.update(id, &task)
    }

    /// Marks the task pending again and drops the completion date. The
    /// pre-completion priority is not restored.
    pub fn resume(&mut self, id: u64) -> Result<()> {
        let mut task = self.storage.get(id)?;
        task.complete = false;
        task.completion_date = NullDate::invalid();
        self.storage.update(id, &task)
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.storage.delete(id)
    }

    /// Unique project names across all stored tasks.
    pub fn list_projects(&self) -> Result<Vec<String>> {
        let items = self.storage.list()?;
        let set: std::collections::BTreeSet<String> = items
            .into_iter()
            .flat_map(|task| task.projects)
            .collect();
        Ok(set.into_iter().collect())
    }

    /// Unique context names across all stored tasks.
    pub fn list_contexts(&self) -> Result<Vec<String>> {
        let items = self.storage.list()?;
        let set: std::collections::BTreeSet<String> = items
            .into_iter()
            .flat_map(|task| task.contexts)
            .collect();
        Ok(set.into_iter().collect())
    }

    /// Unique attribute keys across all stored tasks.
    pub fn list_attributes(&self) -> Result<Vec<String>> {
        let items = self.storage.list()?;
        let set: std::collections::BTreeSet<String> = items
            .into_iter()
            .flat_map(|task| task.attributes.into_keys())
            .collect();
        Ok(set.into_iter().collect())
    }
}
