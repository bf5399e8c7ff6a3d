//! The task entity and its canonical todo.txt rendering.
//!
//! A [`Task`] is the structured form of one todo.txt line. The free-text
//! `description` keeps tag and attribute tokens inline, exactly as they
//! appear in the serialized line; `projects`, `contexts` and `attributes`
//! are derived views extracted at parse time. Mutations that add a tag must
//! keep both sides in sync (see the manager), because serialization renders
//! the description verbatim.
//!
//! The encode contract is strict about field order: completion marker,
//! priority, completion date (only for complete tasks), creation date,
//! then the description. The due date is never serialized on its own — it
//! round-trips through the `due:` attribute embedded in the description.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::date::NullDate;
use crate::priority::encode_priority;

/// Set of project or context names. Membership only; order is irrelevant.
pub type Tags = BTreeSet<String>;

/// Inline `key:value` attributes keyed by attribute name.
pub type Attributes = BTreeMap<String, String>;

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// Storage-assigned id, 0 until first persisted.
    pub id: u64,
    pub complete: bool,
    /// Base-26 rank; 0 means unprioritized, 1 is "A".
    pub priority: u32,
    pub completion_date: NullDate,
    pub creation_date: NullDate,
    pub due_date: NullDate,
    /// Body text after structured prefix tokens are stripped. Tag and
    /// attribute tokens remain part of this text.
    pub description: String,
    pub projects: Tags,
    pub contexts: Tags,
    pub attributes: Attributes,
}

impl Task {
    pub fn has_project(&self, project: &str) -> bool {
        self.projects.contains(project)
    }

    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.contains(context)
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }
}

impl fmt::Display for Task {
    /// Canonical todo.txt encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.complete {
            parts.push("x".to_string());
        }

        if self.priority > 0 {
            parts.push(format!("({})", encode_priority(self.priority)));
        }

        if self.complete && self.completion_date.is_valid() {
            parts.push(self.completion_date.display());
        }

        if self.creation_date.is_valid() {
            parts.push(self.creation_date.display());
        }

        parts.push(self.description.clone());

        write!(f, "{}", parts.join(" "))
    }
}
