//! The todo.txt line decoder.
//!
//! The grammar is order-dependent and ambiguous at the token level: a line
//! is split on single spaces and decoded front to back — optional `x`
//! completion marker, optional `(X)` priority, zero, one or two dates —
//! with each stage only consuming its token when *more than one* token
//! remains, so a line consisting of nothing but `x` stays a description.
//! Whatever survives the prefix stages is the description; project/context
//! tags and trailing `key:value` attributes are extracted from it but left
//! in the text.
//!
//! Decoding is deliberately lenient: malformed dates or priorities lose the
//! field, they never fail the parse.

use std::collections::BTreeMap;

use crate::date::NullDate;
use crate::model::{Attributes, Tags, Task};
use crate::priority::{decode_priority, is_priority_string};

/// A completion marker is exactly the single character `x`.
fn is_complete_token(token: &str) -> bool {
    token == "x"
}

/// A priority token is `(<letters>)` with at least one letter between the
/// parens, letters validated case-insensitively.
fn is_priority_token(token: &str) -> bool {
    // Parens plus at least one letter
    if token.len() < 3 {
        return false;
    }

    if !token.starts_with('(') || !token.ends_with(')') {
        return false;
    }

    is_priority_string(&token[1..token.len() - 1])
}

/// Scans whitespace-split tokens for `+project` and `@context` markers.
/// Other tokens are ignored here; they stay in the description and are
/// scanned separately for attributes.
fn extract_tags(tokens: &[&str]) -> (Tags, Tags) {
    let mut projects = Tags::new();
    let mut contexts = Tags::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        match token.as_bytes()[0] {
            b'+' => {
                projects.insert(token[1..].to_string());
            }
            b'@' => {
                contexts.insert(token[1..].to_string());
            }
            _ => {}
        }
    }

    (projects, contexts)
}

/// Walks tokens backward from the end, collecting `key:value` attributes
/// until the first token without a colon. Values with embedded colons keep
/// everything after the first one. Each visited pair is written into the
/// map, so when a key repeats within the trailing run the token nearest the
/// stop point (visited last) wins.
fn extract_attributes(tokens: &[&str]) -> Attributes {
    let mut attributes = BTreeMap::new();

    for token in tokens.iter().rev() {
        match token.split_once(':') {
            Some((key, value)) => {
                attributes.insert(key.to_string(), value.to_string());
            }
            None => break,
        }
    }

    attributes
}

impl Task {
    /// Decodes a raw todo.txt line. Never fails; malformed structured
    /// tokens simply stay in the description.
    pub fn parse(line: &str) -> Task {
        let mut parts: Vec<&str> = line.trim().split(' ').collect();

        let mut complete = false;
        if parts.len() > 1 && is_complete_token(parts[0]) {
            complete = true;
            parts.remove(0);
        }

        let mut priority = 0;
        if parts.len() > 1 && is_priority_token(parts[0]) {
            let letters = &parts[0][1..parts[0].len() - 1];
            priority = decode_priority(letters);
            parts.remove(0);
        }

        // Zero, one or two dates. A single date is the creation date; two
        // dates on a complete task are completion then creation.
        let mut completion_date = NullDate::invalid();
        let mut creation_date = NullDate::invalid();
        if parts.len() > 1 {
            let first = NullDate::parse(parts[0]);
            if first.is_valid() {
                if parts.len() > 2 {
                    let second = NullDate::parse(parts[1]);
                    if second.is_valid() && complete {
                        completion_date = first;
                        creation_date = second;
                        parts.drain(..2);
                    } else if complete {
                        completion_date = first;
                        parts.remove(0);
                    } else {
                        creation_date = first;
                        parts.remove(0);
                    }
                } else {
                    creation_date = first;
                    parts.remove(0);
                }
            }
        }

        let (projects, contexts) = extract_tags(&parts);
        let attributes = extract_attributes(&parts);

        // due: is not official todo.txt but has enough traction to deserve
        // first-class treatment
        let due_date = attributes
            .get("due")
            .map(|value| NullDate::parse(value))
            .unwrap_or_default();

        Task {
            id: 0,
            complete,
            priority,
            completion_date,
            creation_date,
            due_date,
            description: parts.join(" "),
            projects,
            contexts,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete_token() {
        assert!(is_complete_token("x"));
        assert!(!is_complete_token("X"));
        assert!(!is_complete_token("y"));
        assert!(!is_complete_token("[x]"));
        assert!(!is_complete_token("x "));
        assert!(!is_complete_token(" x"));
        assert!(!is_complete_token("Hello, world."));
    }

    #[test]
    fn test_is_priority_token() {
        assert!(is_priority_token("(A)"));
        assert!(is_priority_token("(Aa)"));
        assert!(is_priority_token("(aA)"));
        assert!(!is_priority_token("(A"));
        assert!(!is_priority_token("(AA"));
        assert!(!is_priority_token("A)"));
        assert!(!is_priority_token("()"));
        assert!(!is_priority_token("(1)"));
    }

    #[test]
    fn test_extract_tags() {
        let tokens = ["hello,", "world!", "+project", "@test", "+test", "+test"];
        let (projects, contexts) = extract_tags(&tokens);

        assert_eq!(projects.len(), 2);
        assert!(projects.contains("project"));
        assert!(projects.contains("test"));
        assert_eq!(contexts.len(), 1);
        assert!(contexts.contains("test"));
        assert!(!contexts.contains("hello,"));
    }

    #[test]
    fn test_parse_pending_with_priority() {
        let task = Task::parse("(B) 2020-04-28 Work on unit tests @codehealth +gotodo");

        assert!(!task.complete);
        assert_eq!(task.priority, 2);
        assert!(!task.completion_date.is_valid());
        assert_eq!(task.creation_date.display(), "2020-04-28");
        assert_eq!(
            task.description,
            "Work on unit tests @codehealth +gotodo"
        );
        assert_eq!(task.projects.len(), 1);
        assert!(task.has_project("gotodo"));
        assert_eq!(task.contexts.len(), 1);
        assert!(task.has_context("codehealth"));
    }

    #[test]
    fn test_parse_complete_with_two_dates_and_due() {
        let task = Task::parse("x 2020-04-29 2020-04-28 Add parser test +gotodo due:2020-05-01");

        assert!(task.complete);
        assert_eq!(task.priority, 0);
        assert_eq!(task.completion_date.display(), "2020-04-29");
        assert_eq!(task.creation_date.display(), "2020-04-28");
        assert_eq!(task.attributes.get("due").unwrap(), "2020-05-01");
        assert_eq!(task.due_date.display(), "2020-05-01");
        assert!(task.has_project("gotodo"));
        assert!(task.contexts.is_empty());
        assert_eq!(task.description, "Add parser test +gotodo due:2020-05-01");
    }

    #[test]
    fn test_parse_lone_x_is_description() {
        let task = Task::parse("x");
        assert!(!task.complete);
        assert_eq!(task.description, "x");
    }

    #[test]
    fn test_parse_double_x() {
        let task = Task::parse("x x");
        assert!(task.complete);
        assert_eq!(task.description, "x");
    }

    #[test]
    fn test_parse_lone_date_is_description() {
        let task = Task::parse("2020-04-29");
        assert!(!task.creation_date.is_valid());
        assert_eq!(task.description, "2020-04-29");
    }

    #[test]
    fn test_parse_date_then_text() {
        let task = Task::parse("2020-04-29 pay rent");
        assert_eq!(task.creation_date.display(), "2020-04-29");
        assert_eq!(task.description, "pay rent");
    }

    #[test]
    fn test_parse_two_dates_pending_keeps_second_in_description() {
        // Without the completion marker the second date is ordinary text
        let task = Task::parse("2020-04-29 2020-04-28 pay rent");
        assert_eq!(task.creation_date.display(), "2020-04-29");
        assert!(!task.completion_date.is_valid());
        assert_eq!(task.description, "2020-04-28 pay rent");
    }

    #[test]
    fn test_parse_complete_single_date_is_completion() {
        let task = Task::parse("x 2020-04-29 tidy desk");
        assert!(task.complete);
        assert_eq!(task.completion_date.display(), "2020-04-29");
        assert!(!task.creation_date.is_valid());
        assert_eq!(task.description, "tidy desk");
    }

    #[test]
    fn test_parse_complete_date_with_single_word_is_creation() {
        // With only two tokens left there is no room for a second date, so
        // the lone date reads as creation even on a complete task
        let task = Task::parse("x 2020-04-29 tidy");
        assert!(task.complete);
        assert!(!task.completion_date.is_valid());
        assert_eq!(task.creation_date.display(), "2020-04-29");
        assert_eq!(task.description, "tidy");
    }

    #[test]
    fn test_parse_invalid_priority_stays_in_description() {
        let task = Task::parse("(1) not a priority");
        assert_eq!(task.priority, 0);
        assert_eq!(task.description, "(1) not a priority");
    }

    #[test]
    fn test_parse_priority_without_description_is_description() {
        let task = Task::parse("(A)");
        assert_eq!(task.priority, 0);
        assert_eq!(task.description, "(A)");
    }

    #[test]
    fn test_parse_attribute_with_multiple_colons() {
        let task = Task::parse("check the docs ref:https://example.com");
        assert_eq!(task.attributes.get("ref").unwrap(), "https://example.com");
        assert_eq!(task.description, "check the docs ref:https://example.com");
    }

    #[test]
    fn test_parse_attribute_scan_stops_at_plain_token() {
        // note:this is not trailing, so it is never collected
        let task = Task::parse("note:this plain due:2020-05-01");
        assert_eq!(task.attributes.len(), 1);
        assert_eq!(task.attributes.get("due").unwrap(), "2020-05-01");
        assert!(!task.has_attribute("note"));
    }

    #[test]
    fn test_duplicate_trailing_attribute_keys() {
        // Both tokens are in the trailing run; the scan walks backward and
        // overwrites, so the leftmost duplicate wins
        let task = Task::parse("pay rent due:2020-01-01 due:2020-02-02");
        assert_eq!(task.attributes.get("due").unwrap(), "2020-01-01");
        assert_eq!(task.due_date.display(), "2020-01-01");
    }

    #[test]
    fn test_parse_invalid_due_value_leaves_due_invalid() {
        let task = Task::parse("pay rent due:soon");
        assert_eq!(task.attributes.get("due").unwrap(), "soon");
        assert!(!task.due_date.is_valid());
    }

    #[test]
    fn test_parse_empty_line() {
        let task = Task::parse("   ");
        assert!(!task.complete);
        assert_eq!(task.description, "");
        assert!(task.projects.is_empty());
        assert!(task.attributes.is_empty());
    }

    #[test]
    fn test_round_trip_pending_task() {
        let line = "(B) 2020-04-28 Work on unit tests @codehealth +gotodo";
        let task = Task::parse(line);
        assert_eq!(task.to_string(), line);

        let again = Task::parse(&task.to_string());
        assert_eq!(again, task);
    }

    #[test]
    fn test_round_trip_complete_task() {
        let line = "x 2020-04-29 2020-04-28 Add parser test +gotodo due:2020-05-01";
        let task = Task::parse(line);
        assert_eq!(task.to_string(), line);
    }

    #[test]
    fn test_reencode_without_completion_marker_drops_completion_date() {
        // Decode tolerates a lone completion date on a complete task;
        // re-encoding after resume simply omits it
        let mut task = Task::parse("x 2020-04-29 tidy desk");
        task.complete = false;
        assert_eq!(task.to_string(), "tidy desk");
    }
}
