//! # Todz Architecture
//!
//! Todz is a todo.txt task manager library; the `todz` binary is a thin
//! clap client over it. The hard part lives in the codec: todo.txt is a
//! compact, order-dependent token grammar (completion marker, priority,
//! one or two dates, inline tags and `key:value` attributes) that has to
//! decode losslessly and re-encode canonically, because the serialized
//! line *is* the persisted value in the database.
//!
//! ```text
//! raw line ──parse──▶ Task ──manager mutations──▶ Display ──▶ raw line ──▶ storage
//! storage ──▶ manager filter ──▶ sort ──▶ caller
//! ```
//!
//! ## Layers
//!
//! - [`manager`]: every user-facing operation (add, complete, prioritize,
//!   tagging, filtering), each a single load → mutate → persist cycle.
//! - [`model`] / [`parse`]: the `Task` entity, its decoder and canonical
//!   encoder.
//! - [`priority`] / [`date`]: the leaf codecs — bijective base-26 priority
//!   ranks and strictly-shaped optional dates.
//! - [`sort`]: the three strict total orders used for display.
//! - [`store`]: the `Storage` capability trait with a SQLite production
//!   backend and an in-memory test double.
//! - [`config`] / [`error`]: ambient plumbing.
//!
//! Everything from the manager inward takes plain arguments, returns
//! `Result`, and never touches stdout or the process exit code; the
//! binary's `main.rs`/`cli` own all terminal concerns.
//!
//! ## Leniency policy
//!
//! Malformed todo.txt input never fails a parse: a bad date becomes an
//! absent date, a bad priority becomes rank 0, and the offending tokens
//! stay in the description. Only missing ids and storage failures are
//! errors.

pub mod config;
pub mod date;
pub mod error;
pub mod manager;
pub mod model;
mod parse;
pub mod priority;
pub mod sort;
pub mod store;
