//! jotbook - In-memory journal
//!
//! Keeps short journal entries for the lifetime of a session and lets the
//! user create, edit, bookmark, search, sort and delete them. The entry store
//! is usable on its own; the binary wraps it in a line-oriented session.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::EntryStore;
pub use error::JotbookError;
