//! Card value type for a kanban-style task tracker.
//!
//! A [`Card`] holds a summary, an owner, a workflow state and a numeric id.
//! It compares field-wise and converts to and from a string-keyed mapping
//! via [`Card::to_map`] and [`Card::from_map`].

mod card;

pub use card::{Card, CardError};
