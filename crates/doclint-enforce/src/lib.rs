//! Lint rules and the lint engine for doclint.
//!
//! Walks parsed schema files and produces failures:
//! - MESSAGES_HAVE_SENTENCE_COMMENTS: every non-extension message needs a
//!   leading comment whose first line holds a complete sentence
//!
//! Modules:
//! - [`walk`]: depth-first traversal that builds qualified message names
//! - [`sentence`]: the complete-sentence predicate over raw comment text
//! - [`messages`]: the sentence-comment rule itself
//! - [`linter`]: static registration metadata for every rule
//! - [`engine`]: runs selected linters over a file set

pub mod types;
pub mod sentence;
pub mod walk;
pub mod messages;
pub mod linter;
pub mod suppress;
pub mod engine;
