//! Core types, configuration, and descriptor loading for doclint.
//!
//! This crate provides the data structures shared across all doclint crates:
//! - [`types`]: The schema AST handed over by the external parser, and error types
//! - [`config`]: Configuration loading from `.doclint/doclint.json`
//! - [`descriptor`]: Reading JSON descriptor files and discovering them on disk

pub mod config;
pub mod descriptor;
pub mod types;
