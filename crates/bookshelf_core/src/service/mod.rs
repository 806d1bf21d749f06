//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory catalog and keep the store in sync with it.
//! - Keep the shell decoupled from storage details.

pub mod catalog;
