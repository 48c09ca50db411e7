//! Fluent multi-step builder over the constraint compiler.
//!
//! Downstream code imports the builder types from here; the state machine
//! lives in `core` and stack pairing in `stack`.

mod core;
mod stack;

pub use self::core::{Entry, EntryTag, FluentLayoutBuilder};
