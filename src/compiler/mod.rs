//! Layout-spec to constraint-set compiler.

mod core;

pub use self::core::{compile, compile_with, validate};
