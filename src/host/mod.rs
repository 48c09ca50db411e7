//! Host boundary and the in-memory reference host.
//!
//! Real toolkits implement [`ConstraintHost`] over their own item types;
//! [`Scene`] is a self-contained host used for tests, benchmarks and the
//! debug overlay.

mod core;
mod scene;

pub use self::core::{ActivationSummary, ConstraintHost};
pub use scene::Scene;
