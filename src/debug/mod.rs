//! Debug overlay for inspecting active constraints in a [`Scene`](crate::host::Scene).

mod core;
pub mod width;

pub use self::core::{DebugOverlay, OverlayNode, OverlaySettings};
pub use width::display_width;
