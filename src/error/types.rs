use thiserror::Error;

use crate::anchor::ItemId;
use crate::diagnostics::Diagnostic;

/// Unified result type for the anchor layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced when realizing constraints against a host.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("item `{0}` not found in host")]
    ItemNotFound(ItemId),
    #[error("{} layout request(s) could not be resolved", .0.len())]
    Unresolved(Vec<Diagnostic>),
}
