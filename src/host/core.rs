use crate::anchor::{ConstraintDescriptor, ItemId};
use crate::error::Result;

/// Outcome of committing one constraint batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    pub activated: usize,
    /// Previously active constraints displaced by a descriptor with the same key.
    pub replaced: usize,
}

/// Boundary to the toolkit that owns the items and solves the constraints.
///
/// `activate` must be atomic from the caller's point of view: either every
/// descriptor in the batch becomes active or none does.
pub trait ConstraintHost {
    fn activate(&mut self, batch: &[ConstraintDescriptor]) -> Result<ActivationSummary>;

    /// Drop every active constraint that references `item`.
    fn deactivate(&mut self, item: ItemId) -> Result<usize>;
}
