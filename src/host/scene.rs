use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::anchor::{
    Anchor, Attribute, ConstraintDescriptor, ConstraintKey, Guide, ItemId, LayoutItem,
};
use crate::error::{LayoutError, Result};
use crate::spec::Insets;

use super::core::{ActivationSummary, ConstraintHost};

#[derive(Debug, Clone)]
struct SceneItem {
    name: String,
    parent: Option<ItemId>,
    children: Vec<ItemId>,
    safe_area: Insets,
}

#[derive(Debug, Clone)]
struct ActiveConstraint {
    sequence: u64,
    descriptor: ConstraintDescriptor,
}

/// In-memory item tree that records active constraints.
///
/// Each [`ConstraintKey`] holds at most one active constraint; activating a
/// descriptor with an occupied key replaces the previous one.
#[derive(Debug, Default)]
pub struct Scene {
    items: HashMap<ItemId, SceneItem>,
    roots: Vec<ItemId>,
    active: HashMap<ConstraintKey, ActiveConstraint>,
    next_id: u64,
    next_sequence: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, name: impl Into<String>) -> ItemId {
        let id = self.insert(name.into(), None);
        self.roots.push(id);
        id
    }

    pub fn add_child(&mut self, parent: impl LayoutItem, name: impl Into<String>) -> Result<ItemId> {
        let parent = parent.item_id();
        if !self.items.contains_key(&parent) {
            return Err(LayoutError::ItemNotFound(parent));
        }
        let id = self.insert(name.into(), Some(parent));
        if let Some(entry) = self.items.get_mut(&parent) {
            entry.children.push(id);
        }
        Ok(id)
    }

    fn insert(&mut self, name: String, parent: Option<ItemId>) -> ItemId {
        self.next_id += 1;
        let id = ItemId::new(self.next_id);
        self.items.insert(
            id,
            SceneItem {
                name,
                parent,
                children: Vec::new(),
                safe_area: Insets::ZERO,
            },
        );
        id
    }

    pub fn set_safe_area(&mut self, item: impl LayoutItem, insets: Insets) -> Result<()> {
        let id = item.item_id();
        let entry = self
            .items
            .get_mut(&id)
            .ok_or(LayoutError::ItemNotFound(id))?;
        entry.safe_area = insets;
        Ok(())
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains_key(&item)
    }

    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.items.get(&item).map(|entry| entry.name.as_str())
    }

    pub fn parent(&self, item: ItemId) -> Option<ItemId> {
        self.items.get(&item).and_then(|entry| entry.parent)
    }

    pub fn children(&self, item: ItemId) -> &[ItemId] {
        self.items
            .get(&item)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    pub fn safe_area(&self, item: ItemId) -> Option<Insets> {
        self.items.get(&item).map(|entry| entry.safe_area)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn constraint(&self, key: &ConstraintKey) -> Option<&ConstraintDescriptor> {
        self.active.get(key).map(|active| &active.descriptor)
    }

    /// Active constraints owned by `item`, in activation order.
    pub fn constraints_for(&self, item: ItemId) -> Vec<&ConstraintDescriptor> {
        let mut owned: Vec<_> = self
            .active
            .values()
            .filter(|active| active.descriptor.first.item == item)
            .collect();
        owned.sort_by_key(|active| active.sequence);
        owned.into_iter().map(|active| &active.descriptor).collect()
    }

    /// [`constraints_for`](Self::constraints_for) with every safe-area anchor
    /// rewritten against frames.
    pub fn resolved_constraints_for(&self, item: ItemId) -> Vec<ConstraintDescriptor> {
        self.constraints_for(item)
            .into_iter()
            .map(|descriptor| self.resolve(descriptor))
            .collect()
    }

    /// Rewrite `descriptor` so both anchors use [`Guide::Frame`], folding each
    /// item's safe-area insets into the constant.
    ///
    /// `a.safe = m * b.safe + c` becomes `a = m * b + (c + m * inset(b) - inset(a))`.
    pub fn resolve_guides(
        &self,
        descriptor: &ConstraintDescriptor,
    ) -> Result<ConstraintDescriptor> {
        if let Some(missing) = descriptor.items().find(|item| !self.items.contains_key(item)) {
            return Err(LayoutError::ItemNotFound(missing));
        }
        Ok(self.resolve(descriptor))
    }

    fn resolve(&self, descriptor: &ConstraintDescriptor) -> ConstraintDescriptor {
        let mut resolved = descriptor.clone();
        resolved.constant -= self.guide_offset(descriptor.first);
        resolved.first.guide = Guide::Frame;
        if let Some(second) = resolved.second.as_mut() {
            resolved.constant += descriptor.multiplier * self.guide_offset(*second);
            second.guide = Guide::Frame;
        }
        resolved
    }

    /// Distance from the frame attribute to the anchor's guide attribute.
    fn guide_offset(&self, anchor: Anchor) -> f64 {
        if anchor.guide == Guide::Frame {
            return 0.0;
        }
        let insets = self.safe_area(anchor.item).unwrap_or_default();
        match anchor.attribute {
            Attribute::Top => insets.top,
            Attribute::Bottom => -insets.bottom,
            Attribute::Leading => insets.leading,
            Attribute::Trailing => -insets.trailing,
            Attribute::Width => -(insets.leading + insets.trailing),
            Attribute::Height => -(insets.top + insets.bottom),
            Attribute::CenterX => (insets.leading - insets.trailing) / 2.0,
            Attribute::CenterY => (insets.top - insets.bottom) / 2.0,
        }
    }
}

impl ConstraintHost for Scene {
    fn activate(&mut self, batch: &[ConstraintDescriptor]) -> Result<ActivationSummary> {
        if let Some(missing) = batch
            .iter()
            .flat_map(|descriptor| descriptor.items())
            .find(|item| !self.items.contains_key(item))
        {
            return Err(LayoutError::ItemNotFound(missing));
        }

        let mut summary = ActivationSummary::default();
        for descriptor in batch {
            self.next_sequence += 1;
            let active = ActiveConstraint {
                sequence: self.next_sequence,
                descriptor: descriptor.clone(),
            };
            match self.active.entry(descriptor.key()) {
                Entry::Occupied(mut slot) => {
                    slot.insert(active);
                    summary.replaced += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(active);
                }
            }
            summary.activated += 1;
        }
        Ok(summary)
    }

    fn deactivate(&mut self, item: ItemId) -> Result<usize> {
        if !self.items.contains_key(&item) {
            return Err(LayoutError::ItemNotFound(item));
        }
        let before = self.active.len();
        self.active
            .retain(|_, active| !active.descriptor.items().any(|referenced| referenced == item));
        Ok(before - self.active.len())
    }
}
