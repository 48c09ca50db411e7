use crate::anchor::ItemId;
use crate::spec::{ConnectorOrder, ConnectorType, HorizontalConnector, VerticalConnector};

use super::core::EntryTag;

/// Axis a stack session lays its members out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAxis {
    Vertical,
    Horizontal,
}

impl StackAxis {
    pub(crate) fn operation(self) -> &'static str {
        match self {
            StackAxis::Vertical => "stack_v",
            StackAxis::Horizontal => "stack_h",
        }
    }
}

/// Tags of the entries committed while a stack is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StackSession {
    tags: Vec<EntryTag>,
}

impl StackSession {
    pub(crate) fn track(&mut self, tag: EntryTag) {
        self.tags.push(tag);
    }

    pub(crate) fn contains(&self, tag: EntryTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// End-to-end connectors for consecutive `members`: each item's leading
/// (top) edge sits `spacing` after its predecessor's trailing (bottom) edge.
pub(crate) fn adjacent_connectors(
    members: &[ItemId],
    axis: StackAxis,
    spacing: f64,
) -> Vec<ConnectorType> {
    members
        .windows(2)
        .map(|pair| {
            let (previous, next) = (pair[0], pair[1]);
            match axis {
                StackAxis::Vertical => ConnectorType::Vertical(VerticalConnector::new(
                    next,
                    previous,
                    spacing,
                    ConnectorOrder::TopThenBottom,
                )),
                StackAxis::Horizontal => ConnectorType::Horizontal(HorizontalConnector::new(
                    next,
                    previous,
                    spacing,
                    ConnectorOrder::LeadingThenTrailing,
                )),
            }
        })
        .collect()
}
