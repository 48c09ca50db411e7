//! Records of layout requests that silently produced nothing.
//!
//! The compiler and the fluent builder never fail on unresolvable requests;
//! they skip them and note why here so callers and tests can tell an
//! intentional no-op from a mistake.

use std::fmt;

use serde::Serialize;

use crate::anchor::{Attribute, ItemId};
use crate::spec::ConnectorOrder;

/// Why a request contributed no constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// `Width`/`Height` requested but the size has no value for that axis.
    MissingDimension { item: ItemId, attribute: Attribute },
    /// `Center` requested without any centering directives.
    MissingCenter { item: ItemId },
    /// Connector order does not apply to the connector's axis.
    OrderMismatch {
        item: ItemId,
        connector: &'static str,
        order: ConnectorOrder,
    },
    /// Chain operation needed a pending entry and there was none.
    NoPendingEntry { operation: &'static str },
    /// Link operation needed a previously committed entry and there was none.
    NoPreviousEntry { operation: &'static str },
    /// Stack closed without a matching `start_stack`.
    StackSessionClosed { operation: &'static str },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDimension { item, attribute } => {
                write!(f, "{item}: {} requested without a size", attribute.name())
            }
            Diagnostic::MissingCenter { item } => {
                write!(f, "{item}: center requested without directives")
            }
            Diagnostic::OrderMismatch {
                item,
                connector,
                order,
            } => write!(f, "{item}: {connector} connector ignores order {order:?}"),
            Diagnostic::NoPendingEntry { operation } => {
                write!(f, "{operation}: no pending entry")
            }
            Diagnostic::NoPreviousEntry { operation } => {
                write!(f, "{operation}: no previous entry to link to")
            }
            Diagnostic::StackSessionClosed { operation } => {
                write!(f, "{operation}: no open stack session")
            }
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
