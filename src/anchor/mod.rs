//! Anchors, priorities and constraint descriptors.
//!
//! This is the host-facing vocabulary: items expose typed anchors through
//! [`LayoutItem`], and pairs of compatible anchors produce
//! [`ConstraintDescriptor`]s.

mod core;

pub use self::core::{
    Anchor, AnchorGuide, Attribute, ConstraintDescriptor, ConstraintKey, DimensionAnchor, Guide,
    ItemId, LayoutItem, Priority, XAnchor, YAnchor, aspect_ratio,
};
