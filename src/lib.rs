//! Declarative anchor layout on top of a host constraint toolkit.
//!
//! A [`LayoutSpec`] names the edges, dimensions and centering to pin. The
//! [`compiler`] turns a `(content, container, spec)` triple into
//! [`ConstraintDescriptor`]s, and [`FluentLayoutBuilder`] chains several items,
//! links neighbours and stacks runs end to end before activating everything
//! on a [`ConstraintHost`] in one batch.
//!
//! The modules follow the `mod.rs` orchestrator + private `core` layout so
//! downstream code only imports from the module roots.

pub mod anchor;
pub mod builder;
pub mod compiler;
pub mod config;
pub mod debug;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod logging;
pub mod metrics;
pub mod spec;

pub use anchor::{
    Anchor, AnchorGuide, Attribute, ConstraintDescriptor, ConstraintKey, DimensionAnchor, Guide,
    ItemId, LayoutItem, Priority, XAnchor, YAnchor, aspect_ratio,
};
pub use builder::{Entry, EntryTag, FluentLayoutBuilder};
pub use compiler::{compile, compile_with, validate};
pub use config::BuilderConfig;
pub use debug::{DebugOverlay, OverlayNode, OverlaySettings, display_width};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{LayoutError, Result};
pub use host::{ActivationSummary, ConstraintHost, Scene};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use spec::{
    CenterDirective, Connector, ConnectorOrder, ConnectorType, Edge, HorizontalConnector, Insets,
    LayoutSpec, SizeSpec, VerticalConnector,
};
