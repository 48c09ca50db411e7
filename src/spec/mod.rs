//! Declarative layout description consumed by the compiler.

mod core;

pub use self::core::{
    CenterDirective, Connector, ConnectorOrder, ConnectorType, Edge, HorizontalConnector, Insets,
    LayoutSpec, SizeSpec, VerticalConnector,
};
