use serde::Serialize;

use crate::anchor::{Guide, ItemId, LayoutItem, Priority, XAnchor, YAnchor};

/// Offsets applied to the edge connectors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub leading: f64,
    pub trailing: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, bottom: f64, leading: f64, trailing: f64) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }
}

/// Fixed size requested for the content item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    Height(f64),
    Width(f64),
    Size { width: f64, height: f64 },
    /// Same value for width and height.
    Equal(f64),
}

impl SizeSpec {
    pub fn width(self) -> Option<f64> {
        match self {
            SizeSpec::Width(value) | SizeSpec::Equal(value) => Some(value),
            SizeSpec::Size { width, .. } => Some(width),
            SizeSpec::Height(_) => None,
        }
    }

    pub fn height(self) -> Option<f64> {
        match self {
            SizeSpec::Height(value) | SizeSpec::Equal(value) => Some(value),
            SizeSpec::Size { height, .. } => Some(height),
            SizeSpec::Width(_) => None,
        }
    }
}

/// One centering request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterDirective {
    /// Offset from the container's horizontal centre.
    OffsetX(f64),
    /// Offset from the container's vertical centre.
    OffsetY(f64),
    EqualX(XAnchor),
    EqualY(YAnchor),
}

/// Edge an item-to-item connector endpoint pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

/// One endpoint of an item-to-item connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Connector {
    pub edge: Edge,
    pub item: ItemId,
}

impl Connector {
    pub fn new(edge: Edge, item: impl LayoutItem) -> Self {
        Self {
            edge,
            item: item.item_id(),
        }
    }
}

/// Which endpoint's equation a connector emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorOrder {
    LeadingThenTrailing,
    TrailingThenLeading,
    TopThenBottom,
    BottomThenTop,
}

/// Pins the leading edge of one item to the trailing edge of another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalConnector {
    pub leading: Connector,
    pub trailing: Connector,
    pub spacing: f64,
    pub order: ConnectorOrder,
}

impl HorizontalConnector {
    pub fn new(
        leading: impl LayoutItem,
        trailing: impl LayoutItem,
        spacing: f64,
        order: ConnectorOrder,
    ) -> Self {
        Self {
            leading: Connector::new(Edge::Leading, leading),
            trailing: Connector::new(Edge::Trailing, trailing),
            spacing,
            order,
        }
    }
}

/// Pins the top edge of one item to the bottom edge of another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalConnector {
    pub top: Connector,
    pub bottom: Connector,
    pub spacing: f64,
    pub order: ConnectorOrder,
}

impl VerticalConnector {
    pub fn new(
        top: impl LayoutItem,
        bottom: impl LayoutItem,
        spacing: f64,
        order: ConnectorOrder,
    ) -> Self {
        Self {
            top: Connector::new(Edge::Top, top),
            bottom: Connector::new(Edge::Bottom, bottom),
            spacing,
            order,
        }
    }
}

/// Requested edge, dimension or connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorType {
    Top,
    Bottom,
    Leading,
    Trailing,
    /// Shorthand for the four edges.
    All,
    Width,
    Height,
    Center,
    Horizontal(HorizontalConnector),
    Vertical(VerticalConnector),
}

impl ConnectorType {
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            ConnectorType::Top
                | ConnectorType::Bottom
                | ConnectorType::Leading
                | ConnectorType::Trailing
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectorType::Top => "top",
            ConnectorType::Bottom => "bottom",
            ConnectorType::Leading => "leading",
            ConnectorType::Trailing => "trailing",
            ConnectorType::All => "all",
            ConnectorType::Width => "width",
            ConnectorType::Height => "height",
            ConnectorType::Center => "center",
            ConnectorType::Horizontal(_) => "horizontal",
            ConnectorType::Vertical(_) => "vertical",
        }
    }
}

/// Immutable description of which constraints to emit for one
/// content/container pairing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutSpec {
    insets: Insets,
    size: Option<SizeSpec>,
    center: Option<Vec<CenterDirective>>,
    connectors: Vec<ConnectorType>,
    guide: Guide,
    priority: Priority,
    aspect_ratio: Option<f64>,
}

impl LayoutSpec {
    pub fn new(connectors: impl IntoIterator<Item = ConnectorType>) -> Self {
        Self::default().with_connectors(connectors)
    }

    /// Pin all four edges to the container with the given insets.
    pub fn fill(insets: Insets) -> Self {
        Self::new([ConnectorType::All]).with_insets(insets)
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_size(mut self, size: SizeSpec) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_center(mut self, directives: impl IntoIterator<Item = CenterDirective>) -> Self {
        self.center = Some(directives.into_iter().collect());
        self
    }

    pub fn with_connectors(mut self, connectors: impl IntoIterator<Item = ConnectorType>) -> Self {
        for connector in connectors {
            self.push_connector(connector);
        }
        self
    }

    pub fn with_guide(mut self, guide: Guide) -> Self {
        self.guide = guide;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Append a connector unless an equal one is already present.
    pub(crate) fn push_connector(&mut self, connector: ConnectorType) {
        if !self.connectors.contains(&connector) {
            self.connectors.push(connector);
        }
    }

    /// Add the `Width`/`Height` connectors a fixed size implies, if missing.
    pub fn extend_for_size(&mut self) {
        let Some(size) = self.size else {
            return;
        };
        if size.width().is_some() {
            self.push_connector(ConnectorType::Width);
        }
        if size.height().is_some() {
            self.push_connector(ConnectorType::Height);
        }
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn size(&self) -> Option<SizeSpec> {
        self.size
    }

    pub fn center(&self) -> Option<&[CenterDirective]> {
        self.center.as_deref()
    }

    pub fn connectors(&self) -> &[ConnectorType] {
        &self.connectors
    }

    pub fn guide(&self) -> Guide {
        self.guide
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn contains(&self, connector: &ConnectorType) -> bool {
        self.connectors.contains(connector)
    }
}
