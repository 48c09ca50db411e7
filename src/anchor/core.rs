use std::fmt;

use serde::Serialize;

/// Opaque identity of an item owned by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Layout attribute an anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
        }
    }
}

/// Which rectangle of an item an anchor is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guide {
    #[default]
    Frame,
    SafeArea,
}

/// Untyped reference to one attribute of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Anchor {
    pub item: ItemId,
    pub attribute: Attribute,
    pub guide: Guide,
}

impl Anchor {
    pub const fn new(item: ItemId, attribute: Attribute, guide: Guide) -> Self {
        Self {
            item,
            attribute,
            guide,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.guide {
            Guide::Frame => write!(f, "{}.{}", self.item, self.attribute.name()),
            Guide::SafeArea => write!(f, "{}.safe.{}", self.item, self.attribute.name()),
        }
    }
}

/// Horizontal position anchor (leading, trailing, centerX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct XAnchor(Anchor);

/// Vertical position anchor (top, bottom, centerY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct YAnchor(Anchor);

/// Dimension anchor (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DimensionAnchor(Anchor);

macro_rules! axis_anchor {
    ($name:ident) => {
        impl $name {
            pub fn anchor(self) -> Anchor {
                self.0
            }

            /// `self = other + constant`.
            pub fn equal_to(self, other: $name, constant: f64) -> ConstraintDescriptor {
                ConstraintDescriptor::between(self.0, other.0, 1.0, constant)
            }
        }
    };
}

axis_anchor!(XAnchor);
axis_anchor!(YAnchor);

impl DimensionAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }

    /// `self = constant`.
    pub fn equal_to_constant(self, constant: f64) -> ConstraintDescriptor {
        ConstraintDescriptor::constant(self.0, constant)
    }

    /// `self = other * multiplier + constant`.
    pub fn equal_to_multiple(
        self,
        other: DimensionAnchor,
        multiplier: f64,
        constant: f64,
    ) -> ConstraintDescriptor {
        ConstraintDescriptor::between(self.0, other.0, multiplier, constant)
    }
}

/// Typed anchor accessors for one guide of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorGuide {
    item: ItemId,
    guide: Guide,
}

impl AnchorGuide {
    pub const fn new(item: ItemId, guide: Guide) -> Self {
        Self { item, guide }
    }

    fn anchor(&self, attribute: Attribute) -> Anchor {
        Anchor::new(self.item, attribute, self.guide)
    }

    pub fn top(&self) -> YAnchor {
        YAnchor(self.anchor(Attribute::Top))
    }

    pub fn bottom(&self) -> YAnchor {
        YAnchor(self.anchor(Attribute::Bottom))
    }

    pub fn center_y(&self) -> YAnchor {
        YAnchor(self.anchor(Attribute::CenterY))
    }

    pub fn leading(&self) -> XAnchor {
        XAnchor(self.anchor(Attribute::Leading))
    }

    pub fn trailing(&self) -> XAnchor {
        XAnchor(self.anchor(Attribute::Trailing))
    }

    pub fn center_x(&self) -> XAnchor {
        XAnchor(self.anchor(Attribute::CenterX))
    }

    pub fn width(&self) -> DimensionAnchor {
        DimensionAnchor(self.anchor(Attribute::Width))
    }

    pub fn height(&self) -> DimensionAnchor {
        DimensionAnchor(self.anchor(Attribute::Height))
    }
}

/// Capability every host item must provide: a stable identity. Anchors are
/// derived from it.
pub trait LayoutItem {
    fn item_id(&self) -> ItemId;

    fn frame(&self) -> AnchorGuide {
        AnchorGuide::new(self.item_id(), Guide::Frame)
    }

    fn safe_area(&self) -> AnchorGuide {
        AnchorGuide::new(self.item_id(), Guide::SafeArea)
    }

    fn top(&self) -> YAnchor {
        self.frame().top()
    }

    fn bottom(&self) -> YAnchor {
        self.frame().bottom()
    }

    fn leading(&self) -> XAnchor {
        self.frame().leading()
    }

    fn trailing(&self) -> XAnchor {
        self.frame().trailing()
    }

    fn center_x(&self) -> XAnchor {
        self.frame().center_x()
    }

    fn center_y(&self) -> YAnchor {
        self.frame().center_y()
    }

    fn width(&self) -> DimensionAnchor {
        self.frame().width()
    }

    fn height(&self) -> DimensionAnchor {
        self.frame().height()
    }
}

impl LayoutItem for ItemId {
    fn item_id(&self) -> ItemId {
        *self
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    fn item_id(&self) -> ItemId {
        (**self).item_id()
    }
}

/// Constraint priority presets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Required,
    DefaultHigh,
    DefaultLow,
    FittingSize,
    Custom(f32),
}

impl Priority {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 1000.0;

    /// Build a custom priority, clamped to the host's accepted range.
    pub fn custom(value: f32) -> Self {
        Self::Custom(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f32 {
        match self {
            Priority::Required => 1000.0,
            Priority::DefaultHigh => 750.0,
            Priority::DefaultLow => 250.0,
            Priority::FittingSize => 50.0,
            Priority::Custom(value) => value,
        }
    }

    pub fn is_required(self) -> bool {
        self.value() >= Self::MAX
    }
}

/// Slot a descriptor occupies on the host: one active constraint per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConstraintKey {
    pub item: ItemId,
    pub attribute: Attribute,
    pub guide: Guide,
}

/// One equality constraint, ready for activation.
///
/// `first = second * multiplier + constant`, or `first = constant` when
/// `second` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintDescriptor {
    pub first: Anchor,
    pub second: Option<Anchor>,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
}

impl ConstraintDescriptor {
    fn between(first: Anchor, second: Anchor, multiplier: f64, constant: f64) -> Self {
        Self {
            first,
            second: Some(second),
            multiplier,
            constant,
            priority: Priority::Required,
        }
    }

    fn constant(first: Anchor, constant: f64) -> Self {
        Self {
            first,
            second: None,
            multiplier: 1.0,
            constant,
            priority: Priority::Required,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn key(&self) -> ConstraintKey {
        ConstraintKey {
            item: self.first.item,
            attribute: self.first.attribute,
            guide: self.first.guide,
        }
    }

    /// Items referenced on either side of the equation.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        std::iter::once(self.first.item).chain(self.second.map(|anchor| anchor.item))
    }
}

impl fmt::Display for ConstraintDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.first)?;
        match self.second {
            None => write!(f, "{}", self.constant)?,
            Some(second) => {
                write!(f, "{second}")?;
                if self.multiplier != 1.0 {
                    write!(f, " * {}", self.multiplier)?;
                }
                if self.constant > 0.0 {
                    write!(f, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(f, " - {}", -self.constant)?;
                }
            }
        }
        if !self.priority.is_required() {
            write!(f, " @{}", self.priority.value())?;
        }
        Ok(())
    }
}

/// `item.width = item.height * ratio`.
pub fn aspect_ratio(item: impl LayoutItem, ratio: f64) -> ConstraintDescriptor {
    item.width().equal_to_multiple(item.height(), ratio, 0.0)
}
