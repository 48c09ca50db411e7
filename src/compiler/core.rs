use crate::anchor::{
    AnchorGuide, Attribute, ConstraintDescriptor, ItemId, LayoutItem, aspect_ratio,
};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::spec::{
    CenterDirective, ConnectorOrder, ConnectorType, Edge, HorizontalConnector, Insets,
    LayoutSpec, VerticalConnector,
};

const ALL_EDGES: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Leading, Edge::Trailing];

/// Expand `spec` into descriptors pinning `content` inside `container`.
///
/// Requests that cannot be resolved contribute nothing; use [`compile_with`]
/// to find out which ones were skipped.
pub fn compile(
    content: impl LayoutItem,
    container: impl LayoutItem,
    spec: &LayoutSpec,
) -> Vec<ConstraintDescriptor> {
    let mut diagnostics = Diagnostics::new();
    compile_with(content, container, spec, &mut diagnostics)
}

/// Same as [`compile`], recording a [`Diagnostic`] for every skipped request.
///
/// Descriptors come out in the order `spec` lists its connectors, with `All`
/// expanding to top, bottom, leading, trailing in place. Edge connectors
/// listed next to `All` are suppressed.
pub fn compile_with(
    content: impl LayoutItem,
    container: impl LayoutItem,
    spec: &LayoutSpec,
    diagnostics: &mut Diagnostics,
) -> Vec<ConstraintDescriptor> {
    let compiler = SpecCompiler {
        content: content.frame(),
        container: AnchorGuide::new(container.item_id(), spec.guide()),
        content_id: content.item_id(),
        spec,
    };
    let expands_all = spec.contains(&ConnectorType::All);

    let mut descriptors = Vec::with_capacity(spec.connectors().len() + 3);
    for connector in spec.connectors() {
        match connector {
            ConnectorType::Top => {
                if !expands_all {
                    descriptors.push(compiler.edge(Edge::Top));
                }
            }
            ConnectorType::Bottom => {
                if !expands_all {
                    descriptors.push(compiler.edge(Edge::Bottom));
                }
            }
            ConnectorType::Leading => {
                if !expands_all {
                    descriptors.push(compiler.edge(Edge::Leading));
                }
            }
            ConnectorType::Trailing => {
                if !expands_all {
                    descriptors.push(compiler.edge(Edge::Trailing));
                }
            }
            ConnectorType::All => {
                descriptors.extend(ALL_EDGES.iter().map(|edge| compiler.edge(*edge)));
            }
            ConnectorType::Width => {
                descriptors.extend(compiler.dimension(Attribute::Width, diagnostics));
            }
            ConnectorType::Height => {
                descriptors.extend(compiler.dimension(Attribute::Height, diagnostics));
            }
            ConnectorType::Center => compiler.center(&mut descriptors, diagnostics),
            ConnectorType::Horizontal(link) => {
                descriptors.extend(compiler.horizontal(link, diagnostics));
            }
            ConnectorType::Vertical(link) => {
                descriptors.extend(compiler.vertical(link, diagnostics));
            }
        }
    }

    if let Some(ratio) = spec.aspect_ratio() {
        descriptors.push(aspect_ratio(compiler.content_id, ratio));
    }

    let priority = spec.priority();
    descriptors
        .into_iter()
        .map(|descriptor| descriptor.with_priority(priority))
        .collect()
}

/// Record a [`Diagnostic`] for every request in `spec` that `content` cannot
/// resolve, without emitting anything.
///
/// Whether a request resolves never depends on the container.
pub fn validate(content: impl LayoutItem, spec: &LayoutSpec, diagnostics: &mut Diagnostics) {
    let content = content.item_id();
    compile_with(content, content, spec, diagnostics);
}

struct SpecCompiler<'a> {
    content: AnchorGuide,
    container: AnchorGuide,
    content_id: ItemId,
    spec: &'a LayoutSpec,
}

impl SpecCompiler<'_> {
    fn insets(&self) -> Insets {
        self.spec.insets()
    }

    fn edge(&self, edge: Edge) -> ConstraintDescriptor {
        let insets = self.insets();
        match edge {
            Edge::Top => self.content.top().equal_to(self.container.top(), insets.top),
            Edge::Bottom => self
                .content
                .bottom()
                .equal_to(self.container.bottom(), -insets.bottom),
            Edge::Leading => self
                .content
                .leading()
                .equal_to(self.container.leading(), insets.leading),
            Edge::Trailing => self
                .content
                .trailing()
                .equal_to(self.container.trailing(), -insets.trailing),
        }
    }

    fn dimension(
        &self,
        attribute: Attribute,
        diagnostics: &mut Diagnostics,
    ) -> Option<ConstraintDescriptor> {
        let (value, anchor) = match attribute {
            Attribute::Width => (
                self.spec.size().and_then(|size| size.width()),
                self.content.width(),
            ),
            _ => (
                self.spec.size().and_then(|size| size.height()),
                self.content.height(),
            ),
        };

        match value {
            Some(value) => Some(anchor.equal_to_constant(value)),
            None => {
                diagnostics.push(Diagnostic::MissingDimension {
                    item: self.content_id,
                    attribute,
                });
                None
            }
        }
    }

    fn center(&self, out: &mut Vec<ConstraintDescriptor>, diagnostics: &mut Diagnostics) {
        let Some(directives) = self.spec.center() else {
            diagnostics.push(Diagnostic::MissingCenter {
                item: self.content_id,
            });
            return;
        };

        for directive in directives {
            let descriptor = match *directive {
                CenterDirective::OffsetX(offset) => self
                    .content
                    .center_x()
                    .equal_to(self.container.center_x(), offset),
                CenterDirective::OffsetY(offset) => self
                    .content
                    .center_y()
                    .equal_to(self.container.center_y(), offset),
                CenterDirective::EqualX(anchor) => self.content.center_x().equal_to(anchor, 0.0),
                CenterDirective::EqualY(anchor) => self.content.center_y().equal_to(anchor, 0.0),
            };
            out.push(descriptor);
        }
    }

    fn horizontal(
        &self,
        link: &HorizontalConnector,
        diagnostics: &mut Diagnostics,
    ) -> Option<ConstraintDescriptor> {
        let leading = link.leading.item;
        let trailing = link.trailing.item;
        match link.order {
            ConnectorOrder::LeadingThenTrailing => {
                Some(leading.leading().equal_to(trailing.trailing(), link.spacing))
            }
            ConnectorOrder::TrailingThenLeading => {
                Some(trailing.trailing().equal_to(leading.leading(), -link.spacing))
            }
            order => {
                diagnostics.push(Diagnostic::OrderMismatch {
                    item: self.content_id,
                    connector: "horizontal",
                    order,
                });
                None
            }
        }
    }

    fn vertical(
        &self,
        link: &VerticalConnector,
        diagnostics: &mut Diagnostics,
    ) -> Option<ConstraintDescriptor> {
        let top = link.top.item;
        let bottom = link.bottom.item;
        match link.order {
            ConnectorOrder::TopThenBottom => {
                Some(top.top().equal_to(bottom.bottom(), link.spacing))
            }
            ConnectorOrder::BottomThenTop => {
                Some(bottom.bottom().equal_to(top.top(), -link.spacing))
            }
            order => {
                diagnostics.push(Diagnostic::OrderMismatch {
                    item: self.content_id,
                    connector: "vertical",
                    order,
                });
                None
            }
        }
    }
}
