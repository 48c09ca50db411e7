use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::anchor::{ConstraintDescriptor, ItemId, LayoutItem};
use crate::error::{LayoutError, Result};
use crate::host::Scene;
use crate::spec::Insets;

use super::width::{display_width, pad_to};

const HIGHLIGHT_ON: &str = "\x1b[1;33m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Overlay rendering parameters.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    /// Spaces per tree level.
    pub indent: usize,
    /// List each item's active constraints under it.
    pub show_constraints: bool,
    /// Emit ANSI highlighting for highlighted items.
    pub ansi: bool,
    /// Show constraints with safe-area anchors folded into frame constants.
    pub resolve_guides: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            indent: 2,
            show_constraints: true,
            ansi: false,
            resolve_guides: false,
        }
    }
}

/// One visited item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayNode {
    pub item: ItemId,
    pub name: String,
    pub depth: usize,
    pub safe_area: Insets,
    pub constraints: Vec<ConstraintDescriptor>,
    pub highlighted: bool,
}

/// Caller-owned debug visualizer for a [`Scene`].
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    settings: OverlaySettings,
    highlighted: HashSet<ItemId>,
}

impl DebugOverlay {
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            settings,
            highlighted: HashSet::new(),
        }
    }

    pub fn settings_mut(&mut self) -> &mut OverlaySettings {
        &mut self.settings
    }

    pub fn highlight(&mut self, item: impl LayoutItem) -> &mut Self {
        self.highlighted.insert(item.item_id());
        self
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    /// Depth-first walk from `root`, children in insertion order.
    pub fn walk(&self, scene: &Scene, root: impl LayoutItem) -> Result<Vec<OverlayNode>> {
        let root = root.item_id();
        if !scene.contains(root) {
            return Err(LayoutError::ItemNotFound(root));
        }
        let mut nodes = Vec::new();
        self.visit(scene, root, 0, &mut nodes);
        Ok(nodes)
    }

    /// Walk every root of the scene.
    pub fn walk_all(&self, scene: &Scene) -> Vec<OverlayNode> {
        let mut nodes = Vec::new();
        for root in scene.roots() {
            self.visit(scene, *root, 0, &mut nodes);
        }
        nodes
    }

    fn visit(&self, scene: &Scene, item: ItemId, depth: usize, out: &mut Vec<OverlayNode>) {
        out.push(OverlayNode {
            item,
            name: scene.name(item).unwrap_or_default().to_string(),
            depth,
            safe_area: scene.safe_area(item).unwrap_or_default(),
            constraints: if self.settings.resolve_guides {
                scene.resolved_constraints_for(item)
            } else {
                scene.constraints_for(item).into_iter().cloned().collect()
            },
            highlighted: self.highlighted.contains(&item),
        });
        for child in scene.children(item) {
            self.visit(scene, *child, depth + 1, out);
        }
    }

    /// Indented tree with ids and constraint counts aligned in one column.
    pub fn render_text(&self, nodes: &[OverlayNode]) -> String {
        let labels: Vec<String> = nodes.iter().map(|node| self.label(node)).collect();
        let column = labels
            .iter()
            .map(|label| display_width(label))
            .max()
            .unwrap_or(0)
            + 2;

        let mut out = String::new();
        for (node, mut line) in nodes.iter().zip(labels) {
            pad_to(&mut line, column);
            out.push_str(&format!(
                "{line}{} [{} constraint{}]\n",
                node.item,
                node.constraints.len(),
                if node.constraints.len() == 1 { "" } else { "s" }
            ));
            if self.settings.show_constraints {
                let pad = " ".repeat((node.depth + 1) * self.settings.indent);
                for constraint in &node.constraints {
                    out.push_str(&format!("{pad}- {constraint}\n"));
                }
            }
        }
        out
    }

    pub fn render_json(&self, nodes: &[OverlayNode]) -> Value {
        serde_json::to_value(nodes).unwrap_or(Value::Null)
    }

    fn label(&self, node: &OverlayNode) -> String {
        let indent = " ".repeat(node.depth * self.settings.indent);
        if node.highlighted && self.settings.ansi {
            format!("{indent}{HIGHLIGHT_ON}{}{HIGHLIGHT_OFF}", node.name)
        } else if node.highlighted {
            format!("{indent}*{}", node.name)
        } else {
            format!("{indent}{}", node.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ConstraintHost;

    fn scene() -> (Scene, ItemId, ItemId, ItemId, ItemId) {
        let mut scene = Scene::new();
        let root = scene.add_root("root");
        let header = scene.add_child(root, "header").unwrap();
        let title = scene.add_child(header, "title").unwrap();
        let body = scene.add_child(root, "body").unwrap();
        scene
            .activate(&[
                header.top().equal_to(root.safe_area().top(), 0.0),
                title.leading().equal_to(header.leading(), 8.0),
                title.height().equal_to_constant(20.0),
            ])
            .unwrap();
        (scene, root, header, title, body)
    }

    #[test]
    fn walk_is_depth_first_in_insertion_order() {
        let (scene, root, header, title, body) = scene();
        let nodes = DebugOverlay::default().walk(&scene, root).unwrap();
        assert_eq!(
            nodes.iter().map(|n| (n.item, n.depth)).collect::<Vec<_>>(),
            vec![(root, 0), (header, 1), (title, 2), (body, 1)]
        );
        assert_eq!(nodes[2].constraints.len(), 2);
    }

    #[test]
    fn walk_rejects_unknown_root() {
        let (scene, ..) = scene();
        assert!(matches!(
            DebugOverlay::default().walk(&scene, ItemId::new(999)),
            Err(LayoutError::ItemNotFound(_))
        ));
    }

    #[test]
    fn text_report_aligns_ids() {
        let (scene, root, ..) = scene();
        let overlay = DebugOverlay::default();
        let text = overlay.render_text(&overlay.walk(&scene, root).unwrap());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "root       #1 [0 constraints]");
        assert_eq!(lines[1], "  header   #2 [1 constraint]");
        assert_eq!(lines[2], "    - #2.top = #1.safe.top");
        assert_eq!(lines[3], "    title  #3 [2 constraints]");
        assert_eq!(lines[4], "      - #3.leading = #2.leading + 8");
        assert_eq!(lines[5], "      - #3.height = 20");
        assert_eq!(lines[6], "  body     #4 [0 constraints]");
    }

    #[test]
    fn ansi_highlight_keeps_alignment() {
        let (scene, root, header, ..) = scene();
        let mut overlay = DebugOverlay::new(OverlaySettings {
            show_constraints: false,
            ansi: true,
            ..OverlaySettings::default()
        });
        overlay.highlight(header);
        let text = overlay.render_text(&overlay.walk(&scene, root).unwrap());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains(HIGHLIGHT_ON));
        assert_eq!(display_width(lines[1]), display_width("  header   #2 [1 constraint]"));
    }

    #[test]
    fn json_report_lists_nodes() {
        let (scene, ..) = scene();
        let overlay = DebugOverlay::default();
        let value = overlay.render_json(&overlay.walk_all(&scene));
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[1]["name"], "header");
        assert_eq!(value[1]["constraints"][0]["first"]["attribute"], "top");
        assert_eq!(value[1]["constraints"][0]["second"]["guide"], "safe_area");
    }

    #[test]
    fn resolved_guides_fold_safe_area_insets() {
        let (mut scene, root, header, ..) = scene();
        scene
            .set_safe_area(root, Insets::new(20.0, 0.0, 0.0, 0.0))
            .unwrap();
        let overlay = DebugOverlay::new(OverlaySettings {
            resolve_guides: true,
            ..OverlaySettings::default()
        });
        let nodes = overlay.walk(&scene, root).unwrap();
        assert_eq!(nodes[0].safe_area, Insets::new(20.0, 0.0, 0.0, 0.0));

        let text = overlay.render_text(&nodes);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[2], "    - #2.top = #1.top + 20");
        assert_eq!(nodes[1].item, header);
    }
}
