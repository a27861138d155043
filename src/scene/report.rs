use crate::{
    foundation::core::{Rect, Size},
    spec::position::Anchor,
};

/// Result of solving a [`Scene`](crate::Scene).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutReport {
    /// Size of the root container.
    pub size: Size,
    /// Root children in document order.
    pub nodes: Vec<NodeReport>,
}

/// Final placement of one node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeReport {
    /// Node id.
    pub id: String,
    /// Anchor the node was pinned to.
    pub anchor: Anchor,
    /// Size the node measured to.
    pub measured: Size,
    /// Frame relative to the parent container.
    pub frame: Rect,
    /// Nested nodes, relative to this node's frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeReport>,
}

/// A node whose frame leaves its parent's bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Overflow {
    /// Node id.
    pub id: String,
    /// Offending frame.
    pub frame: Rect,
    /// Share of the frame's area still inside the parent, in `[0, 1]`.
    pub visible_fraction: f64,
}

impl LayoutReport {
    /// Every node, at any depth, that is not fully inside its parent.
    pub fn overflowing(&self) -> Vec<Overflow> {
        let mut out = Vec::new();
        collect_overflow(self.size, &self.nodes, &mut out);
        out
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&NodeReport> {
        find_in(&self.nodes, id)
    }
}

fn collect_overflow(parent: Size, nodes: &[NodeReport], out: &mut Vec<Overflow>) {
    let bounds = kurbo::Rect::new(0.0, 0.0, f64::from(parent.width), f64::from(parent.height));
    for node in nodes {
        if !node.frame.fits_within(parent) {
            let frame = node.frame.to_kurbo();
            let area = frame.area();
            let visible_fraction = if area > 0.0 {
                bounds.intersect(frame).area() / area
            } else {
                0.0
            };
            out.push(Overflow {
                id: node.id.clone(),
                frame: node.frame,
                visible_fraction,
            });
        }
        // Nested frames are relative to a container committed at its measured size.
        collect_overflow(node.measured, &node.children, out);
    }
}

fn find_in<'a>(nodes: &'a [NodeReport], id: &str) -> Option<&'a NodeReport> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/scene/report.rs"]
mod tests;
