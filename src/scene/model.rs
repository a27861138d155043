use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Rect, Size, SizeConstraint},
    foundation::error::{LayoutError, LayoutResult},
    layout::container::Container,
    layout::subject::{Element, LayoutSubject},
    scene::report::{LayoutReport, NodeReport},
    spec::position::PositionSpec,
};

/// JSON scene document: a root container and its node tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Width constraint handed to the root container.
    #[serde(default = "SizeConstraint::unspecified")]
    pub width: SizeConstraint,
    /// Height constraint handed to the root container.
    #[serde(default = "SizeConstraint::unspecified")]
    pub height: SizeConstraint,
    /// Children of the root container.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// One node of a scene document.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    /// Unique id, echoed in the layout report.
    pub id: String,
    /// Markup attributes turned into the node's position spec.
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    /// Leaf or nested container.
    pub kind: NodeKind,
}

/// What a scene node is.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Leaf with an intrinsic content size.
    Element(Size),
    /// Nested container.
    Container {
        /// Children of the nested container.
        #[serde(default)]
        children: Vec<SceneNode>,
    },
}

/// Runtime node built from a [`SceneNode`].
#[derive(Debug)]
pub enum SceneItem {
    /// Leaf element.
    Element(Element),
    /// Nested container with its id.
    Group {
        /// Node id.
        id: String,
        /// Nested container.
        container: Container<SceneItem>,
    },
}

impl LayoutSubject for SceneItem {
    fn measure_self(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<()> {
        match self {
            Self::Element(e) => e.measure_self(width, height),
            Self::Group { container, .. } => container.measure_self(width, height),
        }
    }

    fn measured_size(&self) -> Size {
        match self {
            Self::Element(e) => e.measured_size(),
            Self::Group { container, .. } => container.measured_size(),
        }
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        match self {
            Self::Element(e) => e.position_spec(),
            Self::Group { container, .. } => container.position_spec(),
        }
    }

    fn place(&mut self, frame: Rect) -> LayoutResult<()> {
        match self {
            Self::Element(e) => e.place(frame),
            Self::Group { container, .. } => container.place(frame),
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            Self::Element(e) => Some(e.id()),
            Self::Group { id, .. } => Some(id),
        }
    }
}

impl Scene {
    /// Parse a scene from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> LayoutResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LayoutError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LayoutError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ids and every node's attributes.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut seen = BTreeSet::new();
        validate_nodes(&self.children, &mut seen)
    }

    /// Build the runtime container tree.
    pub fn build(&self) -> LayoutResult<Container<SceneItem>> {
        let mut root = Container::new();
        for node in &self.children {
            root.attach(build_node(node)?)?;
        }
        Ok(root)
    }

    /// Validate, build, lay out the tree and report every frame.
    #[tracing::instrument(skip(self), fields(width = %self.width, height = %self.height))]
    pub fn solve(&self) -> LayoutResult<LayoutReport> {
        self.validate()?;
        let mut root = self.build()?;
        let size = root.layout(self.width, self.height)?;
        Ok(LayoutReport {
            size,
            nodes: report_children(&root),
        })
    }
}

fn validate_nodes(nodes: &[SceneNode], seen: &mut BTreeSet<String>) -> LayoutResult<()> {
    for node in nodes {
        if node.id.trim().is_empty() {
            return Err(LayoutError::validation("node id must be non-empty"));
        }
        if !seen.insert(node.id.clone()) {
            return Err(LayoutError::validation(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
        node_spec(node)?;
        if let NodeKind::Container { children } = &node.kind {
            validate_nodes(children, seen)?;
        }
    }
    Ok(())
}

fn node_spec(node: &SceneNode) -> LayoutResult<PositionSpec> {
    PositionSpec::from_attributes(&node.attributes)
        .map_err(|e| LayoutError::validation(format!("node '{}': {e}", node.id)))
}

fn build_node(node: &SceneNode) -> LayoutResult<SceneItem> {
    let spec = node_spec(node)?;
    match &node.kind {
        NodeKind::Element(content) => Ok(SceneItem::Element(
            Element::new(node.id.clone(), *content).with_spec(spec),
        )),
        NodeKind::Container { children } => {
            let mut container = Container::new().with_spec(spec);
            for child in children {
                container.attach(build_node(child)?)?;
            }
            Ok(SceneItem::Group {
                id: node.id.clone(),
                container,
            })
        }
    }
}

fn report_children(container: &Container<SceneItem>) -> Vec<NodeReport> {
    container
        .children()
        .filter_map(|(id, item)| {
            let spec = container.spec(id)?;
            let frame = container.frame(id)?;
            let children = match item {
                SceneItem::Element(_) => Vec::new(),
                SceneItem::Group { container, .. } => report_children(container),
            };
            Some(NodeReport {
                id: item.label().unwrap_or_default().to_string(),
                anchor: spec.anchor,
                measured: item.measured_size(),
                frame,
                children,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
