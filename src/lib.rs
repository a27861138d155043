//! anchor-layout is a two-pass layout engine for GUI view hierarchies.
//!
//! A [`Container`] holds children that each carry a [`PositionSpec`]: base dimensions, margins
//! and an [`Anchor`] (center or one of the four corners). Layout runs in two passes:
//!
//! 1. **Measure** (bottom-up): every child measures itself against the container's constraints
//!    with its margins reserved, then the container derives its own size. An exact constraint is
//!    authoritative; otherwise the container wraps its largest child plus margins.
//! 2. **Arrange** (top-down): once the parent commits a final size, every child is placed at the
//!    origin its anchor dictates. Sizes never change in this pass.
//!
//! Anything that implements [`LayoutSubject`] can be laid out, including another [`Container`].
//! Position specs usually come from markup through an [`AttributeSource`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: layout is a pure function of constraints, specs and measured sizes.
//! - **No clamping**: oversized margins may push frames outside the container.
//! - **Fail fast**: unknown anchors and children without a spec are rejected before layout runs.
//!
//! For file-driven use, see [`Scene`] and the `anchor-layout` binary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod scene;
mod spec;

pub use foundation::core::{Margins, Rect, Size, SizeConstraint, SizeMode};
pub use foundation::error::{LayoutError, LayoutResult};
pub use layout::container::{ChildId, Container, LayoutState};
pub use layout::solver::{anchor_origin, child_constraint, container_length, place_child};
pub use layout::subject::{Element, LayoutSubject};
pub use scene::model::{NodeKind, Scene, SceneItem, SceneNode};
pub use scene::report::{LayoutReport, NodeReport, Overflow};
pub use spec::attributes::{AttributeSource, FnSource, keys};
pub use spec::position::{Anchor, Dimension, PositionSpec};
