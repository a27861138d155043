use crate::{
    foundation::core::{Margins, Rect, Size, SizeConstraint, SizeMode},
    spec::position::{Anchor, Dimension},
};

/// Constraint handed to a child on one axis.
///
/// `reserved` is the sum of the child's margins on that axis; it is taken out of the parent's
/// value before the child's base dimension is applied. A fixed dimension always wins,
/// `MatchParent` inherits the parent's mode and `WrapContent` turns an exact parent into an
/// upper bound.
pub fn child_constraint(
    parent: SizeConstraint,
    reserved: u32,
    dimension: Dimension,
) -> SizeConstraint {
    let available = parent.shrink(reserved);
    match (dimension, parent.mode) {
        (Dimension::Fixed(n), _) => SizeConstraint::exact(n),
        (Dimension::MatchParent, _) => available,
        (Dimension::WrapContent, SizeMode::Exact) => SizeConstraint::at_most(available.value),
        (Dimension::WrapContent, SizeMode::AtMost | SizeMode::Unspecified) => available,
    }
}

/// Container length on one axis.
///
/// An exact constraint is authoritative. Otherwise the container wraps its children: the
/// largest `child + margins` extent, or zero without children.
pub fn container_length<I>(constraint: SizeConstraint, extents: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    if constraint.is_exact() {
        return constraint.value;
    }
    extents.into_iter().max().unwrap_or(0)
}

/// Top-left corner of a child pinned by `anchor` inside a container of size `container`.
///
/// The centered case halves the free space with floor division, so odd negative remainders
/// round toward negative infinity. Horizontally it subtracts the right margin and adds the left;
/// vertically it adds the top margin and subtracts the bottom. Results are never clamped.
pub fn anchor_origin(
    anchor: Anchor,
    margins: Margins,
    container: Size,
    child: Size,
) -> (i32, i32) {
    let cw = i64::from(container.width);
    let ch = i64::from(container.height);
    let w = i64::from(child.width);
    let h = i64::from(child.height);
    let l = i64::from(margins.left);
    let t = i64::from(margins.top);
    let r = i64::from(margins.right);
    let b = i64::from(margins.bottom);

    let (x, y) = match anchor {
        Anchor::Middle => ((cw - w).div_euclid(2) - r + l, (ch - h).div_euclid(2) + t - b),
        Anchor::TopLeft => (l, t),
        Anchor::TopRight => (cw - w - r, t),
        Anchor::BottomLeft => (l, ch - h - b),
        Anchor::BottomRight => (cw - w - r, ch - h - b),
    };
    (saturate(x), saturate(y))
}

/// Final frame of a child; its size is the measured size, only the origin depends on the anchor.
pub fn place_child(anchor: Anchor, margins: Margins, container: Size, child: Size) -> Rect {
    let (left, top) = anchor_origin(anchor, margins, container, child);
    Rect::from_origin_size(left, top, child)
}

fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
