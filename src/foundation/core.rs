/// How a parent communicates sizing intent for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// The child must be exactly `value` long.
    Exact,
    /// The child may be at most `value` long.
    AtMost,
    /// No limit; `value` is only a hint.
    Unspecified,
}

/// Per-axis sizing constraint `(mode, value)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SizeConstraint {
    /// Constraint mode.
    pub mode: SizeMode,
    /// Length in pixels the mode applies to.
    #[serde(default)]
    pub value: u32,
}

impl SizeConstraint {
    /// `Exact(value)`.
    pub const fn exact(value: u32) -> Self {
        Self {
            mode: SizeMode::Exact,
            value,
        }
    }

    /// `AtMost(value)`.
    pub const fn at_most(value: u32) -> Self {
        Self {
            mode: SizeMode::AtMost,
            value,
        }
    }

    /// `Unspecified` with a zero hint.
    pub const fn unspecified() -> Self {
        Self {
            mode: SizeMode::Unspecified,
            value: 0,
        }
    }

    /// Whether the constraint dictates the final length.
    pub fn is_exact(self) -> bool {
        self.mode == SizeMode::Exact
    }

    /// Resolve a desired length against this constraint.
    ///
    /// `Exact` wins outright, `AtMost` caps the desired length and `Unspecified` accepts it.
    pub fn resolve(self, desired: u32) -> u32 {
        match self.mode {
            SizeMode::Exact => self.value,
            SizeMode::AtMost => desired.min(self.value),
            SizeMode::Unspecified => desired,
        }
    }

    /// Same mode with `reserved` pixels removed from the value, saturating at zero.
    pub fn shrink(self, reserved: u32) -> Self {
        Self {
            mode: self.mode,
            value: self.value.saturating_sub(reserved),
        }
    }
}

impl std::fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            SizeMode::Exact => write!(f, "exact:{}", self.value),
            SizeMode::AtMost => write!(f, "at_most:{}", self.value),
            SizeMode::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Measured or committed `(width, height)` in pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Zero-sized value.
    pub const ZERO: Self = Self::new(0, 0);

    /// Build a size from its components.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Integer rectangle `(left, top, right, bottom)`; coordinates may be negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Rectangle with the given origin and size.
    pub fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(px(size.width)),
            bottom: top.saturating_add(px(size.height)),
        }
    }

    /// Horizontal extent.
    pub fn width(self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent.
    pub fn height(self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the rectangle lies entirely inside `(0, 0, size.width, size.height)`.
    pub fn fits_within(self, size: Size) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= px(size.width)
            && self.bottom <= px(size.height)
    }

    /// Convert to floating point geometry for renderers and hit testing.
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Reserved space outside a child's bounds, per side.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Margins {
    /// Left margin.
    #[serde(default)]
    pub left: u32,
    /// Top margin.
    #[serde(default)]
    pub top: u32,
    /// Right margin.
    #[serde(default)]
    pub right: u32,
    /// Bottom margin.
    #[serde(default)]
    pub bottom: u32,
}

impl Margins {
    /// Same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Build margins in `(left, top, right, bottom)` order.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `left + right`, saturating.
    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// `top + bottom`, saturating.
    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Lossless-or-saturating conversion from a pixel length to a signed coordinate.
pub(crate) fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
