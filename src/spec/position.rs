use crate::{
    foundation::core::Margins,
    foundation::error::{LayoutError, LayoutResult},
    spec::attributes::{AttributeSource, keys},
};

/// Corner or center a child is pinned to inside its container.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Centered on both axes, nudged by margins.
    Middle,
    /// Pinned to the top-left corner.
    #[default]
    TopLeft,
    /// Pinned to the top-right corner.
    TopRight,
    /// Pinned to the bottom-left corner.
    BottomLeft,
    /// Pinned to the bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// Every anchor, ordered by numeric code.
    pub const ALL: [Self; 5] = [
        Self::Middle,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Numeric code used by markup (`0..=4`).
    pub fn code(self) -> u8 {
        match self {
            Self::Middle => 0,
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomLeft => 3,
            Self::BottomRight => 4,
        }
    }

    /// Anchor for a numeric code, `None` outside `0..=4`.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Canonical attribute spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }

    /// Parse an attribute value, by name or numeric code.
    ///
    /// Anything else is rejected with [`LayoutError::InvalidAttribute`]; values are never clamped
    /// to the default anchor.
    pub fn parse_attribute(value: &str) -> LayoutResult<Self> {
        let trimmed = value.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| {
                LayoutError::invalid_attribute(
                    keys::LAYOUT_POSITION,
                    value,
                    "anchor code must be in 0..=4",
                )
            });
        }
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                LayoutError::invalid_attribute(keys::LAYOUT_POSITION, value, "unknown anchor name")
            })
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested base length of a child on one axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// As large as the parent allows once margins are reserved.
    MatchParent,
    /// Just large enough for the child's content.
    #[default]
    WrapContent,
    /// Fixed pixel length.
    Fixed(u32),
}

impl Dimension {
    fn parse_attribute(key: &str, value: &str) -> LayoutResult<Self> {
        match value.trim() {
            "match_parent" | "fill_parent" => Ok(Self::MatchParent),
            "wrap_content" => Ok(Self::WrapContent),
            other => parse_px(key, other).map(Self::Fixed),
        }
    }
}

/// Per-child layout parameters: base dimensions, margins and anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PositionSpec {
    /// Base width.
    #[serde(default)]
    pub width: Dimension,
    /// Base height.
    #[serde(default)]
    pub height: Dimension,
    /// Space reserved around the child.
    #[serde(default)]
    pub margins: Margins,
    /// Where the child is pinned.
    #[serde(default)]
    pub anchor: Anchor,
}

impl Default for PositionSpec {
    /// Parameters a container hands out when none are requested: fill both axes.
    fn default() -> Self {
        Self::new(Dimension::MatchParent, Dimension::MatchParent)
    }
}

impl PositionSpec {
    /// Spec with explicit base dimensions, zero margins and [`Anchor::TopLeft`].
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            anchor: Anchor::TopLeft,
        }
    }

    /// Build a spec from markup attributes (see [`keys`]).
    ///
    /// Absent attributes fall back to `wrap_content`, zero margins and [`Anchor::TopLeft`].
    /// Malformed values, negative margins and unknown anchors fail with
    /// [`LayoutError::InvalidAttribute`].
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> LayoutResult<Self> {
        let width = match attrs.attribute(keys::LAYOUT_WIDTH) {
            Some(v) => Dimension::parse_attribute(keys::LAYOUT_WIDTH, &v)?,
            None => Dimension::WrapContent,
        };
        let height = match attrs.attribute(keys::LAYOUT_HEIGHT) {
            Some(v) => Dimension::parse_attribute(keys::LAYOUT_HEIGHT, &v)?,
            None => Dimension::WrapContent,
        };

        let margins = match attrs.attribute(keys::LAYOUT_MARGIN) {
            Some(v) => Margins::uniform(parse_px(keys::LAYOUT_MARGIN, &v)?),
            None => Margins {
                left: margin_side(attrs, keys::LAYOUT_MARGIN_LEFT)?,
                top: margin_side(attrs, keys::LAYOUT_MARGIN_TOP)?,
                right: margin_side(attrs, keys::LAYOUT_MARGIN_RIGHT)?,
                bottom: margin_side(attrs, keys::LAYOUT_MARGIN_BOTTOM)?,
            },
        };

        let anchor = match attrs.attribute(keys::LAYOUT_POSITION) {
            Some(v) => Anchor::parse_attribute(&v)?,
            None => Anchor::default(),
        };

        Ok(Self {
            width,
            height,
            margins,
            anchor,
        })
    }

    /// Field-for-field copy of another spec, used when a child moves between containers.
    pub fn from_spec(other: &PositionSpec) -> Self {
        *other
    }

    /// Replace the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Replace the anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

fn margin_side<A: AttributeSource + ?Sized>(attrs: &A, key: &str) -> LayoutResult<u32> {
    attrs
        .attribute(key)
        .map_or(Ok(0), |v| parse_px(key, &v))
}

fn parse_px(key: &str, value: &str) -> LayoutResult<u32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    match digits.parse::<i64>() {
        Ok(n) if n < 0 => Err(LayoutError::invalid_attribute(
            key,
            value,
            "length must be non-negative",
        )),
        Ok(n) => u32::try_from(n)
            .map_err(|_| LayoutError::invalid_attribute(key, value, "length out of range")),
        Err(_) => Err(LayoutError::invalid_attribute(
            key,
            value,
            "expected an integer pixel length",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/position.rs"]
mod tests;
