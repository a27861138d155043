use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Attribute keys read by [`PositionSpec::from_attributes`](crate::PositionSpec::from_attributes).
pub mod keys {
    /// Base width: `match_parent`, `wrap_content` or pixels.
    pub const LAYOUT_WIDTH: &str = "layout_width";
    /// Base height: `match_parent`, `wrap_content` or pixels.
    pub const LAYOUT_HEIGHT: &str = "layout_height";
    /// Margin applied to every side. When present, the per-side keys are ignored.
    pub const LAYOUT_MARGIN: &str = "layout_margin";
    /// Left margin in pixels.
    pub const LAYOUT_MARGIN_LEFT: &str = "layout_margin_left";
    /// Top margin in pixels.
    pub const LAYOUT_MARGIN_TOP: &str = "layout_margin_top";
    /// Right margin in pixels.
    pub const LAYOUT_MARGIN_RIGHT: &str = "layout_margin_right";
    /// Bottom margin in pixels.
    pub const LAYOUT_MARGIN_BOTTOM: &str = "layout_margin_bottom";
    /// Anchor, either by name (`top_right`) or by numeric code (`2`).
    pub const LAYOUT_POSITION: &str = "layout_position";
}

/// Read-only key/value lookup used when building a position spec from markup.
///
/// Absent keys return `None`; the caller decides the default.
pub trait AttributeSource {
    /// Raw value stored under `key`.
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).attribute(key)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl AttributeSource for serde_json::Map<String, serde_json::Value> {
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            // Numbers keep their JSON spelling so `2` and `"2"` parse the same way.
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// Adapter turning a lookup closure into an [`AttributeSource`].
pub struct FnSource<F>(pub F);

impl<F> AttributeSource for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn attribute(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/attributes.rs"]
mod tests;
