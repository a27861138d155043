use crate::{
    foundation::core::{Rect, Size, SizeConstraint},
    foundation::error::LayoutResult,
    spec::position::PositionSpec,
};

/// Capability set an element needs to be laid out by a [`Container`](crate::Container).
///
/// The container never owns an element's identity; it only drives these calls during the
/// measurement and arrangement passes.
pub trait LayoutSubject {
    /// Measure against the per-axis constraints derived by the parent.
    ///
    /// The constraints already have the element's margins reserved.
    fn measure_self(&mut self, width: SizeConstraint, height: SizeConstraint)
    -> LayoutResult<()>;

    /// Size recorded by the last [`measure_self`](Self::measure_self) call.
    fn measured_size(&self) -> Size;

    /// Position parameters, read once when the element is attached.
    fn position_spec(&self) -> Option<&PositionSpec>;

    /// Receive the final frame, relative to the parent container's origin.
    fn place(&mut self, frame: Rect) -> LayoutResult<()> {
        let _ = frame;
        Ok(())
    }

    /// Short name for diagnostics and reports.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl<T: LayoutSubject + ?Sized> LayoutSubject for Box<T> {
    fn measure_self(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<()> {
        (**self).measure_self(width, height)
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        (**self).position_spec()
    }

    fn place(&mut self, frame: Rect) -> LayoutResult<()> {
        (**self).place(frame)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// Leaf element with a fixed intrinsic content size.
///
/// Measures to its content size, capped by `AtMost` and overridden by `Exact`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: String,
    content: Size,
    spec: Option<PositionSpec>,
    measured: Size,
    frame: Option<Rect>,
}

impl Element {
    /// Element without a position spec; attaching it fails until one is set.
    pub fn new(id: impl Into<String>, content: Size) -> Self {
        Self {
            id: id.into(),
            content,
            spec: None,
            measured: Size::ZERO,
            frame: None,
        }
    }

    /// Attach position parameters.
    pub fn with_spec(mut self, spec: PositionSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Intrinsic content size.
    pub fn content(&self) -> Size {
        self.content
    }

    /// Last frame received from the parent.
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }
}

impl LayoutSubject for Element {
    fn measure_self(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<()> {
        self.measured = Size::new(
            width.resolve(self.content.width),
            height.resolve(self.content.height),
        );
        Ok(())
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        self.spec.as_ref()
    }

    fn place(&mut self, frame: Rect) -> LayoutResult<()> {
        self.frame = Some(frame);
        Ok(())
    }

    fn label(&self) -> Option<&str> {
        Some(&self.id)
    }
}
