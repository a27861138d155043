use crate::{
    foundation::core::{Rect, Size, SizeConstraint},
    foundation::error::{LayoutError, LayoutResult},
    layout::solver::{child_constraint, container_length, place_child},
    layout::subject::LayoutSubject,
    spec::position::PositionSpec,
};

/// Stable handle to a child attached to a [`Container`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(pub(crate) u64);

impl std::fmt::Display for ChildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a container is in its layout cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// No measurement since the last structural or spec change.
    #[default]
    Unmeasured,
    /// Measured; frames are stale or absent.
    Measured,
    /// Every child has a frame for the committed size.
    Arranged,
}

#[derive(Debug)]
struct Slot<S> {
    id: ChildId,
    subject: S,
    spec: PositionSpec,
    frame: Option<Rect>,
}

/// Layout engine pinning each child to a corner or the center of the container.
///
/// Children are measured bottom-up by [`measure`](Self::measure) and placed top-down by
/// [`arrange`](Self::arrange). All mutation goes through `&mut self`, so passes over one
/// container never overlap.
#[derive(Debug)]
pub struct Container<S> {
    slots: Vec<Slot<S>>,
    next_id: u64,
    own_spec: Option<PositionSpec>,
    measured: Size,
    committed: Option<Size>,
    state: LayoutState,
}

impl<S> Default for Container<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Container<S> {
    /// Empty root container.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            own_spec: None,
            measured: Size::ZERO,
            committed: None,
            state: LayoutState::Unmeasured,
        }
    }

    /// Give the container its own position parameters so it can be nested in another container.
    pub fn with_spec(mut self, spec: PositionSpec) -> Self {
        self.own_spec = Some(spec);
        self
    }

    /// Attach a child with an explicit spec, e.g. one copied from a previous container.
    pub fn attach_with(&mut self, subject: S, spec: PositionSpec) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            subject,
            spec,
            frame: None,
        });
        self.invalidate();
        id
    }

    /// Detach a child, dropping its spec and frame.
    pub fn detach(&mut self, id: ChildId) -> LayoutResult<S> {
        let idx = self.index_of(id)?;
        let slot = self.slots.remove(idx);
        self.invalidate();
        Ok(slot.subject)
    }

    /// Number of attached children.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no child is attached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Children in attach order.
    pub fn children(&self) -> impl Iterator<Item = (ChildId, &S)> {
        self.slots.iter().map(|s| (s.id, &s.subject))
    }

    /// Borrow one child.
    pub fn child(&self, id: ChildId) -> Option<&S> {
        self.slot(id).map(|s| &s.subject)
    }

    /// Mutably borrow one child. Changing what it measures to requires a new
    /// [`measure`](Self::measure) pass.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut S> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.subject)
    }

    /// Position parameters of a child.
    pub fn spec(&self, id: ChildId) -> Option<&PositionSpec> {
        self.slot(id).map(|s| &s.spec)
    }

    /// Edit a child's position parameters between passes; resets the container to
    /// [`LayoutState::Unmeasured`].
    pub fn spec_mut(&mut self, id: ChildId) -> Option<&mut PositionSpec> {
        let idx = self.slots.iter().position(|s| s.id == id)?;
        self.invalidate();
        Some(&mut self.slots[idx].spec)
    }

    /// Frame assigned by the last arrangement pass.
    pub fn frame(&self, id: ChildId) -> Option<Rect> {
        self.slot(id).and_then(|s| s.frame)
    }

    /// Frames in attach order; `None` for children not yet arranged.
    pub fn frames(&self) -> impl Iterator<Item = (ChildId, Option<Rect>)> + '_ {
        self.slots.iter().map(|s| (s.id, s.frame))
    }

    /// Size proposed by the last measurement pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Size assigned by the parent, if any.
    pub fn committed_size(&self) -> Option<Size> {
        self.committed
    }

    /// Current point in the layout cycle.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Record the final size assigned by this container's parent.
    ///
    /// Arrangement uses it instead of the measured size; re-arranging after a new commit does not
    /// require re-measuring.
    pub fn commit_size(&mut self, size: Size) {
        self.committed = Some(size);
        if self.state == LayoutState::Arranged {
            self.state = LayoutState::Measured;
        }
    }

    fn slot(&self, id: ChildId) -> Option<&Slot<S>> {
        self.slots.iter().find(|s| s.id == id)
    }

    fn index_of(&self, id: ChildId) -> LayoutResult<usize> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or(LayoutError::UnknownChild(id.0))
    }

    fn invalidate(&mut self) {
        self.state = LayoutState::Unmeasured;
    }
}

impl<S: LayoutSubject> Container<S> {
    /// Attach a child, taking a copy of its own position spec.
    ///
    /// Fails with [`LayoutError::MissingSpec`] when the child carries none.
    pub fn attach(&mut self, subject: S) -> LayoutResult<ChildId> {
        let Some(spec) = subject.position_spec().copied() else {
            let who = match subject.label() {
                Some(l) => format!("'{l}'"),
                None => format!("at index {}", self.slots.len()),
            };
            return Err(LayoutError::missing_spec(who));
        };
        Ok(self.attach_with(subject, spec))
    }

    /// Measurement pass: measure every child, then derive the container's own size.
    ///
    /// An exact constraint fixes the container length on that axis; any other mode wraps the
    /// widest (tallest) child including its margins.
    #[tracing::instrument(level = "debug", skip(self), fields(children = self.slots.len()))]
    pub fn measure(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<Size> {
        for slot in &mut self.slots {
            let m = slot.spec.margins;
            let cw = child_constraint(width, m.horizontal(), slot.spec.width);
            let ch = child_constraint(height, m.vertical(), slot.spec.height);
            slot.subject.measure_self(cw, ch)?;
            tracing::debug!(
                child = %slot.id,
                width = %cw,
                height = %ch,
                measured = ?slot.subject.measured_size(),
                "measured child"
            );
        }

        let measured = Size::new(
            container_length(
                width,
                self.slots.iter().map(|s| {
                    s.subject
                        .measured_size()
                        .width
                        .saturating_add(s.spec.margins.horizontal())
                }),
            ),
            container_length(
                height,
                self.slots.iter().map(|s| {
                    s.subject
                        .measured_size()
                        .height
                        .saturating_add(s.spec.margins.vertical())
                }),
            ),
        );

        self.measured = measured;
        self.committed = None;
        self.state = LayoutState::Measured;
        Ok(measured)
    }

    /// Arrangement pass: give every child its frame for the committed size.
    ///
    /// Falls back to the measured size when the parent committed nothing. Running it again
    /// without changes yields the same frames.
    #[tracing::instrument(level = "debug", skip(self), fields(children = self.slots.len()))]
    pub fn arrange(&mut self) -> LayoutResult<()> {
        if self.state == LayoutState::Unmeasured {
            return Err(LayoutError::NotMeasured);
        }
        let size = self.committed.unwrap_or(self.measured);

        for slot in &mut self.slots {
            let child = slot.subject.measured_size();
            let frame = place_child(slot.spec.anchor, slot.spec.margins, size, child);
            if !frame.fits_within(size) {
                tracing::warn!(child = %slot.id, ?frame, ?size, "frame extends past container");
            }
            slot.subject.place(frame)?;
            slot.frame = Some(frame);
        }

        self.state = LayoutState::Arranged;
        Ok(())
    }

    /// Root convenience: measure, commit the measured size and arrange.
    pub fn layout(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<Size> {
        let size = self.measure(width, height)?;
        self.commit_size(size);
        self.arrange()?;
        Ok(size)
    }
}

impl<S: LayoutSubject> LayoutSubject for Container<S> {
    fn measure_self(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> LayoutResult<()> {
        self.measure(width, height).map(|_| ())
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        self.own_spec.as_ref()
    }

    fn place(&mut self, frame: Rect) -> LayoutResult<()> {
        let w = u32::try_from(frame.width()).unwrap_or(0);
        let h = u32::try_from(frame.height()).unwrap_or(0);
        self.commit_size(Size::new(w, h));
        self.arrange()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/container.rs"]
mod tests;
