use super::*;
use crate::{
    foundation::core::Margins,
    layout::subject::Element,
    spec::position::{Anchor, Dimension},
};

fn wrap(anchor: Anchor, margins: Margins) -> PositionSpec {
    PositionSpec::new(Dimension::WrapContent, Dimension::WrapContent)
        .with_margins(margins)
        .with_anchor(anchor)
}

fn element(id: &str, w: u32, h: u32, spec: PositionSpec) -> Element {
    Element::new(id, Size::new(w, h)).with_spec(spec)
}

struct Broken;

impl LayoutSubject for Broken {
    fn measure_self(&mut self, _: SizeConstraint, _: SizeConstraint) -> LayoutResult<()> {
        Err(LayoutError::validation("broken child"))
    }

    fn measured_size(&self) -> Size {
        Size::ZERO
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        None
    }
}

#[test]
fn exact_constraints_ignore_children() {
    for n in 0..4u32 {
        let mut c = Container::new();
        for i in 0..n {
            c.attach(element(
                &format!("e{i}"),
                10 * (i + 1),
                500,
                wrap(Anchor::TopLeft, Margins::default()),
            ))
            .unwrap();
        }
        let size = c
            .measure(SizeConstraint::exact(120), SizeConstraint::exact(80))
            .unwrap();
        assert_eq!(size, Size::new(120, 80));
    }
}

#[test]
fn wrap_takes_widest_child_plus_margins() {
    let mut c = Container::new();
    c.attach(element("a", 30, 10, wrap(Anchor::TopLeft, Margins::new(5, 1, 5, 1))))
        .unwrap();
    c.attach(element("b", 20, 40, wrap(Anchor::Middle, Margins::new(12, 0, 3, 9))))
        .unwrap();

    let size = c
        .measure(SizeConstraint::at_most(500), SizeConstraint::unspecified())
        .unwrap();
    assert_eq!(size, Size::new(40, 49));
    assert_eq!(c.measured_size(), size);
    assert_eq!(c.state(), LayoutState::Measured);
}

#[test]
fn empty_container_wraps_to_zero() {
    let mut c: Container<Element> = Container::new();
    let size = c
        .measure(SizeConstraint::at_most(100), SizeConstraint::unspecified())
        .unwrap();
    assert_eq!(size, Size::ZERO);
    c.arrange().unwrap();
    assert_eq!(c.state(), LayoutState::Arranged);
}

#[test]
fn children_see_margins_reserved() {
    let mut c = Container::new();
    let spec = PositionSpec::new(Dimension::MatchParent, Dimension::WrapContent)
        .with_margins(Margins::new(5, 2, 15, 2));
    let id = c.attach(element("fill", 10, 300, spec)).unwrap();

    c.measure(SizeConstraint::exact(100), SizeConstraint::at_most(50))
        .unwrap();
    // width: exact(100 - 20); height: wrap content capped at 50 - 4.
    assert_eq!(
        c.child(id).unwrap().measured_size(),
        Size::new(80, 46)
    );
}

#[test]
fn arrange_uses_committed_size() {
    let mut c = Container::new();
    let mid = c
        .attach(element("mid", 20, 20, wrap(Anchor::Middle, Margins::new(4, 0, 2, 0))))
        .unwrap();
    let tr = c
        .attach(element("tr", 30, 10, wrap(Anchor::TopRight, Margins::new(0, 3, 5, 0))))
        .unwrap();
    let bl = c
        .attach(element("bl", 10, 40, wrap(Anchor::BottomLeft, Margins::new(6, 0, 0, 10))))
        .unwrap();

    c.measure(SizeConstraint::at_most(1000), SizeConstraint::at_most(1000))
        .unwrap();
    c.commit_size(Size::new(100, 200));
    c.arrange().unwrap();

    assert_eq!(c.frame(mid).unwrap().left, 42);
    let tr_frame = c.frame(tr).unwrap();
    assert_eq!((tr_frame.left, tr_frame.top), (65, 3));
    let bl_frame = c.frame(bl).unwrap();
    assert_eq!((bl_frame.left, bl_frame.top), (6, 150));
    assert_eq!(bl_frame.right, 16);
    assert_eq!(bl_frame.bottom, 190);

    // The child saw the same frame the container recorded.
    assert_eq!(c.child(tr).unwrap().frame(), Some(tr_frame));
}

#[test]
fn arrange_without_commit_uses_measured_size() {
    let mut c = Container::new();
    let id = c
        .attach(element("br", 10, 10, wrap(Anchor::BottomRight, Margins::default())))
        .unwrap();
    c.attach(element("big", 50, 30, wrap(Anchor::TopLeft, Margins::default())))
        .unwrap();
    c.measure(SizeConstraint::unspecified(), SizeConstraint::unspecified())
        .unwrap();
    c.arrange().unwrap();
    assert_eq!(
        c.frame(id),
        Some(Rect {
            left: 40,
            top: 20,
            right: 50,
            bottom: 30
        })
    );
}

#[test]
fn arrangement_is_idempotent() {
    let mut c = Container::new();
    for (i, anchor) in Anchor::ALL.into_iter().enumerate() {
        let i = u32::try_from(i).unwrap();
        c.attach(element(
            &format!("c{i}"),
            7 + i,
            11 + i,
            wrap(anchor, Margins::new(i, 2 * i, 3, 1)),
        ))
        .unwrap();
    }
    c.layout(SizeConstraint::exact(97), SizeConstraint::exact(61))
        .unwrap();
    let first: Vec<_> = c.frames().collect();
    c.arrange().unwrap();
    let second: Vec<_> = c.frames().collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|(_, f)| f.is_some()));
}

#[test]
fn recommit_rearranges_without_remeasure() {
    let mut c = Container::new();
    let id = c
        .attach(element("br", 10, 10, wrap(Anchor::BottomRight, Margins::default())))
        .unwrap();
    c.layout(SizeConstraint::exact(50), SizeConstraint::exact(50))
        .unwrap();
    assert_eq!(c.frame(id).unwrap().left, 40);

    c.commit_size(Size::new(80, 60));
    assert_eq!(c.state(), LayoutState::Measured);
    c.arrange().unwrap();
    assert_eq!(c.frame(id).unwrap().left, 70);
    assert_eq!(c.frame(id).unwrap().top, 50);
    assert_eq!(c.measured_size(), Size::new(50, 50));
}

#[test]
fn arrange_before_measure_is_rejected() {
    let mut c: Container<Element> = Container::new();
    assert!(matches!(c.arrange(), Err(LayoutError::NotMeasured)));
}

#[test]
fn attach_without_spec_is_rejected() {
    let mut c = Container::new();
    let err = c.attach(Element::new("orphan", Size::new(1, 1))).unwrap_err();
    assert!(matches!(err, LayoutError::MissingSpec { ref child } if child.contains("orphan")));
    assert!(c.is_empty());

    let mut boxed: Container<Box<dyn LayoutSubject>> = Container::new();
    let err = boxed.attach(Box::new(Broken)).unwrap_err();
    assert!(err.to_string().contains("at index 0"));
}

#[test]
fn attach_with_supplies_spec_and_child_errors_propagate() {
    let mut c: Container<Box<dyn LayoutSubject>> = Container::new();
    c.attach_with(Box::new(Broken), PositionSpec::default());
    let err = c
        .measure(SizeConstraint::exact(10), SizeConstraint::exact(10))
        .unwrap_err();
    assert!(err.to_string().contains("broken child"));
}

#[test]
fn spec_edits_invalidate_and_take_effect() {
    let mut c = Container::new();
    let id = c
        .attach(element("a", 10, 10, wrap(Anchor::TopLeft, Margins::default())))
        .unwrap();
    c.layout(SizeConstraint::exact(100), SizeConstraint::exact(100))
        .unwrap();
    assert_eq!(c.frame(id).unwrap().left, 0);

    c.spec_mut(id).unwrap().anchor = Anchor::TopRight;
    assert_eq!(c.state(), LayoutState::Unmeasured);
    assert!(matches!(c.arrange(), Err(LayoutError::NotMeasured)));

    c.layout(SizeConstraint::exact(100), SizeConstraint::exact(100))
        .unwrap();
    assert_eq!(c.frame(id).unwrap().left, 90);
}

#[test]
fn detach_returns_child_and_moves_spec_copy() {
    let mut a = Container::new();
    let id = a
        .attach(element("m", 4, 4, wrap(Anchor::BottomLeft, Margins::uniform(2))))
        .unwrap();
    let spec = PositionSpec::from_spec(a.spec(id).unwrap());
    let child = a.detach(id).unwrap();
    assert!(a.is_empty());
    assert!(matches!(a.detach(id), Err(LayoutError::UnknownChild(_))));

    let mut b = Container::new();
    let moved = b.attach_with(child, spec);
    assert_eq!(b.spec(moved), Some(&spec));
    assert_eq!(b.child(moved).unwrap().id(), "m");
}

#[test]
fn nested_container_is_measured_and_placed() {
    let mut inner = Container::new().with_spec(wrap(Anchor::BottomRight, Margins::uniform(5)));
    let leaf = inner
        .attach(element("leaf", 10, 10, wrap(Anchor::Middle, Margins::default())))
        .unwrap();
    inner
        .attach(element("wide", 40, 20, wrap(Anchor::TopLeft, Margins::default())))
        .unwrap();

    let mut outer: Container<Container<Element>> = Container::new();
    let inner_id = outer.attach(inner).unwrap();
    outer
        .layout(SizeConstraint::exact(200), SizeConstraint::exact(100))
        .unwrap();

    let inner_frame = outer.frame(inner_id).unwrap();
    assert_eq!(
        inner_frame,
        Rect {
            left: 155,
            top: 75,
            right: 195,
            bottom: 95
        }
    );
    let inner = outer.child(inner_id).unwrap();
    assert_eq!(inner.state(), LayoutState::Arranged);
    assert_eq!(inner.committed_size(), Some(Size::new(40, 20)));
    let leaf_frame = inner.frame(leaf).unwrap();
    assert_eq!((leaf_frame.left, leaf_frame.top), (15, 5));
}

struct Fallible {
    size: Size,
    spec: PositionSpec,
}

impl Fallible {
    fn load(&self) -> anyhow::Result<Size> {
        anyhow::ensure!(self.size.width > 0, "asset has no width");
        Ok(self.size)
    }
}

impl LayoutSubject for Fallible {
    fn measure_self(&mut self, _: SizeConstraint, _: SizeConstraint) -> LayoutResult<()> {
        self.size = self.load()?;
        Ok(())
    }

    fn measured_size(&self) -> Size {
        self.size
    }

    fn position_spec(&self) -> Option<&PositionSpec> {
        Some(&self.spec)
    }
}

#[test]
fn host_anyhow_errors_pass_through_measure() {
    let mut c = Container::new();
    c.attach(Fallible {
        size: Size::new(0, 4),
        spec: PositionSpec::default(),
    })
    .unwrap();
    let err = c
        .measure(SizeConstraint::exact(10), SizeConstraint::exact(10))
        .unwrap_err();
    assert!(matches!(err, LayoutError::Other(_)));
    assert_eq!(err.to_string(), "asset has no width");
    assert_eq!(c.state(), LayoutState::Unmeasured);
}

#[derive(Clone, Default)]
struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn frames_outside_the_container_log_a_warning() {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut c = Container::new();
        c.attach(element("inside", 10, 10, wrap(Anchor::TopLeft, Margins::default())))
            .unwrap();
        c.layout(SizeConstraint::exact(50), SizeConstraint::exact(50))
            .unwrap();
        assert!(out.0.lock().unwrap().is_empty());

        c.attach_with(
            Element::new("pushed", Size::new(10, 10)),
            PositionSpec::new(Dimension::Fixed(10), Dimension::Fixed(10))
                .with_margins(Margins::new(0, 0, 45, 0))
                .with_anchor(Anchor::TopRight),
        );
        c.layout(SizeConstraint::exact(50), SizeConstraint::exact(50))
            .unwrap();
    });

    let logged = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("WARN"), "{logged}");
    assert!(logged.contains("frame extends past container"), "{logged}");
    assert_eq!(logged.matches("frame extends past container").count(), 1);
}
