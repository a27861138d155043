//! Two-pass measure/arrange engine.
//!
//! [`solver`] holds the pure per-axis and per-anchor rules; [`container`] drives them over a set
//! of [`subject::LayoutSubject`] children and tracks the layout cycle.

pub(crate) mod container;
pub(crate) mod solver;
pub(crate) mod subject;
