//! Per-child position parameters and the attribute layer that produces them.

pub(crate) mod attributes;
pub(crate) mod position;
