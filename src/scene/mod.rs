//! JSON scene documents: the configuration boundary used by the CLI and tests.

pub(crate) mod model;
pub(crate) mod report;
