//! Shared fixtures for unit tests.

pub(crate) mod linestring;
pub(crate) mod multipoint;
