//! Unit tests for the task domain and services.

pub(crate) mod support;
