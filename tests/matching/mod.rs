//! End-to-end matching tests.

mod properties;
mod scenarios;
