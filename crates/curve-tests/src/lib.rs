//! Integration tests for the curveplot crates.
//!
//! End-to-end scenarios that cross crate boundaries: math invariants the
//! plotting layer relies on, and the full curve-to-draw-command pipeline.
