//! Integration tests for the smath crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between vector, quaternion, and matrix types across crate boundaries.
