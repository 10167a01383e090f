//! Property-based tests for catalog operations.
//!
//! These tests use proptest to generate random records and verify that
//! the catalog's invariants hold for all possible inputs.
