//! Host crate for the cross-crate integration test suite. No library code.
