//! Internal tests for crate-private provider code
