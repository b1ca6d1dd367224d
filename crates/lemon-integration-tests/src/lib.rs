//! Integration test crate for Little Lemon.
//!
//! This crate has no library code; it only contains integration tests
//! that exercise the menu cache end to end against a mocked catalog server.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p lemon-integration-tests
//! ```
