//! Integration tests driving [`crate::ZoningPlugin`] through the
//! [`crate::test_harness::TestSession`] harness.
