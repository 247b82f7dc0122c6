//! Integration tests for Layer 0: Foundation
//!
//! Tests for shared records, composite keys, and errors.

mod records;
