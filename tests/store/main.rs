//! Integration tests for Layer 1: Store
//!
//! Tests for record identity sharing, concurrent lookup-or-create, client
//! entities, and collections.

mod identity;
