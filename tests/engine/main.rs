//! Integration tests for Layer 1: Engine
//!
//! Tests for predicates, agreement, rule composition and matching.

#[path = "../support/mod.rs"]
mod support;

mod agreement;
