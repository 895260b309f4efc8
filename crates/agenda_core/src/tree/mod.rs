//! Agenda tree operations.
//!
//! # Responsibility
//! - Provide pure structural edits over an agenda forest (`edit`).
//! - Provide depth-first labelling and node/leaf counts (`enumerate`).
//!
//! # Invariants
//! - Every operation returns a new value and never mutates its input.
//! - Stale or out-of-range paths are a no-op, never a panic.

pub mod edit;
pub mod enumerate;
