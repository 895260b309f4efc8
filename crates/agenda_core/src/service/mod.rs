//! Editor-facing use-case services.
//!
//! # Responsibility
//! - Sequence pure core operations the way an editing UI needs them.
//! - Keep host layers decoupled from reconciliation details.

pub mod protocol_editor;
pub mod statute_draft;
