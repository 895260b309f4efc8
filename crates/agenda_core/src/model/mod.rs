//! Domain model for agenda protocols and statute amendments.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep wire naming (`title`/`children`, `old_text`/`new_text`) in one place.
//!
//! # Invariants
//! - Agenda nodes own their children; there are no back-references.
//! - An emitted amendment change never has both texts empty.

pub mod agenda;
pub mod amendment;
