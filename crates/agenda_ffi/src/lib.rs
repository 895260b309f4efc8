//! Host-facing bindings for the agenda core.

pub mod api;
