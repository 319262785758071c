//! Flutter-facing bindings for the carbon offset core.

pub mod api;
